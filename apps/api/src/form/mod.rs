//! Client side of the recruiter contact flow.
//!
//! `RecruiterForm` mirrors what the browser form keeps: the editable fields,
//! the requested-info checkboxes, a submitting flag and the last outcome.
#![allow(dead_code)]

pub mod client;

use serde_json::Value;
use tracing::debug;

use crate::contact::models::{ContactSubmission, RequestedInfo};
use client::ContactEndpoint;

pub const GENERIC_FAILURE: &str = "Something went wrong. Please try again.";
pub const NETWORK_FAILURE: &str = "Network error. Please check your connection and try again.";
const DEFAULT_SUCCESS: &str = "Your request has been sent.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Email,
    Company,
    Position,
    Message,
}

/// Outcome of the last submission; drives which banner is shown.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Success(String),
    Failure(String),
}

#[derive(Debug, Clone, Default)]
pub struct RecruiterForm {
    data: ContactSubmission,
    submitting: bool,
    status: SubmitStatus,
}

impl RecruiterForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn data(&self) -> &ContactSubmission {
        &self.data
    }

    pub fn status(&self) -> &SubmitStatus {
        &self.status
    }

    /// While true the submit control is disabled and shows a spinner.
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) {
        let value = value.into();
        match field {
            FormField::Name => self.data.name = value,
            FormField::Email => self.data.email = value,
            FormField::Company => self.data.company = value,
            FormField::Position => self.data.position = value,
            FormField::Message => self.data.message = value,
        }
    }

    /// Checkbox rows in display order.
    pub fn info_options() -> Vec<(RequestedInfo, &'static str)> {
        RequestedInfo::ALL
            .iter()
            .map(|tag| (*tag, tag.label()))
            .collect()
    }

    pub fn is_selected(&self, tag: RequestedInfo) -> bool {
        self.data.requested_info.contains(&tag)
    }

    /// Checkbox handler: removes the tag if present, appends it otherwise.
    pub fn toggle_info(&mut self, tag: RequestedInfo) {
        if self.is_selected(tag) {
            self.data.requested_info.retain(|t| *t != tag);
        } else {
            self.data.requested_info.push(tag);
        }
    }

    /// Clears every field and the requested-info set.
    pub fn reset(&mut self) {
        self.data = ContactSubmission::default();
    }

    /// Posts the current form to the relay and records the outcome.
    /// The submitting flag is cleared on every path.
    pub async fn submit(&mut self, endpoint: &dyn ContactEndpoint) -> &SubmitStatus {
        self.submitting = true;
        self.status = SubmitStatus::Idle;

        self.status = match endpoint.post(&self.data).await {
            Ok(reply) if reply.ok => {
                let message = text_field(&reply.body, "message")
                    .unwrap_or_else(|| DEFAULT_SUCCESS.to_string());
                self.reset();
                SubmitStatus::Success(message)
            }
            Ok(reply) => {
                let message = text_field(&reply.body, "error")
                    .or_else(|| text_field(&reply.body, "message"))
                    .unwrap_or_else(|| GENERIC_FAILURE.to_string());
                SubmitStatus::Failure(message)
            }
            Err(e) => {
                debug!("Contact submission did not complete: {e}");
                SubmitStatus::Failure(NETWORK_FAILURE.to_string())
            }
        };

        self.submitting = false;
        &self.status
    }
}

fn text_field(body: &Value, key: &str) -> Option<String> {
    body.get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::sync::Mutex;

    use async_trait::async_trait;
    use serde_json::json;

    use super::*;
    use super::client::{EndpointError, RelayReply};

    /// Replays a fixed reply and remembers what it was sent.
    struct StubEndpoint {
        reply: Result<RelayReply, String>,
        received: Mutex<Vec<ContactSubmission>>,
    }

    impl StubEndpoint {
        fn replying(ok: bool, body: Value) -> Self {
            Self {
                reply: Ok(RelayReply { ok, body }),
                received: Mutex::new(Vec::new()),
            }
        }

        fn unreachable() -> Self {
            Self {
                reply: Err("connection refused".to_string()),
                received: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl ContactEndpoint for StubEndpoint {
        async fn post(&self, submission: &ContactSubmission) -> Result<RelayReply, EndpointError> {
            self.received.lock().unwrap().push(submission.clone());
            self.reply.clone().map_err(EndpointError::Network)
        }
    }

    fn filled() -> RecruiterForm {
        let mut form = RecruiterForm::new();
        form.set_field(FormField::Name, "Jane Doe");
        form.set_field(FormField::Email, "jane@co.com");
        form.set_field(FormField::Company, "Acme");
        form.set_field(FormField::Position, "Engineer");
        form.set_field(FormField::Message, "Hi");
        form.toggle_info(RequestedInfo::Cv);
        form
    }

    fn tag_set(form: &RecruiterForm) -> HashSet<RequestedInfo> {
        form.data().requested_info.iter().copied().collect()
    }

    #[test]
    fn test_new_form_is_idle_and_empty() {
        let form = RecruiterForm::new();
        assert_eq!(form.status(), &SubmitStatus::Idle);
        assert!(!form.is_submitting());
        assert_eq!(form.data(), &ContactSubmission::default());
    }

    #[test]
    fn test_info_options_cover_every_tag() {
        let options = RecruiterForm::info_options();
        assert_eq!(options.len(), 5);
        assert_eq!(options[0], (RequestedInfo::Cv, "CV/Resume"));
        assert_eq!(options[4].1, "Professional References");
    }

    #[test]
    fn test_toggle_twice_restores_absent_tag() {
        let mut form = filled();
        let before = form.data().requested_info.clone();
        form.toggle_info(RequestedInfo::References);
        assert!(form.is_selected(RequestedInfo::References));
        form.toggle_info(RequestedInfo::References);
        assert_eq!(form.data().requested_info, before);
    }

    #[test]
    fn test_toggle_twice_restores_present_tag() {
        let mut form = filled();
        form.toggle_info(RequestedInfo::Portfolio);
        let before = tag_set(&form);
        form.toggle_info(RequestedInfo::Cv);
        assert!(!form.is_selected(RequestedInfo::Cv));
        form.toggle_info(RequestedInfo::Cv);
        assert_eq!(tag_set(&form), before);
    }

    #[tokio::test]
    async fn test_success_shows_server_message_and_resets() {
        let endpoint = StubEndpoint::replying(true, json!({"success": true, "message": "Thanks!"}));
        let mut form = filled();

        let status = form.submit(&endpoint).await.clone();
        assert_eq!(status, SubmitStatus::Success("Thanks!".to_string()));
        assert_eq!(form.data(), &ContactSubmission::default());
        assert!(!form.is_submitting());

        let received = endpoint.received.lock().unwrap();
        assert_eq!(received[0].name, "Jane Doe");
        assert_eq!(received[0].requested_info, vec![RequestedInfo::Cv]);
    }

    #[tokio::test]
    async fn test_failure_keeps_fields_and_shows_server_error() {
        let endpoint = StubEndpoint::replying(
            false,
            json!({"success": false, "error": "Invalid email address"}),
        );
        let mut form = filled();

        form.submit(&endpoint).await;
        assert_eq!(
            form.status(),
            &SubmitStatus::Failure("Invalid email address".to_string())
        );
        assert_eq!(form.data().name, "Jane Doe");
        assert!(!form.is_submitting());
    }

    #[tokio::test]
    async fn test_failure_without_text_uses_generic_message() {
        let endpoint = StubEndpoint::replying(false, json!({}));
        let mut form = filled();
        form.submit(&endpoint).await;
        assert_eq!(form.status(), &SubmitStatus::Failure(GENERIC_FAILURE.to_string()));
    }

    #[tokio::test]
    async fn test_network_failure_uses_network_message() {
        let endpoint = StubEndpoint::unreachable();
        let mut form = filled();
        form.submit(&endpoint).await;
        assert_eq!(form.status(), &SubmitStatus::Failure(NETWORK_FAILURE.to_string()));
        assert!(!form.is_submitting());
        assert_eq!(form.data().company, "Acme");
    }

    #[tokio::test]
    async fn test_resubmit_after_failure_clears_previous_status() {
        let mut form = filled();
        form.submit(&StubEndpoint::unreachable()).await;
        let ok = StubEndpoint::replying(true, json!({"message": "Sent"}));
        form.submit(&ok).await;
        assert_eq!(form.status(), &SubmitStatus::Success("Sent".to_string()));
    }
}
