use std::sync::Arc;

use tracing::{error, info, warn};
use uuid::Uuid;

use crate::config::ContactConfig;
use crate::contact::message::{compose_mail, ACK_MESSAGE, ACK_NOTE};
use crate::contact::models::{ContactAck, ContactSubmission};
use crate::contact::validation::{validate_submission, ValidationFailure};
use crate::errors::AppError;
use crate::mailer::MailTransport;

/// Validates a submission and forwards it to the site owner by email.
/// Holds no per-request state; cloning is cheap.
#[derive(Clone)]
pub struct ContactRelay {
    config: ContactConfig,
    mailer: Arc<dyn MailTransport>,
}

impl ContactRelay {
    pub fn new(config: ContactConfig, mailer: Arc<dyn MailTransport>) -> Self {
        Self { config, mailer }
    }

    pub async fn relay(&self, mut submission: ContactSubmission) -> Result<ContactAck, AppError> {
        let submission_id = Uuid::new_v4();

        if let Err(failure) = validate_submission(&submission) {
            if let ValidationFailure::MissingFields(fields) = &failure {
                warn!(%submission_id, ?fields, "Contact submission missing fields");
            } else {
                warn!(%submission_id, "Contact submission has malformed email");
            }
            return Err(AppError::Validation(failure.to_string()));
        }
        submission.dedup_requested_info();

        let recipient = self.config.recipient.as_deref().ok_or_else(|| {
            AppError::Configuration("Recipient email is not set (RECIPIENT_EMAIL)".to_string())
        })?;
        let sender = self.config.sender.as_deref().unwrap_or(recipient);

        let mail = compose_mail(&submission, sender, recipient);

        if let Err(e) = self.mailer.send(&mail).await {
            error!(%submission_id, "Failed to relay contact submission: {e}");
            return Err(AppError::Mail(e));
        }

        info!(
            %submission_id,
            requested = submission.requested_info.len(),
            "Relayed recruiter contact submission"
        );

        Ok(ContactAck {
            success: true,
            message: ACK_MESSAGE.to_string(),
            note: Some(ACK_NOTE.to_string()),
        })
    }
}
