use serde::{Deserialize, Deserializer, Serialize};

/// Information categories a recruiter can ask for.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum RequestedInfo {
    Cv,
    Portfolio,
    Contact,
    Availability,
    References,
}

impl RequestedInfo {
    pub const ALL: [RequestedInfo; 5] = [
        RequestedInfo::Cv,
        RequestedInfo::Portfolio,
        RequestedInfo::Contact,
        RequestedInfo::Availability,
        RequestedInfo::References,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            RequestedInfo::Cv => "cv",
            RequestedInfo::Portfolio => "portfolio",
            RequestedInfo::Contact => "contact",
            RequestedInfo::Availability => "availability",
            RequestedInfo::References => "references",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RequestedInfo::Cv => "CV/Resume",
            RequestedInfo::Portfolio => "Portfolio Details",
            RequestedInfo::Contact => "Direct Contact Information",
            RequestedInfo::Availability => "Availability & Timeline",
            RequestedInfo::References => "Professional References",
        }
    }
}

/// A recruiter's contact request. Lives for one request only.
///
/// Missing or null fields deserialize as empty so that validation, not the
/// JSON parser, reports them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactSubmission {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub company: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub position: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub message: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub requested_info: Vec<RequestedInfo>,
}

impl ContactSubmission {
    /// Collapses repeated tags, keeping first-seen order.
    pub fn dedup_requested_info(&mut self) {
        let mut seen = Vec::with_capacity(self.requested_info.len());
        self.requested_info.retain(|tag| {
            if seen.contains(tag) {
                false
            } else {
                seen.push(*tag);
                true
            }
        });
    }
}

/// Treats an explicit JSON `null` like an absent key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Body of a successful relay response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactAck {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}
