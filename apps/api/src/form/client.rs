use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use thiserror::Error;

use crate::contact::models::ContactSubmission;

const CONTACT_PATH: &str = "/api/recruiter-contact";

#[derive(Debug, Clone, Error)]
pub enum EndpointError {
    #[error("Network error: {0}")]
    Network(String),
}

impl From<reqwest::Error> for EndpointError {
    fn from(e: reqwest::Error) -> Self {
        EndpointError::Network(e.to_string())
    }
}

/// Status class and parsed JSON body of a relay response.
#[derive(Debug, Clone)]
pub struct RelayReply {
    pub ok: bool,
    pub body: Value,
}

#[async_trait]
pub trait ContactEndpoint: Send + Sync {
    async fn post(&self, submission: &ContactSubmission) -> Result<RelayReply, EndpointError>;
}

/// Posts submissions to a running relay over HTTP.
#[derive(Clone)]
pub struct HttpContactEndpoint {
    client: Client,
    url: String,
}

impl HttpContactEndpoint {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            url: format!("{}{}", base_url.trim_end_matches('/'), CONTACT_PATH),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl ContactEndpoint for HttpContactEndpoint {
    async fn post(&self, submission: &ContactSubmission) -> Result<RelayReply, EndpointError> {
        let response = self.client.post(&self.url).json(submission).send().await?;
        let ok = response.status().is_success();
        // A body that is not JSON counts as a failed round trip, like a dropped connection.
        let body: Value = response.json().await?;
        Ok(RelayReply { ok, body })
    }
}
