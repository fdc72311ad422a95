use anyhow::{Context, Result};

const DEFAULT_MAIL_API_URL: &str = "https://api.resend.com/emails";
const DEFAULT_PROJECTS_MANIFEST: &str = "content/projects.json";

/// Application configuration loaded from environment variables.
/// Only malformed values fail startup; mail settings are optional and checked per request.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub recipient_email: Option<String>,
    pub email_user: Option<String>,
    pub email_pass: Option<String>,
    pub mail_api_url: String,
    pub mail_timeout_secs: u64,
    pub redis_url: Option<String>,
    pub projects_manifest: String,
}

/// Settings the contact relay needs, handed to it at construction.
#[derive(Debug, Clone, Default)]
pub struct ContactConfig {
    pub recipient: Option<String>,
    pub sender: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            recipient_email: optional_env("RECIPIENT_EMAIL"),
            email_user: optional_env("EMAIL_USER"),
            email_pass: optional_env("EMAIL_PASS"),
            mail_api_url: optional_env("MAIL_API_URL")
                .unwrap_or_else(|| DEFAULT_MAIL_API_URL.to_string()),
            mail_timeout_secs: std::env::var("MAIL_TIMEOUT_SECS")
                .unwrap_or_else(|_| "30".to_string())
                .parse::<u64>()
                .context("MAIL_TIMEOUT_SECS must be a whole number of seconds")?,
            redis_url: optional_env("REDIS_URL"),
            projects_manifest: optional_env("PROJECTS_MANIFEST")
                .unwrap_or_else(|| DEFAULT_PROJECTS_MANIFEST.to_string()),
        })
    }

    pub fn contact(&self) -> ContactConfig {
        ContactConfig {
            recipient: self.recipient_email.clone(),
            sender: self.email_user.clone(),
        }
    }
}

/// Reads an env var, treating unset and blank the same.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
