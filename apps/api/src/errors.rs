use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::mailer::MailError;
use crate::projects::views::ViewError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
/// Client errors carry their message through; server errors are logged and masked.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("Unsupported content type")]
    UnsupportedMediaType,

    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Mail error: {0}")]
    Mail(#[from] MailError),

    #[error("View counter error: {0}")]
    Views(#[from] ViewError),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

const INTERNAL_MESSAGE: &str = "Internal server error";

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::MethodNotAllowed => {
                let body = Json(json!({
                    "success": false,
                    "error": "Method not allowed. Use POST",
                }));
                return (
                    StatusCode::METHOD_NOT_ALLOWED,
                    [(header::ALLOW, "POST")],
                    body,
                )
                    .into_response();
            }
            AppError::UnsupportedMediaType => (
                StatusCode::BAD_REQUEST,
                "Content-Type must be application/json".to_string(),
            ),
            AppError::InvalidBody(detail) => {
                tracing::debug!("Rejected request body: {detail}");
                (StatusCode::BAD_REQUEST, "Invalid request body".to_string())
            }
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            AppError::Configuration(msg) => {
                tracing::error!("Configuration error: {msg}");
                (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_MESSAGE.to_string())
            }
            AppError::Mail(e) => {
                tracing::error!("Mail transport error: {e}");
                (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_MESSAGE.to_string())
            }
            AppError::Views(e) => {
                tracing::error!("View counter error: {e}");
                (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_MESSAGE.to_string())
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_MESSAGE.to_string())
            }
        };

        let body = Json(json!({
            "success": false,
            "error": message,
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn render(err: AppError) -> (StatusCode, serde_json::Value) {
        let response = err.into_response();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn test_validation_message_is_passed_through() {
        let (status, body) = render(AppError::Validation("Missing required fields".into())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], "Missing required fields");
    }

    #[tokio::test]
    async fn test_configuration_error_is_opaque() {
        let (status, body) =
            render(AppError::Configuration("RECIPIENT_EMAIL is not set".into())).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], INTERNAL_MESSAGE);
    }

    #[tokio::test]
    async fn test_mail_error_is_opaque() {
        let err = MailError::Api {
            status: 401,
            message: "bad key sk_live_123".into(),
        };
        let (status, body) = render(AppError::Mail(err)).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!body["error"].as_str().unwrap().contains("sk_live"));
    }

    #[tokio::test]
    async fn test_method_not_allowed_status() {
        let response = AppError::MethodNotAllowed.into_response();
        assert_eq!(response.headers()[header::ALLOW], "POST");
        let (status, body) = render(AppError::MethodNotAllowed).await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(body["error"], "Method not allowed. Use POST");
    }

    #[tokio::test]
    async fn test_invalid_body_hides_parser_detail() {
        let (status, body) = render(AppError::InvalidBody("expected `,` at line 1".into())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Invalid request body");
    }
}
