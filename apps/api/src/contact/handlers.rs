use axum::{
    body::Bytes,
    extract::State,
    http::{header, HeaderMap, Method},
    Json,
};

use crate::contact::models::{ContactAck, ContactSubmission};
use crate::errors::AppError;
use crate::state::AppState;

/// ANY /api/recruiter-contact
///
/// Method and content type are checked before the body is parsed, so a GET
/// with a JSON header still gets 405 and a form post gets 400.
pub async fn handle_recruiter_contact(
    State(state): State<AppState>,
    method: Method,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<ContactAck>, AppError> {
    if method != Method::POST {
        return Err(AppError::MethodNotAllowed);
    }

    if !is_json_content_type(&headers) {
        return Err(AppError::UnsupportedMediaType);
    }

    let submission: ContactSubmission =
        serde_json::from_slice(&body).map_err(|e| AppError::InvalidBody(e.to_string()))?;

    let ack = state.relay.relay(submission).await?;
    Ok(Json(ack))
}

/// True when the media type essence is `application/json`; parameters such as
/// `charset` are ignored.
fn is_json_content_type(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(';').next())
        .map(|essence| essence.trim().eq_ignore_ascii_case("application/json"))
        .unwrap_or(false)
}
