use thiserror::Error;

use crate::contact::models::ContactSubmission;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationFailure {
    #[error("Missing required fields")]
    MissingFields(Vec<&'static str>),

    #[error("Invalid email address")]
    InvalidEmail,
}

/// Checks required fields, then the email shape.
///
/// A field counts as missing when it is empty after trimming. Every missing
/// field is collected so the server log can name them; the caller only sees
/// the generic message.
pub fn validate_submission(submission: &ContactSubmission) -> Result<(), ValidationFailure> {
    let required = [
        ("name", &submission.name),
        ("email", &submission.email),
        ("company", &submission.company),
        ("position", &submission.position),
        ("message", &submission.message),
    ];

    let missing: Vec<&'static str> = required
        .iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| *field)
        .collect();

    if !missing.is_empty() {
        return Err(ValidationFailure::MissingFields(missing));
    }

    if !is_valid_email(submission.email.trim()) {
        return Err(ValidationFailure::InvalidEmail);
    }

    Ok(())
}

/// Loose `local@domain.tld` check.
///
/// PASS: exactly one `@`, no whitespace, non-empty local part, and a domain
/// containing a dot with non-empty text on both sides of the last dot.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    if local.is_empty() || domain.contains('@') {
        return false;
    }

    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}
