//! Field checks shared by request bodies. Each returns `VALIDATION_ERROR`.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::AppError;
use crate::errors::ErrorCode;

static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    // vetted literal
    #[allow(clippy::unwrap_used)]
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap()
});

/// Non-blank and at most `max_chars` characters.
pub fn required_text(field: &str, value: &str, max_chars: usize) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::invalid(
            ErrorCode::ValidationError,
            format!("{field} must not be empty"),
        ));
    }
    optional_text(field, Some(value), max_chars)
}

pub fn optional_text(field: &str, value: Option<&str>, max_chars: usize) -> Result<(), AppError> {
    match value {
        Some(v) if v.chars().count() > max_chars => Err(AppError::invalid(
            ErrorCode::ValidationError,
            format!("{field} must be at most {max_chars} characters"),
        )),
        _ => Ok(()),
    }
}

pub fn email(value: &str) -> Result<(), AppError> {
    required_text("email", value, 120)?;
    if !EMAIL_REGEX.is_match(value) {
        return Err(AppError::invalid(
            ErrorCode::ValidationError,
            "email is not a valid address",
        ));
    }
    Ok(())
}
