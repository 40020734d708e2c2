pub mod dev;
pub mod movies;
pub mod reviews;
pub mod users;

use crate::error::{AppError, AppResult};

/// Reject a missing or blank query parameter with a 400.
pub(crate) fn required_param(value: Option<String>, name: &str) -> AppResult<String> {
    value
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| AppError::BadRequest(format!("{name} query parameter is required")))
}
