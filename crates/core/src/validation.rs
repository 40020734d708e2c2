//! Request field validation shared by the repository and API layers.

use crate::error::CoreError;
use crate::types::Rating;

/// Lowest accepted review rating.
pub const MIN_RATING: Rating = 1;

/// Highest accepted review rating.
pub const MAX_RATING: Rating = 10;

/// Validate that a rating lies on the 1-10 scale.
pub fn validate_rating(rating: Rating) -> Result<(), CoreError> {
    if (MIN_RATING..=MAX_RATING).contains(&rating) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "rating must be between {MIN_RATING} and {MAX_RATING}, got {rating}"
        )))
    }
}

/// Validate that a required text field is present and not blank.
pub fn validate_required(field: &str, value: &str) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        Err(CoreError::Validation(format!("{field} is required")))
    } else {
        Ok(())
    }
}

/// Validate that a release date is either `YYYY-MM-DD` or an RFC 3339 timestamp.
pub fn validate_release_date(value: &str) -> Result<(), CoreError> {
    let is_date = chrono::NaiveDate::parse_from_str(value, "%Y-%m-%d").is_ok();
    if is_date || chrono::DateTime::parse_from_rfc3339(value).is_ok() {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "releaseDate must be YYYY-MM-DD or an RFC 3339 timestamp, got '{value}'"
        )))
    }
}
