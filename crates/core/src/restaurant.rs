//! Field-level validation for restaurant records.
//!
//! The repository layer trusts its input; handlers run these checks before
//! any write reaches the database.

use crate::error::CoreError;
use crate::price::validate_price_range;
use crate::types::DbId;

/// Entity name used in `NotFound` errors.
pub const ENTITY: &str = "Restaurant";

pub const MIN_RATING: i16 = 1;
pub const MAX_RATING: i16 = 5;

/// Parse a path segment as a restaurant id. Must be a positive integer.
pub fn parse_id(raw: &str) -> Result<DbId, CoreError> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid_id());
    }
    match raw.parse::<DbId>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(invalid_id()),
    }
}

fn invalid_id() -> CoreError {
    CoreError::Validation("Invalid restaurant ID".to_string())
}

/// Validate a rating value is within the allowed range [1, 5].
pub fn validate_rating(rating: i16) -> Result<(), CoreError> {
    if !(MIN_RATING..=MAX_RATING).contains(&rating) {
        return Err(CoreError::Validation(format!(
            "Rating must be between {MIN_RATING} and {MAX_RATING}"
        )));
    }
    Ok(())
}

/// Names must contain at least one non-whitespace character.
pub fn validate_name(name: &str) -> Result<(), CoreError> {
    if name.trim().is_empty() {
        return Err(CoreError::Validation("Name must not be empty".to_string()));
    }
    Ok(())
}

/// Validate whichever writable fields are present.
///
/// Used by both create (all required fields present) and partial update.
pub fn validate_fields(
    name: Option<&str>,
    rating: Option<i16>,
    price_range: Option<&str>,
) -> Result<(), CoreError> {
    if let Some(name) = name {
        validate_name(name)?;
    }
    if let Some(rating) = rating {
        validate_rating(rating)?;
    }
    if let Some(price_range) = price_range {
        validate_price_range(price_range)?;
    }
    Ok(())
}
