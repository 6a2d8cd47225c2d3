//! Field constraints for customer records.
//!
//! Validation runs synchronously before every insert and update. The first
//! violated constraint is reported; a failing candidate never reaches SQL.

use crate::error::{CoreError, Result};

/// Cities a customer may live in. Membership is strict and case-sensitive.
pub const ALLOWED_CITIES: [&str; 4] = ["Amsterdam", "Rotterdam", "The Hague", "Eindhoven"];

/// Minimum length of `first_name`, in characters.
pub const MIN_FIRST_NAME_LEN: usize = 3;

/// Minimum length of `last_name`, in characters.
pub const MIN_LAST_NAME_LEN: usize = 2;

/// Checks the field constraints in declaration order and returns the first
/// violation as [`CoreError::Validation`].
///
/// Lengths are counted in Unicode scalar values, so multibyte names
/// validate by character count rather than byte count.
///
/// # Errors
///
/// Returns `CoreError::Validation` naming the violated constraint.
pub fn validate_fields(first_name: &str, last_name: &str, city: &str) -> Result<()> {
    if first_name.chars().count() < MIN_FIRST_NAME_LEN {
        return Err(CoreError::Validation(format!(
            "first_name must be at least {MIN_FIRST_NAME_LEN} characters"
        )));
    }

    if last_name.chars().count() < MIN_LAST_NAME_LEN {
        return Err(CoreError::Validation(format!(
            "last_name must be at least {MIN_LAST_NAME_LEN} characters"
        )));
    }

    if !ALLOWED_CITIES.contains(&city) {
        return Err(CoreError::Validation(format!(
            "city must be one of: {}",
            ALLOWED_CITIES.join(", ")
        )));
    }

    Ok(())
}
