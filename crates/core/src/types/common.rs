//! Common traits and helpers shared across domain models

use chrono::{Datelike, NaiveDate};

/// Extracts the calendar year from a catalog date
///
/// Accepts `YYYY-MM-DD` first and a bare `YYYY` second. Anything else,
/// including the empty string, yields 0.
pub fn year_from_date(date: &str) -> i32 {
    if is_full_date_shape(date) {
        if let Ok(parsed) = NaiveDate::parse_from_str(date, "%Y-%m-%d") {
            return parsed.year();
        }
    }

    if date.len() == 4 && date.bytes().all(|b| b.is_ascii_digit()) {
        return date.parse().unwrap_or(0);
    }

    0
}

// chrono accepts unpadded fields; catalog dates are always zero-padded
fn is_full_date_shape(date: &str) -> bool {
    let bytes = date.as_bytes();
    bytes.len() == 10
        && bytes[4] == b'-'
        && bytes[7] == b'-'
        && bytes
            .iter()
            .enumerate()
            .all(|(i, b)| i == 4 || i == 7 || b.is_ascii_digit())
}

/// Trait for types that can validate themselves
pub trait Validator {
    /// Validates the instance and returns errors if invalid
    fn validate(&self) -> Result<(), Vec<String>>;

    /// Returns true if the instance is valid
    fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }
}
