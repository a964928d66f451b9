//! Validation rules shared by the resource payloads
//!
//! Validation runs before any store call, so an invalid payload never
//! causes a partial write.

use serde::Serialize;
use std::fmt;
use std::sync::LazyLock;

static URL_PATTERN: LazyLock<regex::Regex> =
    LazyLock::new(|| regex::Regex::new(r"^https?://.+").expect("valid URL pattern"));

/// Check a string against the shallow URL-format predicate `^https?://.+`
pub fn is_url(value: &str) -> bool {
    URL_PATTERN.is_match(value)
}

/// Collect the required fields absent (or empty) in a create payload
///
/// Each entry pairs a field name with whether the submitted value counts as
/// present. Empty strings count as missing, matching the original service's
/// presence check.
pub fn missing_fields(checks: &[(&'static str, bool)]) -> Vec<&'static str> {
    checks
        .iter()
        .filter(|(_, present)| !present)
        .map(|(field, _)| *field)
        .collect()
}

/// A violated validation rule, named so the client can tell what to fix
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum ValidationError {
    /// Required fields absent or empty on create
    MissingFields { fields: Vec<&'static str> },

    /// A URL field did not match `^https?://.+`
    MalformedUrl { field: &'static str },

    /// A pagination parameter was non-numeric or non-positive
    InvalidPagination {
        param: &'static str,
        value: String,
    },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::MissingFields { fields } => {
                write!(f, "Missing required fields: {}", fields.join(", "))
            }
            ValidationError::MalformedUrl { field } => {
                write!(f, "Invalid URL format for '{}'", field)
            }
            ValidationError::InvalidPagination { param, value } => {
                write!(
                    f,
                    "Invalid pagination parameter '{}': '{}' must be a positive integer",
                    param, value
                )
            }
        }
    }
}

impl std::error::Error for ValidationError {}

impl ValidationError {
    pub fn error_code(&self) -> &'static str {
        match self {
            ValidationError::MissingFields { .. } => "MISSING_FIELDS",
            ValidationError::MalformedUrl { .. } => "MALFORMED_URL",
            ValidationError::InvalidPagination { .. } => "INVALID_PAGINATION",
        }
    }
}
