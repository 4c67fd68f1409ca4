//! Internal helpers for field validation and id parsing.
//!
//! These utilities are **not** part of the public API. They centralize the
//! presence rules so every operation rejects the same inputs.

use uuid::Uuid;

use crate::{EngineError, ResultEngine};

/// A string field is present when supplied and non-empty.
pub(crate) fn required_str<'a>(field: &str, value: Option<&'a str>) -> ResultEngine<&'a str> {
    match value {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(EngineError::InvalidInput(format!("missing field: {field}"))),
    }
}

/// A numeric field is present when supplied, finite and non-zero.
pub(crate) fn required_number(field: &str, value: Option<f64>) -> ResultEngine<f64> {
    match value {
        Some(value) if value.is_finite() && value != 0.0 => Ok(value),
        _ => Err(EngineError::InvalidInput(format!("missing field: {field}"))),
    }
}

/// Ids that are not UUIDs can never match a stored record.
pub(crate) fn parse_id(value: &str) -> Option<Uuid> {
    Uuid::parse_str(value).ok()
}
