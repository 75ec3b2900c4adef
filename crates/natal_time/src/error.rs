//! Error types for time-scale conversions.

use thiserror::Error;

/// Errors from calendar conversion or sidereal-time evaluation.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum TimeError {
    /// A numeric input was NaN or infinite.
    #[error("non-finite input: {0}")]
    NonFinite(&'static str),
    /// Calendar fields do not describe a real instant.
    #[error("invalid date: {0}")]
    InvalidDate(String),
}

/// Reject NaN/±∞ before it reaches the polynomial chain.
pub(crate) fn ensure_finite(value: f64, what: &'static str) -> Result<f64, TimeError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(TimeError::NonFinite(what))
    }
}
