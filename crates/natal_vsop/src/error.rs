//! Error types for series evaluation and the Sun ephemeris.

use natal_time::TimeError;
use thiserror::Error;

/// Errors from VSOP87 evaluation.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum EphemerisError {
    /// The time argument (or Julian Day) was NaN or infinite.
    #[error("non-finite ephemeris input: {0}")]
    NonFinite(&'static str),
    /// Error from the time-scale layer.
    #[error("time error: {0}")]
    Time(#[from] TimeError),
}
