//! Error types for house-cusp computation.

use natal_time::TimeError;
use thiserror::Error;

/// Errors from Ascendant/MC or Placidus evaluation.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum HouseError {
    /// A numeric input was non-finite or outside its domain.
    #[error("invalid input: {0}")]
    InvalidInput(&'static str),
    /// Latitude too close to a pole, or a cusp point that never crosses the horizon.
    #[error("singular geometry at latitude {latitude_deg}°")]
    SingularGeometry { latitude_deg: f64 },
    /// The Placidus fixed-point iteration exhausted its budget. `cusp` is 0
    /// for a solve not tied to a house number.
    #[error("cusp {cusp} did not converge after {iterations} iterations")]
    NonConvergence { cusp: u8, iterations: u32 },
    /// Error from the time-scale layer.
    #[error("time error: {0}")]
    Time(#[from] TimeError),
}
