//! Unified error type for the chart service.

use natal_houses::HouseError;
use natal_time::TimeError;
use natal_vsop::EphemerisError;
use thiserror::Error;

/// Errors surfaced by [`crate::ChartEngine`].
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum ChartError {
    /// Non-finite or out-of-domain input.
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// Latitude at a pole, or a circumpolar cusp in exact Placidus.
    #[error("singular geometry at latitude {latitude_deg}°")]
    SingularGeometry { latitude_deg: f64 },
    /// The Placidus iteration exhausted its budget.
    #[error("cusp {cusp} did not converge after {iterations} iterations")]
    NonConvergence { cusp: u8, iterations: u32 },
    /// Invalid or unreadable configuration.
    #[error("invalid config: {0}")]
    Config(String),
}

/// Coarse classification of a [`ChartError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChartErrorKind {
    InvalidInput,
    SingularGeometry,
    NonConvergence,
    Config,
}

impl ChartError {
    pub fn kind(&self) -> ChartErrorKind {
        match self {
            Self::InvalidInput(_) => ChartErrorKind::InvalidInput,
            Self::SingularGeometry { .. } => ChartErrorKind::SingularGeometry,
            Self::NonConvergence { .. } => ChartErrorKind::NonConvergence,
            Self::Config(_) => ChartErrorKind::Config,
        }
    }
}

impl From<TimeError> for ChartError {
    fn from(e: TimeError) -> Self {
        Self::InvalidInput(e.to_string())
    }
}

impl From<EphemerisError> for ChartError {
    fn from(e: EphemerisError) -> Self {
        Self::InvalidInput(e.to_string())
    }
}

impl From<HouseError> for ChartError {
    fn from(e: HouseError) -> Self {
        match e {
            HouseError::SingularGeometry { latitude_deg } => {
                Self::SingularGeometry { latitude_deg }
            }
            HouseError::NonConvergence { cusp, iterations } => {
                Self::NonConvergence { cusp, iterations }
            }
            other => Self::InvalidInput(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn house_errors_map_to_kinds() {
        let e: ChartError = HouseError::SingularGeometry { latitude_deg: 90.0 }.into();
        assert_eq!(e.kind(), ChartErrorKind::SingularGeometry);
        let e: ChartError = HouseError::NonConvergence {
            cusp: 3,
            iterations: 50,
        }
        .into();
        assert_eq!(
            e,
            ChartError::NonConvergence {
                cusp: 3,
                iterations: 50
            }
        );
        let e: ChartError = HouseError::InvalidInput("latitude is not finite").into();
        assert_eq!(e.kind(), ChartErrorKind::InvalidInput);
    }

    #[test]
    fn time_and_ephemeris_errors_are_invalid_input() {
        let e: ChartError = TimeError::NonFinite("julian day").into();
        assert_eq!(e.kind(), ChartErrorKind::InvalidInput);
        let e: ChartError = EphemerisError::NonFinite("julian day").into();
        assert_eq!(e.kind(), ChartErrorKind::InvalidInput);
        assert!(e.to_string().contains("julian day"));
    }
}
