//! Chart engine configuration, loadable from TOML.
//!
//! ```toml
//! house_mode = "exact_placidus"
//! obliquity = "true"
//! convergence_tolerance_rad = 1e-10
//! max_iterations = 100
//! polar_epsilon_deg = 0.001
//! include_sun = true
//! ```
//!
//! Every key is optional; missing keys take their defaults.

use std::fs;
use std::path::Path;

use natal_houses::{ConvergenceBudget, HouseConfig, HouseMode};
use serde::{Deserialize, Serialize};

use crate::error::ChartError;

/// Which obliquity of the ecliptic feeds the Ascendant and cusp formulas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ObliquityMode {
    /// Constant 23.439291°.
    #[default]
    Fixed,
    /// Mean obliquity of date plus the short nutation term.
    True,
}

/// Configuration for [`crate::ChartEngine`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ChartConfig {
    pub house_mode: HouseMode,
    pub obliquity: ObliquityMode,
    /// Placidus stopping tolerance on right ascension (radians).
    pub convergence_tolerance_rad: f64,
    /// Placidus iteration cap.
    pub max_iterations: u32,
    /// Latitudes within this many degrees of a pole are rejected.
    pub polar_epsilon_deg: f64,
    /// Whether to compute the Sun position.
    pub include_sun: bool,
}

impl Default for ChartConfig {
    fn default() -> Self {
        let house = HouseConfig::default();
        Self {
            house_mode: house.mode,
            obliquity: ObliquityMode::Fixed,
            convergence_tolerance_rad: house.budget.tolerance_rad,
            max_iterations: house.budget.max_iterations,
            polar_epsilon_deg: house.polar_epsilon_deg,
            include_sun: true,
        }
    }
}

impl ChartConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(raw: &str) -> Result<Self, ChartError> {
        let config: Self = toml::from_str(raw).map_err(|e| ChartError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ChartError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)
            .map_err(|e| ChartError::Config(format!("{}: {e}", path.display())))?;
        Self::from_toml_str(&raw)
    }

    pub fn validate(&self) -> Result<(), ChartError> {
        if !(self.convergence_tolerance_rad.is_finite() && self.convergence_tolerance_rad > 0.0) {
            return Err(ChartError::Config(
                "convergence_tolerance_rad must be positive".into(),
            ));
        }
        if self.max_iterations == 0 {
            return Err(ChartError::Config(
                "max_iterations must be greater than zero".into(),
            ));
        }
        if !(self.polar_epsilon_deg > 0.0 && self.polar_epsilon_deg < 1.0) {
            return Err(ChartError::Config(
                "polar_epsilon_deg must be in (0, 1)".into(),
            ));
        }
        Ok(())
    }

    /// House-solver settings derived from this configuration.
    pub fn house_config(&self) -> HouseConfig {
        HouseConfig {
            mode: self.house_mode,
            budget: ConvergenceBudget {
                tolerance_rad: self.convergence_tolerance_rad,
                max_iterations: self.max_iterations,
            },
            polar_epsilon_deg: self.polar_epsilon_deg,
        }
    }
}
