//! Types for house-cusp computation: mode, configuration and result.

use serde::{Deserialize, Serialize};

use crate::angles::DEFAULT_POLAR_EPSILON_DEG;

/// How the intermediate cusps are produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HouseMode {
    /// Fixed offsets from the Ascendant and reference MC:
    /// 2 = Asc+30°, 3 = Asc+60°, 5 = MC+120°, 6 = Asc+150°.
    #[default]
    EqualOffset,
    /// Semi-arc trisection solved by fixed-point iteration; MC on the ecliptic.
    ExactPlacidus,
}

/// All house modes, in enum order.
pub const ALL_HOUSE_MODES: [HouseMode; 2] = [HouseMode::EqualOffset, HouseMode::ExactPlacidus];

impl HouseMode {
    pub const fn name(self) -> &'static str {
        match self {
            Self::EqualOffset => "equal_offset",
            Self::ExactPlacidus => "exact_placidus",
        }
    }

    /// Parse the snake_case name used in configuration files.
    pub fn from_name(name: &str) -> Option<Self> {
        ALL_HOUSE_MODES.into_iter().find(|m| m.name() == name)
    }
}

impl std::fmt::Display for HouseMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Stopping rule for the Placidus fixed-point iteration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConvergenceBudget {
    /// Stop once successive right ascensions differ by less than this (radians).
    pub tolerance_rad: f64,
    /// Give up with `NonConvergence` after this many updates.
    pub max_iterations: u32,
}

impl Default for ConvergenceBudget {
    fn default() -> Self {
        Self {
            tolerance_rad: 1e-8,
            max_iterations: 50,
        }
    }
}

/// Configuration for [`crate::compute_houses`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HouseConfig {
    pub mode: HouseMode,
    pub budget: ConvergenceBudget,
    /// Latitudes within this many degrees of a pole are rejected.
    pub polar_epsilon_deg: f64,
}

impl Default for HouseConfig {
    fn default() -> Self {
        Self {
            mode: HouseMode::EqualOffset,
            budget: ConvergenceBudget::default(),
            polar_epsilon_deg: DEFAULT_POLAR_EPSILON_DEG,
        }
    }
}

/// Full wheel: twelve cusps plus Ascendant and MC, all in [0, 360).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HouseResult {
    /// Mode that produced the cusps.
    pub mode: HouseMode,
    pub ascendant_deg: f64,
    pub mc_deg: f64,
    /// Cusp longitudes, `cusps[0]` = house 1.
    pub cusps: [f64; 12],
}

impl HouseResult {
    /// Cusp of house `n` (1-based). `None` outside 1..=12.
    pub fn cusp(&self, n: usize) -> Option<f64> {
        if (1..=12).contains(&n) {
            Some(self.cusps[n - 1])
        } else {
            None
        }
    }

    /// Imum Coeli, the cusp of house 4.
    pub fn ic_deg(&self) -> f64 {
        self.cusps[3]
    }

    /// Descendant, the cusp of house 7.
    pub fn descendant_deg(&self) -> f64 {
        self.cusps[6]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let c = HouseConfig::default();
        assert_eq!(c.mode, HouseMode::EqualOffset);
        assert_eq!(c.budget.max_iterations, 50);
        assert_eq!(c.budget.tolerance_rad, 1e-8);
        assert_eq!(c.polar_epsilon_deg, 1e-3);
    }

    #[test]
    fn mode_names_roundtrip() {
        for m in ALL_HOUSE_MODES {
            assert_eq!(HouseMode::from_name(m.name()), Some(m));
        }
        assert_eq!(HouseMode::from_name("koch"), None);
        assert_eq!(HouseMode::ExactPlacidus.to_string(), "exact_placidus");
    }

    #[test]
    fn cusp_accessor_is_one_based() {
        let mut cusps = [0.0; 12];
        for (i, c) in cusps.iter_mut().enumerate() {
            *c = i as f64 * 30.0;
        }
        let r = HouseResult {
            mode: HouseMode::EqualOffset,
            ascendant_deg: 0.0,
            mc_deg: 270.0,
            cusps,
        };
        assert_eq!(r.cusp(1), Some(0.0));
        assert_eq!(r.cusp(12), Some(330.0));
        assert_eq!(r.cusp(0), None);
        assert_eq!(r.cusp(13), None);
        assert_eq!(r.ic_deg(), 90.0);
        assert_eq!(r.descendant_deg(), 180.0);
    }
}
