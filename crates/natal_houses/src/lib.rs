//! Ascendant, Midheaven and Placidus house cusps.
//!
//! Two house modes are offered:
//! - [`HouseMode::EqualOffset`]: fixed offsets from the Ascendant and the
//!   reference MC
//! - [`HouseMode::ExactPlacidus`]: semi-arc trisection solved iteratively
//!
//! Both complete the 12-cusp wheel by oppositions.

pub mod angles;
pub mod error;
pub mod house_types;
pub mod placidus;
pub mod zodiac;

pub use angles::{
    AngleResult, DEFAULT_POLAR_EPSILON_DEG, ascendant_and_mc, ascendant_and_mc_with_epsilon,
    check_latitude, ecliptic_mc_deg,
};
pub use error::HouseError;
pub use house_types::{ALL_HOUSE_MODES, ConvergenceBudget, HouseConfig, HouseMode, HouseResult};
pub use placidus::{
    ALL_PLACIDUS_CUSPS, PlacidusCusp, compute_houses, compute_houses_for_jd,
    placidus_fixed_point, placidus_intermediate_cusp,
};
pub use zodiac::{ALL_SIGNS, ZodiacPosition, ZodiacSign};
