//! VSOP87 series evaluation and a truncated geocentric Sun ephemeris.
//!
//! [`series`] evaluates any leveled VSOP87 coordinate; [`sun`] wraps the
//! Earth tables in [`earth_tables`] into a `SunEphemeris` service.

pub mod earth_tables;
pub mod error;
pub mod series;
pub mod sun;

pub use error::EphemerisError;
pub use natal_time::julian_millennia;
pub use series::{VsopSeries, VsopTerm, evaluate_leveled_series, evaluate_series};
pub use sun::{HeliocentricEarth, SunEphemeris, SunPosition};
