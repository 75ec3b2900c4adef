//! Time scales for chart computation.
//!
//! - Proleptic Gregorian calendar ↔ Julian Day
//! - Greenwich and local mean sidereal time
//! - Mean and true obliquity of the ecliptic
//! - Short nutation series

pub mod error;
pub mod julian;
pub mod nutation;
pub mod obliquity;
pub mod sidereal;
pub mod utc_time;

pub use error::TimeError;
pub use julian::{
    DAYS_PER_CENTURY, DAYS_PER_MILLENNIUM, J2000_JD, SECONDS_PER_DAY, calendar_to_jd,
    checked_julian_centuries, jd_at_midnight, jd_to_calendar, julian_centuries, julian_millennia,
};
pub use nutation::{Nutation, nutation_short};
pub use obliquity::{
    FIXED_OBLIQUITY_DEG, mean_obliquity_arcsec, mean_obliquity_deg, true_obliquity_deg,
};
pub use sidereal::{
    SIDEREAL_RATE, gmst0_seconds, gmst_seconds, local_sidereal_time_deg,
    local_sidereal_time_seconds, sidereal_seconds_to_degrees,
};
pub use utc_time::{UtcTime, julian_day};
