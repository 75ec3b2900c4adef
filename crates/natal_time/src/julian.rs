//! Julian Date ↔ proleptic Gregorian calendar conversion.
//!
//! Source: Meeus, "Astronomical Algorithms" (2nd ed), Chapter 7.
//! The Gregorian correction is applied for every date, so the calendar is
//! proleptic Gregorian in both directions.

use crate::error::{TimeError, ensure_finite};

/// Julian Date of the J2000.0 epoch (2000-Jan-01 12:00 TT).
pub const J2000_JD: f64 = 2_451_545.0;

/// Seconds in one civil day.
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Days in a Julian century.
pub const DAYS_PER_CENTURY: f64 = 36_525.0;

/// Days in a Julian millennium.
pub const DAYS_PER_MILLENNIUM: f64 = 365_250.0;

/// Convert a calendar date with fractional day to a Julian Date.
///
/// January and February are counted as months 13 and 14 of the previous
/// year, then the century correction `B = 2 − A + ⌊A/4⌋` is added.
pub fn calendar_to_jd(year: i32, month: u32, day_frac: f64) -> f64 {
    let (y, m) = if month <= 2 {
        (year as f64 - 1.0, month as f64 + 12.0)
    } else {
        (year as f64, month as f64)
    };
    let a = (y / 100.0).floor();
    let b = 2.0 - a + (a / 4.0).floor();
    (365.25 * (y + 4716.0)).floor() + (30.6001 * (m + 1.0)).floor() + day_frac + b - 1524.5
}

/// Convert a Julian Date back to `(year, month, day_frac)`.
pub fn jd_to_calendar(jd: f64) -> (i32, u32, f64) {
    let z = (jd + 0.5).floor();
    let f = jd + 0.5 - z;
    let alpha = ((z - 1_867_216.25) / 36_524.25).floor();
    let a = z + 1.0 + alpha - (alpha / 4.0).floor();
    let b = a + 1524.0;
    let c = ((b - 122.1) / 365.25).floor();
    let d = (365.25 * c).floor();
    let e = ((b - d) / 30.6001).floor();

    let day_frac = b - d - (30.6001 * e).floor() + f;
    let month = if e < 14.0 { e - 1.0 } else { e - 13.0 };
    let year = if month > 2.0 { c - 4716.0 } else { c - 4715.0 };
    (year as i32, month as u32, day_frac)
}

/// Julian centuries since J2000.0.
pub fn julian_centuries(jd: f64) -> f64 {
    (jd - J2000_JD) / DAYS_PER_CENTURY
}

/// Julian millennia since J2000.0, the time argument of VSOP87.
pub fn julian_millennia(jd: f64) -> f64 {
    (jd - J2000_JD) / DAYS_PER_MILLENNIUM
}

/// Midnight (0h UT) Julian Date of the civil day containing `jd`.
pub fn jd_at_midnight(jd: f64) -> f64 {
    (jd - 0.5).floor() + 0.5
}

/// Checked variant of [`julian_centuries`].
pub fn checked_julian_centuries(jd: f64) -> Result<f64, TimeError> {
    ensure_finite(jd, "julian day").map(julian_centuries)
}
