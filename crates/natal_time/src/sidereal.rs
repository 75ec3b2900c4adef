//! Greenwich and Local Mean Sidereal Time.
//!
//! Sidereal time is carried in seconds of time, range [0, 86400).
//! One degree of east longitude adds 240 s.
//!
//! Sources:
//! - GMST at 0h UT: Meeus, "Astronomical Algorithms" (2nd ed), Eq. 12.2
//!   (IAU 1982 expression, Aoki et al.).
//! - Sidereal/solar rate 1.00273790935: Explanatory Supplement (1992), §2.24.

use crate::error::{TimeError, ensure_finite};
use crate::julian::{DAYS_PER_CENTURY, J2000_JD, SECONDS_PER_DAY, jd_at_midnight};

/// Ratio of the mean sidereal day rate to the mean solar day rate.
pub const SIDEREAL_RATE: f64 = 1.002_737_909_35;

/// Sidereal seconds per degree of longitude (86400 / 360).
pub const SECONDS_PER_DEGREE: f64 = 240.0;

/// Greenwich Mean Sidereal Time at 0h UT of the civil day containing `jd`.
///
/// θ₀ = 24110.54841 + 8640184.812866·T + 0.093104·T² − 6.2e−6·T³ (seconds),
/// with T in Julian centuries from J2000.0 to that midnight.
///
/// Returns seconds in [0, 86400).
pub fn gmst0_seconds(jd: f64) -> Result<f64, TimeError> {
    let jd = ensure_finite(jd, "julian day")?;
    let t = (jd_at_midnight(jd) - J2000_JD) / DAYS_PER_CENTURY;
    let t2 = t * t;
    let t3 = t2 * t;
    let theta0 = 24_110.548_41 + 8_640_184.812_866 * t + 0.093_104 * t2 - 6.2e-6 * t3;
    Ok(wrap_day_seconds(theta0))
}

/// Local Mean Sidereal Time at `jd` for an observer at `longitude_deg` (east positive).
///
/// LST = GMST0 + UT·1.00273790935 + 240·λ, wrapped into [0, 86400) seconds.
pub fn local_sidereal_time_seconds(jd: f64, longitude_deg: f64) -> Result<f64, TimeError> {
    let jd = ensure_finite(jd, "julian day")?;
    let longitude_deg = ensure_finite(longitude_deg, "longitude")?;
    let gmst0 = gmst0_seconds(jd)?;
    let ut_seconds = (jd - jd_at_midnight(jd)) * SECONDS_PER_DAY;
    let lst = gmst0 + ut_seconds * SIDEREAL_RATE + longitude_deg * SECONDS_PER_DEGREE;
    Ok(wrap_day_seconds(lst))
}

/// Greenwich Mean Sidereal Time at `jd` in seconds, [0, 86400).
pub fn gmst_seconds(jd: f64) -> Result<f64, TimeError> {
    local_sidereal_time_seconds(jd, 0.0)
}

/// Convert sidereal seconds to degrees (×360/86400).
pub fn sidereal_seconds_to_degrees(seconds: f64) -> f64 {
    seconds * 360.0 / SECONDS_PER_DAY
}

/// Local Mean Sidereal Time in degrees, [0, 360).
pub fn local_sidereal_time_deg(jd: f64, longitude_deg: f64) -> Result<f64, TimeError> {
    let deg = sidereal_seconds_to_degrees(local_sidereal_time_seconds(jd, longitude_deg)?);
    Ok(if deg >= 360.0 { deg - 360.0 } else { deg })
}

fn wrap_day_seconds(s: f64) -> f64 {
    let r = s.rem_euclid(SECONDS_PER_DAY);
    if r >= SECONDS_PER_DAY { r - SECONDS_PER_DAY } else { r }
}
