//! Ascendant and Midheaven from local sidereal time.
//!
//! Sources: Meeus, "Astronomical Algorithms" (2nd ed), Chapter 13;
//! standard spherical astronomy (Montenbruck & Pfleger).

use natal_frames::{degrees_to_radians, normalize_degrees, radians_to_degrees};

use crate::error::HouseError;

/// Default distance from the pole inside which the horizon is undefined (degrees).
pub const DEFAULT_POLAR_EPSILON_DEG: f64 = 1e-3;

/// |φ| at or above this is singular whatever the configured epsilon.
const POLE_LIMIT_DEG: f64 = 90.0 - 90.0 * f64::EPSILON;

/// Ascendant and MC ecliptic longitudes in degrees, both in [0, 360).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AngleResult {
    pub ascendant_deg: f64,
    pub mc_deg: f64,
}

/// Reject non-finite or out-of-range observer latitude and polar singularities.
///
/// `polar_epsilon_deg` must be finite and non-negative. The poles themselves
/// are singular even with a zero epsilon.
pub fn check_latitude(latitude_deg: f64, polar_epsilon_deg: f64) -> Result<(), HouseError> {
    if !polar_epsilon_deg.is_finite() || polar_epsilon_deg < 0.0 {
        return Err(HouseError::InvalidInput("polar epsilon must be finite and non-negative"));
    }
    if !latitude_deg.is_finite() {
        return Err(HouseError::InvalidInput("latitude is not finite"));
    }
    let abs_lat = latitude_deg.abs();
    if abs_lat > 90.0 {
        return Err(HouseError::InvalidInput("latitude outside [-90, 90]"));
    }
    if abs_lat >= POLE_LIMIT_DEG || 90.0 - abs_lat < polar_epsilon_deg {
        return Err(HouseError::SingularGeometry { latitude_deg });
    }
    Ok(())
}

fn check_finite(value: f64, what: &'static str) -> Result<f64, HouseError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(HouseError::InvalidInput(what))
    }
}

/// Ascendant and MC for sidereal time `lst_deg`, observer latitude and obliquity.
///
/// ```text
/// MC  = atan2(sin LST, cos LST)
/// Asc = atan2(cos LST, −sin LST·cos ε − tan φ·sin ε)
/// ```
///
/// The MC here is the reference meridian longitude, which equals LST folded
/// into [0, 360). See [`ecliptic_mc_deg`] for the meridian's ecliptic point.
pub fn ascendant_and_mc(
    lst_deg: f64,
    latitude_deg: f64,
    obliquity_deg: f64,
) -> Result<AngleResult, HouseError> {
    ascendant_and_mc_with_epsilon(lst_deg, latitude_deg, obliquity_deg, DEFAULT_POLAR_EPSILON_DEG)
}

/// [`ascendant_and_mc`] with an explicit polar epsilon.
pub fn ascendant_and_mc_with_epsilon(
    lst_deg: f64,
    latitude_deg: f64,
    obliquity_deg: f64,
    polar_epsilon_deg: f64,
) -> Result<AngleResult, HouseError> {
    let lst_deg = check_finite(lst_deg, "sidereal time is not finite")?;
    let obliquity_deg = check_finite(obliquity_deg, "obliquity is not finite")?;
    check_latitude(latitude_deg, polar_epsilon_deg)?;

    let lst = degrees_to_radians(lst_deg);
    let phi = degrees_to_radians(latitude_deg);
    let (sin_eps, cos_eps) = degrees_to_radians(obliquity_deg).sin_cos();

    let mc = f64::atan2(lst.sin(), lst.cos());
    let asc = f64::atan2(lst.cos(), -lst.sin() * cos_eps - phi.tan() * sin_eps);

    Ok(AngleResult {
        ascendant_deg: normalize_degrees(radians_to_degrees(asc)),
        mc_deg: normalize_degrees(radians_to_degrees(mc)),
    })
}

/// Ecliptic longitude of the upper meridian: `atan2(sin LST, cos LST·cos ε)`.
pub fn ecliptic_mc_deg(lst_deg: f64, obliquity_deg: f64) -> f64 {
    let lst = degrees_to_radians(lst_deg);
    let cos_eps = degrees_to_radians(obliquity_deg).cos();
    normalize_degrees(radians_to_degrees(f64::atan2(lst.sin(), lst.cos() * cos_eps)))
}
