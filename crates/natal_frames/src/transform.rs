//! Ecliptic ↔ equatorial coordinate rotation about the equinox axis.
//!
//! Both directions are the standard spherical-astronomy formulas
//! (Meeus, "Astronomical Algorithms", Eq. 13.1–13.4). The rotation angle is
//! the obliquity supplied by the caller; nothing here assumes an epoch.

use crate::angle::{degrees_to_radians, normalize_degrees, radians_to_degrees};

/// Ecliptic coordinates in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EclipticCoords {
    /// Ecliptic longitude, [0, 360).
    pub lon_deg: f64,
    /// Ecliptic latitude, [-90, 90].
    pub lat_deg: f64,
}

/// Equatorial coordinates in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EquatorialCoords {
    /// Right ascension, [0, 360).
    pub ra_deg: f64,
    /// Declination, [-90, 90].
    pub dec_deg: f64,
}

/// Rotate ecliptic (λ, β) into equatorial (α, δ).
///
/// ```text
/// α = atan2(sin λ cos ε − tan β sin ε, cos λ)
/// δ = asin(sin β cos ε + cos β sin ε sin λ)
/// ```
pub fn ecliptic_to_equatorial(ecl: EclipticCoords, obliquity_deg: f64) -> EquatorialCoords {
    let lon = degrees_to_radians(ecl.lon_deg);
    let lat = degrees_to_radians(ecl.lat_deg);
    let (sin_eps, cos_eps) = degrees_to_radians(obliquity_deg).sin_cos();

    let ra = f64::atan2(lon.sin() * cos_eps - lat.tan() * sin_eps, lon.cos());
    let dec = (lat.sin() * cos_eps + lat.cos() * sin_eps * lon.sin()).clamp(-1.0, 1.0).asin();

    EquatorialCoords {
        ra_deg: normalize_degrees(radians_to_degrees(ra)),
        dec_deg: radians_to_degrees(dec),
    }
}

/// Rotate equatorial (α, δ) into ecliptic (λ, β).
///
/// ```text
/// λ = atan2(sin α cos ε + tan δ sin ε, cos α)
/// β = asin(sin δ cos ε − cos δ sin ε sin α)
/// ```
pub fn equatorial_to_ecliptic(equ: EquatorialCoords, obliquity_deg: f64) -> EclipticCoords {
    let ra = degrees_to_radians(equ.ra_deg);
    let dec = degrees_to_radians(equ.dec_deg);
    let (sin_eps, cos_eps) = degrees_to_radians(obliquity_deg).sin_cos();

    let lon = f64::atan2(ra.sin() * cos_eps + dec.tan() * sin_eps, ra.cos());
    let lat = (dec.sin() * cos_eps - dec.cos() * sin_eps * ra.sin()).clamp(-1.0, 1.0).asin();

    EclipticCoords {
        lon_deg: normalize_degrees(radians_to_degrees(lon)),
        lat_deg: radians_to_degrees(lat),
    }
}
