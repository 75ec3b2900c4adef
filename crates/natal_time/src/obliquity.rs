//! Obliquity of the ecliptic.
//!
//! Mean obliquity uses the IAU 1980 polynomial (Lieske et al. 1977) in
//! Julian centuries T from J2000.0. True obliquity adds the short Δε series
//! from [`crate::nutation`].

use crate::error::TimeError;
use crate::julian::checked_julian_centuries;
use crate::nutation::nutation_short;

/// Fixed obliquity used when no epoch-dependent value is requested (degrees).
pub const FIXED_OBLIQUITY_DEG: f64 = 23.439_291;

/// Mean obliquity ε₀ in arcseconds.
///
/// ε₀ = 84381.448 − 46.8150·T − 0.00059·T² + 0.001813·T³
pub fn mean_obliquity_arcsec(t: f64) -> f64 {
    let t2 = t * t;
    let t3 = t2 * t;
    84_381.448 - 46.815_0 * t - 0.000_59 * t2 + 0.001_813 * t3
}

/// Mean obliquity ε₀ in degrees.
pub fn mean_obliquity_deg(t: f64) -> f64 {
    mean_obliquity_arcsec(t) / 3600.0
}

/// True obliquity ε = ε₀ + Δε at Julian Day `jd`, in degrees.
pub fn true_obliquity_deg(jd: f64) -> Result<f64, TimeError> {
    let t = checked_julian_centuries(jd)?;
    let nut = nutation_short(t);
    Ok((mean_obliquity_arcsec(t) + nut.deps_arcsec) / 3600.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::julian::J2000_JD;

    #[test]
    fn mean_at_j2000() {
        assert!((mean_obliquity_deg(0.0) - 23.439_291_1).abs() < 1e-6);
        assert!((mean_obliquity_deg(0.0) - FIXED_OBLIQUITY_DEG).abs() < 1e-6);
    }

    #[test]
    fn meeus_example_22a() {
        // ε₀ = 23°26′27.407″, ε = 23°26′36.850″
        let jd = 2_446_895.5;
        let t = (jd - J2000_JD) / 36_525.0;
        let eps0 = mean_obliquity_deg(t);
        assert!((eps0 - 23.440_946).abs() < 1e-5, "eps0 = {eps0}");
        let eps = true_obliquity_deg(jd).unwrap();
        assert!((eps - 23.443_569).abs() < 0.5 / 3600.0, "eps = {eps}");
    }

    #[test]
    fn mean_decreases_over_century() {
        assert!(mean_obliquity_arcsec(1.0) < mean_obliquity_arcsec(0.0));
    }

    #[test]
    fn true_rejects_nan() {
        assert_eq!(true_obliquity_deg(f64::NAN), Err(TimeError::NonFinite("julian day")));
    }
}
