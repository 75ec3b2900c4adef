//! Placidus house cusps by semi-arc trisection.
//!
//! An intermediate cusp is the ecliptic point whose hour angle is a fixed
//! fraction of its own semi-arc. With RAMC = LST, every cusp obeys
//!
//! ```text
//! RA = RAMC + k₀ + k₁·DSA(δ(RA))
//! DSA = 90° + asin(tan φ · tan δ)
//! tan δ = tan ε · sin RA
//! ```
//!
//! which is solved by fixed-point iteration from the equatorial guess
//! `RAMC + k₀ + k₁·90°`.
//!
//! [`placidus_fixed_point`] keeps the older single-factor iteration
//! `x ← atan2(sin LST·cos ε + tan φ·sin ε, cos LST) + factor`. Its right-hand
//! side does not depend on `x`, so it settles after one update and is not a
//! semi-arc division; cusps from it differ from the trisection cusps by up to
//! tens of degrees at mid latitudes.
//!
//! Sources: Meeus, "Astronomical Algorithms" (2nd ed), Chapter 13;
//! Holden, "The Elements of House Division" (1977).

use std::f64::consts::{FRAC_PI_2, FRAC_PI_3, TAU};

use natal_frames::{degrees_to_radians, normalize_degrees, normalize_radians, radians_to_degrees};
use natal_time::local_sidereal_time_deg;
use tracing::{debug, trace};

use crate::angles::{
    DEFAULT_POLAR_EPSILON_DEG, ascendant_and_mc_with_epsilon, check_latitude, ecliptic_mc_deg,
};
use crate::error::HouseError;
use crate::house_types::{ConvergenceBudget, HouseConfig, HouseMode, HouseResult};

/// The four cusps solved directly; the rest of the wheel follows by opposition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlacidusCusp {
    Eleventh,
    Twelfth,
    Second,
    Third,
}

/// Solved cusps in house order around the upper-east quadrant and below.
pub const ALL_PLACIDUS_CUSPS: [PlacidusCusp; 4] = [
    PlacidusCusp::Eleventh,
    PlacidusCusp::Twelfth,
    PlacidusCusp::Second,
    PlacidusCusp::Third,
];

impl PlacidusCusp {
    /// House number of this cusp.
    pub const fn number(self) -> u8 {
        match self {
            Self::Eleventh => 11,
            Self::Twelfth => 12,
            Self::Second => 2,
            Self::Third => 3,
        }
    }

    /// `(k₀, k₁)` in `RA = RAMC + k₀ + k₁·DSA`.
    ///
    /// Cusps 2 and 3 trisect the nocturnal arc NSA = 180° − DSA measured back
    /// from the IC, which rearranges to a diurnal-arc offset.
    pub fn coefficients(self) -> (f64, f64) {
        match self {
            Self::Eleventh => (0.0, 1.0 / 3.0),
            Self::Twelfth => (0.0, 2.0 / 3.0),
            Self::Second => (FRAC_PI_3, 2.0 / 3.0),
            Self::Third => (2.0 * FRAC_PI_3, 1.0 / 3.0),
        }
    }
}

/// Ecliptic longitude of one intermediate Placidus cusp, in degrees [0, 360).
///
/// Angles are in radians. Fails with `SingularGeometry` when the cusp point
/// is circumpolar (|tan φ·tan δ| > 1) and `NonConvergence` once the budget
/// is exhausted.
pub fn placidus_intermediate_cusp(
    lst_rad: f64,
    lat_rad: f64,
    eps_rad: f64,
    cusp: PlacidusCusp,
    budget: &ConvergenceBudget,
) -> Result<f64, HouseError> {
    let ramc = lst_rad;
    let (k0, k1) = cusp.coefficients();
    let tan_phi = lat_rad.tan();
    let tan_eps = eps_rad.tan();

    let mut ra = ramc + k0 + k1 * FRAC_PI_2;
    for iteration in 1..=budget.max_iterations {
        let x = tan_phi * tan_eps * ra.sin();
        if x.abs() > 1.0 {
            return Err(HouseError::SingularGeometry {
                latitude_deg: radians_to_degrees(lat_rad),
            });
        }
        let dsa = FRAC_PI_2 + x.asin();
        let next = ramc + k0 + k1 * dsa;
        let delta = next - ra;
        ra = next;
        trace!(cusp = cusp.number(), iteration, ra, delta, "placidus step");
        if delta.abs() < budget.tolerance_rad {
            return Ok(ecliptic_longitude_of_ra(ra, eps_rad));
        }
    }

    Err(HouseError::NonConvergence {
        cusp: cusp.number(),
        iterations: budget.max_iterations,
    })
}

/// Single-factor fixed point, in degrees [0, 360).
///
/// Starting from `x₀ = LST`, repeats
/// `x ← atan2(sin LST·cos ε + tan φ·sin ε, cos LST) + factor` until
/// |Δx| < tolerance. Angles are in radians. `NonConvergence` carries cusp 0.
pub fn placidus_fixed_point(
    lst_rad: f64,
    lat_rad: f64,
    eps_rad: f64,
    factor_rad: f64,
    budget: &ConvergenceBudget,
) -> Result<f64, HouseError> {
    if !(lst_rad.is_finite() && eps_rad.is_finite() && factor_rad.is_finite()) {
        return Err(HouseError::InvalidInput("fixed-point argument is not finite"));
    }
    check_latitude(radians_to_degrees(lat_rad), DEFAULT_POLAR_EPSILON_DEG)?;

    let (sin_lst, cos_lst) = lst_rad.sin_cos();
    let (sin_eps, cos_eps) = eps_rad.sin_cos();
    let tan_phi = lat_rad.tan();

    let mut x = lst_rad;
    for iteration in 1..=budget.max_iterations {
        let next = f64::atan2(sin_lst * cos_eps + tan_phi * sin_eps, cos_lst) + factor_rad;
        let delta = next - x;
        x = next;
        trace!(iteration, x, delta, "fixed-point step");
        if delta.abs() < budget.tolerance_rad {
            return Ok(normalize_degrees(radians_to_degrees(x)));
        }
    }

    Err(HouseError::NonConvergence {
        cusp: 0,
        iterations: budget.max_iterations,
    })
}

/// Longitude of the ecliptic point with right ascension `ra`:
/// `λ = atan2(sin RA, cos RA·cos ε)`.
fn ecliptic_longitude_of_ra(ra: f64, eps: f64) -> f64 {
    let ra = normalize_radians(ra);
    let lon = f64::atan2(ra.sin(), ra.cos() * eps.cos()).rem_euclid(TAU);
    normalize_degrees(radians_to_degrees(lon))
}

/// Full 12-cusp wheel for sidereal time, latitude and obliquity (degrees).
pub fn compute_houses(
    lst_deg: f64,
    latitude_deg: f64,
    obliquity_deg: f64,
    config: &HouseConfig,
) -> Result<HouseResult, HouseError> {
    let angles = ascendant_and_mc_with_epsilon(
        lst_deg,
        latitude_deg,
        obliquity_deg,
        config.polar_epsilon_deg,
    )?;
    let asc = angles.ascendant_deg;

    let (mc, c2, c3, c5, c6) = match config.mode {
        HouseMode::EqualOffset => {
            let mc = angles.mc_deg;
            (
                mc,
                normalize_degrees(asc + 30.0),
                normalize_degrees(asc + 60.0),
                normalize_degrees(mc + 120.0),
                normalize_degrees(asc + 150.0),
            )
        }
        HouseMode::ExactPlacidus => {
            let lst = degrees_to_radians(lst_deg);
            let lat = degrees_to_radians(latitude_deg);
            let eps = degrees_to_radians(obliquity_deg);
            let solve =
                |cusp| placidus_intermediate_cusp(lst, lat, eps, cusp, &config.budget);
            let c11 = solve(PlacidusCusp::Eleventh)?;
            let c12 = solve(PlacidusCusp::Twelfth)?;
            let c2 = solve(PlacidusCusp::Second)?;
            let c3 = solve(PlacidusCusp::Third)?;
            (
                ecliptic_mc_deg(lst_deg, obliquity_deg),
                c2,
                c3,
                normalize_degrees(c11 + 180.0),
                normalize_degrees(c12 + 180.0),
            )
        }
    };

    let cusps = [
        asc,
        c2,
        c3,
        normalize_degrees(mc + 180.0),
        c5,
        c6,
        normalize_degrees(asc + 180.0),
        normalize_degrees(c2 + 180.0),
        normalize_degrees(c3 + 180.0),
        mc,
        normalize_degrees(c5 + 180.0),
        normalize_degrees(c6 + 180.0),
    ];

    debug!(
        mode = %config.mode,
        lst_deg,
        latitude_deg,
        obliquity_deg,
        asc,
        mc,
        "house cusps computed"
    );

    Ok(HouseResult {
        mode: config.mode,
        ascendant_deg: asc,
        mc_deg: mc,
        cusps,
    })
}

/// [`compute_houses`] starting from a Julian Day (UT) and east longitude.
pub fn compute_houses_for_jd(
    jd: f64,
    longitude_deg: f64,
    latitude_deg: f64,
    obliquity_deg: f64,
    config: &HouseConfig,
) -> Result<HouseResult, HouseError> {
    let lst_deg = local_sidereal_time_deg(jd, longitude_deg)?;
    compute_houses(lst_deg, latitude_deg, obliquity_deg, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use natal_frames::arc_forward;

    const EPS_DEG: f64 = 23.439_291;

    fn exact() -> HouseConfig {
        HouseConfig {
            mode: HouseMode::ExactPlacidus,
            ..HouseConfig::default()
        }
    }

    #[test]
    fn coefficients_match_semi_arc_fractions() {
        // At the equator DSA = 90°, so RA offsets are 30°, 60°, 120°, 150°.
        let offsets: Vec<f64> = ALL_PLACIDUS_CUSPS
            .iter()
            .map(|c| {
                let (k0, k1) = c.coefficients();
                (k0 + k1 * FRAC_PI_2).to_degrees()
            })
            .collect();
        for (got, want) in offsets.iter().zip([30.0, 60.0, 120.0, 150.0]) {
            assert!((got - want).abs() < 1e-10, "{got} vs {want}");
        }
    }

    #[test]
    fn equator_cusps_are_equatorial_division() {
        let eps = EPS_DEG.to_radians();
        let budget = ConvergenceBudget::default();
        let c11 = placidus_intermediate_cusp(0.0, 0.0, eps, PlacidusCusp::Eleventh, &budget)
            .unwrap();
        // tan λ = tan 30° / cos ε
        let expect = (30f64.to_radians().tan() / eps.cos()).atan().to_degrees();
        assert!((c11 - expect).abs() < 1e-9, "c11 = {c11}, expected {expect}");
    }

    #[test]
    fn solution_satisfies_fixed_point() {
        let lst = 123.4f64.to_radians();
        let lat = 48.85f64.to_radians();
        let eps = EPS_DEG.to_radians();
        let budget = ConvergenceBudget {
            tolerance_rad: 1e-12,
            max_iterations: 200,
        };
        for cusp in ALL_PLACIDUS_CUSPS {
            let lon = placidus_intermediate_cusp(lst, lat, eps, cusp, &budget)
                .unwrap()
                .to_radians();
            // RA of the ecliptic point, then check the trisection relation
            let ra = f64::atan2(lon.sin() * eps.cos(), lon.cos());
            let tan_dec = eps.tan() * ra.sin();
            let dsa = FRAC_PI_2 + (lat.tan() * tan_dec).asin();
            let (k0, k1) = cusp.coefficients();
            let resid = (ra - (lst + k0 + k1 * dsa)).rem_euclid(TAU);
            let resid = resid.min(TAU - resid);
            assert!(resid < 1e-9, "cusp {}: residual {resid}", cusp.number());
        }
    }

    #[test]
    fn deterministic() {
        let a = compute_houses(201.7, 48.85, EPS_DEG, &exact()).unwrap();
        let b = compute_houses(201.7, 48.85, EPS_DEG, &exact()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn exact_wheel_is_ordered() {
        for i in 0..24 {
            let lst = i as f64 * 15.0 + 7.0;
            let r = compute_houses(lst, 48.85, EPS_DEG, &exact()).unwrap();
            let mut total = 0.0;
            for n in 0..12 {
                let arc = arc_forward(r.cusps[n], r.cusps[(n + 1) % 12]);
                assert!(arc > 0.0 && arc < 180.0, "lst {lst}: house {} arc {arc}", n + 1);
                total += arc;
            }
            assert!((total - 360.0).abs() < 1e-9, "lst {lst}: total {total}");
        }
    }

    #[test]
    fn equal_offset_layout() {
        let r = compute_houses(75.0, 40.0, EPS_DEG, &HouseConfig::default()).unwrap();
        let asc = r.ascendant_deg;
        let mc = r.mc_deg;
        let close = |a: f64, b: f64| (a - b + 540.0).rem_euclid(360.0) - 180.0;
        assert!(close(r.cusps[1], asc + 30.0).abs() < 1e-9);
        assert!(close(r.cusps[2], asc + 60.0).abs() < 1e-9);
        assert!(close(r.cusps[3], mc + 180.0).abs() < 1e-9);
        assert!(close(r.cusps[4], mc + 120.0).abs() < 1e-9);
        assert!(close(r.cusps[5], asc + 150.0).abs() < 1e-9);
        assert!(close(r.cusps[9], mc).abs() < 1e-9);
        assert!((mc - 75.0).abs() < 1e-9, "reference MC equals LST");
    }

    #[test]
    fn oppositions_hold_in_both_modes() {
        for config in [HouseConfig::default(), exact()] {
            let r = compute_houses(300.0, -33.87, EPS_DEG, &config).unwrap();
            for n in 0..6 {
                let d = arc_forward(r.cusps[n], r.cusps[n + 6]);
                assert!(
                    (d - 180.0).abs() < 1e-9,
                    "{:?}: cusp {} opposition {d}",
                    config.mode,
                    n + 1
                );
            }
            assert!(r.cusps.iter().all(|c| (0.0..360.0).contains(c)));
        }
    }

    #[test]
    fn exact_mode_uses_ecliptic_mc() {
        let r = compute_houses(45.0, 48.85, EPS_DEG, &exact()).unwrap();
        assert!((r.mc_deg - ecliptic_mc_deg(45.0, EPS_DEG)).abs() < 1e-12);
        assert_eq!(r.cusp(10), Some(r.mc_deg));
    }

    #[test]
    fn zero_budget_fails_to_converge() {
        let budget = ConvergenceBudget {
            tolerance_rad: 1e-8,
            max_iterations: 0,
        };
        let err = placidus_intermediate_cusp(
            0.3,
            0.8,
            EPS_DEG.to_radians(),
            PlacidusCusp::Twelfth,
            &budget,
        )
        .unwrap_err();
        assert_eq!(
            err,
            HouseError::NonConvergence {
                cusp: 12,
                iterations: 0
            }
        );
    }

    #[test]
    fn tight_budget_reports_cusp() {
        let budget = ConvergenceBudget {
            tolerance_rad: 1e-300,
            max_iterations: 3,
        };
        let err = placidus_intermediate_cusp(
            1.0,
            50f64.to_radians(),
            EPS_DEG.to_radians(),
            PlacidusCusp::Second,
            &budget,
        )
        .unwrap_err();
        assert!(matches!(err, HouseError::NonConvergence { cusp: 2, iterations: 3 }));
    }

    #[test]
    fn arctic_exact_placidus_is_singular() {
        // Above the polar circle some cusp points never set.
        let mut singular = false;
        for i in 0..36 {
            let lst = i as f64 * 10.0;
            if let Err(HouseError::SingularGeometry { .. }) =
                compute_houses(lst, 75.0, EPS_DEG, &exact())
            {
                singular = true;
            }
        }
        assert!(singular);
    }

    #[test]
    fn fixed_point_settles_after_one_update() {
        let lst = 123.46f64.to_radians();
        let lat = 48.85f64.to_radians();
        let eps = EPS_DEG.to_radians();
        let two = ConvergenceBudget {
            tolerance_rad: 1e-8,
            max_iterations: 2,
        };
        let cusps: Vec<f64> = [30.0f64, 60.0, 120.0, 150.0]
            .iter()
            .map(|f| placidus_fixed_point(lst, lat, eps, f.to_radians(), &two).unwrap())
            .collect();
        for (got, want) in cusps.iter().zip([144.309, 174.309, 234.309, 264.309]) {
            assert!((got - want).abs() < 1e-3, "{got} vs {want}");
        }

        let one = ConvergenceBudget {
            tolerance_rad: 1e-8,
            max_iterations: 1,
        };
        assert_eq!(
            placidus_fixed_point(lst, lat, eps, 0.5, &one),
            Err(HouseError::NonConvergence {
                cusp: 0,
                iterations: 1
            })
        );
    }

    #[test]
    fn fixed_point_matches_fifteen_rounds() {
        let (lst, lat, eps, factor) = (2.1f64, -0.6f64, EPS_DEG.to_radians(), 1.2f64);
        let mut x = lst;
        for _ in 0..15 {
            x = f64::atan2(lst.sin() * eps.cos() + lat.tan() * eps.sin(), lst.cos()) + factor;
        }
        let want = normalize_degrees(x.to_degrees());
        let got = placidus_fixed_point(lst, lat, eps, factor, &ConvergenceBudget::default())
            .unwrap();
        assert!((got - want).abs() < 1e-9, "{got} vs {want}");
        let again = placidus_fixed_point(lst, lat, eps, factor, &ConvergenceBudget::default())
            .unwrap();
        assert_eq!(got, again);
    }

    #[test]
    fn fixed_point_differs_from_trisection() {
        // At the equator the factor form gives LST + 30°, the semi-arc cusp does not.
        let eps = EPS_DEG.to_radians();
        let budget = ConvergenceBudget::default();
        let f = placidus_fixed_point(0.0, 0.0, eps, 30f64.to_radians(), &budget).unwrap();
        let c11 = placidus_intermediate_cusp(0.0, 0.0, eps, PlacidusCusp::Eleventh, &budget)
            .unwrap();
        assert!((f - 30.0).abs() < 1e-9, "f = {f}");
        assert!((c11 - f).abs() > 2.0, "c11 = {c11}");
    }

    #[test]
    fn fixed_point_rejects_pole_and_nan() {
        let budget = ConvergenceBudget::default();
        let eps = EPS_DEG.to_radians();
        assert!(matches!(
            placidus_fixed_point(1.0, 89.9999f64.to_radians(), eps, 0.5, &budget),
            Err(HouseError::SingularGeometry { .. })
        ));
        assert!(matches!(
            placidus_fixed_point(f64::NAN, 0.5, eps, 0.5, &budget),
            Err(HouseError::InvalidInput(_))
        ));
    }

    #[test]
    fn from_jd_matches_explicit_lst() {
        let jd = 2_448_058.104_166_7;
        let lst = local_sidereal_time_deg(jd, 2.35).unwrap();
        let a = compute_houses_for_jd(jd, 2.35, 48.85, EPS_DEG, &exact()).unwrap();
        let b = compute_houses(lst, 48.85, EPS_DEG, &exact()).unwrap();
        assert_eq!(a, b);
    }
}
