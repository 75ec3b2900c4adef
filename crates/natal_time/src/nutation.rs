//! Short nutation series in longitude (Δψ) and obliquity (Δε).
//!
//! Four periodic terms driven by the Moon's ascending node Ω, the Sun's mean
//! longitude L and the Moon's mean longitude L′. Accurate to about 0.5″ in Δψ
//! and 0.1″ in Δε.
//!
//! Source: Meeus, "Astronomical Algorithms" (2nd ed), Chapter 22.

use std::f64::consts::TAU;

/// Nutation angles in arcseconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Nutation {
    /// Nutation in longitude Δψ.
    pub dpsi_arcsec: f64,
    /// Nutation in obliquity Δε.
    pub deps_arcsec: f64,
}

/// Fundamental arguments `(Ω, L, L′)` in radians for `t` Julian centuries.
pub fn short_arguments(t: f64) -> (f64, f64, f64) {
    let t2 = t * t;
    let t3 = t2 * t;
    let omega = 125.044_52 - 1_934.136_261 * t + 0.002_070_8 * t2 + t3 / 450_000.0;
    let l_sun = 280.466_5 + 36_000.769_8 * t;
    let l_moon = 218.316_5 + 481_267.881_3 * t;
    (
        deg_to_rad_wrapped(omega),
        deg_to_rad_wrapped(l_sun),
        deg_to_rad_wrapped(l_moon),
    )
}

/// Evaluate Δψ and Δε for `t` Julian centuries since J2000.0.
///
/// ```text
/// Δψ = −17.20 sin Ω − 1.32 sin 2L − 0.23 sin 2L′ + 0.21 sin 2Ω
/// Δε =  +9.20 cos Ω + 0.57 cos 2L + 0.10 cos 2L′ − 0.09 cos 2Ω
/// ```
pub fn nutation_short(t: f64) -> Nutation {
    let (om, l, lp) = short_arguments(t);
    let dpsi = -17.20 * om.sin() - 1.32 * (2.0 * l).sin() - 0.23 * (2.0 * lp).sin()
        + 0.21 * (2.0 * om).sin();
    let deps = 9.20 * om.cos() + 0.57 * (2.0 * l).cos() + 0.10 * (2.0 * lp).cos()
        - 0.09 * (2.0 * om).cos();
    Nutation {
        dpsi_arcsec: dpsi,
        deps_arcsec: deps,
    }
}

fn deg_to_rad_wrapped(deg: f64) -> f64 {
    deg.to_radians().rem_euclid(TAU)
}
