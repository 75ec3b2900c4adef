//! Degree/radian arithmetic shared by every stage of the chart pipeline.
//!
//! All normalizers return values in the half-open range `[0, period)`.
//! `f64::rem_euclid` alone can return exactly `period` for tiny negative
//! inputs (e.g. `-1e-17`), so every result is folded once more.

use std::f64::consts::{PI, TAU};

/// Convert degrees to radians.
pub fn degrees_to_radians(deg: f64) -> f64 {
    deg * PI / 180.0
}

/// Convert radians to degrees.
pub fn radians_to_degrees(rad: f64) -> f64 {
    rad * 180.0 / PI
}

/// Normalize an angle to [0, 360) degrees.
pub fn normalize_degrees(deg: f64) -> f64 {
    fold(deg.rem_euclid(360.0), 360.0)
}

/// Normalize an angle to [0, 2π) radians.
pub fn normalize_radians(rad: f64) -> f64 {
    fold(rad.rem_euclid(TAU), TAU)
}

fn fold(r: f64, period: f64) -> f64 {
    if r >= period { r - period } else { r }
}

/// Whole degrees and rounded arc-minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DegMin {
    /// Whole degrees (floor of the input).
    pub deg: i32,
    /// Arc-minutes, 0..=59.
    pub min: u8,
}

/// Split decimal degrees into whole degrees and rounded minutes.
///
/// A fraction that rounds to 60′ carries into the degree, so
/// `10.9999944` becomes `11°00′`, never `10°60′`.
pub fn degrees_to_deg_min(deg: f64) -> DegMin {
    let mut d = deg.floor();
    let mut m = ((deg - d) * 60.0).round();
    if m >= 60.0 {
        m = 0.0;
        d += 1.0;
    }
    DegMin {
        deg: d as i32,
        min: m as u8,
    }
}

/// Forward (counter-clockwise) arc from `from` to `to`, in [0, 360).
pub fn arc_forward(from_deg: f64, to_deg: f64) -> f64 {
    normalize_degrees(to_deg - from_deg)
}

/// Shortest angular distance between two longitudes, in [0, 180].
pub fn angular_separation(a_deg: f64, b_deg: f64) -> f64 {
    let d = arc_forward(a_deg, b_deg);
    if d > 180.0 { 360.0 - d } else { d }
}
