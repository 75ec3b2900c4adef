//! Angle helpers and frame rotations for chart computations.
//!
//! Provides degree/radian normalization, degree-minute splitting and the
//! ecliptic ↔ equatorial rotation used to cross-check ephemeris and cusp
//! outputs.

pub mod angle;
pub mod transform;

pub use angle::{
    DegMin, angular_separation, arc_forward, degrees_to_deg_min, degrees_to_radians,
    normalize_degrees, normalize_radians, radians_to_degrees,
};
pub use transform::{
    EclipticCoords, EquatorialCoords, ecliptic_to_equatorial, equatorial_to_ecliptic,
};
