//! Geocentric Sun from the truncated VSOP87 Earth series.
//!
//! The Sun's geometric position is Earth's heliocentric position reversed:
//! λ☉ = L + 180°, β☉ = −B, with R unchanged. Longitudes are tropical,
//! referred to the mean equinox of date.
//!
//! Source: Meeus, "Astronomical Algorithms" (2nd ed), Chapter 25
//! ("Higher accuracy").

use std::f64::consts::TAU;

use natal_frames::{
    EclipticCoords, EquatorialCoords, ecliptic_to_equatorial, normalize_degrees,
    radians_to_degrees,
};
use natal_time::{julian_centuries, julian_millennia, nutation_short};

use crate::earth_tables::{AMPLITUDE_SCALE, EARTH_B, EARTH_L, EARTH_R};
use crate::error::EphemerisError;
use crate::series::VsopSeries;

/// Constant of annual aberration divided into R, arcseconds.
const ABERRATION_ARCSEC: f64 = 20.4898;

/// Earth's heliocentric ecliptic coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeliocentricEarth {
    /// Longitude L in radians, [0, 2π).
    pub longitude_rad: f64,
    /// Latitude B in radians.
    pub latitude_rad: f64,
    /// Radius vector R in AU.
    pub radius_au: f64,
}

/// Geometric geocentric position of the Sun.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SunPosition {
    /// Tropical ecliptic longitude, [0, 360).
    pub longitude_deg: f64,
    /// Ecliptic latitude in degrees.
    pub latitude_deg: f64,
    /// Earth–Sun distance in AU.
    pub distance_au: f64,
}

impl SunPosition {
    /// Rotate into right ascension / declination for the given obliquity.
    pub fn to_equatorial(&self, obliquity_deg: f64) -> EquatorialCoords {
        ecliptic_to_equatorial(
            EclipticCoords {
                lon_deg: self.longitude_deg,
                lat_deg: self.latitude_deg,
            },
            obliquity_deg,
        )
    }
}

/// Sun ephemeris service holding the three Earth coordinate series.
///
/// Construct once and share by reference; it only borrows static tables.
#[derive(Debug, Clone, Copy)]
pub struct SunEphemeris {
    longitude: VsopSeries,
    latitude: VsopSeries,
    radius: VsopSeries,
}

impl SunEphemeris {
    /// Ephemeris backed by the truncated VSOP87D Earth tables.
    pub fn vsop87_truncated() -> Self {
        Self {
            longitude: VsopSeries::new(EARTH_L, AMPLITUDE_SCALE),
            latitude: VsopSeries::new(EARTH_B, AMPLITUDE_SCALE),
            radius: VsopSeries::new(EARTH_R, AMPLITUDE_SCALE),
        }
    }

    /// Number of periodic terms across L, B and R.
    pub fn term_count(&self) -> usize {
        self.longitude.term_count() + self.latitude.term_count() + self.radius.term_count()
    }

    /// Earth's heliocentric L, B, R at Julian Day `jd`.
    pub fn heliocentric_earth(&self, jd: f64) -> Result<HeliocentricEarth, EphemerisError> {
        if !jd.is_finite() {
            return Err(EphemerisError::NonFinite("julian day"));
        }
        let t = julian_millennia(jd);
        Ok(HeliocentricEarth {
            longitude_rad: self.longitude.evaluate(t)?.rem_euclid(TAU),
            latitude_rad: self.latitude.evaluate(t)?,
            radius_au: self.radius.evaluate(t)?,
        })
    }

    /// Geometric Sun position at Julian Day `jd`.
    pub fn compute_sun(&self, jd: f64) -> Result<SunPosition, EphemerisError> {
        let earth = self.heliocentric_earth(jd)?;
        Ok(SunPosition {
            longitude_deg: normalize_degrees(radians_to_degrees(earth.longitude_rad) + 180.0),
            latitude_deg: -radians_to_degrees(earth.latitude_rad),
            distance_au: earth.radius_au,
        })
    }

    /// Apparent longitude: geometric λ plus nutation in longitude and annual
    /// aberration (−20.4898″/R). Degrees, [0, 360).
    pub fn apparent_longitude_deg(&self, jd: f64) -> Result<f64, EphemerisError> {
        let sun = self.compute_sun(jd)?;
        let dpsi = nutation_short(julian_centuries(jd)).dpsi_arcsec;
        let aberration = -ABERRATION_ARCSEC / sun.distance_au;
        Ok(normalize_degrees(sun.longitude_deg + (dpsi + aberration) / 3600.0))
    }
}

impl Default for SunEphemeris {
    fn default() -> Self {
        Self::vsop87_truncated()
    }
}
