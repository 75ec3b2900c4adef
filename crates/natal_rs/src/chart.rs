//! Chart request and result types.

use chrono::{Datelike, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Timelike};
use natal_frames::EquatorialCoords;
use natal_houses::{HouseMode, ZodiacPosition};
use natal_time::UtcTime;
use natal_vsop::SunPosition;

use crate::error::ChartError;

/// Largest accepted UTC offset, ±18 h in minutes.
pub const MAX_UTC_OFFSET_MINUTES: i32 = 18 * 60;

/// Civil birth data. Longitude is east-positive, latitude north-positive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartInput {
    pub date: NaiveDate,
    pub time: NaiveTime,
    /// Local civil time minus UTC, in minutes.
    pub utc_offset_minutes: i32,
    pub longitude_deg: f64,
    pub latitude_deg: f64,
}

impl ChartInput {
    pub fn new(
        date: NaiveDate,
        time: NaiveTime,
        utc_offset_minutes: i32,
        longitude_deg: f64,
        latitude_deg: f64,
    ) -> Self {
        Self {
            date,
            time,
            utc_offset_minutes,
            longitude_deg,
            latitude_deg,
        }
    }

    /// Check coordinate ranges and the UTC offset.
    pub fn validate(&self) -> Result<(), ChartError> {
        if !self.longitude_deg.is_finite() || !(-180.0..=180.0).contains(&self.longitude_deg) {
            return Err(ChartError::InvalidInput(format!(
                "longitude {} outside [-180, 180]",
                self.longitude_deg
            )));
        }
        if !self.latitude_deg.is_finite() || !(-90.0..=90.0).contains(&self.latitude_deg) {
            return Err(ChartError::InvalidInput(format!(
                "latitude {} outside [-90, 90]",
                self.latitude_deg
            )));
        }
        if self.utc_offset_minutes.abs() > MAX_UTC_OFFSET_MINUTES {
            return Err(ChartError::InvalidInput(format!(
                "utc offset {} min outside ±18 h",
                self.utc_offset_minutes
            )));
        }
        Ok(())
    }

    /// Civil date and time shifted to UTC.
    pub fn utc_datetime(&self) -> Result<NaiveDateTime, ChartError> {
        self.validate()?;
        let offset = FixedOffset::east_opt(self.utc_offset_minutes * 60).ok_or_else(|| {
            ChartError::InvalidInput(format!("utc offset {} min", self.utc_offset_minutes))
        })?;
        let local = self.date.and_time(self.time);
        offset
            .from_local_datetime(&local)
            .single()
            .map(|dt| dt.naive_utc())
            .ok_or_else(|| ChartError::InvalidInput(format!("unrepresentable local time {local}")))
    }

    /// The UTC instant as a [`UtcTime`].
    pub fn utc_time(&self) -> Result<UtcTime, ChartError> {
        let utc = self.utc_datetime()?;
        // Leap-second nanoseconds (≥ 1e9) are clamped into the same second.
        let nanos = utc.nanosecond().min(999_999_999);
        Ok(UtcTime::new(
            utc.year(),
            utc.month(),
            utc.day(),
            utc.hour(),
            utc.minute(),
            utc.second() as f64 + nanos as f64 * 1e-9,
        ))
    }
}

/// Sun block of a chart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartSun {
    /// Geometric position from the VSOP87 series.
    pub position: SunPosition,
    pub zodiac: ZodiacPosition,
    /// Geometric longitude corrected for nutation and aberration.
    pub apparent_longitude_deg: f64,
    /// Right ascension and declination with the chart's obliquity.
    pub equatorial: EquatorialCoords,
}

/// Computed chart. Every longitude is in [0, 360).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartResult {
    pub julian_day: f64,
    /// Local sidereal time in seconds, [0, 86400).
    pub lst_seconds: f64,
    /// Local sidereal time in degrees, [0, 360).
    pub lst_deg: f64,
    /// Obliquity fed to the Ascendant and cusp formulas.
    pub obliquity_deg: f64,
    pub house_mode: HouseMode,
    pub ascendant: ZodiacPosition,
    pub mc: ZodiacPosition,
    /// `cusps[0]` = house 1.
    pub cusps: [ZodiacPosition; 12],
    pub sun: Option<ChartSun>,
}

impl ChartResult {
    /// Cusp of house `n` (1-based). `None` outside 1..=12.
    pub fn cusp(&self, n: usize) -> Option<&ZodiacPosition> {
        n.checked_sub(1).and_then(|i| self.cusps.get(i))
    }
}
