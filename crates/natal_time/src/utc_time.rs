//! UTC calendar date/time with sub-second precision.
//!
//! `UtcTime` is the only civil-time value the engine accepts. Time-zone and
//! UTC-offset handling happen before construction.

use crate::error::TimeError;
use crate::julian::{SECONDS_PER_DAY, calendar_to_jd, jd_to_calendar};

/// UTC calendar date with sub-second precision.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UtcTime {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: f64,
}

impl UtcTime {
    pub fn new(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: f64) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    /// Check that every field is inside its calendar range.
    pub fn validate(&self) -> Result<(), TimeError> {
        if !(1..=12).contains(&self.month) {
            return Err(TimeError::InvalidDate(format!("month {} out of range", self.month)));
        }
        let max_day = days_in_month(self.year, self.month);
        if self.day == 0 || self.day > max_day {
            return Err(TimeError::InvalidDate(format!(
                "day {} out of range for {:04}-{:02}",
                self.day, self.year, self.month
            )));
        }
        if self.hour > 23 || self.minute > 59 {
            return Err(TimeError::InvalidDate(format!(
                "time {:02}:{:02} out of range",
                self.hour, self.minute
            )));
        }
        if !self.second.is_finite() {
            return Err(TimeError::NonFinite("second"));
        }
        if !(0.0..60.0).contains(&self.second) {
            return Err(TimeError::InvalidDate(format!(
                "second {} out of range",
                self.second
            )));
        }
        Ok(())
    }

    /// Fractional day-of-month (day + hours/24 + minutes/1440 + seconds/86400).
    pub fn day_fraction(&self) -> f64 {
        self.day as f64
            + self.hour as f64 / 24.0
            + self.minute as f64 / 1440.0
            + self.second / SECONDS_PER_DAY
    }

    /// Julian Date (UT) of this instant.
    pub fn to_jd(&self) -> Result<f64, TimeError> {
        self.validate()?;
        Ok(calendar_to_jd(self.year, self.month, self.day_fraction()))
    }

    /// Convert a Julian Date back to a UTC calendar value.
    pub fn from_jd(jd: f64) -> Result<Self, TimeError> {
        if !jd.is_finite() {
            return Err(TimeError::NonFinite("julian day"));
        }
        let (year, month, day_frac) = jd_to_calendar(jd);
        let day = day_frac.floor() as u32;
        let total_seconds = day_frac.fract() * SECONDS_PER_DAY;
        let hour = (total_seconds / 3600.0).floor() as u32;
        let minute = ((total_seconds % 3600.0) / 60.0).floor() as u32;
        let second = total_seconds % 60.0;
        Ok(Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        })
    }
}

/// Julian Day of a UTC instant. The input is not time-zone adjusted here.
pub fn julian_day(utc: &UtcTime) -> Result<f64, TimeError> {
    utc.to_jd()
}

fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        _ => 28,
    }
}

impl std::fmt::Display for UtcTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let whole = self.second as u32;
        let frac = self.second - whole as f64;
        if frac.abs() < 1e-9 {
            write!(
                f,
                "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}Z",
                self.year, self.month, self.day, self.hour, self.minute, whole
            )
        } else {
            write!(
                f,
                "{:04}-{:02}-{:02}T{:02}:{:02}:{:09.6}Z",
                self.year, self.month, self.day, self.hour, self.minute, self.second
            )
        }
    }
}
