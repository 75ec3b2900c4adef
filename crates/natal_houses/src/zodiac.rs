//! Tropical zodiac signs and sign-relative positions.
//!
//! The ecliptic is split into 12 signs of 30° starting at the vernal
//! equinox. `sign index = floor(longitude / 30)`.

use std::fmt;

use natal_frames::{degrees_to_deg_min, normalize_degrees};
use serde::{Deserialize, Serialize};

use crate::error::HouseError;

/// The 12 tropical signs starting from Aries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ZodiacSign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

/// All 12 signs in order (0 = Aries, 11 = Pisces).
pub const ALL_SIGNS: [ZodiacSign; 12] = [
    ZodiacSign::Aries,
    ZodiacSign::Taurus,
    ZodiacSign::Gemini,
    ZodiacSign::Cancer,
    ZodiacSign::Leo,
    ZodiacSign::Virgo,
    ZodiacSign::Libra,
    ZodiacSign::Scorpio,
    ZodiacSign::Sagittarius,
    ZodiacSign::Capricorn,
    ZodiacSign::Aquarius,
    ZodiacSign::Pisces,
];

impl ZodiacSign {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Aries => "Aries",
            Self::Taurus => "Taurus",
            Self::Gemini => "Gemini",
            Self::Cancer => "Cancer",
            Self::Leo => "Leo",
            Self::Virgo => "Virgo",
            Self::Libra => "Libra",
            Self::Scorpio => "Scorpio",
            Self::Sagittarius => "Sagittarius",
            Self::Capricorn => "Capricorn",
            Self::Aquarius => "Aquarius",
            Self::Pisces => "Pisces",
        }
    }

    /// 0-based index (Aries = 0).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Sign for a 0-based index. `None` for 12 and above.
    pub fn from_index(index: u8) -> Option<Self> {
        ALL_SIGNS.get(index as usize).copied()
    }

    /// The sign after this one, wrapping Pisces → Aries.
    pub fn next_sign(self) -> Self {
        ALL_SIGNS[(self.index() as usize + 1) % 12]
    }
}

impl fmt::Display for ZodiacSign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An ecliptic longitude expressed as sign plus degrees within the sign.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZodiacPosition {
    /// Longitude in [0, 360).
    pub longitude_deg: f64,
    pub sign: ZodiacSign,
    /// `floor(longitude / 30)`, 0..=11.
    pub sign_index: u8,
    /// Degrees within the sign, [0, 30).
    pub degree_in_sign: f64,
}

impl ZodiacPosition {
    /// Normalize `longitude_deg` and locate its sign. Non-finite input is
    /// `InvalidInput`.
    pub fn from_longitude(longitude_deg: f64) -> Result<Self, HouseError> {
        if !longitude_deg.is_finite() {
            return Err(HouseError::InvalidInput("longitude is not finite"));
        }
        let lon = normalize_degrees(longitude_deg);
        let idx = ((lon / 30.0).floor() as u8).min(11);
        Ok(Self {
            longitude_deg: lon,
            sign: ALL_SIGNS[idx as usize],
            sign_index: idx,
            degree_in_sign: lon - idx as f64 * 30.0,
        })
    }
}

impl fmt::Display for ZodiacPosition {
    /// `23°45' Leo`. A value that rounds to 30°00′ shows as 0°00′ of the next sign.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dm = degrees_to_deg_min(self.degree_in_sign);
        if dm.deg >= 30 {
            write!(f, "0°00' {}", self.sign.next_sign())
        } else {
            write!(f, "{}°{:02}' {}", dm.deg, dm.min, self.sign)
        }
    }
}
