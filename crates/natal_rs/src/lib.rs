//! Natal chart service over the time, ephemeris and house crates.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use chrono::{NaiveDate, NaiveTime};
//! use natal_rs::*;
//!
//! let engine = ChartEngine::new(ChartConfig::default()).expect("valid config");
//! let input = ChartInput::new(
//!     NaiveDate::from_ymd_opt(1990, 6, 15).unwrap(),
//!     NaiveTime::from_hms_opt(14, 30, 0).unwrap(),
//!     0,
//!     2.35,
//!     48.85,
//! );
//! let chart = engine.compute(&input).unwrap();
//! println!("Ascendant: {}", chart.ascendant);
//! ```

pub mod chart;
pub mod config;
pub mod engine;
pub mod error;

pub use chart::{ChartInput, ChartResult, ChartSun, MAX_UTC_OFFSET_MINUTES};
pub use config::{ChartConfig, ObliquityMode};
pub use engine::ChartEngine;
pub use error::{ChartError, ChartErrorKind};

// Re-export the types that appear in results so callers need only this crate.
pub use natal_frames::EquatorialCoords;
pub use natal_houses::{HouseMode, ZodiacPosition, ZodiacSign};
pub use natal_vsop::SunPosition;
