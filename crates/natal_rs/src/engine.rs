//! The chart engine: civil input → time chain → houses and Sun.

use natal_frames::normalize_degrees;
use natal_houses::{HouseConfig, HouseMode, ZodiacPosition, compute_houses};
use natal_time::{
    FIXED_OBLIQUITY_DEG, julian_day, local_sidereal_time_seconds, sidereal_seconds_to_degrees,
    true_obliquity_deg,
};
use natal_vsop::SunEphemeris;
use tracing::{debug, warn};

use crate::chart::{ChartInput, ChartResult, ChartSun};
use crate::config::{ChartConfig, ObliquityMode};
use crate::error::ChartError;

/// Latitude above which some Placidus cusp points are circumpolar.
const POLAR_CIRCLE_DEG: f64 = 90.0 - FIXED_OBLIQUITY_DEG;

/// Chart service. Construct once, then call [`ChartEngine::compute`] from any
/// thread; it holds only configuration and references to static tables.
#[derive(Debug, Clone)]
pub struct ChartEngine {
    config: ChartConfig,
    house_config: HouseConfig,
    sun: SunEphemeris,
}

impl ChartEngine {
    /// Validate `config` and build the engine.
    pub fn new(config: ChartConfig) -> Result<Self, ChartError> {
        config.validate()?;
        Ok(Self {
            house_config: config.house_config(),
            config,
            sun: SunEphemeris::vsop87_truncated(),
        })
    }

    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    /// Obliquity used for a chart at `jd`, per the configured mode.
    pub fn obliquity_deg(&self, jd: f64) -> Result<f64, ChartError> {
        match self.config.obliquity {
            ObliquityMode::Fixed => Ok(FIXED_OBLIQUITY_DEG),
            ObliquityMode::True => Ok(true_obliquity_deg(jd)?),
        }
    }

    /// Compute the chart for `input`.
    pub fn compute(&self, input: &ChartInput) -> Result<ChartResult, ChartError> {
        let utc = input.utc_time()?;
        let jd = julian_day(&utc)?;
        let lst_seconds = local_sidereal_time_seconds(jd, input.longitude_deg)?;
        let lst_deg = normalize_degrees(sidereal_seconds_to_degrees(lst_seconds));
        let obliquity_deg = self.obliquity_deg(jd)?;

        if self.config.house_mode == HouseMode::ExactPlacidus
            && input.latitude_deg.abs() > POLAR_CIRCLE_DEG
        {
            warn!(
                latitude_deg = input.latitude_deg,
                "exact Placidus requested inside the polar circle"
            );
        }

        let houses =
            compute_houses(lst_deg, input.latitude_deg, obliquity_deg, &self.house_config)?;

        let sun = if self.config.include_sun {
            let position = self.sun.compute_sun(jd)?;
            Some(ChartSun {
                position,
                zodiac: ZodiacPosition::from_longitude(position.longitude_deg)?,
                apparent_longitude_deg: self.sun.apparent_longitude_deg(jd)?,
                equatorial: position.to_equatorial(obliquity_deg),
            })
        } else {
            None
        };

        let ascendant = ZodiacPosition::from_longitude(houses.ascendant_deg)?;
        let mut cusps = [ascendant; 12];
        for (slot, lon) in cusps.iter_mut().zip(houses.cusps) {
            *slot = ZodiacPosition::from_longitude(lon)?;
        }

        debug!(
            %utc,
            jd,
            lst_deg,
            obliquity_deg,
            asc = houses.ascendant_deg,
            mc = houses.mc_deg,
            "chart computed"
        );

        Ok(ChartResult {
            julian_day: jd,
            lst_seconds,
            lst_deg,
            obliquity_deg,
            house_mode: houses.mode,
            ascendant,
            mc: ZodiacPosition::from_longitude(houses.mc_deg)?,
            cusps,
            sun,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};

    fn paris() -> ChartInput {
        ChartInput::new(
            NaiveDate::from_ymd_opt(1990, 6, 15).unwrap(),
            NaiveTime::from_hms_opt(14, 30, 0).unwrap(),
            0,
            2.35,
            48.85,
        )
    }

    #[test]
    fn engine_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ChartEngine>();
    }

    #[test]
    fn new_rejects_invalid_config() {
        let config = ChartConfig {
            max_iterations: 0,
            ..ChartConfig::default()
        };
        assert!(matches!(ChartEngine::new(config), Err(ChartError::Config(_))));
    }

    #[test]
    fn obliquity_modes() {
        let fixed = ChartEngine::new(ChartConfig::default()).unwrap();
        assert_eq!(fixed.obliquity_deg(2_448_058.1).unwrap(), FIXED_OBLIQUITY_DEG);
        let true_eps = ChartEngine::new(ChartConfig {
            obliquity: ObliquityMode::True,
            ..ChartConfig::default()
        })
        .unwrap();
        let eps = true_eps.obliquity_deg(2_448_058.1).unwrap();
        assert!((eps - FIXED_OBLIQUITY_DEG).abs() < 0.01, "eps = {eps}");
        assert_ne!(eps, FIXED_OBLIQUITY_DEG);
    }

    #[test]
    fn sun_optional() {
        let engine = ChartEngine::new(ChartConfig {
            include_sun: false,
            ..ChartConfig::default()
        })
        .unwrap();
        assert!(engine.compute(&paris()).unwrap().sun.is_none());
    }

    #[test]
    fn mc_is_tenth_cusp() {
        let r = ChartEngine::new(ChartConfig::default())
            .unwrap()
            .compute(&paris())
            .unwrap();
        assert_eq!(r.cusp(10), Some(&r.mc));
        assert_eq!(r.cusp(1), Some(&r.ascendant));
        assert_eq!(r.cusp(0), None);
        assert_eq!(r.cusp(13), None);
    }
}
