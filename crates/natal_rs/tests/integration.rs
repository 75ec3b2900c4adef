//! End-to-end chart computation.

use std::sync::Arc;
use std::thread;

use chrono::{NaiveDate, NaiveTime};
use natal_rs::{
    ChartConfig, ChartEngine, ChartError, ChartErrorKind, ChartInput, HouseMode, ObliquityMode,
};

fn paris_1990() -> ChartInput {
    ChartInput::new(
        NaiveDate::from_ymd_opt(1990, 6, 15).unwrap(),
        NaiveTime::from_hms_opt(14, 30, 0).unwrap(),
        0,
        2.35,
        48.85,
    )
}

fn engine(mode: HouseMode) -> ChartEngine {
    ChartEngine::new(ChartConfig {
        house_mode: mode,
        ..ChartConfig::default()
    })
    .unwrap()
}

#[test]
fn paris_1990_reference_chart() {
    let r = engine(HouseMode::EqualOffset).compute(&paris_1990()).unwrap();

    assert!((r.julian_day - 2_448_058.104_166_7).abs() < 1e-6, "jd = {}", r.julian_day);
    assert!((0.0..86_400.0).contains(&r.lst_seconds));
    // GMST0 = 63123.70 s, + 14.5 h sidereal + 2.35°·240
    assert!((r.lst_deg - 123.4609).abs() < 1e-3, "lst = {}", r.lst_deg);
    assert!((r.mc.longitude_deg - r.lst_deg).abs() < 1e-9, "reference MC equals LST");
    let asc = r.ascendant.longitude_deg;
    assert!((asc - 204.3096).abs() < 1e-3, "asc = {asc}");

    for p in std::iter::once(&r.ascendant).chain(std::iter::once(&r.mc)).chain(r.cusps.iter()) {
        assert!((0.0..360.0).contains(&p.longitude_deg), "{p:?}");
        assert_eq!(p.sign_index as f64, (p.longitude_deg / 30.0).floor());
    }
    assert_eq!(r.ascendant.sign.name(), "Libra");
}

#[test]
fn paris_1990_exact_placidus() {
    let r = engine(HouseMode::ExactPlacidus).compute(&paris_1990()).unwrap();
    assert_eq!(r.house_mode, HouseMode::ExactPlacidus);
    let expected = [
        204.3096, 231.2676, 264.1372, 301.2313, 335.3436, 2.8345, 24.3096, 51.2676, 84.1372,
        121.2313, 155.3436, 182.8345,
    ];
    for (n, (got, want)) in r.cusps.iter().zip(expected).enumerate() {
        assert!(
            (got.longitude_deg - want).abs() < 1e-3,
            "cusp {}: {} vs {want}",
            n + 1,
            got.longitude_deg
        );
    }
}

#[test]
fn sun_in_gemini_in_mid_june() {
    let r = engine(HouseMode::EqualOffset).compute(&paris_1990()).unwrap();
    let sun = r.sun.expect("sun enabled by default");
    assert_eq!(sun.zodiac.sign.name(), "Gemini");
    let lon = sun.position.longitude_deg;
    assert!((lon - 84.0).abs() < 1.0, "lon = {lon}");
    assert!(sun.equatorial.dec_deg > 23.0 && sun.equatorial.dec_deg < 23.44);
    let d = sun.apparent_longitude_deg - sun.position.longitude_deg;
    assert!(d.abs() < 0.02, "apparent offset {d}");
}

#[test]
fn near_pole_is_singular() {
    let mut input = paris_1990();
    input.latitude_deg = 89.9999;
    for mode in [HouseMode::EqualOffset, HouseMode::ExactPlacidus] {
        let err = engine(mode).compute(&input).unwrap_err();
        assert_eq!(err.kind(), ChartErrorKind::SingularGeometry, "{mode:?}: {err}");
    }
}

#[test]
fn circumpolar_cusp_is_singular() {
    let mut input = paris_1990();
    input.latitude_deg = 75.0;
    let engine = engine(HouseMode::ExactPlacidus);
    let singular = (0..24).any(|h| {
        input.time = NaiveTime::from_hms_opt(h, 0, 0).unwrap();
        matches!(engine.compute(&input), Err(ChartError::SingularGeometry { .. }))
    });
    assert!(singular);
}

#[test]
fn invalid_inputs() {
    let e = engine(HouseMode::EqualOffset);
    let mut input = paris_1990();
    input.longitude_deg = 200.0;
    assert_eq!(e.compute(&input).unwrap_err().kind(), ChartErrorKind::InvalidInput);

    let mut input = paris_1990();
    input.latitude_deg = f64::NAN;
    assert_eq!(e.compute(&input).unwrap_err().kind(), ChartErrorKind::InvalidInput);

    let mut input = paris_1990();
    input.utc_offset_minutes = 24 * 60;
    assert_eq!(e.compute(&input).unwrap_err().kind(), ChartErrorKind::InvalidInput);
}

#[test]
fn offset_equivalent_to_utc() {
    let e = engine(HouseMode::ExactPlacidus);
    let mut local = paris_1990();
    local.time = NaiveTime::from_hms_opt(16, 30, 0).unwrap();
    local.utc_offset_minutes = 120;
    assert_eq!(e.compute(&local).unwrap(), e.compute(&paris_1990()).unwrap());
}

#[test]
fn deterministic_across_threads() {
    let engine = Arc::new(engine(HouseMode::ExactPlacidus));
    let reference = engine.compute(&paris_1990()).unwrap();
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let engine = Arc::clone(&engine);
            thread::spawn(move || engine.compute(&paris_1990()).unwrap())
        })
        .collect();
    for h in handles {
        assert_eq!(h.join().unwrap(), reference);
    }
}

#[test]
fn true_obliquity_config_from_toml() {
    let config = ChartConfig::from_toml_str(
        r#"
        house_mode = "exact_placidus"
        obliquity = "true"
        "#,
    )
    .unwrap();
    assert_eq!(config.obliquity, ObliquityMode::True);
    let r = ChartEngine::new(config).unwrap().compute(&paris_1990()).unwrap();
    // Mean obliquity 1990 ≈ 23.4405°, nutation adds a few arcseconds
    assert!((r.obliquity_deg - 23.4405).abs() < 0.005, "eps = {}", r.obliquity_deg);
}

#[test]
fn display_of_positions() {
    let r = engine(HouseMode::EqualOffset).compute(&paris_1990()).unwrap();
    let s = r.ascendant.to_string();
    assert!(s.ends_with(" Libra"), "{s}");
    assert!(s.contains('°') && s.contains('\''), "{s}");
}
