use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{NaiveDate, NaiveTime};
use clap::{Parser, Subcommand, ValueEnum};
use natal_frames::degrees_to_deg_min;
use natal_houses::{HouseMode, ZodiacPosition};
use natal_rs::{ChartConfig, ChartEngine, ChartInput, ObliquityMode};
use natal_time::{
    julian_day, jd_to_calendar, local_sidereal_time_seconds, sidereal_seconds_to_degrees,
};
use natal_vsop::SunEphemeris;
use tracing::debug;

#[derive(Parser)]
#[command(name = "natal", about = "Tropical Ascendant, MC, house cusps and Sun")]
struct Cli {
    /// TOML configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Log at debug level (overridden by NATAL_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum ModeArg {
    EqualOffset,
    ExactPlacidus,
}

impl From<ModeArg> for HouseMode {
    fn from(m: ModeArg) -> Self {
        match m {
            ModeArg::EqualOffset => HouseMode::EqualOffset,
            ModeArg::ExactPlacidus => HouseMode::ExactPlacidus,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Ascendant, MC, twelve cusps and Sun for a birth time and place
    Chart {
        /// Civil date (YYYY-MM-DD)
        #[arg(long)]
        date: NaiveDate,
        /// Civil time (HH:MM or HH:MM:SS)
        #[arg(long, value_parser = parse_time)]
        time: NaiveTime,
        /// Local time minus UTC, in minutes
        #[arg(long, default_value = "0", allow_hyphen_values = true)]
        offset: i32,
        /// Longitude in degrees, east positive
        #[arg(long, allow_hyphen_values = true)]
        lon: f64,
        /// Latitude in degrees, north positive
        #[arg(long, allow_hyphen_values = true)]
        lat: f64,
        /// House mode (overrides the config file)
        #[arg(long, value_enum)]
        mode: Option<ModeArg>,
        /// Use true obliquity of date instead of the fixed value
        #[arg(long)]
        true_obliquity: bool,
        /// Skip the Sun
        #[arg(long)]
        no_sun: bool,
    },
    /// Geometric and apparent Sun from the truncated VSOP87 series
    Sun {
        /// Julian Date
        #[arg(long)]
        jd: f64,
    },
    /// Julian Day of a civil date and time
    Jd {
        /// Civil date (YYYY-MM-DD)
        #[arg(long)]
        date: NaiveDate,
        /// Civil time (HH:MM or HH:MM:SS)
        #[arg(long, value_parser = parse_time, default_value = "00:00")]
        time: NaiveTime,
        /// Local time minus UTC, in minutes
        #[arg(long, default_value = "0", allow_hyphen_values = true)]
        offset: i32,
    },
    /// Local mean sidereal time
    Lst {
        /// Julian Date (UT)
        #[arg(long)]
        jd: f64,
        /// Longitude in degrees, east positive
        #[arg(long, default_value = "0", allow_hyphen_values = true)]
        lon: f64,
    },
    /// Split decimal degrees into sign, degrees and minutes
    Dms {
        /// Angle in decimal degrees
        #[arg(allow_hyphen_values = true)]
        deg: f64,
    },
}

fn parse_time(s: &str) -> Result<NaiveTime, String> {
    NaiveTime::parse_from_str(s, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(s, "%H:%M"))
        .map_err(|e| format!("invalid time '{s}': {e}"))
}

fn init_tracing(verbose: bool) -> Result<()> {
    let level = if verbose { "debug" } else { "warn" };
    let filter = tracing_subscriber::EnvFilter::try_from_env("NATAL_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to initialize tracing subscriber: {e}"))
}

fn load_config(path: Option<&PathBuf>) -> Result<ChartConfig> {
    match path {
        Some(p) => {
            debug!(path = %p.display(), "loading config");
            ChartConfig::load(p).with_context(|| format!("failed to load {}", p.display()))
        }
        None => Ok(ChartConfig::default()),
    }
}

fn print_position(label: &str, pos: &ZodiacPosition) {
    println!("{label:<10} {:>10.4}°  {pos}", pos.longitude_deg);
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose)?;

    match cli.command {
        Commands::Chart {
            date,
            time,
            offset,
            lon,
            lat,
            mode,
            true_obliquity,
            no_sun,
        } => {
            let mut config = load_config(cli.config.as_ref())?;
            if let Some(m) = mode {
                config.house_mode = m.into();
            }
            if true_obliquity {
                config.obliquity = ObliquityMode::True;
            }
            if no_sun {
                config.include_sun = false;
            }
            let engine = ChartEngine::new(config)?;
            let chart = engine.compute(&ChartInput::new(date, time, offset, lon, lat))?;

            println!("JD         {:.6}", chart.julian_day);
            println!(
                "LST        {:.3} s ({:.4}°)",
                chart.lst_seconds, chart.lst_deg
            );
            println!("Obliquity  {:.6}°", chart.obliquity_deg);
            println!("Houses     {}", chart.house_mode);
            print_position("Ascendant", &chart.ascendant);
            print_position("MC", &chart.mc);
            for (i, cusp) in chart.cusps.iter().enumerate() {
                print_position(&format!("House {}", i + 1), cusp);
            }
            if let Some(sun) = chart.sun {
                print_position("Sun", &sun.zodiac);
                println!(
                    "Sun RA/Dec {:.4}° / {:+.4}°  R = {:.8} AU",
                    sun.equatorial.ra_deg, sun.equatorial.dec_deg, sun.position.distance_au
                );
            }
        }

        Commands::Sun { jd } => {
            let eph = SunEphemeris::vsop87_truncated();
            let sun = eph.compute_sun(jd)?;
            let apparent = eph.apparent_longitude_deg(jd)?;
            println!("Longitude  {:.6}°", sun.longitude_deg);
            println!("Latitude   {:+.6}°", sun.latitude_deg);
            println!("Distance   {:.8} AU", sun.distance_au);
            println!("Apparent   {:.6}°", apparent);
            println!("Zodiac     {}", ZodiacPosition::from_longitude(sun.longitude_deg)?);
        }

        Commands::Jd { date, time, offset } => {
            let utc = ChartInput::new(date, time, offset, 0.0, 0.0).utc_time()?;
            let jd = julian_day(&utc)?;
            let (y, m, d) = jd_to_calendar(jd);
            println!("UTC        {utc}");
            println!("JD         {jd:.6}");
            println!("Calendar   {y:04}-{m:02}-{d:.6}");
        }

        Commands::Lst { jd, lon } => {
            let s = local_sidereal_time_seconds(jd, lon)?;
            let h = (s / 3600.0).floor();
            let m = ((s - h * 3600.0) / 60.0).floor();
            let sec = s - h * 3600.0 - m * 60.0;
            println!(
                "LST        {:02}h{:02}m{:06.3}s  ({:.6}°)",
                h as u32,
                m as u32,
                sec,
                sidereal_seconds_to_degrees(s)
            );
        }

        Commands::Dms { deg } => {
            let pos = ZodiacPosition::from_longitude(deg)?;
            let dm = degrees_to_deg_min(deg);
            println!("{}°{:02}'", dm.deg, dm.min);
            println!("{pos}");
        }
    }

    Ok(())
}
