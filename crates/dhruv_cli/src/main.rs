use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use dhruv_config::ChartConfig;
use dhruv_core::{Engine, EngineConfig, GeoLocation};
use dhruv_kundali::{compute_chart, engine_config};
use dhruv_time::Moment;
use dhruv_vedic_base::{
    ALL_VARGAS, Dms, LinearAyanamsha, Nakshatra, Nari, Rashi, Varga, deg_to_dms,
    nakshatra_from_longitude, rashi_from_longitude, varga_degree, varga_sign,
};
use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod render;

#[derive(Parser)]
#[command(name = "dhruv", about = "Sidereal (Vedic) chart calculator", version)]
struct Cli {
    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,
    /// TOML file with model constants (ayanamsha, nodes, orbs, divisions)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Full chart: D1, divisional charts, Chandra lagna and doshas
    Chart {
        /// Civil date-time, RFC 3339 (2026-02-05T10:00:00+05:30) or naive
        date: String,
        /// Latitude in degrees, north positive
        #[arg(long, allow_negative_numbers = true)]
        lat: f64,
        /// Longitude in degrees, east positive
        #[arg(long, allow_negative_numbers = true)]
        lon: f64,
        /// Altitude above sea level in metres
        #[arg(long, default_value = "0", allow_negative_numbers = true)]
        alt: f64,
        /// UTC offset for a naive date (±HH:MM or decimal hours)
        #[arg(long, default_value = "+00:00", allow_hyphen_values = true)]
        utc_offset: String,
        /// Skip diurnal parallax (geocentric positions)
        #[arg(long)]
        geocentric: bool,
    },
    /// Rashi from sidereal longitude
    Rashi {
        /// Sidereal ecliptic longitude in degrees
        #[arg(allow_negative_numbers = true)]
        lon: f64,
    },
    /// Nakshatra, pada and nari from sidereal longitude
    Nakshatra {
        /// Sidereal ecliptic longitude in degrees
        #[arg(allow_negative_numbers = true)]
        lon: f64,
    },
    /// Divisional signs of a sidereal longitude
    Varga {
        /// Sidereal ecliptic longitude in degrees
        #[arg(allow_negative_numbers = true)]
        lon: f64,
        /// Single division (1, 4, 6, 7, 9, 10, 60); all when omitted
        #[arg(long)]
        division: Option<u32>,
    },
    /// Ayanamsha at a civil date-time
    Ayanamsha {
        date: String,
        /// UTC offset for a naive date (±HH:MM or decimal hours)
        #[arg(long, default_value = "+00:00", allow_hyphen_values = true)]
        utc_offset: String,
    },
    /// Convert degrees to DMS
    Dms {
        #[arg(allow_negative_numbers = true)]
        deg: f64,
    },
}

#[derive(Serialize)]
struct RashiOutput {
    longitude: f64,
    sign: u8,
    rashi: Rashi,
    western_name: &'static str,
    degree: f64,
    dms: Dms,
}

#[derive(Serialize)]
struct NakshatraOutput {
    longitude: f64,
    nakshatra: Nakshatra,
    index: u8,
    pada: u8,
    degrees_in_nakshatra: f64,
    nari: Nari,
}

#[derive(Serialize)]
struct VargaOutput {
    varga: Varga,
    name: &'static str,
    sign: u8,
    rashi: Rashi,
    degree: f64,
}

#[derive(Serialize)]
struct AyanamshaOutput {
    moment: String,
    jd_ut: f64,
    ayanamsa: f64,
    dms: Dms,
}

/// Seconds east of UTC from `+05:30`, `-0400`, `Z` or decimal hours (`5.5`).
fn parse_utc_offset(s: &str) -> Result<i32> {
    let s = s.trim();
    if s.eq_ignore_ascii_case("z") || s.is_empty() {
        return Ok(0);
    }
    let (sign, rest) = match s.as_bytes()[0] {
        b'+' => (1, &s[1..]),
        b'-' => (-1, &s[1..]),
        _ => (1, s),
    };
    if rest.starts_with(['+', '-']) {
        bail!("UTC offset '{s}' has more than one sign");
    }
    let (h, m) = match rest.split_once(':') {
        Some(hm) => hm,
        None if rest.len() == 4 && rest.bytes().all(|b| b.is_ascii_digit()) => rest.split_at(2),
        None => {
            let hours: f64 = rest
                .parse()
                .with_context(|| format!("unrecognised UTC offset '{s}'"))?;
            if !hours.is_finite() || !(0.0..=14.0).contains(&hours) {
                bail!("UTC offset {s} is outside ±14 h");
            }
            return Ok(sign * (hours * 3600.0).round() as i32);
        }
    };
    if ![h, m].iter().all(|p| !p.is_empty() && p.bytes().all(|b| b.is_ascii_digit())) {
        bail!("unrecognised UTC offset '{s}'");
    }
    let h: i32 = h.parse().with_context(|| format!("bad hours in UTC offset '{s}'"))?;
    let m: i32 = m.parse().with_context(|| format!("bad minutes in UTC offset '{s}'"))?;
    if !(0..60).contains(&m) || !(0..=14).contains(&h) {
        bail!("UTC offset '{s}' is out of range");
    }
    Ok(sign * (h * 3600 + m * 60))
}

fn load_config(path: Option<&Path>) -> Result<ChartConfig> {
    match path {
        Some(p) => ChartConfig::load(p).with_context(|| format!("loading config {}", p.display())),
        None => Ok(ChartConfig::default()),
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn run(cli: Cli) -> Result<()> {
    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Chart {
            date,
            lat,
            lon,
            alt,
            utc_offset,
            geocentric,
        } => {
            let offset = parse_utc_offset(&utc_offset)?;
            let moment =
                Moment::parse(&date, offset).with_context(|| format!("parsing date '{date}'"))?;
            let engine_config = engine_config(&config);
            let engine = Engine::new(EngineConfig {
                topocentric: engine_config.topocentric && !geocentric,
                ..engine_config
            })
            .context("building ephemeris")?;
            let location = GeoLocation::new(lat, lon, alt);
            tracing::info!(%moment, lat, lon, "computing chart");
            let chart = compute_chart(&engine, &moment, &location, &config)
                .with_context(|| format!("computing chart for {moment}"))?;
            if cli.json {
                print_json(&chart)?;
            } else {
                print!("{}", render::chart_text(&chart)?);
            }
        }

        Commands::Rashi { lon } => {
            let info = rashi_from_longitude(lon);
            let out = RashiOutput {
                longitude: lon,
                sign: info.rashi.number(),
                rashi: info.rashi,
                western_name: info.rashi.western_name(),
                degree: info.degrees_in_rashi,
                dms: info.dms,
            };
            if cli.json {
                print_json(&out)?;
            } else {
                println!(
                    "{} - sign {} - {} {:.1}\" ({:.4} deg in rashi)",
                    out.rashi, out.sign, out.dms, out.dms.seconds, out.degree
                );
            }
        }

        Commands::Nakshatra { lon } => {
            let info = nakshatra_from_longitude(lon);
            let out = NakshatraOutput {
                longitude: lon,
                nakshatra: info.nakshatra,
                index: info.nakshatra_index,
                pada: info.pada,
                degrees_in_nakshatra: info.degrees_in_nakshatra,
                nari: info.nakshatra.nari(),
            };
            if cli.json {
                print_json(&out)?;
            } else {
                println!(
                    "{} (index {}) - Pada {} ({:.4} deg in nakshatra) - Nari {}",
                    out.nakshatra, out.index, out.pada, out.degrees_in_nakshatra, out.nari
                );
            }
        }

        Commands::Varga { lon, division } => {
            let vargas = match division {
                Some(d) => vec![Varga::from_divisions(d)?],
                None => ALL_VARGAS.to_vec(),
            };
            let out: Vec<VargaOutput> = vargas
                .into_iter()
                .map(|v| {
                    let sign = varga_sign(lon, v);
                    VargaOutput {
                        varga: v,
                        name: v.sanskrit_name(),
                        sign,
                        rashi: Rashi::from_index(sign - 1),
                        degree: varga_degree(lon, v),
                    }
                })
                .collect();
            if cli.json {
                print_json(&out)?;
            } else {
                for o in &out {
                    println!(
                        "{:<4} {:<14} {:<22} {}",
                        o.varga.to_string(),
                        o.name,
                        o.rashi.to_string(),
                        deg_to_dms(o.degree)
                    );
                }
            }
        }

        Commands::Ayanamsha { date, utc_offset } => {
            let offset = parse_utc_offset(&utc_offset)?;
            let moment =
                Moment::parse(&date, offset).with_context(|| format!("parsing date '{date}'"))?;
            let aya = &config.ayanamsa;
            let value = LinearAyanamsha::new(aya.base_deg, aya.rate_arcsec_per_year, aya.epoch_jd)
                .at(&moment);
            let out = AyanamshaOutput {
                moment: moment.to_string(),
                jd_ut: moment.jd_ut(),
                ayanamsa: value,
                dms: deg_to_dms(value),
            };
            if cli.json {
                print_json(&out)?;
            } else {
                println!("Ayanamsha at {}: {:.6} deg ({})", out.moment, out.ayanamsa, out.dms);
            }
        }

        Commands::Dms { deg } => {
            let d = deg_to_dms(deg);
            if cli.json {
                print_json(&d)?;
            } else {
                println!("{} deg {} min {:.2} sec", d.degrees, d.minutes, d.seconds);
            }
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    run(Cli::parse())
}
