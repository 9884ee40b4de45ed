//! Chart orchestration: queries the ephemeris and assembles the chart.
//!
//! The bridge between an [`Ephemeris`] and the pure Vedic primitives.
//! One pass over [`ALL_GRAHAS`] produces the D1 positions; every other
//! chart is a read-only view derived from D1.

use dhruv_config::{ChartConfig, CombustionOrbs};
use dhruv_core::{Engine, EngineConfig, EngineError, Ephemeris, GeoLocation};
use dhruv_time::Moment;
use dhruv_vedic_base::{
    ALL_GRAHAS, Graha, LinearAyanamsha, MeanNodeModel, Rashi, Varga, VedicError,
    deg_to_dms, hourly_motion_deg, is_combust_with, is_debilitated, is_exalted, ketu_from_rahu,
    manglik, nakshatra_from_longitude, rashi_from_longitude, sade_sati, sign_number,
    to_sidereal, tropical_lagna, tropical_longitude, varga_degree, varga_sign,
};
use tracing::{debug, instrument};

use crate::chart_types::{
    Chart, ChartInput, ChartResult, DivisionalChart, DoshaAnalysis, LagnaEntry,
    NakshatraClassification, PlanetPosition,
};
use crate::error::{ChartError, ErrorContext};

/// Per-call inputs shared by every step.
struct Ctx<'a, E: ?Sized> {
    ephemeris: &'a E,
    moment: &'a Moment,
    location: &'a GeoLocation,
    config: &'a ChartConfig,
}

impl<E: Ephemeris + ?Sized> Ctx<'_, E> {
    fn at(&self, graha: Option<Graha>) -> ErrorContext {
        ErrorContext {
            graha,
            jd_ut: self.moment.jd_ut(),
            location: *self.location,
        }
    }

    fn compute_err(&self, graha: Option<Graha>) -> impl FnOnce(VedicError) -> ChartError + '_ {
        move |source| ChartError::Compute {
            source,
            context: self.at(graha),
        }
    }

    fn consistency(&self, check: &'static str, graha: Option<Graha>) -> ChartError {
        ChartError::Consistency {
            check,
            context: self.at(graha),
        }
    }
}

/// Raw D1 sample before annotation.
#[derive(Debug, Clone, Copy, Default)]
struct Sample {
    sidereal: f64,
    motion: Option<f64>,
}

/// Configured orb overriding the trait-table default. Whether combustion
/// applies at all is decided by `GrahaTraits::combustion_orb`.
fn configured_orb(graha: Graha, orbs: &CombustionOrbs) -> Option<f64> {
    match graha {
        Graha::Chandra => Some(orbs.moon),
        Graha::Buddh => Some(orbs.mercury),
        Graha::Shukra => Some(orbs.venus),
        Graha::Mangal => Some(orbs.mars),
        Graha::Guru => Some(orbs.jupiter),
        Graha::Shani => Some(orbs.saturn),
        _ => None,
    }
}

/// Sidereal longitudes (and motion) of all nine grahas, in chart order.
fn sample_grahas<E: Ephemeris + ?Sized>(
    ctx: &Ctx<'_, E>,
    ayanamsa: f64,
) -> Result<[Sample; 9], ChartError> {
    let node_model = MeanNodeModel {
        base_deg: ctx.config.lunar_node.base_deg,
        daily_motion_deg: ctx.config.lunar_node.daily_motion_deg,
    };
    let rahu_sidereal = to_sidereal(node_model.rahu_tropical(ctx.moment), ayanamsa);
    let motion_cfg = &ctx.config.motion;

    let mut samples = [Sample::default(); 9];
    for graha in ALL_GRAHAS {
        let sample = match graha {
            Graha::Rahu => Sample {
                sidereal: rahu_sidereal,
                motion: None,
            },
            Graha::Ketu => Sample {
                sidereal: ketu_from_rahu(rahu_sidereal),
                motion: None,
            },
            _ => {
                let Some(body) = graha.body() else {
                    return Err(ctx.consistency("graha has no ephemeris body", Some(graha)));
                };
                let tropical =
                    tropical_longitude(ctx.ephemeris, body, ctx.moment, ctx.location)
                        .map_err(ctx.compute_err(Some(graha)))?;
                let motion = if graha.traits().has_retrograde {
                    Some(
                        hourly_motion_deg(
                            ctx.ephemeris,
                            body,
                            ctx.moment,
                            ctx.location,
                            tropical,
                            motion_cfg.probe_hours,
                            motion_cfg.wrap_threshold_deg,
                        )
                        .map_err(ctx.compute_err(Some(graha)))?,
                    )
                } else {
                    None
                };
                Sample {
                    sidereal: to_sidereal(tropical, ayanamsa),
                    motion,
                }
            }
        };
        debug!(
            graha = %graha,
            sidereal = sample.sidereal,
            motion = ?sample.motion,
            "graha position"
        );
        samples[graha.index() as usize] = sample;
    }
    Ok(samples)
}

fn planet_position(
    graha: Graha,
    sample: Sample,
    sun_sidereal: f64,
    orbs: &CombustionOrbs,
) -> PlanetPosition {
    let lon = sample.sidereal;
    let r = rashi_from_longitude(lon);
    let n = nakshatra_from_longitude(lon);
    PlanetPosition {
        graha,
        name: graha.english_name(),
        sidereal_longitude: lon,
        sign: r.rashi.number(),
        rashi: r.rashi,
        degree: r.degrees_in_rashi,
        dms: r.dms,
        nakshatra: n.nakshatra,
        pada: n.pada,
        retrograde: sample.motion.is_some_and(|m| m < 0.0),
        combust: is_combust_with(graha, lon, sun_sidereal, configured_orb(graha, orbs)),
        exalted: is_exalted(graha, lon),
        debilitated: is_debilitated(graha, lon),
        motion_deg_per_hour: sample.motion,
    }
}

/// Remap a D1 position into a divisional sign. Flags are cleared.
fn divisional_position(p: &PlanetPosition, varga: Varga) -> PlanetPosition {
    let sign = varga_sign(p.sidereal_longitude, varga);
    let degree = varga_degree(p.sidereal_longitude, varga);
    PlanetPosition {
        sign,
        rashi: Rashi::from_index(sign - 1),
        degree,
        dms: deg_to_dms(degree),
        retrograde: false,
        combust: false,
        exalted: false,
        debilitated: false,
        motion_deg_per_hour: None,
        ..*p
    }
}

/// Divisional view of a D1 chart: every planet and the Lagna remapped
/// through `varga`.
pub fn divisional_chart(d1: &Chart, varga: Varga) -> DivisionalChart {
    let lagna_lon = d1.lagna.sidereal_longitude;
    let lagna_sign = varga_sign(lagna_lon, varga);
    DivisionalChart {
        varga,
        division: varga.divisions(),
        chart: Chart {
            planets: d1.planets.map(|p| divisional_position(&p, varga)),
            lagna: LagnaEntry::with_sign_and_degree(
                lagna_lon,
                Rashi::from_index(lagna_sign - 1),
                varga_degree(lagna_lon, varga),
            ),
        },
    }
}

/// D1 planets with the Moon standing in for the Lagna.
pub fn chandra_chart(d1: &Chart) -> Chart {
    Chart {
        planets: d1.planets,
        lagna: LagnaEntry::from_longitude(d1.planet(Graha::Chandra).sidereal_longitude),
    }
}

/// Manglik, Sade Sati and the nakshatra classification of a D1 chart.
pub fn analyze_doshas(d1: &Chart) -> DoshaAnalysis {
    let moon = d1.planet(Graha::Chandra);
    let mars = d1.planet(Graha::Mangal);
    let saturn = d1.planet(Graha::Shani);
    DoshaAnalysis {
        manglik: manglik(d1.lagna.sign, moon.sign, mars.sign),
        sade_sati: sade_sati(moon.sign, saturn.sign),
        nakshatra: NakshatraClassification {
            lagna: d1.lagna.nakshatra,
            lagna_nari: d1.lagna.nari,
            moon: moon.nakshatra,
            nari: moon.nakshatra.nari(),
        },
    }
}

/// Engine settings carried by a chart configuration (`[ephemeris]`).
pub fn engine_config(config: &ChartConfig) -> EngineConfig {
    EngineConfig {
        topocentric: config.ephemeris.topocentric,
        ..EngineConfig::default()
    }
}

/// Analytic engine built from [`engine_config`].
pub fn engine_for(config: &ChartConfig) -> Result<Engine, EngineError> {
    Engine::new(engine_config(config))
}

/// Compute a full sidereal chart for `moment` and `location`.
///
/// Positions are whatever `ephemeris` reports; `[ephemeris]` settings in
/// `config` only take effect through [`engine_for`].
///
/// Fails without partial results: configuration and location are
/// validated first, then every ephemeris query error is returned with
/// the graha, moment and location it belongs to.
#[instrument(
    level = "debug",
    skip_all,
    fields(moment = %moment, lat = location.latitude_deg, lon = location.longitude_deg)
)]
pub fn compute_chart<E: Ephemeris + ?Sized>(
    ephemeris: &E,
    moment: &Moment,
    location: &GeoLocation,
    config: &ChartConfig,
) -> Result<ChartResult, ChartError> {
    config.validate()?;
    location.validate().map_err(|e| match e {
        EngineError::InvalidLocation(reason) => ChartError::InvalidLocation {
            reason,
            location: *location,
        },
        other => ChartError::Compute {
            source: VedicError::Engine(other),
            context: ErrorContext {
                graha: None,
                jd_ut: moment.jd_ut(),
                location: *location,
            },
        },
    })?;

    let ctx = Ctx {
        ephemeris,
        moment,
        location,
        config,
    };

    let aya_cfg = &config.ayanamsa;
    let ayanamsa = LinearAyanamsha::new(aya_cfg.base_deg, aya_cfg.rate_arcsec_per_year, aya_cfg.epoch_jd)
        .at(moment);
    if !ayanamsa.is_finite() {
        return Err(ctx.consistency("ayanamsha is not finite", None));
    }
    debug!(ayanamsa, "ayanamsha");

    let lagna_tropical =
        tropical_lagna(ephemeris, moment, location).map_err(ctx.compute_err(None))?;
    let lagna = LagnaEntry::from_longitude(to_sidereal(lagna_tropical, ayanamsa));
    debug!(lagna = lagna.sidereal_longitude, sign = lagna.sign, "lagna");

    let samples = sample_grahas(&ctx, ayanamsa)?;
    let sun = samples[Graha::Surya.index() as usize].sidereal;
    let planets = std::array::from_fn(|i| {
        planet_position(ALL_GRAHAS[i], samples[i], sun, &config.combustion)
    });
    let d1 = Chart { planets, lagna };

    let mut vargas = Vec::with_capacity(config.divisions.len());
    for &d in &config.divisions {
        let varga = Varga::from_divisions(d).map_err(ctx.compute_err(None))?;
        vargas.push(divisional_chart(&d1, varga));
    }

    let chandra = chandra_chart(&d1);
    let dosha = analyze_doshas(&d1);

    let result = ChartResult {
        input: ChartInput {
            moment: moment.to_string(),
            jd_ut: moment.jd_ut(),
            jd_tt: moment.jd_tt(),
            latitude_deg: location.latitude_deg,
            longitude_deg: location.longitude_deg,
            altitude_m: location.altitude_m,
        },
        ayanamsa,
        d1,
        vargas,
        chandra,
        dosha,
    };
    check_consistency(&ctx, &result)?;
    Ok(result)
}

/// Cross-checks between the independently assembled parts of a chart.
fn check_consistency<E: Ephemeris + ?Sized>(
    ctx: &Ctx<'_, E>,
    chart: &ChartResult,
) -> Result<(), ChartError> {
    let d1 = &chart.d1;
    for p in &d1.planets {
        let lon = p.sidereal_longitude;
        if !(lon.is_finite() && (0.0..360.0).contains(&lon)) {
            return Err(ctx.consistency("longitude outside [0, 360)", Some(p.graha)));
        }
        if p.sign != sign_number(lon) {
            return Err(ctx.consistency("sign disagrees with longitude", Some(p.graha)));
        }
    }
    if d1.lagna.sign != sign_number(d1.lagna.sidereal_longitude) {
        return Err(ctx.consistency("lagna sign disagrees with longitude", None));
    }

    let rahu = d1.planet(Graha::Rahu).sidereal_longitude;
    let ketu = d1.planet(Graha::Ketu).sidereal_longitude;
    if ketu != ketu_from_rahu(rahu) {
        return Err(ctx.consistency("ketu is not opposite rahu", Some(Graha::Ketu)));
    }

    for v in &chart.vargas {
        let chart = &v.chart;
        let signs = chart.planets.iter().map(|p| p.sign).chain([chart.lagna.sign]);
        for sign in signs {
            if !(1..=12).contains(&sign) {
                return Err(ctx.consistency("divisional sign outside 1..=12", None));
            }
        }
    }

    if chart.chandra.lagna.sign != d1.planet(Graha::Chandra).sign {
        return Err(ctx.consistency("chandra lagna differs from moon sign", Some(Graha::Chandra)));
    }
    Ok(())
}
