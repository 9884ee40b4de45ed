//! Result types for chart computation.
//!
//! Every record is immutable once built and derives `Serialize` so the
//! CLI can emit JSON directly.

use dhruv_vedic_base::{
    Dms, Graha, ManglikStatus, Nakshatra, Nari, Rashi, SadeSatiStatus, Varga, deg_to_dms,
    nakshatra_from_longitude, rashi_from_longitude,
};
use serde::Serialize;

/// One graha's position in a chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlanetPosition {
    pub graha: Graha,
    /// English name, e.g. `Mars`.
    pub name: &'static str,
    /// D1 sidereal longitude in degrees, [0, 360).
    pub sidereal_longitude: f64,
    /// Sign number 1..=12 (divisional sign in a varga chart).
    pub sign: u8,
    pub rashi: Rashi,
    /// Degree within the sign, [0, 30).
    pub degree: f64,
    pub dms: Dms,
    pub nakshatra: Nakshatra,
    pub pada: u8,
    pub retrograde: bool,
    pub combust: bool,
    pub exalted: bool,
    pub debilitated: bool,
    /// Signed tropical motion in degrees per hour, for grahas that can
    /// turn retrograde. `None` elsewhere and in divisional charts.
    pub motion_deg_per_hour: Option<f64>,
}

/// The Lagna (or a substitute such as the Chandra lagna) of a chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LagnaEntry {
    pub sidereal_longitude: f64,
    pub sign: u8,
    pub rashi: Rashi,
    pub degree: f64,
    pub dms: Dms,
    pub nakshatra: Nakshatra,
    pub pada: u8,
    pub nari: Nari,
}

impl LagnaEntry {
    /// Lagna record for a sidereal longitude.
    pub fn from_longitude(sidereal_lon: f64) -> Self {
        let r = rashi_from_longitude(sidereal_lon);
        Self::with_sign_and_degree(sidereal_lon, r.rashi, r.degrees_in_rashi)
    }

    /// Lagna record whose sign and degree come from a separate mapping
    /// (divisional charts); nakshatra and nari follow `sidereal_lon`.
    pub(crate) fn with_sign_and_degree(sidereal_lon: f64, rashi: Rashi, degree: f64) -> Self {
        let n = nakshatra_from_longitude(sidereal_lon);
        Self {
            sidereal_longitude: sidereal_lon,
            sign: rashi.number(),
            rashi,
            degree,
            dms: deg_to_dms(degree),
            nakshatra: n.nakshatra,
            pada: n.pada,
            nari: n.nakshatra.nari(),
        }
    }
}

/// Nine planets and a Lagna.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Chart {
    /// Planets in chart order (Sun, Moon, Mercury, Venus, Mars, Jupiter,
    /// Saturn, Rahu, Ketu).
    pub planets: [PlanetPosition; 9],
    pub lagna: LagnaEntry,
}

impl Chart {
    pub fn planet(&self, graha: Graha) -> &PlanetPosition {
        &self.planets[graha.index() as usize]
    }
}

/// A divisional (varga) view of the D1 chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DivisionalChart {
    pub varga: Varga,
    pub division: u32,
    pub chart: Chart,
}

/// Nakshatra classification of the Lagna and the Moon.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NakshatraClassification {
    pub lagna: Nakshatra,
    pub lagna_nari: Nari,
    pub moon: Nakshatra,
    /// Nari of the Moon's nakshatra.
    pub nari: Nari,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DoshaAnalysis {
    pub manglik: ManglikStatus,
    pub sade_sati: SadeSatiStatus,
    pub nakshatra: NakshatraClassification,
}

/// The moment and observer a chart was cast for.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartInput {
    /// Civil date-time, RFC 3339.
    pub moment: String,
    pub jd_ut: f64,
    pub jd_tt: f64,
    pub latitude_deg: f64,
    pub longitude_deg: f64,
    pub altitude_m: f64,
}

/// A fully populated sidereal chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartResult {
    pub input: ChartInput,
    /// Ayanamsha in degrees.
    pub ayanamsa: f64,
    pub d1: Chart,
    /// Divisional charts in the configured order.
    pub vargas: Vec<DivisionalChart>,
    /// D1 planets with the Moon's position as Lagna.
    pub chandra: Chart,
    pub dosha: DoshaAnalysis,
}

impl ChartResult {
    pub fn varga(&self, varga: Varga) -> Option<&DivisionalChart> {
        self.vargas.iter().find(|c| c.varga == varga)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lagna_entry_from_longitude() {
        // 299.5 → Makara 29.5, Dhanishtha (index 22)
        let l = LagnaEntry::from_longitude(299.5);
        assert_eq!(l.sign, 10);
        assert_eq!(l.rashi, Rashi::Makara);
        assert!((l.degree - 29.5).abs() < 1e-10);
        assert_eq!(l.nakshatra, Nakshatra::Dhanishtha);
        assert_eq!(l.nari, Nakshatra::Dhanishtha.nari());
    }

    #[test]
    fn lagna_dms() {
        let l = LagnaEntry::from_longitude(45.25);
        assert_eq!(l.dms.degrees, 15);
        assert_eq!(l.dms.minutes, 15);
    }
}
