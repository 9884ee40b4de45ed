//! Amsha (divisional chart / varga chart) calculations.
//!
//! Each varga divides the 30-degree rashi span into N equal parts and maps
//! each part to a target rashi. The position inside the part is rescaled
//! to a full 30 degrees, giving the divisional degree.
//!
//! Supported: D1, D4, D6, D7, D9, D10, D60.

use std::fmt::{Display, Formatter};

use serde::Serialize;

use crate::error::VedicError;
use crate::rashi::{Element, Rashi};
use crate::util::normalize_360;

/// Supported divisional charts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Varga {
    D1,
    D4,
    D6,
    D7,
    D9,
    D10,
    D60,
}

pub const ALL_VARGAS: [Varga; 7] = [
    Varga::D1,
    Varga::D4,
    Varga::D6,
    Varga::D7,
    Varga::D9,
    Varga::D10,
    Varga::D60,
];

impl Varga {
    /// Number of divisions per rashi.
    pub const fn divisions(self) -> u32 {
        match self {
            Self::D1 => 1,
            Self::D4 => 4,
            Self::D6 => 6,
            Self::D7 => 7,
            Self::D9 => 9,
            Self::D10 => 10,
            Self::D60 => 60,
        }
    }

    pub fn from_divisions(d: u32) -> Result<Self, VedicError> {
        ALL_VARGAS
            .into_iter()
            .find(|v| v.divisions() == d)
            .ok_or(VedicError::UnsupportedDivision(d))
    }

    pub const fn sanskrit_name(self) -> &'static str {
        match self {
            Self::D1 => "Rashi",
            Self::D4 => "Chaturthamsha",
            Self::D6 => "Shashthamsha",
            Self::D7 => "Saptamsha",
            Self::D9 => "Navamsha",
            Self::D10 => "Dashamsha",
            Self::D60 => "Shashtiamsha",
        }
    }

    /// Span of one division in degrees.
    pub fn part_span_deg(self) -> f64 {
        30.0 / self.divisions() as f64
    }
}

impl Display for Varga {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "D{}", self.divisions())
    }
}

/// Target rashi index (0-based) for a natal rashi and a 0-based part.
///
/// 0-indexed rashis 0,2,4.. are the odd signs (1-based 1,3,5..).
fn varga_target_rashi(varga: Varga, natal_rashi_idx: u8, part: u32) -> u8 {
    let natal = natal_rashi_idx as u32;
    let odd_sign = natal % 2 == 0;
    let target = match varga {
        Varga::D1 => natal,

        // Quadrant steps: each part advances three signs.
        Varga::D4 => natal + part * 3,

        Varga::D6 => {
            let start = if odd_sign { 0 } else { 6 }; // Mesha / Tula
            start + part
        }

        Varga::D7 => {
            let start = if odd_sign { natal } else { natal + 6 };
            start + part
        }

        Varga::D9 => {
            let start = match Rashi::from_index(natal_rashi_idx).element() {
                Element::Fire => 0,  // Mesha
                Element::Earth => 9, // Makara
                Element::Air => 6,   // Tula
                Element::Water => 3, // Karka
            };
            start + part
        }

        Varga::D10 => {
            let start = if odd_sign { natal } else { natal + 8 };
            start + part
        }

        Varga::D60 => natal + part,
    };
    (target % 12) as u8
}

/// Natal rashi index, 0-based part and position within the part.
fn split(sidereal_lon: f64, varga: Varga) -> (u8, u32, f64) {
    let lon = normalize_360(sidereal_lon);
    let rashi_idx = (lon / 30.0).floor().min(11.0) as u8;
    let pos_in_rashi = lon - rashi_idx as f64 * 30.0;
    let span = varga.part_span_deg();
    let part = ((pos_in_rashi / span).floor() as u32).min(varga.divisions() - 1);
    (rashi_idx, part, pos_in_rashi - part as f64 * span)
}

/// 1-based divisional sign (1..=12) of a sidereal longitude.
pub fn varga_sign(sidereal_lon: f64, varga: Varga) -> u8 {
    let (rashi_idx, part, _) = split(sidereal_lon, varga);
    varga_target_rashi(varga, rashi_idx, part) + 1
}

/// Degree within the divisional sign: `(lon mod (30/d)) × d`, in [0, 30).
pub fn varga_degree(sidereal_lon: f64, varga: Varga) -> f64 {
    let (_, _, pos_in_part) = split(sidereal_lon, varga);
    let deg = pos_in_part * varga.divisions() as f64;
    if deg >= 30.0 { 0.0 } else { deg }
}

/// Divisional longitude: target sign start plus the divisional degree.
pub fn varga_longitude(sidereal_lon: f64, varga: Varga) -> f64 {
    (varga_sign(sidereal_lon, varga) - 1) as f64 * 30.0 + varga_degree(sidereal_lon, varga)
}
