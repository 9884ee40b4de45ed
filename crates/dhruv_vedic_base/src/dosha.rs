//! Rule-based dosha classifications: Manglik (Kuja) and Sade Sati.

use std::fmt::{Display, Formatter};

use serde::Serialize;

/// Houses (0-based offsets from the reference sign) that make Mars
/// afflicting: 1st, 2nd, 4th, 7th, 8th and 12th.
pub const MANGLIK_OFFSETS: [u8; 6] = [0, 1, 3, 6, 7, 11];

/// Manglik status of a chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ManglikStatus {
    pub is_manglik: bool,
    pub from_lagna: bool,
    pub from_moon: bool,
}

/// Offset of `sign` counted from `reference_sign`, both 1-based, in 0..12.
pub fn house_offset(sign: u8, reference_sign: u8) -> u8 {
    ((sign as i16 - reference_sign as i16).rem_euclid(12)) as u8
}

/// Manglik check of Mars' sign from the Lagna sign and from the Moon sign.
pub fn manglik(lagna_sign: u8, moon_sign: u8, mars_sign: u8) -> ManglikStatus {
    let from_lagna = MANGLIK_OFFSETS.contains(&house_offset(mars_sign, lagna_sign));
    let from_moon = MANGLIK_OFFSETS.contains(&house_offset(mars_sign, moon_sign));
    ManglikStatus {
        is_manglik: from_lagna || from_moon,
        from_lagna,
        from_moon,
    }
}

/// Phase of Saturn's 7½-year transit around the natal Moon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SadeSatiPhase {
    /// Saturn in the 12th from the Moon.
    Rising,
    /// Saturn over the Moon sign.
    Peak,
    /// Saturn in the 2nd from the Moon.
    Setting,
    None,
}

impl SadeSatiPhase {
    pub const fn is_active(self) -> bool {
        !matches!(self, Self::None)
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Rising => "Rising (1st Phase)",
            Self::Peak => "Peak (2nd Phase)",
            Self::Setting => "Setting (3rd Phase)",
            Self::None => "None",
        }
    }
}

impl Display for SadeSatiPhase {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SadeSatiStatus {
    pub active: bool,
    pub phase: SadeSatiPhase,
}

/// Sade Sati from the Moon sign and Saturn sign (both 1-based).
pub fn sade_sati(moon_sign: u8, saturn_sign: u8) -> SadeSatiStatus {
    let phase = match house_offset(saturn_sign, moon_sign) {
        11 => SadeSatiPhase::Rising,
        0 => SadeSatiPhase::Peak,
        1 => SadeSatiPhase::Setting,
        _ => SadeSatiPhase::None,
    };
    SadeSatiStatus {
        active: phase.is_active(),
        phase,
    }
}
