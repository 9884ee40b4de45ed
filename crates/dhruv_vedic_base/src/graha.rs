//! Vedic planet (graha) enum and the per-graha trait table.
//!
//! The 9 grahas are the 7 visible bodies plus the lunar nodes Rahu and
//! Ketu. Chart assembly walks [`ALL_GRAHAS`] once and consults
//! [`GrahaTraits`] to decide which checks apply to each graha.

use std::fmt::{Display, Formatter};

use dhruv_core::Body;
use serde::Serialize;

/// The 9 Vedic grahas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Graha {
    Surya,
    Chandra,
    Buddh,
    Shukra,
    Mangal,
    Guru,
    Shani,
    Rahu,
    Ketu,
}

/// All 9 grahas in chart order: Sun, Moon, Mercury, Venus, Mars, Jupiter,
/// Saturn, Rahu, Ketu.
pub const ALL_GRAHAS: [Graha; 9] = [
    Graha::Surya,
    Graha::Chandra,
    Graha::Buddh,
    Graha::Shukra,
    Graha::Mangal,
    Graha::Guru,
    Graha::Shani,
    Graha::Rahu,
    Graha::Ketu,
];

impl Graha {
    /// Sanskrit name of the graha.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Surya => "Surya",
            Self::Chandra => "Chandra",
            Self::Buddh => "Buddh",
            Self::Shukra => "Shukra",
            Self::Mangal => "Mangal",
            Self::Guru => "Guru",
            Self::Shani => "Shani",
            Self::Rahu => "Rahu",
            Self::Ketu => "Ketu",
        }
    }

    /// English name of the graha.
    pub const fn english_name(self) -> &'static str {
        match self {
            Self::Surya => "Sun",
            Self::Chandra => "Moon",
            Self::Buddh => "Mercury",
            Self::Shukra => "Venus",
            Self::Mangal => "Mars",
            Self::Guru => "Jupiter",
            Self::Shani => "Saturn",
            Self::Rahu => "Rahu",
            Self::Ketu => "Ketu",
        }
    }

    /// 0-based index into [`ALL_GRAHAS`].
    pub const fn index(self) -> u8 {
        match self {
            Self::Surya => 0,
            Self::Chandra => 1,
            Self::Buddh => 2,
            Self::Shukra => 3,
            Self::Mangal => 4,
            Self::Guru => 5,
            Self::Shani => 6,
            Self::Rahu => 7,
            Self::Ketu => 8,
        }
    }

    /// Ephemeris body, or `None` for the computed nodes.
    pub const fn body(self) -> Option<Body> {
        match self {
            Self::Surya => Some(Body::Sun),
            Self::Chandra => Some(Body::Moon),
            Self::Buddh => Some(Body::Mercury),
            Self::Shukra => Some(Body::Venus),
            Self::Mangal => Some(Body::Mars),
            Self::Guru => Some(Body::Jupiter),
            Self::Shani => Some(Body::Saturn),
            Self::Rahu | Self::Ketu => None,
        }
    }

    pub const fn is_node(self) -> bool {
        matches!(self, Self::Rahu | Self::Ketu)
    }

    pub const fn traits(self) -> &'static GrahaTraits {
        &GRAHA_TRAITS[self.index() as usize]
    }
}

impl Display for Graha {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.english_name())
    }
}

/// Fixed per-graha properties used during chart assembly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GrahaTraits {
    /// Whether the retrograde probe applies (not Sun, Moon, or the nodes).
    pub has_retrograde: bool,
    /// Default combustion orb in degrees; `None` when combustion does not apply.
    pub combustion_orb: Option<f64>,
    /// Sidereal exaltation point, degrees.
    pub exaltation_deg: f64,
    /// Sidereal debilitation point, degrees (exaltation + 180).
    pub debilitation_deg: f64,
}

const fn traits(has_retrograde: bool, combustion_orb: Option<f64>, exaltation_deg: f64) -> GrahaTraits {
    let d = exaltation_deg + 180.0;
    GrahaTraits {
        has_retrograde,
        combustion_orb,
        exaltation_deg,
        debilitation_deg: if d >= 360.0 { d - 360.0 } else { d },
    }
}

/// Trait table indexed by [`Graha::index`].
///
/// Exaltation points (BPHS): Sun 10 Ari, Moon 3 Tau, Mercury 15 Vir,
/// Venus 27 Pis, Mars 28 Cap, Jupiter 5 Can, Saturn 20 Lib. The nodes
/// follow the common assignment Rahu 20 Tau, Ketu 20 Sco.
pub const GRAHA_TRAITS: [GrahaTraits; 9] = [
    traits(false, None, 10.0),
    traits(false, Some(12.0), 33.0),
    traits(true, Some(14.0), 165.0),
    traits(true, Some(10.0), 357.0),
    traits(true, Some(17.0), 298.0),
    traits(true, Some(11.0), 95.0),
    traits(true, Some(15.0), 200.0),
    traits(false, None, 50.0),
    traits(false, None, 230.0),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn graha_indices_sequential() {
        for (i, g) in ALL_GRAHAS.iter().enumerate() {
            assert_eq!(g.index() as usize, i);
        }
    }

    #[test]
    fn nodes_have_no_body() {
        for g in ALL_GRAHAS {
            assert_eq!(g.body().is_none(), g.is_node(), "{g}");
        }
    }

    #[test]
    fn retrograde_applies_to_five_planets() {
        let with: Vec<_> = ALL_GRAHAS.iter().filter(|g| g.traits().has_retrograde).collect();
        assert_eq!(with.len(), 5);
        assert!(!Graha::Surya.traits().has_retrograde);
        assert!(!Graha::Chandra.traits().has_retrograde);
        assert!(!Graha::Rahu.traits().has_retrograde);
    }

    #[test]
    fn combustion_orbs() {
        assert_eq!(Graha::Chandra.traits().combustion_orb, Some(12.0));
        assert_eq!(Graha::Mangal.traits().combustion_orb, Some(17.0));
        assert_eq!(Graha::Buddh.traits().combustion_orb, Some(14.0));
        assert_eq!(Graha::Guru.traits().combustion_orb, Some(11.0));
        assert_eq!(Graha::Shukra.traits().combustion_orb, Some(10.0));
        assert_eq!(Graha::Shani.traits().combustion_orb, Some(15.0));
        assert_eq!(Graha::Surya.traits().combustion_orb, None);
        assert_eq!(Graha::Ketu.traits().combustion_orb, None);
    }

    #[test]
    fn debilitation_opposite_exaltation() {
        for g in ALL_GRAHAS {
            let t = g.traits();
            let diff = (t.exaltation_deg - t.debilitation_deg).abs();
            assert!((diff - 180.0).abs() < 1e-10, "{g}");
            assert!((0.0..360.0).contains(&t.debilitation_deg));
        }
        assert_eq!(Graha::Shukra.traits().debilitation_deg, 177.0);
    }

    #[test]
    fn node_dignity_points() {
        assert_eq!(Graha::Rahu.traits().exaltation_deg, 50.0);
        assert_eq!(Graha::Rahu.traits().debilitation_deg, 230.0);
        assert_eq!(Graha::Ketu.traits().exaltation_deg, 230.0);
        assert_eq!(Graha::Ketu.traits().debilitation_deg, 50.0);
    }
}
