//! Combustion (Asta/Moudhya) detection for grahas.
//!
//! A graha is combust when it is too close to the Sun. Orbs come from the
//! trait table unless the caller supplies its own.

use crate::graha::Graha;
use crate::util::angular_separation;

/// Default combustion orb (degrees from the Sun) for a graha.
///
/// Returns `None` for Sun, Rahu, and Ketu (not applicable).
pub fn combustion_threshold(graha: Graha) -> Option<f64> {
    graha.traits().combustion_orb
}

/// True when the shortest arc between the graha and the Sun is strictly
/// less than `orb_deg`. A graha at exactly the orb is **not** combust.
pub fn within_orb(graha_sid_lon: f64, sun_sid_lon: f64, orb_deg: f64) -> bool {
    angular_separation(graha_sid_lon, sun_sid_lon) < orb_deg
}

/// Combustion check with the default orb. Always `false` for Sun, Rahu
/// and Ketu.
pub fn is_combust(graha: Graha, graha_sid_lon: f64, sun_sid_lon: f64) -> bool {
    is_combust_with(graha, graha_sid_lon, sun_sid_lon, None)
}

/// Combustion check where `orb_deg` replaces the default orb. The trait
/// table still decides whether combustion applies to the graha at all.
pub fn is_combust_with(
    graha: Graha,
    graha_sid_lon: f64,
    sun_sid_lon: f64,
    orb_deg: Option<f64>,
) -> bool {
    combustion_threshold(graha)
        .is_some_and(|default| within_orb(graha_sid_lon, sun_sid_lon, orb_deg.unwrap_or(default)))
}
