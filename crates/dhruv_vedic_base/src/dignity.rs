//! Exaltation (uchcha) and debilitation (neecha), checked at sign level.
//!
//! A graha is exalted when it occupies the sign holding its exaltation
//! point, debilitated when it occupies the opposite sign.

use crate::graha::Graha;
use crate::rashi::sign_number;

pub fn is_exalted(graha: Graha, sidereal_lon_deg: f64) -> bool {
    sign_number(sidereal_lon_deg) == sign_number(graha.traits().exaltation_deg)
}

pub fn is_debilitated(graha: Graha, sidereal_lon_deg: f64) -> bool {
    sign_number(sidereal_lon_deg) == sign_number(graha.traits().debilitation_deg)
}
