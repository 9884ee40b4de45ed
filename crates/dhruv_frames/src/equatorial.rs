//! Equatorial (RA/Dec) → ecliptic longitude.
//!
//! `λ = atan2(sin α · cos ε + tan δ · sin ε, cos α)`
//!
//! Source: Meeus, "Astronomical Algorithms" (2nd ed), Eq. 13.1.

use std::f64::consts::TAU;

/// Ecliptic longitude in degrees [0, 360) from right ascension (hours),
/// declination (degrees) and obliquity (degrees).
pub fn ecliptic_longitude_deg(ra_hours: f64, dec_deg: f64, obliquity_deg: f64) -> f64 {
    let ra = (ra_hours * 15.0).to_radians();
    let dec = dec_deg.to_radians();
    let eps = obliquity_deg.to_radians();
    let lon = f64::atan2(ra.sin() * eps.cos() + dec.tan() * eps.sin(), ra.cos());
    lon.rem_euclid(TAU).to_degrees().rem_euclid(360.0)
}
