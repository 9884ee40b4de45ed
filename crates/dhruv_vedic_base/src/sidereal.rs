//! Tropical ecliptic longitude from the ephemeris, and the sidereal shift.

use dhruv_core::{Body, Ephemeris, GeoLocation};
use dhruv_frames::ecliptic_longitude_deg;
use dhruv_time::Moment;

use crate::error::VedicError;
use crate::util::normalize_360;

/// Tropical ecliptic longitude of `body` in degrees, [0, 360).
///
/// The ecliptic frame uses the ephemeris' own obliquity at `moment`, so
/// the result is consistent with the ascendant computed from the same
/// adapter.
pub fn tropical_longitude<E: Ephemeris + ?Sized>(
    ephemeris: &E,
    body: Body,
    moment: &Moment,
    location: &GeoLocation,
) -> Result<f64, VedicError> {
    let eq = ephemeris.equatorial_position(body, moment, location)?;
    let eps = ephemeris.obliquity_deg(moment)?;
    let lon = ecliptic_longitude_deg(eq.ra_hours, eq.dec_deg, eps);
    if !lon.is_finite() {
        return Err(VedicError::Domain("ecliptic longitude is not finite"));
    }
    Ok(lon)
}

/// Subtract the ayanamsha from a tropical longitude, normalized to [0, 360).
pub fn to_sidereal(tropical_deg: f64, ayanamsha_deg: f64) -> f64 {
    normalize_360(tropical_deg - ayanamsha_deg)
}
