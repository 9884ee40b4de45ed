//! Lagna (Ascendant) computation.
//!
//! The Lagna is the point of the ecliptic rising on the eastern horizon.
//! From the right ascension of the meridian (RAMC), the observer latitude
//! φ and the obliquity ε:
//!
//! `Asc = atan2(cos RAMC, −sin RAMC·cos ε − tan φ·sin ε)`
//!
//! Sources: Meeus, "Astronomical Algorithms" (2nd ed), Chapter 14;
//! standard spherical astronomy (Montenbruck & Pfleger).

use dhruv_core::{Ephemeris, GeoLocation};
use dhruv_time::Moment;

use crate::error::VedicError;
use crate::util::normalize_360;

/// RAMC in degrees from Greenwich sidereal time (hours) and east longitude.
pub fn ramc_deg(sidereal_time_hours: f64, longitude_deg: f64) -> f64 {
    normalize_360(sidereal_time_hours * 15.0 + longitude_deg)
}

/// Tropical ecliptic longitude of the Ascendant in degrees, [0, 360).
///
/// Undefined at the geographic poles, where every ecliptic point lies on
/// the horizon.
pub fn ascendant_longitude_deg(
    ramc_deg: f64,
    latitude_deg: f64,
    obliquity_deg: f64,
) -> Result<f64, VedicError> {
    if !latitude_deg.is_finite() || latitude_deg.abs() >= 90.0 {
        return Err(VedicError::Domain("ascendant undefined at the poles"));
    }
    let theta = ramc_deg.to_radians();
    let eps = obliquity_deg.to_radians();
    let tan_phi = latitude_deg.to_radians().tan();
    if !tan_phi.is_finite() {
        return Err(VedicError::Domain("tangent of latitude is not finite"));
    }

    let asc = f64::atan2(
        theta.cos(),
        -theta.sin() * eps.cos() - tan_phi * eps.sin(),
    )
    .to_degrees();
    if !asc.is_finite() {
        return Err(VedicError::Domain("ascendant is not finite"));
    }
    Ok(normalize_360(asc))
}

/// Tropical Lagna for an observer, using the ephemeris' sidereal time and
/// obliquity.
pub fn tropical_lagna<E: Ephemeris + ?Sized>(
    ephemeris: &E,
    moment: &Moment,
    location: &GeoLocation,
) -> Result<f64, VedicError> {
    location.validate()?;
    let st = ephemeris.sidereal_time_hours(moment)?;
    let eps = ephemeris.obliquity_deg(moment)?;
    ascendant_longitude_deg(
        ramc_deg(st, location.longitude_deg),
        location.latitude_deg,
        eps,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 23.4393;

    /// Ecliptic point (β = 0) → (hour angle, altitude) in degrees.
    fn horizon_coords(lon_deg: f64, ramc: f64, lat_deg: f64) -> (f64, f64) {
        let (l, e, phi) = (lon_deg.to_radians(), EPS.to_radians(), lat_deg.to_radians());
        let ra = f64::atan2(l.sin() * e.cos(), l.cos());
        let dec = (l.sin() * e.sin()).asin();
        let h = ramc.to_radians() - ra;
        let alt = (phi.sin() * dec.sin() + phi.cos() * dec.cos() * h.cos()).asin();
        (normalize_360(h.to_degrees()), alt.to_degrees())
    }

    #[test]
    fn equator_ramc_zero_rises_cancer() {
        // Aries point on the meridian: the eastern horizon holds 0° Cancer.
        let asc = ascendant_longitude_deg(0.0, 0.0, EPS).unwrap();
        assert!((asc - 90.0).abs() < 1e-10, "asc = {asc}");
    }

    #[test]
    fn equator_ramc_180_rises_capricorn() {
        let asc = ascendant_longitude_deg(180.0, 0.0, EPS).unwrap();
        assert!((asc - 270.0).abs() < 1e-10, "asc = {asc}");
    }

    /// Sweep RAMC at several latitudes: the Lagna must lie on the horizon
    /// and on its eastern half (hour angle in (180°, 360°)).
    #[test]
    fn ascendant_is_on_eastern_horizon() {
        for &lat in &[-60.0, -28.6, 0.0, 28.6139, 51.5, 65.0] {
            for i in 0..72 {
                let ramc = i as f64 * 5.0;
                let asc = ascendant_longitude_deg(ramc, lat, EPS).unwrap();
                let (h, alt) = horizon_coords(asc, ramc, lat);
                assert!(alt.abs() < 1e-8, "lat {lat} ramc {ramc}: altitude {alt}");
                assert!(h > 180.0 && h < 360.0, "lat {lat} ramc {ramc}: hour angle {h}");
            }
        }
    }

    #[test]
    fn ascendant_covers_full_circle() {
        let mut signs = [false; 12];
        for i in 0..360 {
            let asc = ascendant_longitude_deg(i as f64, 28.6139, EPS).unwrap();
            signs[(asc / 30.0) as usize] = true;
        }
        assert!(signs.iter().all(|&s| s));
    }

    #[test]
    fn poles_are_domain_errors() {
        for lat in [90.0, -90.0] {
            assert!(matches!(
                ascendant_longitude_deg(10.0, lat, EPS),
                Err(VedicError::Domain(_))
            ));
        }
        assert!(ascendant_longitude_deg(10.0, f64::NAN, EPS).is_err());
    }

    #[test]
    fn ramc_combines_time_and_longitude() {
        assert!((ramc_deg(1.0, 77.209) - 92.209).abs() < 1e-12);
        assert!((ramc_deg(23.0, 30.0) - 15.0).abs() < 1e-12);
        assert!((ramc_deg(0.0, -30.0) - 330.0).abs() < 1e-12);
    }
}
