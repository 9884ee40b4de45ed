//! IAU 2006 general precession in ecliptic longitude.
//!
//! The general precession p_A measures the accumulated westward motion of
//! the vernal equinox along the ecliptic since J2000.0. Positions computed
//! in the J2000 ecliptic frame are carried to the equinox of date by adding
//! it.
//!
//! Source: Capitaine, Wallace & Chapront 2003, _Astronomy & Astrophysics_
//! 412, 567-586 (Table 1). Also published in IERS Conventions 2010, Ch. 5.
//! Public domain (IAU standard).

/// IAU 2006 general precession in ecliptic longitude, in arcseconds.
///
/// # Arguments
/// * `t` — Julian centuries of TT since J2000.0: `(JD_TT - 2451545.0) / 36525.0`
///
/// # Returns
/// Accumulated precession in arcseconds. Positive means the equinox has
/// moved westward (tropical longitudes of stars have increased).
///
/// The dominant linear term is ~5028.80″/century ≈ 1.3969°/century.
pub fn general_precession_longitude_arcsec(t: f64) -> f64 {
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;
    let t5 = t4 * t;
    5028.796195 * t + 1.1054348 * t2 + 0.00007964 * t3 - 0.000023857 * t4 - 0.0000000383 * t5
}

/// IAU 2006 general precession in ecliptic longitude, in degrees.
///
/// Same as [`general_precession_longitude_arcsec`] but converted to degrees.
pub fn general_precession_longitude_deg(t: f64) -> f64 {
    general_precession_longitude_arcsec(t) / 3600.0
}

/// Carry an ecliptic longitude referred to the J2000.0 equinox to the mean
/// equinox of date (first-order: ecliptic-plane motion ignored).
///
/// Result in [0, 360).
pub fn precess_longitude_from_j2000_deg(lon_j2000_deg: f64, t: f64) -> f64 {
    (lon_j2000_deg + general_precession_longitude_deg(t)).rem_euclid(360.0)
}
