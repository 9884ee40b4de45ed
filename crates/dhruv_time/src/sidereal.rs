//! Greenwich Mean Sidereal Time and Earth Rotation Angle.
//!
//! Provides the ERA and GMST needed to place the meridian (RAMC) for
//! ascendant computation.
//!
//! All functions take UT Julian Dates. UT1 − UTC (< 0.9 s) is ignored:
//! [`crate::Moment::jd_ut`] is used directly.
//!
//! Sources:
//! - ERA: IERS Conventions 2010, Eq. 5.15. Public domain.
//! - GMST polynomial: Capitaine et al. 2003, Table 2. Public domain.

use std::f64::consts::{PI, TAU};

use crate::julian::J2000_JD;

/// Arcseconds to radians: 1″ = π / (180 × 3600).
const ARCSEC_TO_RAD: f64 = PI / (180.0 * 3600.0);

/// Earth Rotation Angle at a given UT1 Julian Date.
///
/// θ = 2π × (0.7790572732640 + 1.00273781191135448 × Du)
/// where Du = JD_UT1 − 2451545.0.
///
/// Returns radians in [0, 2π).
///
/// Source: IERS Conventions 2010, Eq. 5.15.
pub fn earth_rotation_angle_rad(jd_ut1: f64) -> f64 {
    let du = jd_ut1 - J2000_JD;
    let theta = TAU * (0.779_057_273_264_0 + 1.002_737_811_911_354_6 * du);
    theta.rem_euclid(TAU)
}

/// Greenwich Mean Sidereal Time at a given UT1 Julian Date.
///
/// GMST = ERA + polynomial(T), where T = Julian centuries of UT1 from J2000.0.
///
/// Polynomial (arcseconds):
///   0.014506 + 4612.156534·T + 1.3915817·T² − 0.00000044·T³
///   − 0.000029956·T⁴ − 0.0000000368·T⁵
///
/// Returns radians in [0, 2π).
///
/// Source: Capitaine et al. 2003, Table 2.
pub fn gmst_rad(jd_ut1: f64) -> f64 {
    let era = earth_rotation_angle_rad(jd_ut1);
    let t = (jd_ut1 - J2000_JD) / 36525.0;
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;
    let t5 = t4 * t;

    let poly_arcsec = 0.014506 + 4612.156534 * t + 1.3915817 * t2
        - 0.00000044 * t3
        - 0.000029956 * t4
        - 0.0000000368 * t5;

    let gmst = era + poly_arcsec * ARCSEC_TO_RAD;
    gmst.rem_euclid(TAU)
}

/// Greenwich Mean Sidereal Time in hours, range [0, 24).
pub fn gmst_hours(jd_ut1: f64) -> f64 {
    (gmst_rad(jd_ut1) * 12.0 / PI).rem_euclid(24.0)
}
