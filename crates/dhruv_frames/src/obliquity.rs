//! Obliquity of the ecliptic.
//!
//! Source: IAU 2006 precession (Capitaine et al. 2003, Eq. 39), also
//! IERS Conventions 2010, Eq. 5.40.

/// Mean obliquity at J2000.0 in degrees (84381.406″).
pub const OBLIQUITY_J2000_DEG: f64 = 84_381.406 / 3600.0;

/// Mean obliquity at J2000.0 in radians.
pub const OBLIQUITY_J2000_RAD: f64 = OBLIQUITY_J2000_DEG * std::f64::consts::PI / 180.0;

/// Mean obliquity of the ecliptic of date, in degrees.
///
/// `t` = Julian centuries of TT since J2000.0.
pub fn mean_obliquity_deg(t: f64) -> f64 {
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;
    let t5 = t4 * t;
    let arcsec = 84_381.406 - 46.836_769 * t - 0.000_183_1 * t2 + 0.002_003_40 * t3
        - 0.000_000_576 * t4
        - 0.000_000_043_4 * t5;
    arcsec / 3600.0
}
