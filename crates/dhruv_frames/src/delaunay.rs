//! Delaunay fundamental arguments of the lunisolar theory.
//!
//! Shared by the lunar position series and the mean lunar node.
//!
//! Source: IERS Conventions 2010, Table 5.2e. Public domain (IAU standard).

use std::f64::consts::TAU;

/// Arcseconds to radians conversion factor.
const AS2RAD: f64 = TAU / 1_296_000.0;

/// Compute the five Delaunay fundamental arguments in radians.
///
/// `t` = Julian centuries of TT since J2000.0.
///
/// Returns `[l, l', F, D, Ω]` where:
/// - `l`  = mean anomaly of the Moon
/// - `l'` = mean anomaly of the Sun
/// - `F`  = mean argument of latitude of the Moon
/// - `D`  = mean elongation of the Moon from the Sun
/// - `Ω`  = mean longitude of the ascending node of the Moon
///
/// Polynomial coefficients from IERS Conventions 2010, Table 5.2e.
pub fn fundamental_arguments(t: f64) -> [f64; 5] {
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;

    // l: mean anomaly of the Moon (arcsec)
    let l = (485868.249036 + 1717915923.2178 * t + 31.8792 * t2 + 0.051635 * t3 - 0.00024470 * t4)
        * AS2RAD;

    // l': mean anomaly of the Sun (arcsec)
    let lp = (1287104.79305 + 129596581.0481 * t - 0.5532 * t2 + 0.000136 * t3 - 0.00001149 * t4)
        * AS2RAD;

    // F: mean argument of latitude of the Moon (arcsec)
    let f = (335779.526232 + 1739527262.8478 * t - 12.7512 * t2 - 0.001037 * t3 + 0.00000417 * t4)
        * AS2RAD;

    // D: mean elongation of the Moon from the Sun (arcsec)
    let d = (1072260.70369 + 1602961601.2090 * t - 6.3706 * t2 + 0.006593 * t3 - 0.00003169 * t4)
        * AS2RAD;

    // Ω: mean longitude of the ascending node of the Moon (arcsec)
    let om =
        (450160.398036 - 6962890.5431 * t + 7.4722 * t2 + 0.007702 * t3 - 0.00005939 * t4) * AS2RAD;

    [l, lp, f, d, om]
}

/// Delaunay arguments in degrees, each normalized to [0, 360).
///
/// Convenience for series whose coefficients are tabulated in degrees.
pub fn fundamental_arguments_deg(t: f64) -> [f64; 5] {
    fundamental_arguments(t).map(|a| a.to_degrees().rem_euclid(360.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn node_at_j2000() {
        // Ω(J2000) = 450160.398036″ = 125.0445550°
        let args = fundamental_arguments_deg(0.0);
        assert!((args[4] - 125.044_555).abs() < 1e-5, "Ω = {}", args[4]);
    }

    #[test]
    fn moon_anomaly_at_j2000() {
        // l(J2000) = 485868.249036″ = 134.9634028°
        let args = fundamental_arguments_deg(0.0);
        assert!((args[0] - 134.963_403).abs() < 1e-5, "l = {}", args[0]);
    }

    #[test]
    fn node_regresses() {
        // Ω decreases ~19.34° per year
        let a0 = fundamental_arguments(0.0)[4];
        let a1 = fundamental_arguments(0.01)[4];
        let per_year = (a1 - a0).to_degrees();
        assert!((per_year + 19.34).abs() < 0.01, "dΩ/yr = {per_year}");
    }

    #[test]
    fn degrees_in_range() {
        for &t in &[-2.0, -0.5, 0.0, 0.26, 1.5] {
            for a in fundamental_arguments_deg(t) {
                assert!((0.0..360.0).contains(&a), "T={t}: {a}");
            }
        }
    }
}
