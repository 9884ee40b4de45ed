//! Diurnal parallax in right ascension and declination.
//!
//! Source: Meeus, "Astronomical Algorithms" 2nd ed., ch. 11 and ch. 40.

/// Earth's polar-to-equatorial axis ratio `b/a`.
const AXIS_RATIO: f64 = 0.996_647_19;
/// Equatorial radius in metres.
const EQUATORIAL_RADIUS_M: f64 = 6_378_140.0;
/// Equatorial horizontal parallax at 1 AU (8.794″), radians.
const SOLAR_PARALLAX_RAD: f64 = 8.794 / 3600.0 * std::f64::consts::PI / 180.0;

/// Observer's `(ρ sin φ′, ρ cos φ′)` in Earth equatorial radii.
pub(crate) fn geocentric_radius_terms(latitude_deg: f64, altitude_m: f64) -> (f64, f64) {
    let phi = latitude_deg.to_radians();
    let (sp, cp) = phi.sin_cos();
    let u = (AXIS_RATIO * sp).atan2(cp);
    let h = altitude_m / EQUATORIAL_RADIUS_M;
    (AXIS_RATIO * u.sin() + h * sp, u.cos() + h * cp)
}

/// Shift geocentric `(α, δ)` in degrees to topocentric for a body at
/// `distance_au`, given local sidereal time in degrees.
pub(crate) fn topocentric_shift(
    ra_deg: f64,
    dec_deg: f64,
    distance_au: f64,
    lst_deg: f64,
    rho_terms: (f64, f64),
) -> (f64, f64) {
    let (rho_sin, rho_cos) = rho_terms;
    let sin_pi = SOLAR_PARALLAX_RAD.sin() / distance_au;
    let h = (lst_deg - ra_deg).to_radians();
    let dec = dec_deg.to_radians();

    let denom = dec.cos() - rho_cos * sin_pi * h.cos();
    let d_ra = (-rho_cos * sin_pi * h.sin()).atan2(denom);
    let dec_topo = ((dec.sin() - rho_sin * sin_pi) * d_ra.cos()).atan2(denom);

    (
        (ra_deg + d_ra.to_degrees()).rem_euclid(360.0),
        dec_topo.to_degrees(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palomar_radius_terms() {
        // Meeus example 11.a: φ = 33°21′22″, H = 1706 m
        let (s, c) = geocentric_radius_terms(33.356_111, 1706.0);
        assert!((s - 0.546_861).abs() < 1e-5, "ρ sin φ′ = {s}");
        assert!((c - 0.836_339).abs() < 1e-5, "ρ cos φ′ = {c}");
    }

    #[test]
    fn mars_example_40a() {
        // Meeus example 40.a: α = 339.530208°, δ = -15.771083°, Δ = 0.37276 AU,
        // H = 288.7958° → α′ = 22h38m08.54s, δ′ = -15°46′30.0″
        let (ra, dec) = topocentric_shift(
            339.530_208,
            -15.771_083,
            0.372_76,
            339.530_208 + 288.795_8,
            (0.546_861, 0.836_339),
        );
        assert!((ra - 339.535_583).abs() < 1e-4, "α′ = {ra}");
        assert!((dec - (-15.775_000)).abs() < 1e-4, "δ′ = {dec}");
    }

    #[test]
    fn poles_are_finite() {
        for lat in [-90.0, 90.0] {
            let (s, c) = geocentric_radius_terms(lat, 0.0);
            assert!(s.is_finite() && c.is_finite());
            assert!(c.abs() < 1e-9);
        }
    }
}
