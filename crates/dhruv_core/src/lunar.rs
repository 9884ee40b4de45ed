//! Geocentric Moon from the principal terms of the ELP-2000/82 series.
//!
//! Source: Meeus, "Astronomical Algorithms" 2nd ed., ch. 47 (tables 47.A
//! and 47.B), truncated to terms with amplitude ≥ 0.004°. Longitude and
//! latitude are referred to the mean equinox of date.

use dhruv_frames::fundamental_arguments_deg;

/// Mean distance Earth–Moon in km.
const MEAN_DISTANCE_KM: f64 = 385_000.56;

/// `[D, M, M', F, Σl (1e-6 deg), Σr (1e-3 km)]`
#[rustfmt::skip]
const LON_DIST_TERMS: [[f64; 6]; 25] = [
    [0.0,  0.0,  1.0,  0.0,  6_288_774.0, -20_905_355.0],
    [2.0,  0.0, -1.0,  0.0,  1_274_027.0,  -3_699_111.0],
    [2.0,  0.0,  0.0,  0.0,    658_314.0,  -2_955_968.0],
    [0.0,  0.0,  2.0,  0.0,    213_618.0,    -569_925.0],
    [0.0,  1.0,  0.0,  0.0,   -185_116.0,      48_888.0],
    [0.0,  0.0,  0.0,  2.0,   -114_332.0,      -3_149.0],
    [2.0,  0.0, -2.0,  0.0,     58_793.0,     246_158.0],
    [2.0, -1.0, -1.0,  0.0,     57_066.0,    -152_138.0],
    [2.0,  0.0,  1.0,  0.0,     53_322.0,    -170_733.0],
    [2.0, -1.0,  0.0,  0.0,     45_758.0,    -204_586.0],
    [0.0,  1.0, -1.0,  0.0,    -40_923.0,    -129_620.0],
    [1.0,  0.0,  0.0,  0.0,    -34_720.0,     108_743.0],
    [0.0,  1.0,  1.0,  0.0,    -30_383.0,     104_755.0],
    [2.0,  0.0,  0.0, -2.0,     15_327.0,      10_321.0],
    [0.0,  0.0,  1.0,  2.0,    -12_528.0,           0.0],
    [0.0,  0.0,  1.0, -2.0,     10_980.0,      79_661.0],
    [4.0,  0.0, -1.0,  0.0,     10_675.0,     -34_782.0],
    [0.0,  0.0,  3.0,  0.0,     10_034.0,     -23_210.0],
    [4.0,  0.0, -2.0,  0.0,      8_548.0,     -21_636.0],
    [2.0,  1.0, -1.0,  0.0,     -7_888.0,      24_208.0],
    [2.0,  1.0,  0.0,  0.0,     -6_766.0,      30_824.0],
    [1.0,  0.0, -1.0,  0.0,     -5_163.0,      -8_379.0],
    [1.0,  1.0,  0.0,  0.0,      4_987.0,     -16_675.0],
    [2.0, -1.0,  1.0,  0.0,      4_036.0,     -12_831.0],
    [2.0,  0.0,  2.0,  0.0,      3_994.0,     -10_445.0],
];

/// `[D, M, M', F, Σb (1e-6 deg)]`
#[rustfmt::skip]
const LAT_TERMS: [[f64; 5]; 10] = [
    [0.0, 0.0,  0.0,  1.0, 5_128_122.0],
    [0.0, 0.0,  1.0,  1.0,   280_602.0],
    [0.0, 0.0,  1.0, -1.0,   277_693.0],
    [2.0, 0.0,  0.0, -1.0,   173_237.0],
    [2.0, 0.0, -1.0,  1.0,    55_413.0],
    [2.0, 0.0, -1.0, -1.0,    46_271.0],
    [2.0, 0.0,  0.0,  1.0,    32_573.0],
    [0.0, 0.0,  2.0,  1.0,    17_198.0],
    [2.0, 0.0,  1.0, -1.0,     9_266.0],
    [0.0, 0.0,  2.0, -1.0,     8_822.0],
];

/// Geocentric ecliptic position of the Moon.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct LunarPosition {
    /// Longitude of date, degrees in [0, 360).
    pub lon_deg: f64,
    pub lat_deg: f64,
    pub distance_km: f64,
}

/// Moon position for `t` Julian centuries of TT since J2000.0.
pub(crate) fn moon_position(t: f64) -> LunarPosition {
    // [l, l', F, D, Ω] -> M' = l, M = l'
    let [l, lp, f, d, om] = fundamental_arguments_deg(t);
    let mean_lon = f + om;
    // Eccentricity factor for terms involving the Sun's anomaly.
    let e = 1.0 - 0.002_516 * t - 0.000_007_4 * t * t;

    let factor = |m_mult: f64| match m_mult.abs() as u8 {
        1 => e,
        2 => e * e,
        _ => 1.0,
    };

    let mut sum_l = 0.0;
    let mut sum_r = 0.0;
    for row in &LON_DIST_TERMS {
        let arg = (row[0] * d + row[1] * lp + row[2] * l + row[3] * f).to_radians();
        let k = factor(row[1]);
        sum_l += row[4] * k * arg.sin();
        sum_r += row[5] * k * arg.cos();
    }

    let mut sum_b = 0.0;
    for row in &LAT_TERMS {
        let arg = (row[0] * d + row[1] * lp + row[2] * l + row[3] * f).to_radians();
        sum_b += row[4] * factor(row[1]) * arg.sin();
    }

    LunarPosition {
        lon_deg: (mean_lon + sum_l * 1e-6).rem_euclid(360.0),
        lat_deg: sum_b * 1e-6,
        distance_km: MEAN_DISTANCE_KM + sum_r * 1e-3,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meeus_example_47a() {
        // 1992 April 12, 0h TD: λ = 133.162655°, β = -3.229126°, Δ = 368409.7 km
        let jd = 2_448_724.5;
        let t = (jd - 2_451_545.0) / 36_525.0;
        let p = moon_position(t);
        assert!((p.lon_deg - 133.162_655).abs() < 0.05, "λ = {}", p.lon_deg);
        assert!((p.lat_deg - (-3.229_126)).abs() < 0.05, "β = {}", p.lat_deg);
        assert!((p.distance_km - 368_409.7).abs() < 300.0, "Δ = {}", p.distance_km);
    }

    #[test]
    fn latitude_bounded_by_inclination() {
        for i in 0..400 {
            let t = -1.0 + i as f64 * 0.005;
            let p = moon_position(t);
            assert!(p.lat_deg.abs() < 5.4, "t = {t}, β = {}", p.lat_deg);
        }
    }

    #[test]
    fn distance_within_perigee_apogee() {
        for i in 0..400 {
            let t = -1.0 + i as f64 * 0.005;
            let p = moon_position(t);
            assert!((355_000.0..407_500.0).contains(&p.distance_km), "Δ = {}", p.distance_km);
        }
    }
}
