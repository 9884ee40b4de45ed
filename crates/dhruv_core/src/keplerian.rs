//! Heliocentric planet positions from mean Keplerian elements.
//!
//! Source: E.M. Standish, "Keplerian Elements for Approximate Positions of
//! the Major Planets" (JPL/SSD), Table 1 (valid 1800 AD – 2050 AD).
//! Positions are in the J2000 ecliptic frame, in AU. Typical error is a
//! few arcminutes, well inside a nakshatra pada.

/// Mean elements at J2000.0 and their rates per Julian century.
///
/// Order: `a` (AU), `e`, `I` (deg), `L` (deg), `ϖ` (deg), `Ω` (deg).
#[derive(Debug, Clone, Copy)]
pub(crate) struct OrbitalElements {
    pub base: [f64; 6],
    pub rate: [f64; 6],
}

#[rustfmt::skip]
pub(crate) const MERCURY: OrbitalElements = OrbitalElements {
    base: [0.387_099_27, 0.205_635_93, 7.004_979_02, 252.250_323_50, 77.457_796_28, 48.330_765_93],
    rate: [0.000_000_37, 0.000_019_06, -0.005_947_49, 149_472.674_111_75, 0.160_476_89, -0.125_340_81],
};

#[rustfmt::skip]
pub(crate) const VENUS: OrbitalElements = OrbitalElements {
    base: [0.723_335_66, 0.006_776_72, 3.394_676_05, 181.979_099_50, 131.602_467_18, 76.679_842_55],
    rate: [0.000_003_90, -0.000_041_07, -0.000_788_90, 58_517.815_387_29, 0.002_683_29, -0.277_694_18],
};

/// Earth–Moon barycenter.
#[rustfmt::skip]
pub(crate) const EARTH_MOON_BARYCENTER: OrbitalElements = OrbitalElements {
    base: [1.000_002_61, 0.016_711_23, -0.000_015_31, 100.464_571_66, 102.937_681_93, 0.0],
    rate: [0.000_005_62, -0.000_043_92, -0.012_946_68, 35_999.372_449_81, 0.323_273_64, 0.0],
};

#[rustfmt::skip]
pub(crate) const MARS: OrbitalElements = OrbitalElements {
    base: [1.523_710_34, 0.093_394_10, 1.849_691_42, -4.553_432_05, -23.943_629_59, 49.559_538_91],
    rate: [0.000_018_47, 0.000_078_82, -0.008_131_31, 19_140.302_684_99, 0.444_410_88, -0.292_573_43],
};

#[rustfmt::skip]
pub(crate) const JUPITER: OrbitalElements = OrbitalElements {
    base: [5.202_887_00, 0.048_386_24, 1.304_396_95, 34.396_440_51, 14.728_479_83, 100.473_909_09],
    rate: [-0.000_116_07, -0.000_132_53, -0.001_837_14, 3_034.746_127_75, 0.212_526_68, 0.204_691_06],
};

#[rustfmt::skip]
pub(crate) const SATURN: OrbitalElements = OrbitalElements {
    base: [9.536_675_94, 0.053_861_79, 2.485_991_87, 49.954_244_23, 92.598_878_31, 113.662_424_48],
    rate: [-0.001_250_60, -0.000_509_91, 0.001_936_09, 1_222.493_622_01, -0.418_972_16, -0.288_677_94],
};

/// Solve Kepler's equation `E − e·sin E = M` (radians) by Newton iteration.
pub(crate) fn solve_kepler(mean_anomaly_rad: f64, e: f64) -> f64 {
    let m = mean_anomaly_rad;
    let mut ecc_anom = m + e * m.sin();
    for _ in 0..30 {
        let delta = (ecc_anom - e * ecc_anom.sin() - m) / (1.0 - e * ecc_anom.cos());
        ecc_anom -= delta;
        if delta.abs() < 1e-12 {
            break;
        }
    }
    ecc_anom
}

/// Heliocentric J2000 ecliptic `[x, y, z]` in AU.
///
/// `t` = Julian centuries of TT since J2000.0.
pub(crate) fn heliocentric_ecliptic(el: &OrbitalElements, t: f64) -> [f64; 3] {
    let at = |i: usize| el.base[i] + el.rate[i] * t;
    let a = at(0);
    let e = at(1);
    let incl = at(2).to_radians();
    let mean_lon = at(3);
    let peri_lon = at(4);
    let node = at(5);

    let arg_peri = (peri_lon - node).to_radians();
    let mean_anom = (mean_lon - peri_lon).rem_euclid(360.0).to_radians();
    let node = node.to_radians();

    let ecc_anom = solve_kepler(mean_anom, e);
    let xp = a * (ecc_anom.cos() - e);
    let yp = a * (1.0 - e * e).sqrt() * ecc_anom.sin();

    let (sw, cw) = arg_peri.sin_cos();
    let (so, co) = node.sin_cos();
    let (si, ci) = incl.sin_cos();

    [
        (cw * co - sw * so * ci) * xp + (-sw * co - cw * so * ci) * yp,
        (cw * so + sw * co * ci) * xp + (-sw * so + cw * co * ci) * yp,
        (sw * si) * xp + (cw * si) * yp,
    ]
}
