//! Rotations between ecliptic and equatorial Cartesian frames.
//!
//! Both are right-handed rotations about the shared x-axis (the equinox
//! direction) by the obliquity ε.

/// Ecliptic `[x, y, z]` → equatorial `[x, y, z]` for obliquity `eps_rad`.
pub fn ecliptic_to_equatorial(v: &[f64; 3], eps_rad: f64) -> [f64; 3] {
    let (s, c) = eps_rad.sin_cos();
    [v[0], c * v[1] - s * v[2], s * v[1] + c * v[2]]
}

/// Equatorial `[x, y, z]` → ecliptic `[x, y, z]` for obliquity `eps_rad`.
pub fn equatorial_to_ecliptic(v: &[f64; 3], eps_rad: f64) -> [f64; 3] {
    let (s, c) = eps_rad.sin_cos();
    [v[0], c * v[1] + s * v[2], -s * v[1] + c * v[2]]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::OBLIQUITY_J2000_RAD;

    #[test]
    fn x_axis_invariant() {
        let v = ecliptic_to_equatorial(&[1.0, 0.0, 0.0], OBLIQUITY_J2000_RAD);
        assert_eq!(v, [1.0, 0.0, 0.0]);
    }

    #[test]
    fn ecliptic_pole_tilts_toward_minus_y() {
        let v = ecliptic_to_equatorial(&[0.0, 0.0, 1.0], OBLIQUITY_J2000_RAD);
        assert!((v[1] + OBLIQUITY_J2000_RAD.sin()).abs() < 1e-15);
        assert!((v[2] - OBLIQUITY_J2000_RAD.cos()).abs() < 1e-15);
    }

    #[test]
    fn roundtrip() {
        let v = [0.3, -1.2, 0.7];
        let back = equatorial_to_ecliptic(&ecliptic_to_equatorial(&v, 0.41), 0.41);
        for i in 0..3 {
            assert!((v[i] - back[i]).abs() < 1e-14, "axis {i}");
        }
    }
}
