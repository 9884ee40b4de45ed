//! Cartesian ↔ Spherical coordinate conversion.
//!
//! Distances are in whatever unit the caller's vectors use (AU throughout
//! the analytic engine).

use std::f64::consts::PI;

/// Spherical coordinates: longitude, latitude, distance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SphericalCoords {
    /// Longitude in degrees, range [0, 360).
    /// Measured in the x-y plane from +x toward +y.
    pub lon_deg: f64,
    /// Latitude in degrees, range [-90, 90].
    /// Elevation above the x-y plane.
    pub lat_deg: f64,
    /// Distance from origin.
    pub distance: f64,
}

/// Convert Cartesian `[x, y, z]` to spherical coordinates.
///
/// Longitude is measured in the x-y plane from +x toward +y.
/// Latitude is elevation above the x-y plane.
pub fn cartesian_to_spherical(xyz: &[f64; 3]) -> SphericalCoords {
    let x = xyz[0];
    let y = xyz[1];
    let z = xyz[2];

    let r = (x * x + y * y + z * z).sqrt();

    if r == 0.0 {
        return SphericalCoords {
            lon_deg: 0.0,
            lat_deg: 0.0,
            distance: 0.0,
        };
    }

    let lon = y.atan2(x);
    let lat = (z / r).asin();

    SphericalCoords {
        lon_deg: if lon < 0.0 { lon + 2.0 * PI } else { lon }.to_degrees(),
        lat_deg: lat.to_degrees(),
        distance: r,
    }
}

/// Convert spherical coordinates back to Cartesian `[x, y, z]`.
pub fn spherical_to_cartesian(s: &SphericalCoords) -> [f64; 3] {
    let lon_rad = s.lon_deg.to_radians();
    let lat_rad = s.lat_deg.to_radians();
    let cos_lat = lat_rad.cos();
    [
        s.distance * cos_lat * lon_rad.cos(),
        s.distance * cos_lat * lon_rad.sin(),
        s.distance * lat_rad.sin(),
    ]
}
