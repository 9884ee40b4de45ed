//! Frame conversion helpers for chart computations.
//!
//! Provides the obliquity of the ecliptic, ecliptic ↔ equatorial rotations,
//! the RA/Dec → ecliptic-longitude transform, Cartesian ↔ spherical
//! conversion, IAU 2006 general precession and the Delaunay arguments.

pub mod delaunay;
pub mod equatorial;
pub mod obliquity;
pub mod precession;
pub mod rotation;
pub mod spherical;

pub use delaunay::{fundamental_arguments, fundamental_arguments_deg};
pub use equatorial::ecliptic_longitude_deg;
pub use obliquity::{OBLIQUITY_J2000_DEG, OBLIQUITY_J2000_RAD, mean_obliquity_deg};
pub use precession::{
    general_precession_longitude_arcsec, general_precession_longitude_deg,
    precess_longitude_from_j2000_deg,
};
pub use rotation::{ecliptic_to_equatorial, equatorial_to_ecliptic};
pub use spherical::{SphericalCoords, cartesian_to_spherical, spherical_to_cartesian};
