//! Civil time and astronomical time scales for chart computation.
//!
//! This crate provides:
//! - Julian Date ↔ calendar conversions
//! - ΔT (TT − UT) polynomials
//! - Greenwich mean sidereal time
//! - [`Moment`], the immutable instant every chart is computed for

pub mod delta_t;
pub mod error;
pub mod julian;
pub mod moment;
pub mod sidereal;

pub use delta_t::delta_t_seconds;
pub use error::TimeError;
pub use julian::{
    DAYS_PER_JULIAN_CENTURY, DAYS_PER_JULIAN_YEAR, J2000_JD, SECONDS_PER_DAY, calendar_to_jd,
    jd_to_calendar, jd_to_centuries,
};
pub use moment::Moment;
pub use sidereal::{earth_rotation_angle_rad, gmst_hours, gmst_rad};
