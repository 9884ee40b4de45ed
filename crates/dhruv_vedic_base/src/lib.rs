//! Vedic primitives built on the ephemeris seam.
//!
//! This crate provides:
//! - Linear ayanamsha and the tropical → sidereal shift
//! - Lagna (Ascendant) from sidereal time, latitude and obliquity
//! - Rashi, nakshatra/pada and nari lookup
//! - The graha trait table with retrograde, combustion and dignity checks
//! - Mean lunar nodes
//! - Divisional (varga) sign mapping
//! - Manglik and Sade Sati classification

pub mod amsha;
pub mod ayanamsha;
pub mod combustion;
pub mod dignity;
pub mod dosha;
pub mod error;
pub mod graha;
pub mod lagna;
pub mod lunar_nodes;
pub mod motion;
pub mod nakshatra;
pub mod rashi;
pub mod sidereal;
pub mod util;

pub use amsha::{ALL_VARGAS, Varga, varga_degree, varga_longitude, varga_sign};
pub use ayanamsha::{LinearAyanamsha, ayanamsha_deg};
pub use combustion::{combustion_threshold, is_combust, is_combust_with, within_orb};
pub use dignity::{is_debilitated, is_exalted};
pub use dosha::{
    ManglikStatus, SadeSatiPhase, SadeSatiStatus, house_offset, manglik, sade_sati,
};
pub use error::VedicError;
pub use graha::{ALL_GRAHAS, GRAHA_TRAITS, Graha, GrahaTraits};
pub use lagna::{ascendant_longitude_deg, ramc_deg, tropical_lagna};
pub use lunar_nodes::{MeanNodeModel, ketu_from_rahu, mean_rahu_deg};
pub use motion::{hourly_motion_deg, is_retrograde, signed_motion_deg};
pub use nakshatra::{
    ALL_NAKSHATRAS_27, Nakshatra, NakshatraInfo, Nari, nakshatra_from_longitude, nari_from_index,
};
pub use rashi::{
    ALL_RASHIS, Dms, Element, Rashi, RashiInfo, deg_to_dms, degrees_in_sign, dms_to_deg,
    rashi_from_longitude, sign_number,
};
pub use sidereal::{to_sidereal, tropical_longitude};
pub use util::{angular_separation, normalize_360};
