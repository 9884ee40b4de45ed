//! Model constants for chart computation.
//!
//! [`ChartConfig::default()`] reproduces the classical constants: linear
//! Lahiri ayanamsa, linear mean lunar node, one-hour retrograde probe and
//! the fixed combustion orbs. Every value can be overridden from TOML:
//!
//! ```toml
//! divisions = [9, 10]
//!
//! [ayanamsa]
//! base_deg = 23.85
//!
//! [combustion]
//! venus = 8.0
//! ```

mod error;

use std::path::Path;

use serde::{Deserialize, Serialize};

pub use error::ConfigError;

/// Divisions a chart may request. D1 is always computed.
pub const SUPPORTED_DIVISIONS: [u32; 7] = [1, 4, 6, 7, 9, 10, 60];

/// Divisional charts computed when none are configured.
pub const DEFAULT_DIVISIONS: [u32; 6] = [4, 6, 7, 9, 10, 60];

/// Linear ayanamsa model: `base_deg + years × rate_arcsec_per_year / 3600`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AyanamsaSettings {
    /// Value at the reference epoch, degrees.
    pub base_deg: f64,
    /// Annual precession, arcseconds per Julian year.
    pub rate_arcsec_per_year: f64,
    /// Reference epoch, JD.
    pub epoch_jd: f64,
}

impl Default for AyanamsaSettings {
    fn default() -> Self {
        Self {
            base_deg: 23.857_08,
            rate_arcsec_per_year: 50.29,
            epoch_jd: 2_451_545.0,
        }
    }
}

/// Linear mean lunar node: `base_deg − daily_motion_deg × days`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LunarNodeSettings {
    /// Tropical longitude of the ascending node at J2000.0, degrees.
    pub base_deg: f64,
    /// Westward motion, degrees per day.
    pub daily_motion_deg: f64,
}

impl Default for LunarNodeSettings {
    fn default() -> Self {
        Self {
            base_deg: 125.044_52,
            daily_motion_deg: 0.052_953_808_3,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MotionSettings {
    /// How far back the retrograde probe samples, in hours.
    pub probe_hours: f64,
    /// A raw longitude difference beyond this magnitude is a 0°/360° crossing.
    pub wrap_threshold_deg: f64,
}

impl Default for MotionSettings {
    fn default() -> Self {
        Self {
            probe_hours: 1.0,
            wrap_threshold_deg: 300.0,
        }
    }
}

/// Combustion orbs in degrees of separation from the Sun.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CombustionOrbs {
    pub moon: f64,
    pub mercury: f64,
    pub venus: f64,
    pub mars: f64,
    pub jupiter: f64,
    pub saturn: f64,
}

impl Default for CombustionOrbs {
    fn default() -> Self {
        Self {
            moon: 12.0,
            mercury: 14.0,
            venus: 10.0,
            mars: 17.0,
            jupiter: 11.0,
            saturn: 15.0,
        }
    }
}

impl CombustionOrbs {
    fn entries(&self) -> [(&'static str, f64); 6] {
        [
            ("combustion.moon", self.moon),
            ("combustion.mercury", self.mercury),
            ("combustion.venus", self.venus),
            ("combustion.mars", self.mars),
            ("combustion.jupiter", self.jupiter),
            ("combustion.saturn", self.saturn),
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EphemerisSettings {
    /// Correct body positions for diurnal parallax at the observer.
    /// Read when the engine is built from this configuration.
    pub topocentric: bool,
}

impl Default for EphemerisSettings {
    fn default() -> Self {
        Self { topocentric: true }
    }
}

/// Full chart computation configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    pub ayanamsa: AyanamsaSettings,
    pub lunar_node: LunarNodeSettings,
    pub motion: MotionSettings,
    pub combustion: CombustionOrbs,
    pub ephemeris: EphemerisSettings,
    /// Divisional charts to compute alongside D1, in output order.
    pub divisions: Vec<u32>,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            ayanamsa: AyanamsaSettings::default(),
            lunar_node: LunarNodeSettings::default(),
            motion: MotionSettings::default(),
            combustion: CombustionOrbs::default(),
            ephemeris: EphemerisSettings::default(),
            divisions: DEFAULT_DIVISIONS.to_vec(),
        }
    }
}

impl ChartConfig {
    /// Parse and validate a TOML document. Missing keys keep their defaults.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!(path = %path.display(), divisions = ?config.divisions, "loaded chart config");
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        finite("ayanamsa.base_deg", self.ayanamsa.base_deg)?;
        finite("ayanamsa.epoch_jd", self.ayanamsa.epoch_jd)?;
        positive("ayanamsa.rate_arcsec_per_year", self.ayanamsa.rate_arcsec_per_year)?;
        finite("lunar_node.base_deg", self.lunar_node.base_deg)?;
        positive("lunar_node.daily_motion_deg", self.lunar_node.daily_motion_deg)?;
        positive("motion.probe_hours", self.motion.probe_hours)?;

        let wrap = self.motion.wrap_threshold_deg;
        if !wrap.is_finite() || wrap <= 180.0 || wrap >= 360.0 {
            return Err(ConfigError::Invalid {
                field: "motion.wrap_threshold_deg",
                reason: "must lie strictly between 180 and 360",
            });
        }

        for (field, orb) in self.combustion.entries() {
            positive(field, orb)?;
            if orb >= 180.0 {
                return Err(ConfigError::Invalid {
                    field,
                    reason: "must be less than 180",
                });
            }
        }

        for (i, &d) in self.divisions.iter().enumerate() {
            if !SUPPORTED_DIVISIONS.contains(&d) {
                return Err(ConfigError::UnsupportedDivision(d));
            }
            if self.divisions[..i].contains(&d) {
                return Err(ConfigError::DuplicateDivision(d));
            }
        }
        Ok(())
    }
}

fn finite(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::Invalid {
            field,
            reason: "must be finite",
        })
    }
}

fn positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
    finite(field, value)?;
    if value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Invalid {
            field,
            reason: "must be positive",
        })
    }
}
