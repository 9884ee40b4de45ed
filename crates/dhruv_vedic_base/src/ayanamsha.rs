//! Linear ayanamsha model.
//!
//! The ayanamsha is the angular offset between the tropical zodiac (defined
//! by the vernal equinox) and the sidereal zodiac (anchored to fixed stars).
//! Here it grows linearly from a reference value at an epoch:
//!
//! `ayanamsha = base + (JD − epoch) / 365.25 × rate / 3600`
//!
//! The default is Lahiri (Chitrapaksha), 23°51′25.5″ at J2000.0, with the
//! conventional 50.29″/yr precession.

use dhruv_time::{DAYS_PER_JULIAN_YEAR, J2000_JD, Moment};

/// Lahiri ayanamsha at J2000.0, degrees.
pub const LAHIRI_J2000_DEG: f64 = 23.857_08;

/// Annual precession used by the linear model, arcseconds per Julian year.
pub const PRECESSION_ARCSEC_PER_YEAR: f64 = 50.29;

/// Ayanamsha as a linear function of time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearAyanamsha {
    /// Value at `epoch_jd`, degrees.
    pub base_deg: f64,
    /// Growth rate, arcseconds per Julian year.
    pub rate_arcsec_per_year: f64,
    /// Reference epoch, JD(UT).
    pub epoch_jd: f64,
}

impl LinearAyanamsha {
    /// Lahiri with the linear 50.29″/yr rate.
    pub const LAHIRI: Self = Self {
        base_deg: LAHIRI_J2000_DEG,
        rate_arcsec_per_year: PRECESSION_ARCSEC_PER_YEAR,
        epoch_jd: J2000_JD,
    };

    pub const fn new(base_deg: f64, rate_arcsec_per_year: f64, epoch_jd: f64) -> Self {
        Self {
            base_deg,
            rate_arcsec_per_year,
            epoch_jd,
        }
    }

    /// Ayanamsha in degrees at a Julian Date (UT).
    pub fn at_jd(&self, jd_ut: f64) -> f64 {
        let years = (jd_ut - self.epoch_jd) / DAYS_PER_JULIAN_YEAR;
        self.base_deg + years * self.rate_arcsec_per_year / 3600.0
    }

    /// Ayanamsha in degrees at a moment.
    pub fn at(&self, moment: &Moment) -> f64 {
        self.at_jd(moment.jd_ut())
    }
}

impl Default for LinearAyanamsha {
    fn default() -> Self {
        Self::LAHIRI
    }
}

/// Lahiri ayanamsha in degrees at a moment.
pub fn ayanamsha_deg(moment: &Moment) -> f64 {
    LinearAyanamsha::LAHIRI.at(moment)
}
