//! `Moment`: an immutable civil date-time with its derived time scales.
//!
//! The civil representation keeps the caller's UTC offset so it can be
//! echoed back in results. The astronomical scales are computed once at
//! construction:
//! - `jd_ut`: Julian Date on the UT scale (UT1 − UTC ignored)
//! - `jd_tt`: Julian Date on the TT scale (`jd_ut + ΔT`)

use chrono::{DateTime, Datelike, FixedOffset, NaiveDateTime, TimeDelta, Timelike, Utc};

use crate::delta_t::delta_t_seconds;
use crate::error::TimeError;
use crate::julian::{
    DAYS_PER_JULIAN_CENTURY, DAYS_PER_JULIAN_YEAR, J2000_JD, SECONDS_PER_DAY, calendar_to_jd,
};

/// Julian Date of the Unix epoch (1970-Jan-01 00:00 UTC).
const UNIX_EPOCH_JD: f64 = 2_440_587.5;

/// Largest accepted UTC offset magnitude (±14 h).
const MAX_OFFSET_SECONDS: i32 = 14 * 3600;

/// Naive formats accepted by [`Moment::parse`] when no offset is embedded.
const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// A point in time, fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Moment {
    civil: DateTime<FixedOffset>,
    jd_ut: f64,
    jd_tt: f64,
}

impl Moment {
    /// Build from an offset-aware civil date-time.
    pub fn from_datetime(civil: DateTime<FixedOffset>) -> Self {
        let utc = civil.with_timezone(&Utc);
        let jd_ut = utc_to_jd(&utc);
        Self {
            civil,
            jd_ut,
            jd_tt: jd_ut + delta_t_seconds(decimal_year(jd_ut)) / SECONDS_PER_DAY,
        }
    }

    /// Build from a naive civil date-time and its UTC offset in seconds
    /// (east positive, e.g. `19800` for IST).
    pub fn from_civil(civil: NaiveDateTime, utc_offset_seconds: i32) -> Result<Self, TimeError> {
        if utc_offset_seconds.abs() > MAX_OFFSET_SECONDS {
            return Err(TimeError::InvalidOffset(utc_offset_seconds));
        }
        let offset = FixedOffset::east_opt(utc_offset_seconds)
            .ok_or(TimeError::InvalidOffset(utc_offset_seconds))?;
        let aware = civil
            .and_local_timezone(offset)
            .single()
            .ok_or_else(|| TimeError::Parse(format!("ambiguous local time {civil}")))?;
        Ok(Self::from_datetime(aware))
    }

    /// Parse an RFC 3339 date-time (`2026-02-05T10:00:00+05:30`), or a naive
    /// one (`2026-02-05T10:00:00`) interpreted at `default_offset_seconds`.
    pub fn parse(input: &str, default_offset_seconds: i32) -> Result<Self, TimeError> {
        let input = input.trim();
        if let Ok(aware) = DateTime::parse_from_rfc3339(input) {
            return Ok(Self::from_datetime(aware));
        }
        for fmt in NAIVE_FORMATS {
            if let Ok(naive) = NaiveDateTime::parse_from_str(input, fmt) {
                return Self::from_civil(naive, default_offset_seconds);
            }
        }
        Err(TimeError::Parse(format!(
            "unrecognised date-time '{input}' (expected YYYY-MM-DDThh:mm[:ss][±hh:mm])"
        )))
    }

    /// Build from a Julian Date on the UT scale. The civil form is UTC.
    pub fn from_jd_ut(jd_ut: f64) -> Result<Self, TimeError> {
        if !jd_ut.is_finite() {
            return Err(TimeError::NonFiniteJd);
        }
        let unix_seconds = (jd_ut - UNIX_EPOCH_JD) * SECONDS_PER_DAY;
        let whole = unix_seconds.floor();
        let nanos = ((unix_seconds - whole) * 1e9).round().min(999_999_999.0) as u32;
        let utc = DateTime::<Utc>::from_timestamp(whole as i64, nanos)
            .ok_or(TimeError::OutOfRange { jd_ut })?;
        Ok(Self {
            civil: utc.fixed_offset(),
            jd_ut,
            jd_tt: jd_ut + delta_t_seconds(decimal_year(jd_ut)) / SECONDS_PER_DAY,
        })
    }

    /// The same instant shifted by `hours` (negative = earlier).
    ///
    /// The JD scales move by exactly `hours / 24`; ΔT is held fixed.
    pub fn shifted_hours(&self, hours: f64) -> Result<Self, TimeError> {
        let delta = TimeDelta::try_milliseconds((hours * 3_600_000.0).round() as i64)
            .ok_or(TimeError::OutOfRange { jd_ut: self.jd_ut })?;
        let civil = self
            .civil
            .checked_add_signed(delta)
            .ok_or(TimeError::OutOfRange { jd_ut: self.jd_ut })?;
        Ok(Self {
            civil,
            jd_ut: self.jd_ut + hours / 24.0,
            jd_tt: self.jd_tt + hours / 24.0,
        })
    }

    /// Civil date-time with the caller's UTC offset.
    pub fn civil(&self) -> DateTime<FixedOffset> {
        self.civil
    }

    /// The instant in UTC.
    pub fn utc(&self) -> DateTime<Utc> {
        self.civil.with_timezone(&Utc)
    }

    /// Julian Date (UT).
    pub fn jd_ut(&self) -> f64 {
        self.jd_ut
    }

    /// Julian Date (TT).
    pub fn jd_tt(&self) -> f64 {
        self.jd_tt
    }

    /// Days of UT since J2000.0 (may be negative).
    pub fn days_since_j2000(&self) -> f64 {
        self.jd_ut - J2000_JD
    }

    /// Julian years of UT since J2000.0.
    pub fn years_since_j2000(&self) -> f64 {
        self.days_since_j2000() / DAYS_PER_JULIAN_YEAR
    }

    /// Julian centuries of TT since J2000.0.
    pub fn centuries_tt(&self) -> f64 {
        (self.jd_tt - J2000_JD) / DAYS_PER_JULIAN_CENTURY
    }

    /// Decimal Gregorian year (approximate, for ΔT and range checks).
    pub fn decimal_year(&self) -> f64 {
        decimal_year(self.jd_ut)
    }
}

impl std::fmt::Display for Moment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.civil.to_rfc3339())
    }
}

fn utc_to_jd(utc: &DateTime<Utc>) -> f64 {
    let seconds = utc.second() as f64 + utc.nanosecond() as f64 / 1e9;
    let day_frac = utc.day() as f64
        + utc.hour() as f64 / 24.0
        + utc.minute() as f64 / 1440.0
        + seconds / SECONDS_PER_DAY;
    calendar_to_jd(utc.year(), utc.month(), day_frac)
}

fn decimal_year(jd: f64) -> f64 {
    2000.0 + (jd - J2000_JD) / DAYS_PER_JULIAN_YEAR
}
