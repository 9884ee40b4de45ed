//! Error types for civil-time parsing and time-scale conversions.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from civil date-time parsing or Julian Date conversion.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum TimeError {
    /// Civil date-time string could not be parsed.
    Parse(String),
    /// UTC offset outside ±14 h (or not a whole number of seconds).
    InvalidOffset(i32),
    /// Julian Date is not finite.
    NonFiniteJd,
    /// Date cannot be represented as a civil date-time.
    OutOfRange { jd_ut: f64 },
}

impl Display for TimeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(msg) => write!(f, "date-time parse error: {msg}"),
            Self::InvalidOffset(secs) => write!(f, "invalid UTC offset: {secs} s"),
            Self::NonFiniteJd => write!(f, "Julian Date must be finite"),
            Self::OutOfRange { jd_ut } => write!(f, "JD {jd_ut} outside civil calendar range"),
        }
    }
}

impl Error for TimeError {}

impl From<chrono::ParseError> for TimeError {
    fn from(e: chrono::ParseError) -> Self {
        Self::Parse(e.to_string())
    }
}
