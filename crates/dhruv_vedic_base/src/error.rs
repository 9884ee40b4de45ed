//! Error types for Vedic calculations.

use std::error::Error;
use std::fmt::{Display, Formatter};

use dhruv_core::EngineError;
use dhruv_time::TimeError;

/// Errors from Vedic base calculations.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum VedicError {
    /// Error from the ephemeris adapter.
    Engine(EngineError),
    /// Error from time construction or shifting.
    Time(TimeError),
    /// Invalid geographic location parameter.
    InvalidLocation(&'static str),
    /// The formula is undefined for the given input.
    Domain(&'static str),
    /// Divisional chart number outside the supported set.
    UnsupportedDivision(u32),
}

impl Display for VedicError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Engine(e) => write!(f, "engine error: {e}"),
            Self::Time(e) => write!(f, "time error: {e}"),
            Self::InvalidLocation(msg) => write!(f, "invalid location: {msg}"),
            Self::Domain(msg) => write!(f, "domain error: {msg}"),
            Self::UnsupportedDivision(d) => write!(f, "unsupported divisional chart D{d}"),
        }
    }
}

impl Error for VedicError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Engine(e) => Some(e),
            Self::Time(e) => Some(e),
            _ => None,
        }
    }
}

impl From<EngineError> for VedicError {
    fn from(e: EngineError) -> Self {
        Self::Engine(e)
    }
}

impl From<TimeError> for VedicError {
    fn from(e: TimeError) -> Self {
        Self::Time(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn engine_error_is_source() {
        let err = VedicError::from(EngineError::EpochOutOfRange { jd_tt: 2_300_000.0 });
        let source = err.source().expect("wrapped engine error");
        assert!(source.to_string().contains("epoch out of range"));
    }

    #[test]
    fn time_error_is_source() {
        let err = VedicError::from(TimeError::NonFiniteJd);
        assert_eq!(
            err.source().map(ToString::to_string),
            Some(TimeError::NonFiniteJd.to_string())
        );
    }

    #[test]
    fn leaf_variants_have_no_source() {
        assert!(VedicError::Domain("pole").source().is_none());
        assert!(VedicError::UnsupportedDivision(5).source().is_none());
    }
}
