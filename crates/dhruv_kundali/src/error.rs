//! Chart computation errors.

use std::error::Error;
use std::fmt::{Display, Formatter};

use dhruv_config::ConfigError;
use dhruv_core::{EngineError, GeoLocation};
use dhruv_vedic_base::{Graha, VedicError};

/// Broad classification of a [`ChartError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Invalid date, time, coordinates or configuration.
    Input,
    /// Undefined math or an ephemeris lookup failure.
    Domain,
    /// An internal invariant of the assembled chart does not hold.
    Consistency,
}

/// Where in the chart a failure happened.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ErrorContext {
    /// The graha being computed, `None` for chart-wide steps (Lagna, ayanamsha).
    pub graha: Option<Graha>,
    pub jd_ut: f64,
    pub location: GeoLocation,
}

impl Display for ErrorContext {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if let Some(g) = self.graha {
            write!(f, "{g} ")?;
        }
        write!(
            f,
            "at JD(UT) {:.6}, lat {:.4}, lon {:.4}",
            self.jd_ut, self.location.latitude_deg, self.location.longitude_deg
        )
    }
}

/// Errors from [`compute_chart`](crate::compute_chart).
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum ChartError {
    /// The chart configuration failed validation.
    Config(ConfigError),
    /// The observer location is out of range.
    InvalidLocation {
        reason: &'static str,
        location: GeoLocation,
    },
    /// A computation step failed.
    Compute {
        source: VedicError,
        context: ErrorContext,
    },
    /// An assembled value broke a chart invariant.
    Consistency {
        check: &'static str,
        context: ErrorContext,
    },
}

impl ChartError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Config(_) | Self::InvalidLocation { .. } => ErrorKind::Input,
            Self::Compute { source, .. } => match source {
                VedicError::InvalidLocation(_)
                | VedicError::Time(_)
                | VedicError::UnsupportedDivision(_)
                | VedicError::Engine(EngineError::InvalidLocation(_))
                | VedicError::Engine(EngineError::InvalidConfig(_)) => ErrorKind::Input,
                _ => ErrorKind::Domain,
            },
            Self::Consistency { .. } => ErrorKind::Consistency,
        }
    }

    pub fn context(&self) -> Option<&ErrorContext> {
        match self {
            Self::Compute { context, .. } | Self::Consistency { context, .. } => Some(context),
            _ => None,
        }
    }
}

impl Display for ChartError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Config(e) => write!(f, "invalid chart config: {e}"),
            Self::InvalidLocation { reason, location } => write!(
                f,
                "invalid location ({}, {}): {reason}",
                location.latitude_deg, location.longitude_deg
            ),
            Self::Compute { source, context } => write!(f, "{source} ({context})"),
            Self::Consistency { check, context } => {
                write!(f, "chart invariant violated: {check} ({context})")
            }
        }
    }
}

impl Error for ChartError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            Self::Compute { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<ConfigError> for ChartError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx() -> ErrorContext {
        ErrorContext {
            graha: Some(Graha::Mangal),
            jd_ut: 2_461_076.6875,
            location: GeoLocation::new(28.6139, 77.209, 0.0),
        }
    }

    #[test]
    fn domain_kind_for_epoch_range() {
        let e = ChartError::Compute {
            source: VedicError::Engine(EngineError::EpochOutOfRange { jd_tt: 0.0 }),
            context: ctx(),
        };
        assert_eq!(e.kind(), ErrorKind::Domain);
    }

    #[test]
    fn input_kind_for_location() {
        let e = ChartError::Compute {
            source: VedicError::Engine(EngineError::InvalidLocation("latitude")),
            context: ctx(),
        };
        assert_eq!(e.kind(), ErrorKind::Input);
    }

    #[test]
    fn consistency_kind() {
        let e = ChartError::Consistency {
            check: "sign out of range",
            context: ctx(),
        };
        assert_eq!(e.kind(), ErrorKind::Consistency);
    }

    #[test]
    fn display_carries_context() {
        let e = ChartError::Compute {
            source: VedicError::Domain("ascendant undefined at the poles"),
            context: ctx(),
        };
        let s = e.to_string();
        assert!(s.contains("Mars"), "{s}");
        assert!(s.contains("2461076.687500"), "{s}");
        assert!(s.contains("28.6139"), "{s}");
    }
}
