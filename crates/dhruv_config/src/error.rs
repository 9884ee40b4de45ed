use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

/// Errors from loading or validating a [`ChartConfig`](crate::ChartConfig).
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum ConfigError {
    Io { path: PathBuf, message: String },
    Parse(String),
    Invalid { field: &'static str, reason: &'static str },
    UnsupportedDivision(u32),
    DuplicateDivision(u32),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, message } => {
                write!(f, "cannot read config {}: {message}", path.display())
            }
            Self::Parse(msg) => write!(f, "config parse error: {msg}"),
            Self::Invalid { field, reason } => write!(f, "invalid config value {field}: {reason}"),
            Self::UnsupportedDivision(d) => write!(f, "unsupported divisional chart D{d}"),
            Self::DuplicateDivision(d) => write!(f, "divisional chart D{d} listed twice"),
        }
    }
}

impl Error for ConfigError {}

impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        Self::Parse(e.to_string())
    }
}
