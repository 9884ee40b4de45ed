//! Sidereal chart (kundali) assembly.
//!
//! Turns a moment and an observer location into a [`ChartResult`]: the
//! D1 chart with Lagna and nine grahas, the configured divisional charts,
//! the Chandra lagna chart and the dosha analysis.

pub mod chart;
pub mod chart_types;
pub mod error;

pub use chart::{
    analyze_doshas, chandra_chart, compute_chart, divisional_chart, engine_config, engine_for,
};
pub use chart_types::{
    Chart, ChartInput, ChartResult, DivisionalChart, DoshaAnalysis, LagnaEntry,
    NakshatraClassification, PlanetPosition,
};
pub use error::{ChartError, ErrorContext, ErrorKind};
