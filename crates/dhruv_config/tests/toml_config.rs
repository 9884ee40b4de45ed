//! Loading `ChartConfig` from TOML text and files.

use std::io::Write;

use dhruv_config::{ChartConfig, ConfigError};
use tempfile::NamedTempFile;

#[test]
fn partial_document_overrides_only_named_keys() {
    let toml_str = r#"
divisions = [9, 60]

[ayanamsa]
base_deg = 23.85

[combustion]
venus = 8.0

[ephemeris]
topocentric = false
"#;
    let c = ChartConfig::from_toml_str(toml_str).expect("valid TOML");
    assert_eq!(c.divisions, vec![9, 60]);
    assert_eq!(c.ayanamsa.base_deg, 23.85);
    assert_eq!(c.ayanamsa.rate_arcsec_per_year, 50.29);
    assert_eq!(c.combustion.venus, 8.0);
    assert_eq!(c.combustion.mars, 17.0);
    assert!(!c.ephemeris.topocentric);
    assert_eq!(c.motion.probe_hours, 1.0);
}

#[test]
fn malformed_toml_is_a_parse_error() {
    let err = ChartConfig::from_toml_str("divisions = [9,").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn wrong_type_is_a_parse_error() {
    let err = ChartConfig::from_toml_str("[motion]\nprobe_hours = \"one\"").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn parsed_values_are_validated() {
    let err = ChartConfig::from_toml_str("[motion]\nprobe_hours = -1.0").unwrap_err();
    assert_eq!(
        err,
        ConfigError::Invalid {
            field: "motion.probe_hours",
            reason: "must be positive"
        }
    );
}

#[test]
fn load_from_file() {
    let mut file = NamedTempFile::new().expect("temp file");
    writeln!(file, "divisions = [4]\n[lunar_node]\nbase_deg = 125.0").expect("write");
    let c = ChartConfig::load(file.path()).expect("load");
    assert_eq!(c.divisions, vec![4]);
    assert_eq!(c.lunar_node.base_deg, 125.0);
}

#[test]
fn load_missing_file_reports_path() {
    let err = ChartConfig::load(std::path::Path::new("/nonexistent/dhruv.toml")).unwrap_err();
    match err {
        ConfigError::Io { path, .. } => assert!(path.ends_with("dhruv.toml")),
        other => panic!("unexpected error: {other}"),
    }
}
