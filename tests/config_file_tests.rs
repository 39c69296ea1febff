//! Configuration and distance-table file loading.

mod support;

use std::io::Write;

use ftrt_rust::config::FtrtConfig;
use ftrt_rust::ephemeris::{EphemerisProvider, TableEphemeris};
use ftrt_rust::error::{ConfigError, EphemerisError};
use ftrt_rust::models::Body;

use support::date;

fn write_temp(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("create temp file");
    file.write_all(contents.as_bytes()).expect("write temp file");
    file
}

#[test]
fn test_load_config_from_file() {
    let file = write_temp(
        r#"
        solar_radius = 6.957e8
        astronomical_unit = 1.496e11

        [thresholds]
        normal = 0.9
        moderate = 1.3
        elevated = 1.9
        critical = 2.6
        "#,
    );

    let config = FtrtConfig::from_file(file.path()).unwrap();
    assert_eq!(config.thresholds.normal, 0.9);
    assert_eq!(config.masses.len(), 8);
}

#[test]
fn test_load_config_missing_file() {
    let err = FtrtConfig::from_file("/nonexistent/ftrt.toml").unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
}

#[test]
fn test_load_config_rejects_bad_thresholds() {
    let file = write_temp(
        r#"
        [thresholds]
        normal = 2.5
        moderate = 1.8
        elevated = 1.2
        critical = 0.8
        "#,
    );
    let err = FtrtConfig::from_file(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::NonAscendingThresholds(_)));
}

#[test]
fn test_load_config_rejects_syntax_error() {
    let file = write_temp("thresholds = [not toml");
    let err = FtrtConfig::from_file(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn test_load_distance_table_from_file() {
    let file = write_temp(
        r#"
        [days."2003-10-29"]
        mercury = 0.452
        venus = 0.721
        earth = 0.993
        mars = 0.464
        jupiter = 4.951
        saturn = 8.513
        uranus = 19.812
        neptune = 29.934
        "#,
    );

    let table = TableEphemeris::from_file(file.path()).unwrap();
    let distance = table
        .heliocentric_distance(Body::Jupiter, date(2003, 10, 29))
        .unwrap();
    assert!((distance.value() - 4.951 * 1.496e11).abs() < 1.0);
    // The file path doubles as the source label.
    assert_eq!(table.source(), file.path().display().to_string());
}

#[test]
fn test_load_distance_table_missing_file() {
    let err = TableEphemeris::from_file("/nonexistent/distances.toml").unwrap_err();
    assert!(matches!(err, EphemerisError::Io { .. }));
}
