//! Tests for main.rs initialization logic

use std::io::Write;

use fitness_tracker::config::{Config, OutputFormat};
use fitness_tracker_cli::{CliError, DEFAULT_LOG_FILTER, resolve_packages, run};

#[test]
fn test_env_filter_creation() {
    let env_filter = tracing_subscriber::EnvFilter::try_new(DEFAULT_LOG_FILTER);
    assert!(env_filter.is_ok());
}

#[test]
fn test_env_filter_fallback() {
    // Invalid filters fall back to the default instead of aborting startup
    let env_filter = tracing_subscriber::EnvFilter::try_new("invalid[[[filter")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(DEFAULT_LOG_FILTER));
    assert!(!format!("{:?}", env_filter).is_empty());
}

#[test]
fn test_default_config_uses_samples() {
    let config = Config::from_env_with(|_| None).unwrap();
    let packages = resolve_packages(&config).unwrap();
    assert_eq!(packages.len(), 3);
}

#[test]
fn test_packages_file_drives_run() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"[{{"workout_type": "RUN", "data": [15000, 1, 75]}}, {{"workout_type": "SWM", "data": [1]}}]"#
    )
    .unwrap();
    let path = file.path().to_string_lossy().into_owned();
    let config = Config::from_env_with(|k| match k {
        "FITNESS_TRACKER_PACKAGES" => Some(path.clone()),
        "FITNESS_TRACKER_OUTPUT" => Some("json".into()),
        _ => None,
    })
    .unwrap();
    assert_eq!(config.output, OutputFormat::Json);

    let packages = resolve_packages(&config).unwrap();
    let mut buf = Vec::new();
    let report = run(&packages, config.output, &mut buf).unwrap();
    assert_eq!(report.processed, 1);
    assert_eq!(report.failed, 1);
    assert!(String::from_utf8(buf).unwrap().contains("\"training_type\":\"Running\""));
}

#[test]
fn test_missing_packages_file() {
    let config = Config {
        packages_path: Some("/nonexistent/fitness-tracker/packages.json".into()),
        output: OutputFormat::Text,
    };
    assert!(matches!(resolve_packages(&config), Err(CliError::Tracker(_))));
}
