//! Integration tests for logging functionality

use cosmos_demo::config::LoggingConfig;
use cosmos_demo::domain::DemoError;
use cosmos_demo::logging::init_logging;
use tempfile::TempDir;

#[test]
fn test_logging_config_default() {
    let config = LoggingConfig::default();
    assert!(!config.local_enabled);
    assert_eq!(config.local_path, "./logs");
    assert_eq!(config.local_rotation, "daily");
}

#[test]
fn test_invalid_level_rejected_before_install() {
    let err = init_logging("verbose", &LoggingConfig::default())
        .err()
        .unwrap();
    assert!(matches!(err, DemoError::Configuration(_)));
}

// Installs the global subscriber, so it is the only test here that succeeds in doing so
#[test]
fn test_file_logging_creates_directory() {
    let temp_dir = TempDir::new().unwrap();
    let log_path = temp_dir.path().join("logs");

    let config = LoggingConfig {
        local_enabled: true,
        local_path: log_path.to_string_lossy().to_string(),
        local_rotation: "never".to_string(),
    };

    let guard = init_logging("debug", &config).expect("Failed to initialize logging");
    tracing::info!(test = "file-logging", "Written to the rolling file");
    drop(guard);

    assert!(log_path.is_dir());
    assert!(log_path.join("cosmos-demo.log").exists());

    // A second subscriber cannot be installed
    let err = init_logging("info", &LoggingConfig::default()).err().unwrap();
    assert!(matches!(err, DemoError::Other(_)));
}
