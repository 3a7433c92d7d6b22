//! Integration tests for configuration loading and validation
//!
//! Tests that modify environment variables hold `ENV_MUTEX` to avoid
//! interfering with each other.

use cosmos_demo::config::load_config;
use cosmos_demo::domain::{DemoError, ErrorKind};
use secrecy::ExposeSecret;
use std::io::Write;
use std::sync::Mutex;
use tempfile::NamedTempFile;

// Mutex to serialize tests that modify environment variables
static ENV_MUTEX: Mutex<()> = Mutex::new(());

const OVERRIDE_VARS: &[&str] = &[
    "COSMOS_DEMO_APPLICATION_LOG_LEVEL",
    "COSMOS_DEMO_COSMOSDB_ENDPOINT",
    "COSMOS_DEMO_COSMOSDB_KEY",
    "COSMOS_DEMO_WORKFLOW_DATABASE",
    "COSMOS_DEMO_WORKFLOW_CONTAINER",
    "COSMOS_DEMO_WORKFLOW_DOCUMENT_PARTITION_KEY_PATH",
    "COSMOS_DEMO_LOGGING_LOCAL_ENABLED",
    "COSMOS_DEMO_LOGGING_LOCAL_PATH",
    "TEST_COSMOS_MASTER_KEY",
];

/// Helper function to clean up environment variables
fn cleanup_env_vars() {
    for var in OVERRIDE_VARS {
        std::env::remove_var(var);
    }
}

fn write_config(contents: &str) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(contents.as_bytes()).unwrap();
    temp_file.flush().unwrap();
    temp_file
}

const MINIMAL_CONFIG: &str = r#"
[cosmosdb]
endpoint = "https://test.documents.azure.com:443/"
key = "dGVzdC1rZXk="
"#;

#[test]
fn test_load_complete_config() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();

    let file = write_config(
        r#"
[application]
log_level = "debug"

[cosmosdb]
endpoint = "https://test.documents.azure.com:443/"
key = "dGVzdC1rZXk="

[workflow]
database = "Shop"
container = "Orders"
document_partition_key_path = "/tenant"

[logging]
local_enabled = true
local_path = "/tmp/cosmos-demo"
local_rotation = "hourly"
"#,
    );

    let config = load_config(file.path()).expect("Failed to load config");

    assert_eq!(config.application.log_level, "debug");
    assert_eq!(
        config.cosmosdb.endpoint,
        "https://test.documents.azure.com:443/"
    );
    assert_eq!(config.cosmosdb.key.expose_secret().as_ref(), "dGVzdC1rZXk=");
    assert_eq!(config.workflow.database, "Shop");
    assert_eq!(config.workflow.container, "Orders");
    assert_eq!(config.workflow.document_partition_key_path, "/tenant");
    assert!(config.logging.local_enabled);
    assert_eq!(config.logging.local_rotation, "hourly");
}

#[test]
fn test_load_minimal_config_uses_defaults() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();

    let file = write_config(MINIMAL_CONFIG);
    let config = load_config(file.path()).unwrap();

    assert_eq!(config.application.log_level, "info");
    assert_eq!(config.workflow.database, "Families");
    assert_eq!(config.workflow.container, "Families");
    assert_eq!(config.workflow.document_partition_key_path, "/location/state");
    assert!(!config.logging.local_enabled);
}

#[test]
fn test_missing_file_is_configuration_error() {
    let err = load_config("/nonexistent/cosmos-demo.toml").unwrap_err();
    assert!(matches!(err, DemoError::Configuration(_)));
    assert_eq!(err.kind(), ErrorKind::ConfigurationMissing);
    assert_eq!(err.exit_code(), 2);
}

#[test]
fn test_env_var_substitution() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();
    std::env::set_var("TEST_COSMOS_MASTER_KEY", "c3Vic3RpdHV0ZWQ=");

    let file = write_config(
        r#"
# key = "${NOT_SUBSTITUTED_IN_COMMENTS}"
[cosmosdb]
endpoint = "https://test.documents.azure.com:443/"
key = "${TEST_COSMOS_MASTER_KEY}"
"#,
    );

    let config = load_config(file.path()).unwrap();
    assert_eq!(
        config.cosmosdb.key.expose_secret().as_ref(),
        "c3Vic3RpdHV0ZWQ="
    );

    cleanup_env_vars();
}

#[test]
fn test_missing_env_var_is_reported() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();

    let file = write_config(
        r#"
[cosmosdb]
endpoint = "https://test.documents.azure.com:443/"
key = "${TEST_COSMOS_MASTER_KEY}"
"#,
    );

    let err = load_config(file.path()).unwrap_err();
    assert!(matches!(err, DemoError::Configuration(_)));
    assert!(err.to_string().contains("TEST_COSMOS_MASTER_KEY"));
}

#[test]
fn test_env_overrides() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();
    std::env::set_var("COSMOS_DEMO_COSMOSDB_ENDPOINT", "https://override.documents.azure.com:443/");
    std::env::set_var("COSMOS_DEMO_COSMOSDB_KEY", "b3ZlcnJpZGU=");
    std::env::set_var("COSMOS_DEMO_WORKFLOW_DATABASE", "Overridden");
    std::env::set_var("COSMOS_DEMO_APPLICATION_LOG_LEVEL", "warn");

    let file = write_config(MINIMAL_CONFIG);
    let config = load_config(file.path()).unwrap();

    assert_eq!(
        config.cosmosdb.endpoint,
        "https://override.documents.azure.com:443/"
    );
    assert_eq!(config.cosmosdb.key.expose_secret().as_ref(), "b3ZlcnJpZGU=");
    assert_eq!(config.workflow.database, "Overridden");
    assert_eq!(config.workflow.container, "Families");
    assert_eq!(config.application.log_level, "warn");

    cleanup_env_vars();
}

#[test]
fn test_override_is_validated() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();
    std::env::set_var("COSMOS_DEMO_COSMOSDB_ENDPOINT", "not a url");

    let file = write_config(MINIMAL_CONFIG);
    let err = load_config(file.path()).unwrap_err();
    assert!(matches!(err, DemoError::Configuration(_)));

    cleanup_env_vars();
}

#[test]
fn test_invalid_endpoint_rejected() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();

    let file = write_config(
        r#"
[cosmosdb]
endpoint = "http://test.documents.azure.com:443/"
key = "dGVzdC1rZXk="
"#,
    );

    let err = load_config(file.path()).unwrap_err();
    assert!(err.to_string().contains("https"));
}

#[test]
fn test_local_emulator_endpoint_allowed() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();

    let file = write_config(
        r#"
[cosmosdb]
endpoint = "http://localhost:8081/"
key = "dGVzdC1rZXk="
"#,
    );

    assert!(load_config(file.path()).is_ok());
}

#[test]
fn test_empty_key_rejected() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();

    let file = write_config(
        r#"
[cosmosdb]
endpoint = "https://test.documents.azure.com:443/"
key = "   "
"#,
    );

    let err = load_config(file.path()).unwrap_err();
    assert_eq!(err.exit_code(), 2);
}

#[test]
fn test_invalid_workflow_ids_rejected() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();

    let file = write_config(
        r#"
[cosmosdb]
endpoint = "https://test.documents.azure.com:443/"
key = "dGVzdC1rZXk="

[workflow]
container = "bad/container"
"#,
    );

    assert!(load_config(file.path()).is_err());
}

#[test]
fn test_malformed_toml_rejected() {
    let file = write_config("[cosmosdb\nendpoint = ");
    let err = load_config(file.path()).unwrap_err();
    assert!(matches!(err, DemoError::Configuration(_)));
}
