//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::DemoConfig;
use super::secret::secret_string;
use crate::domain::errors::DemoError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::Path;
use std::sync::OnceLock;

/// Prefix for environment variable overrides
pub const ENV_PREFIX: &str = "COSMOS_DEMO_";

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (`${VAR}` syntax)
/// 3. Parses the TOML into [`DemoConfig`]
/// 4. Applies environment variable overrides (`COSMOS_DEMO_*` prefix)
/// 5. Validates the configuration
///
/// # Errors
///
/// Returns [`DemoError::Configuration`] if the file is missing or unreadable,
/// a referenced environment variable is unset, the TOML is malformed, or
/// validation fails.
///
/// # Examples
///
/// ```no_run
/// use cosmos_demo::config::load_config;
///
/// let config = load_config("cosmos-demo.toml").expect("Failed to load config");
/// println!("{}", config.cosmosdb.endpoint);
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<DemoConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(DemoError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        DemoError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    parse_config(&contents)
}

/// Parses configuration from TOML text
///
/// Same pipeline as [`load_config`] minus the file read.
///
/// # Errors
///
/// See [`load_config`].
pub fn parse_config(contents: &str) -> Result<DemoConfig> {
    let contents = substitute_env_vars(contents)?;

    let mut config: DemoConfig = toml::from_str(&contents)
        .map_err(|e| DemoError::Configuration(format!("Failed to parse TOML: {e}")))?;

    apply_env_overrides(&mut config);

    config.validate().map_err(|e| {
        DemoError::Configuration(format!("Configuration validation failed: {e}"))
    })?;

    tracing::debug!(
        endpoint = %config.cosmosdb.endpoint,
        database = %config.workflow.database,
        container = %config.workflow.container,
        "Configuration loaded"
    );

    Ok(config)
}

fn env_var_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}").expect("env var pattern is a valid regex")
    })
}

/// Substitutes environment variables in the format `${VAR_NAME}`
///
/// Comment lines are copied through untouched.
///
/// # Errors
///
/// Returns an error listing every referenced variable that is not set
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = env_var_pattern();
    let mut result = String::with_capacity(input.len());
    let mut missing_vars: Vec<String> = Vec::new();

    for line in input.lines() {
        if line.trim_start().starts_with('#') {
            result.push_str(line);
            result.push('\n');
            continue;
        }

        let mut processed_line = line.to_string();
        for cap in re.captures_iter(line) {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => {
                    processed_line = processed_line.replace(&cap[0], &value);
                }
                Err(_) => {
                    if !missing_vars.iter().any(|v| v == var_name) {
                        missing_vars.push(var_name.to_string());
                    }
                }
            }
        }
        result.push_str(&processed_line);
        result.push('\n');
    }

    if !missing_vars.is_empty() {
        return Err(DemoError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}

fn env_override(key: &str) -> Option<String> {
    std::env::var(format!("{ENV_PREFIX}{key}")).ok()
}

/// Applies environment variable overrides using the `COSMOS_DEMO_` prefix
///
/// Variables follow the pattern `COSMOS_DEMO_<SECTION>_<KEY>`, for example
/// `COSMOS_DEMO_COSMOSDB_ENDPOINT`.
fn apply_env_overrides(config: &mut DemoConfig) {
    if let Some(val) = env_override("APPLICATION_LOG_LEVEL") {
        config.application.log_level = val;
    }

    if let Some(val) = env_override("COSMOSDB_ENDPOINT") {
        config.cosmosdb.endpoint = val;
    }
    if let Some(val) = env_override("COSMOSDB_KEY") {
        config.cosmosdb.key = secret_string(val);
    }

    if let Some(val) = env_override("WORKFLOW_DATABASE") {
        config.workflow.database = val;
    }
    if let Some(val) = env_override("WORKFLOW_CONTAINER") {
        config.workflow.container = val;
    }
    if let Some(val) = env_override("WORKFLOW_DOCUMENT_PARTITION_KEY_PATH") {
        config.workflow.document_partition_key_path = val;
    }

    if let Some(val) = env_override("LOGGING_LOCAL_ENABLED") {
        config.logging.local_enabled = val.parse().unwrap_or(false);
    }
    if let Some(val) = env_override("LOGGING_LOCAL_PATH") {
        config.logging.local_path = val;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_substitute_env_vars() {
        std::env::set_var("LOADER_TEST_KEY", "test_value");
        let input = "key = \"${LOADER_TEST_KEY}\"";
        let result = substitute_env_vars(input).unwrap();
        assert_eq!(result, "key = \"test_value\"\n");
        std::env::remove_var("LOADER_TEST_KEY");
    }

    #[test]
    fn test_substitute_env_vars_missing() {
        std::env::remove_var("LOADER_TEST_MISSING");
        let input = "key = \"${LOADER_TEST_MISSING}\"";
        let err = substitute_env_vars(input).unwrap_err();
        assert!(err.to_string().contains("LOADER_TEST_MISSING"));
    }

    #[test]
    fn test_substitute_env_vars_skips_comments() {
        std::env::remove_var("LOADER_TEST_COMMENTED");
        let input = "# key = \"${LOADER_TEST_COMMENTED}\"\nname = \"x\"";
        let result = substitute_env_vars(input).unwrap();
        assert!(result.contains("${LOADER_TEST_COMMENTED}"));
    }

    #[test]
    fn test_load_config_missing_file() {
        let err = load_config("nonexistent-cosmos-demo.toml").unwrap_err();
        assert!(matches!(err, DemoError::Configuration(_)));
    }

    #[test]
    fn test_load_config_valid() {
        let toml_content = r#"
[application]
log_level = "debug"

[cosmosdb]
endpoint = "https://demo.documents.azure.com:443/"
key = "loader-test-key=="

[workflow]
database = "Families"
container = "Members"
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(toml_content.as_bytes()).unwrap();
        temp_file.flush().unwrap();

        let config = load_config(temp_file.path()).unwrap();
        assert_eq!(config.application.log_level, "debug");
        assert_eq!(config.workflow.container, "Members");
        assert_eq!(
            config.workflow.document_partition_key_path,
            "/location/state"
        );
    }

    #[test]
    fn test_parse_config_missing_key() {
        let err = parse_config(
            r#"
[cosmosdb]
endpoint = "https://demo.documents.azure.com:443/"
"#,
        )
        .unwrap_err();
        assert!(matches!(err, DemoError::Configuration(_)));
    }
}
