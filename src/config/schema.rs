//! Configuration schema types

use crate::config::SecretString;
use crate::domain::ids::{ContainerId, DatabaseId};
use serde::{Deserialize, Serialize};

/// Root configuration
///
/// Maps one-to-one onto the TOML file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DemoConfig {
    /// Application-level settings
    #[serde(default)]
    pub application: ApplicationConfig,

    /// Cosmos DB account connection settings
    pub cosmosdb: CosmosDbConfig,

    /// Database/container the document workflows target
    #[serde(default)]
    pub workflow: WorkflowConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl DemoConfig {
    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid
    pub fn validate(&self) -> Result<(), String> {
        self.application.validate()?;
        self.cosmosdb.validate()?;
        self.workflow.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

/// Application-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

impl ApplicationConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.log_level.as_str()) {
            return Err(format!(
                "Invalid log_level '{}'. Must be one of: {}",
                self.log_level,
                valid_levels.join(", ")
            ));
        }
        Ok(())
    }
}

/// Cosmos DB connection configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CosmosDbConfig {
    /// Account endpoint URL, e.g. `https://myaccount.documents.azure.com:443/`
    #[serde(default)]
    pub endpoint: String,

    /// Account master key
    /// Stored securely in memory and automatically zeroized on drop
    pub key: SecretString,
}

impl CosmosDbConfig {
    pub(crate) fn validate(&self) -> Result<(), String> {
        use secrecy::ExposeSecret;

        if self.endpoint.trim().is_empty() {
            return Err("cosmosdb.endpoint cannot be empty".to_string());
        }

        let url = url::Url::parse(&self.endpoint)
            .map_err(|e| format!("cosmosdb.endpoint '{}' is not a valid URL: {e}", self.endpoint))?;

        match url.scheme() {
            "https" => {}
            // The local emulator listens on plain http
            "http" if is_local_host(url.host_str()) => {}
            other => {
                return Err(format!(
                    "cosmosdb.endpoint must use https (http is only allowed for localhost), got '{other}'"
                ));
            }
        }

        if self.key.expose_secret().is_blank() {
            return Err("cosmosdb.key cannot be empty".to_string());
        }

        Ok(())
    }
}

fn is_local_host(host: Option<&str>) -> bool {
    matches!(host, Some("localhost") | Some("127.0.0.1"))
}

/// Target of the document workflows and the default for container commands
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkflowConfig {
    /// Database id
    #[serde(default = "default_workflow_database")]
    pub database: String,

    /// Container id
    #[serde(default = "default_workflow_container")]
    pub container: String,

    /// Path of the partition key value inside the demo documents
    #[serde(default = "default_document_partition_key_path")]
    pub document_partition_key_path: String,
}

impl Default for WorkflowConfig {
    fn default() -> Self {
        Self {
            database: default_workflow_database(),
            container: default_workflow_container(),
            document_partition_key_path: default_document_partition_key_path(),
        }
    }
}

impl WorkflowConfig {
    fn validate(&self) -> Result<(), String> {
        DatabaseId::new(self.database.as_str()).map_err(|e| format!("workflow.database: {e}"))?;
        ContainerId::new(self.container.as_str())
            .map_err(|e| format!("workflow.container: {e}"))?;

        let path = &self.document_partition_key_path;
        if !path.starts_with('/') || path.len() < 2 {
            return Err(format!(
                "workflow.document_partition_key_path must start with '/' and name a field, got '{path}'"
            ));
        }
        Ok(())
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Enable local JSON file logging
    #[serde(default)]
    pub local_enabled: bool,

    /// Local log directory
    #[serde(default = "default_local_path")]
    pub local_path: String,

    /// Log rotation strategy (daily, hourly, never)
    #[serde(default = "default_local_rotation")]
    pub local_rotation: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            local_enabled: false,
            local_path: default_local_path(),
            local_rotation: default_local_rotation(),
        }
    }
}

impl LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_rotations = ["daily", "hourly", "never"];
        if !valid_rotations.contains(&self.local_rotation.as_str()) {
            return Err(format!(
                "Invalid logging.local_rotation '{}'. Must be one of: {}",
                self.local_rotation,
                valid_rotations.join(", ")
            ));
        }

        if self.local_enabled && self.local_path.trim().is_empty() {
            return Err("logging.local_path cannot be empty when local logging is enabled".to_string());
        }

        Ok(())
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_workflow_database() -> String {
    "Families".to_string()
}

fn default_workflow_container() -> String {
    "Families".to_string()
}

fn default_document_partition_key_path() -> String {
    "/location/state".to_string()
}

fn default_local_path() -> String {
    "./logs".to_string()
}

fn default_local_rotation() -> String {
    "daily".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::secret_string;
    use test_case::test_case;

    fn cosmos(endpoint: &str, key: &str) -> CosmosDbConfig {
        CosmosDbConfig {
            endpoint: endpoint.to_string(),
            key: secret_string(key.to_string()),
        }
    }

    #[test]
    fn test_application_config_validation() {
        let mut config = ApplicationConfig::default();
        assert!(config.validate().is_ok());

        config.log_level = "verbose".to_string();
        assert!(config.validate().is_err());
    }

    #[test_case("https://demo.documents.azure.com:443/" ; "azure endpoint")]
    #[test_case("http://localhost:8081/" ; "emulator localhost")]
    #[test_case("http://127.0.0.1:8081/" ; "emulator loopback")]
    fn test_cosmosdb_endpoint_valid(endpoint: &str) {
        assert!(cosmos(endpoint, "key==").validate().is_ok());
    }

    #[test_case("" ; "empty")]
    #[test_case("not a url" ; "garbage")]
    #[test_case("http://demo.documents.azure.com/" ; "plain http remote")]
    #[test_case("ftp://demo.documents.azure.com/" ; "wrong scheme")]
    fn test_cosmosdb_endpoint_invalid(endpoint: &str) {
        assert!(cosmos(endpoint, "key==").validate().is_err());
    }

    #[test]
    fn test_cosmosdb_key_required() {
        let err = cosmos("https://demo.documents.azure.com:443/", " ")
            .validate()
            .unwrap_err();
        assert!(err.contains("cosmosdb.key"));
    }

    #[test]
    fn test_workflow_config_defaults() {
        let config = WorkflowConfig::default();
        assert_eq!(config.database, "Families");
        assert_eq!(config.container, "Families");
        assert_eq!(config.document_partition_key_path, "/location/state");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_workflow_config_invalid() {
        let mut config = WorkflowConfig {
            container: "a/b".to_string(),
            ..WorkflowConfig::default()
        };
        assert!(config.validate().is_err());

        config.container = "Families".to_string();
        config.document_partition_key_path = "location/state".to_string();
        assert!(config.validate().is_err());

        config.document_partition_key_path = "/".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_logging_config_validation() {
        let mut config = LoggingConfig::default();
        assert!(config.validate().is_ok());

        config.local_rotation = "weekly".to_string();
        assert!(config.validate().is_err());

        config.local_rotation = "hourly".to_string();
        config.local_enabled = true;
        config.local_path = String::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_minimal_toml_uses_defaults() {
        let config: DemoConfig = toml::from_str(
            r#"
[cosmosdb]
endpoint = "https://demo.documents.azure.com:443/"
key = "key=="
"#,
        )
        .unwrap();

        assert_eq!(config.application.log_level, "info");
        assert_eq!(config.workflow.database, "Families");
        assert!(!config.logging.local_enabled);
        assert!(config.validate().is_ok());
    }
}
