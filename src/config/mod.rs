//! Configuration management.
//!
//! The demo reads a TOML file (default `cosmos-demo.toml`) with support for:
//! - Environment variable substitution (`${VAR_NAME}`)
//! - `COSMOS_DEMO_*` environment overrides
//! - Default values for everything except the account endpoint and key
//! - Validation on load
//!
//! # Example Configuration
//!
//! ```toml
//! [application]
//! log_level = "info"
//!
//! [cosmosdb]
//! endpoint = "https://your-account.documents.azure.com:443/"
//! key = "${COSMOS_DEMO_MASTER_KEY}"
//!
//! [workflow]
//! database = "Families"
//! container = "Families"
//! document_partition_key_path = "/location/state"
//!
//! [logging]
//! local_enabled = false
//! local_path = "./logs"
//! local_rotation = "daily"
//! ```
//!
//! # Loading
//!
//! ```rust,no_run
//! use cosmos_demo::config::load_config;
//!
//! # fn example() {
//! match load_config("cosmos-demo.toml") {
//!     Ok(config) => println!("Endpoint: {}", config.cosmosdb.endpoint),
//!     Err(e) => eprintln!("Configuration error: {}", e),
//! }
//! # }
//! ```

pub mod loader;
pub mod schema;
pub mod secret;

// Re-export commonly used types
pub use loader::{load_config, parse_config, ENV_PREFIX};
pub use schema::{ApplicationConfig, CosmosDbConfig, DemoConfig, LoggingConfig, WorkflowConfig};
pub use secret::{secret_string, SecretString, SecretValue};
