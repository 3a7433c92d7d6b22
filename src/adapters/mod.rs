//! External system integrations.
//!
//! - [`database`] - Document store abstraction and the client provider
//! - [`cosmosdb`] - Azure Cosmos DB implementation
//!
//! # Cosmos DB Adapter
//!
//! ```rust,no_run
//! use cosmos_demo::adapters::database::ClientProvider;
//! use cosmos_demo::config::{secret_string, CosmosDbConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = CosmosDbConfig {
//!     endpoint: "https://account.documents.azure.com:443/".to_string(),
//!     key: secret_string("key".to_string()),
//! };
//!
//! let provider = ClientProvider::from_config(&config)?;
//! let databases = provider.get_client().list_databases().await?;
//! println!("{} databases", databases.len());
//! # Ok(())
//! # }
//! ```

pub mod cosmosdb;
pub mod database;
