//! Client provider
//!
//! Builds the single connection handle for the process and hands out shared
//! references to it.

use crate::adapters::cosmosdb::adapter::CosmosDbAdapter;
use crate::adapters::cosmosdb::client::CosmosDbClient;
use crate::adapters::database::traits::DocumentStore;
use crate::config::CosmosDbConfig;
use crate::domain::Result;
use std::sync::Arc;

/// Owner of the shared connection handle
///
/// Constructed once at startup and passed to the workflow runner. Every call
/// to [`ClientProvider::get_client`] returns the same handle; nothing is
/// reconnected.
#[derive(Clone)]
pub struct ClientProvider {
    client: Arc<dyn DocumentStore>,
}

impl ClientProvider {
    /// Wrap an existing store (used by tests to inject fakes)
    pub fn new(client: Arc<dyn DocumentStore>) -> Self {
        Self { client }
    }

    /// Build the Cosmos DB handle from configuration
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the endpoint or key is missing or
    /// invalid, and a connection error if the SDK client cannot be built.
    pub fn from_config(config: &CosmosDbConfig) -> Result<Self> {
        tracing::info!(endpoint = %config.endpoint, "Creating Cosmos DB client");
        let client = CosmosDbClient::new(config)?;
        let adapter = CosmosDbAdapter::new(client);

        Ok(Self::new(Arc::new(adapter)))
    }

    /// The shared connection handle
    pub fn get_client(&self) -> Arc<dyn DocumentStore> {
        Arc::clone(&self.client)
    }
}

impl std::fmt::Debug for ClientProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientProvider").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::secret_string;
    use crate::domain::{DemoError, ErrorKind};

    #[test]
    fn test_from_config_rejects_missing_endpoint() {
        let config = CosmosDbConfig {
            endpoint: String::new(),
            key: secret_string("a2V5".to_string()),
        };

        let err = ClientProvider::from_config(&config).unwrap_err();
        assert!(matches!(err, DemoError::Configuration(_)));
        assert_eq!(err.kind(), ErrorKind::ConfigurationMissing);
    }

    #[test]
    fn test_from_config_rejects_missing_key() {
        let config = CosmosDbConfig {
            endpoint: "https://demo.documents.azure.com:443/".to_string(),
            key: secret_string(String::new()),
        };

        let err = ClientProvider::from_config(&config).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ConfigurationMissing);
    }
}
