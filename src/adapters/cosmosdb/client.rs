//! Cosmos DB client implementation
//!
//! Thin wrapper around the SDK's [`CosmosClient`]: every method issues one
//! SDK call (or drains one query feed) and translates SDK errors into
//! [`CosmosDbError`].

use crate::adapters::cosmosdb::models::{
    container_descriptor, database_descriptor, provisioned_throughput,
};
use crate::config::CosmosDbConfig;
use crate::domain::{
    ContainerDescriptor, ContainerRef, ContainerSpec, CosmosDbError, DatabaseDescriptor,
    DatabaseId, DemoError, Document, Result,
};
use azure_core::credentials::Secret;
use azure_data_cosmos::clients::{ContainerClient, DatabaseClient};
use azure_data_cosmos::models::{
    ContainerProperties, PartitionKeyDefinition, PartitionKeyKind, ThroughputProperties,
};
use azure_data_cosmos::{
    CosmosClient, CosmosClientOptions, CreateContainerOptions, FeedPage, FeedPager, PartitionKey,
};
use futures::stream::{Stream, StreamExt};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::borrow::Cow;

/// Converts an SDK error into a domain error
///
/// Status-bearing errors (404, 409, 401/403, 429) get their specific variant;
/// anything else is wrapped with `fallback`.
fn sdk_error(fallback: fn(String) -> CosmosDbError, context: String) -> DemoError {
    DemoError::CosmosDb(CosmosDbError::classify(context, fallback))
}

/// Reads the first page of a page stream, `None` if the stream is empty
///
/// Later pages are never requested.
async fn first_page<P, S>(mut pages: S, what: &str) -> Result<Option<P>>
where
    S: Stream<Item = azure_core::Result<P>> + Unpin,
{
    match pages.next().await {
        Some(Ok(page)) => Ok(Some(page)),
        Some(Err(e)) => Err(sdk_error(
            CosmosDbError::QueryFailed,
            format!("Failed to read {what}: {e}"),
        )),
        None => Ok(None),
    }
}

/// Items of the first page of a query feed
async fn first_page_items<T>(feed: FeedPager<T>, what: &str) -> Result<Vec<T>>
where
    T: DeserializeOwned + Send,
{
    Ok(first_page(feed.into_pages(), what)
        .await?
        .map(FeedPage::into_items)
        .unwrap_or_default())
}

/// Connection handle to a Cosmos DB account
///
/// Built once from endpoint + master key; cheap to share behind an `Arc`.
pub struct CosmosDbClient {
    client: CosmosClient,
}

impl CosmosDbClient {
    /// Create a new Cosmos DB client
    ///
    /// No request is sent; the SDK connects lazily on the first call.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the endpoint or key is missing or
    /// invalid, or a connection error if the SDK rejects them.
    pub fn new(config: &CosmosDbConfig) -> Result<Self> {
        use secrecy::ExposeSecret;

        config.validate().map_err(DemoError::Configuration)?;

        let key = Secret::new(config.key.expose_secret().as_ref().to_string());
        let options = Some(CosmosClientOptions::default());

        let client = CosmosClient::with_key(&config.endpoint, key, options).map_err(|e| {
            DemoError::CosmosDb(CosmosDbError::ConnectionFailed(format!(
                "Failed to create Cosmos client: {e}"
            )))
        })?;

        Ok(Self { client })
    }

    fn database_client(&self, database: &DatabaseId) -> DatabaseClient {
        self.client.database_client(database.as_str())
    }

    fn container_client(&self, target: &ContainerRef) -> ContainerClient {
        self.database_client(&target.database)
            .container_client(target.container.as_str())
    }

    /// List the databases on the first page of the account feed
    pub async fn list_databases(&self) -> Result<Vec<DatabaseDescriptor>> {
        let feed = self
            .client
            .query_databases("SELECT * FROM root", None)
            .map_err(|e| {
                sdk_error(
                    CosmosDbError::QueryFailed,
                    format!("Failed to query databases: {e}"),
                )
            })?;

        let databases = first_page_items(feed, "databases").await?;
        Ok(databases.iter().map(database_descriptor).collect())
    }

    /// Create a database
    pub async fn create_database(&self, database: &DatabaseId) -> Result<DatabaseDescriptor> {
        let response = self
            .client
            .create_database(database.as_str(), None)
            .await
            .map_err(|e| {
                sdk_error(
                    CosmosDbError::WriteFailed,
                    format!("Failed to create database {database}: {e}"),
                )
            })?;

        let properties = response.into_body().map_err(|e| {
            DemoError::CosmosDb(CosmosDbError::DeserializationFailed(format!(
                "Failed to read created database {database}: {e}"
            )))
        })?;

        Ok(database_descriptor(&properties))
    }

    /// Delete a database
    pub async fn delete_database(&self, database: &DatabaseId) -> Result<()> {
        self.database_client(database)
            .delete(None)
            .await
            .map_err(|e| {
                sdk_error(
                    CosmosDbError::WriteFailed,
                    format!("Failed to delete database {database}: {e}"),
                )
            })?;
        Ok(())
    }

    /// List the containers on the first page of a database's feed
    pub async fn list_containers(&self, database: &DatabaseId) -> Result<Vec<ContainerDescriptor>> {
        let feed = self
            .database_client(database)
            .query_containers("SELECT * FROM root", None)
            .map_err(|e| {
                sdk_error(
                    CosmosDbError::QueryFailed,
                    format!("Failed to query containers of {database}: {e}"),
                )
            })?;

        let containers = first_page_items(feed, "containers").await?;
        Ok(containers.iter().map(container_descriptor).collect())
    }

    /// Read the provisioned throughput of a container
    ///
    /// `None` if the container has no offer of its own or uses autoscale.
    pub async fn read_throughput(&self, target: &ContainerRef) -> Result<Option<usize>> {
        let response = self
            .container_client(target)
            .read_throughput(None)
            .await
            .map_err(|e| {
                sdk_error(
                    CosmosDbError::QueryFailed,
                    format!("Failed to read throughput of {target}: {e}"),
                )
            })?;

        let Some(response) = response else {
            return Ok(None);
        };

        let properties = response.into_body().map_err(|e| {
            DemoError::CosmosDb(CosmosDbError::DeserializationFailed(format!(
                "Failed to read throughput of {target}: {e}"
            )))
        })?;

        Ok(provisioned_throughput(&properties))
    }

    /// Create a container with manual throughput
    pub async fn create_container(
        &self,
        database: &DatabaseId,
        spec: &ContainerSpec,
    ) -> Result<ContainerDescriptor> {
        let properties = ContainerProperties {
            id: Cow::Owned(spec.id.clone()),
            partition_key: PartitionKeyDefinition {
                paths: vec![spec.partition_key_path.clone()],
                kind: PartitionKeyKind::Hash,
                version: None,
            },
            ..Default::default()
        };

        let options = CreateContainerOptions {
            throughput: Some(ThroughputProperties::manual(spec.throughput as usize)),
            ..Default::default()
        };

        let response = self
            .database_client(database)
            .create_container(properties, Some(options))
            .await
            .map_err(|e| {
                sdk_error(
                    CosmosDbError::WriteFailed,
                    format!("Failed to create container {}/{}: {e}", database, spec.id),
                )
            })?;

        let created = response.into_body().map_err(|e| {
            DemoError::CosmosDb(CosmosDbError::DeserializationFailed(format!(
                "Failed to read created container {}: {e}",
                spec.id
            )))
        })?;

        Ok(container_descriptor(&created))
    }

    /// Delete a container
    pub async fn delete_container(&self, target: &ContainerRef) -> Result<()> {
        self.container_client(target)
            .delete(None)
            .await
            .map_err(|e| {
                sdk_error(
                    CosmosDbError::WriteFailed,
                    format!("Failed to delete container {target}: {e}"),
                )
            })?;
        Ok(())
    }

    /// Insert a document
    pub async fn create_document(
        &self,
        target: &ContainerRef,
        partition_key: &str,
        document: &Document,
    ) -> Result<()> {
        self.container_client(target)
            .create_item(
                PartitionKey::from(partition_key.to_string()),
                document.clone(),
                None,
            )
            .await
            .map_err(|e| {
                sdk_error(
                    CosmosDbError::WriteFailed,
                    format!("Failed to create document in {target}: {e}"),
                )
            })?;
        Ok(())
    }

    /// Run a cross-partition SQL query and return its first page of results
    pub async fn query_documents(&self, target: &ContainerRef, query: &str) -> Result<Vec<Document>> {
        tracing::debug!(resource = %target, query = %query, "Querying documents");

        let feed = self
            .container_client(target)
            .query_items::<Value>(query.to_string(), PartitionKey::EMPTY, None)
            .map_err(|e| {
                sdk_error(
                    CosmosDbError::QueryFailed,
                    format!("Failed to create query: {e}"),
                )
            })?;

        first_page_items(feed, "documents")
            .await?
            .into_iter()
            .map(Document::try_from)
            .collect()
    }

    /// Replace a document by id
    pub async fn replace_document(
        &self,
        target: &ContainerRef,
        partition_key: &str,
        document_id: &str,
        document: &Document,
    ) -> Result<()> {
        self.container_client(target)
            .replace_item(
                PartitionKey::from(partition_key.to_string()),
                document_id,
                document.clone(),
                None,
            )
            .await
            .map_err(|e| {
                sdk_error(
                    CosmosDbError::WriteFailed,
                    format!("Failed to replace document {document_id} in {target}: {e}"),
                )
            })?;
        Ok(())
    }

    /// Delete a document by id and partition key value
    pub async fn delete_document(
        &self,
        target: &ContainerRef,
        partition_key: &str,
        document_id: &str,
    ) -> Result<()> {
        self.container_client(target)
            .delete_item(
                PartitionKey::from(partition_key.to_string()),
                document_id,
                None,
            )
            .await
            .map_err(|e| {
                sdk_error(
                    CosmosDbError::WriteFailed,
                    format!("Failed to delete document {document_id} in {target}: {e}"),
                )
            })?;
        Ok(())
    }
}
