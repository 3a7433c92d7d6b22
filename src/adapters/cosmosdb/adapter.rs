//! CosmosDB adapter implementing the document store trait

use crate::adapters::cosmosdb::client::CosmosDbClient;
use crate::adapters::database::traits::DocumentStore;
use crate::domain::{
    ContainerDescriptor, ContainerRef, ContainerSpec, DatabaseDescriptor, DatabaseId, Document,
    Result,
};
use async_trait::async_trait;
use std::sync::Arc;

/// CosmosDB implementation of [`DocumentStore`]
pub struct CosmosDbAdapter {
    client: Arc<CosmosDbClient>,
}

impl CosmosDbAdapter {
    /// Create a new CosmosDB adapter
    pub fn new(client: CosmosDbClient) -> Self {
        Self {
            client: Arc::new(client),
        }
    }
}

#[async_trait]
impl DocumentStore for CosmosDbAdapter {
    async fn list_databases(&self) -> Result<Vec<DatabaseDescriptor>> {
        self.client.list_databases().await
    }

    async fn create_database(&self, database: &DatabaseId) -> Result<DatabaseDescriptor> {
        self.client.create_database(database).await
    }

    async fn delete_database(&self, database: &DatabaseId) -> Result<()> {
        self.client.delete_database(database).await
    }

    async fn list_containers(&self, database: &DatabaseId) -> Result<Vec<ContainerDescriptor>> {
        self.client.list_containers(database).await
    }

    async fn read_throughput(&self, target: &ContainerRef) -> Result<Option<usize>> {
        self.client.read_throughput(target).await
    }

    async fn create_container(
        &self,
        database: &DatabaseId,
        spec: &ContainerSpec,
    ) -> Result<ContainerDescriptor> {
        self.client.create_container(database, spec).await
    }

    async fn delete_container(&self, target: &ContainerRef) -> Result<()> {
        self.client.delete_container(target).await
    }

    async fn create_document(
        &self,
        target: &ContainerRef,
        partition_key: &str,
        document: &Document,
    ) -> Result<()> {
        self.client
            .create_document(target, partition_key, document)
            .await
    }

    async fn query_documents(&self, target: &ContainerRef, query: &str) -> Result<Vec<Document>> {
        self.client.query_documents(target, query).await
    }

    async fn replace_document(
        &self,
        target: &ContainerRef,
        partition_key: &str,
        document_id: &str,
        document: &Document,
    ) -> Result<()> {
        self.client
            .replace_document(target, partition_key, document_id, document)
            .await
    }

    async fn delete_document(
        &self,
        target: &ContainerRef,
        partition_key: &str,
        document_id: &str,
    ) -> Result<()> {
        self.client
            .delete_document(target, partition_key, document_id)
            .await
    }
}
