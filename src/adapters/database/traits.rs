//! Document store abstraction
//!
//! [`DocumentStore`] is the seam between the workflows and the service
//! client. The Cosmos DB adapter implements it against the SDK; tests
//! implement it with in-memory fakes.

use crate::domain::{
    ContainerDescriptor, ContainerRef, ContainerSpec, DatabaseDescriptor, DatabaseId, Document,
    Result,
};
use async_trait::async_trait;

/// Operations the demo workflows issue against a document database service
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// List the databases on the first result page of the account
    async fn list_databases(&self) -> Result<Vec<DatabaseDescriptor>>;

    /// Create a database
    ///
    /// # Errors
    ///
    /// Fails with a conflict if the database already exists.
    async fn create_database(&self, database: &DatabaseId) -> Result<DatabaseDescriptor>;

    /// Delete a database and everything in it
    async fn delete_database(&self, database: &DatabaseId) -> Result<()>;

    /// List the containers on the first result page of a database
    async fn list_containers(&self, database: &DatabaseId) -> Result<Vec<ContainerDescriptor>>;

    /// Read the provisioned throughput of a container
    ///
    /// Returns `None` when the container has no dedicated throughput.
    async fn read_throughput(&self, target: &ContainerRef) -> Result<Option<usize>>;

    /// Create a container with manual throughput
    async fn create_container(
        &self,
        database: &DatabaseId,
        spec: &ContainerSpec,
    ) -> Result<ContainerDescriptor>;

    /// Delete a container
    async fn delete_container(&self, target: &ContainerRef) -> Result<()>;

    /// Insert a new document under the given partition key value
    async fn create_document(
        &self,
        target: &ContainerRef,
        partition_key: &str,
        document: &Document,
    ) -> Result<()>;

    /// Run a SQL query across all partitions of a container
    ///
    /// Only the first page of results is returned.
    async fn query_documents(&self, target: &ContainerRef, query: &str) -> Result<Vec<Document>>;

    /// Replace an existing document by id
    async fn replace_document(
        &self,
        target: &ContainerRef,
        partition_key: &str,
        document_id: &str,
        document: &Document,
    ) -> Result<()>;

    /// Delete a document by id and partition key value
    async fn delete_document(
        &self,
        target: &ContainerRef,
        partition_key: &str,
        document_id: &str,
    ) -> Result<()>;
}
