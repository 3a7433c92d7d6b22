//! Workflow runner
//!
//! Sequential demo operations against the shared document store. Each
//! operation acquires the handle from the [`ClientProvider`], issues one or
//! more calls, writes human-readable lines to the output sink and returns a
//! typed outcome.

use crate::adapters::database::ClientProvider;
use crate::core::operation::Operation;
use crate::domain::{
    query_by_name, ContainerDescriptor, ContainerRef, ContainerSpec, DatabaseDescriptor,
    DatabaseId, Document, LastModified, Result, NEW_CUSTOMER_NAME, RENAMED_CUSTOMER_NAME,
};
use crate::log_operation_start;
use std::io::Write;

/// Partition key path of the demo documents unless configured otherwise
pub const DEFAULT_DOCUMENT_PARTITION_KEY_PATH: &str = "/location/state";

/// A container together with its live throughput
#[derive(Debug, Clone, PartialEq)]
pub struct ContainerSummary {
    /// Container properties
    pub descriptor: ContainerDescriptor,
    /// Provisioned throughput, `None` if the container has none of its own
    pub throughput: Option<usize>,
}

/// Returns the single element of `items`, or `None` for zero or several
fn exactly_one<T>(mut items: Vec<T>) -> Option<T> {
    if items.len() == 1 {
        items.pop()
    } else {
        None
    }
}

/// Runs demo operations and prints their results to `out`
pub struct WorkflowRunner<W: Write> {
    provider: ClientProvider,
    document_partition_key_path: String,
    out: W,
}

impl<W: Write> WorkflowRunner<W> {
    /// Create a runner writing to `out`
    pub fn new(provider: ClientProvider, out: W) -> Self {
        Self {
            provider,
            document_partition_key_path: DEFAULT_DOCUMENT_PARTITION_KEY_PATH.to_string(),
            out,
        }
    }

    /// Path used to read the partition key value out of documents
    pub fn with_document_partition_key_path(mut self, path: impl Into<String>) -> Self {
        self.document_partition_key_path = path.into();
        self
    }

    /// Consumes the runner and returns the output sink
    pub fn into_output(self) -> W {
        self.out
    }

    /// Run one operation, discarding its typed outcome
    pub async fn run(&mut self, operation: &Operation) -> Result<()> {
        match operation {
            Operation::ListDatabases => {
                self.list_databases().await?;
            }
            Operation::CreateDatabase(database) => {
                self.create_database(database).await?;
            }
            Operation::DeleteDatabase(database) => {
                self.delete_database(database).await?;
            }
            Operation::ListContainers(database) => {
                self.list_containers(database).await?;
            }
            Operation::CreateContainer { database, spec } => {
                self.create_container(database, spec).await?;
            }
            Operation::DeleteContainer(target) => {
                self.delete_container(target).await?;
            }
            Operation::CreateDocument(target) => {
                self.create_document(target).await?;
            }
            Operation::ReplaceDocument(target) => {
                self.replace_document(target).await?;
            }
            Operation::DeleteDocument(target) => {
                self.delete_document(target).await?;
            }
        }
        self.out.flush()?;
        Ok(())
    }

    /// Print every database in the account
    pub async fn list_databases(&mut self) -> Result<Vec<DatabaseDescriptor>> {
        log_operation_start!("list-databases", "account");

        let databases = self.provider.get_client().list_databases().await?;
        for db in &databases {
            self.print_database(db)?;
        }

        tracing::info!(count = databases.len(), "Listed databases");
        Ok(databases)
    }

    /// Create a database and print it
    pub async fn create_database(&mut self, database: &DatabaseId) -> Result<DatabaseDescriptor> {
        log_operation_start!("create-database", database);

        let created = self.provider.get_client().create_database(database).await?;
        self.print_database(&created)?;

        tracing::info!(database = %created.id, "Database created");
        Ok(created)
    }

    /// Delete a database without any confirmation
    pub async fn delete_database(&mut self, database: &DatabaseId) -> Result<()> {
        log_operation_start!("delete-database", database);

        self.provider.get_client().delete_database(database).await?;
        writeln!(self.out, "Deleted database {database}")?;

        tracing::info!(database = %database, "Database deleted");
        Ok(())
    }

    /// Print every container of a database with its throughput
    pub async fn list_containers(&mut self, database: &DatabaseId) -> Result<Vec<ContainerSummary>> {
        log_operation_start!("list-containers", database);

        let store = self.provider.get_client();
        let containers = store.list_containers(database).await?;

        let mut summaries = Vec::with_capacity(containers.len());
        for (index, descriptor) in containers.into_iter().enumerate() {
            writeln!(self.out, "Container #{}", index + 1)?;
            writeln!(self.out, "   Container ID: {}", descriptor.id)?;
            writeln!(
                self.out,
                "   Container Last modified: {}",
                LastModified(&descriptor.last_modified)
            )?;
            writeln!(
                self.out,
                "   Container Partition key: {}",
                descriptor.partition_key_path()
            )?;

            let target = ContainerRef::parse(database.as_str(), &descriptor.id)
                .map_err(crate::domain::DemoError::Validation)?;
            let throughput = store.read_throughput(&target).await?;
            match throughput {
                Some(ru) => writeln!(self.out, "   Throughput: {ru}")?,
                None => writeln!(self.out, "   Throughput: none")?,
            }

            summaries.push(ContainerSummary {
                descriptor,
                throughput,
            });
        }
        writeln!(self.out, "Total containers {}", summaries.len())?;

        tracing::info!(database = %database, count = summaries.len(), "Listed containers");
        Ok(summaries)
    }

    /// Create a container with the given throughput and partition key path
    pub async fn create_container(
        &mut self,
        database: &DatabaseId,
        spec: &ContainerSpec,
    ) -> Result<ContainerDescriptor> {
        log_operation_start!("create-container", database);

        let created = self
            .provider
            .get_client()
            .create_container(database, spec)
            .await?;
        writeln!(self.out, "Created new container {}", created.id)?;

        tracing::info!(
            database = %database,
            container = %created.id,
            throughput = spec.throughput,
            partition_key = %spec.partition_key_path,
            "Container created"
        );
        Ok(created)
    }

    /// Delete a container
    pub async fn delete_container(&mut self, target: &ContainerRef) -> Result<()> {
        log_operation_start!("delete-container", target);

        self.provider.get_client().delete_container(target).await?;
        writeln!(
            self.out,
            "Deleted container {} for database {}",
            target.container, target.database
        )?;

        tracing::info!(resource = %target, "Container deleted");
        Ok(())
    }

    /// Insert a demo customer document with a fresh id
    pub async fn create_document(&mut self, target: &ContainerRef) -> Result<Document> {
        log_operation_start!("create-document", target);

        let document = Document::new_customer();
        let id = document.require_id()?;
        let partition_key = document.partition_key_value(&self.document_partition_key_path)?;

        self.provider
            .get_client()
            .create_document(target, partition_key, &document)
            .await?;
        writeln!(self.out, "Created new document {id}")?;

        tracing::info!(resource = %target, document_id = %id, "Document created");
        Ok(document)
    }

    /// Rename the single "New customer" document to "Test"
    ///
    /// Does nothing unless exactly one document matches.
    pub async fn replace_document(&mut self, target: &ContainerRef) -> Result<Option<Document>> {
        log_operation_start!("replace-document", target);

        let store = self.provider.get_client();
        let matches = store
            .query_documents(target, &query_by_name(NEW_CUSTOMER_NAME))
            .await?;
        let match_count = matches.len();

        let Some(mut document) = exactly_one(matches) else {
            tracing::debug!(resource = %target, matches = match_count, "No unique match, skipping replace");
            return Ok(None);
        };

        document.set_field("name", RENAMED_CUSTOMER_NAME);
        let id = document.require_id()?;
        let partition_key = document.partition_key_value(&self.document_partition_key_path)?;

        store
            .replace_document(target, partition_key, id, &document)
            .await?;
        writeln!(
            self.out,
            "Updated document 'name': {}",
            document.name().unwrap_or_default()
        )?;

        tracing::info!(resource = %target, document_id = %id, "Document replaced");
        Ok(Some(document))
    }

    /// Delete the single "Test" document
    ///
    /// Does nothing unless exactly one document matches.
    pub async fn delete_document(&mut self, target: &ContainerRef) -> Result<Option<Document>> {
        log_operation_start!("delete-document", target);

        let store = self.provider.get_client();
        let matches = store
            .query_documents(target, &query_by_name(RENAMED_CUSTOMER_NAME))
            .await?;
        let match_count = matches.len();

        let Some(document) = exactly_one(matches) else {
            tracing::debug!(resource = %target, matches = match_count, "No unique match, skipping delete");
            return Ok(None);
        };

        let id = document.require_id()?;
        let partition_key = document.partition_key_value(&self.document_partition_key_path)?;

        store.delete_document(target, partition_key, id).await?;
        writeln!(self.out, "Deleted document 'id': {id}")?;

        tracing::info!(
            resource = %target,
            document_id = %id,
            partition_key = %partition_key,
            "Document deleted"
        );
        Ok(Some(document))
    }

    fn print_database(&mut self, db: &DatabaseDescriptor) -> Result<()> {
        writeln!(
            self.out,
            "Database: {}, Last modified: {}",
            db.id,
            LastModified(&db.last_modified)
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exactly_one() {
        assert_eq!(exactly_one(Vec::<i32>::new()), None);
        assert_eq!(exactly_one(vec![7]), Some(7));
        assert_eq!(exactly_one(vec![7, 8]), None);
    }
}
