//! Workflow operations
//!
//! One variant per demo step. The CLI builds an [`Operation`] from its
//! arguments and the [`WorkflowRunner`](crate::core::workflow::WorkflowRunner)
//! executes it.

use crate::domain::{ContainerRef, ContainerSpec, DatabaseId};
use std::fmt;

/// A single demo operation with its resolved targets
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    /// Print every database in the account
    ListDatabases,
    /// Create a database
    CreateDatabase(DatabaseId),
    /// Delete a database and everything in it
    DeleteDatabase(DatabaseId),
    /// Print the containers of a database
    ListContainers(DatabaseId),
    /// Create a container with manual throughput
    CreateContainer {
        /// Owning database
        database: DatabaseId,
        /// Container id, throughput and partition key path
        spec: ContainerSpec,
    },
    /// Delete a container
    DeleteContainer(ContainerRef),
    /// Insert a new demo customer
    CreateDocument(ContainerRef),
    /// Rename the single "New customer" document
    ReplaceDocument(ContainerRef),
    /// Delete the single "Test" document
    DeleteDocument(ContainerRef),
}

impl Operation {
    /// Kebab-case name, identical to the CLI subcommand
    pub fn name(&self) -> &'static str {
        match self {
            Self::ListDatabases => "list-databases",
            Self::CreateDatabase(_) => "create-database",
            Self::DeleteDatabase(_) => "delete-database",
            Self::ListContainers(_) => "list-containers",
            Self::CreateContainer { .. } => "create-container",
            Self::DeleteContainer(_) => "delete-container",
            Self::CreateDocument(_) => "create-document",
            Self::ReplaceDocument(_) => "replace-document",
            Self::DeleteDocument(_) => "delete-document",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ListDatabases => write!(f, "{}", self.name()),
            Self::CreateDatabase(db) | Self::DeleteDatabase(db) | Self::ListContainers(db) => {
                write!(f, "{} {db}", self.name())
            }
            Self::CreateContainer { database, spec } => {
                write!(f, "{} {database}/{}", self.name(), spec.id)
            }
            Self::DeleteContainer(target)
            | Self::CreateDocument(target)
            | Self::ReplaceDocument(target)
            | Self::DeleteDocument(target) => write!(f, "{} {target}", self.name()),
        }
    }
}
