//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for the demo using clap.
//! Without a subcommand the program runs the delete-document workflow against
//! the configured database and container.

pub mod commands;

use crate::config::WorkflowConfig;
use crate::core::Operation;
use crate::domain::Result;
use clap::{Parser, Subcommand};
use commands::container::{CreateContainerArgs, DeleteContainerArgs, ListContainersArgs};
use commands::database::DatabaseArgs;
use commands::document::DocumentArgs;

/// Cosmos DB demo - database, container and document workflows
#[derive(Parser, Debug)]
#[command(name = "cosmos-demo")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "cosmos-demo.toml", env = "COSMOS_DEMO_CONFIG")]
    pub config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "COSMOS_DEMO_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute (defaults to delete-document)
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List every database in the account
    ListDatabases,

    /// Create a database
    CreateDatabase(DatabaseArgs),

    /// Delete a database and all of its containers
    DeleteDatabase(DatabaseArgs),

    /// List the containers of a database with their throughput
    ListContainers(ListContainersArgs),

    /// Create a container with manual throughput
    CreateContainer(CreateContainerArgs),

    /// Delete a container
    DeleteContainer(DeleteContainerArgs),

    /// Insert a new demo customer document
    CreateDocument(DocumentArgs),

    /// Rename the single "New customer" document to "Test"
    ReplaceDocument(DocumentArgs),

    /// Delete the single "Test" document
    DeleteDocument(DocumentArgs),
}

impl Cli {
    /// Resolve the parsed arguments into the operation to run
    ///
    /// # Errors
    ///
    /// Returns a validation error if a database or container id is invalid.
    pub fn operation(&self, workflow: &WorkflowConfig) -> Result<Operation> {
        let Some(command) = &self.command else {
            return Ok(Operation::DeleteDocument(
                DocumentArgs::default().target(workflow)?,
            ));
        };

        match command {
            Commands::ListDatabases => Ok(Operation::ListDatabases),
            Commands::CreateDatabase(args) => args.create(),
            Commands::DeleteDatabase(args) => args.delete(),
            Commands::ListContainers(args) => args.to_operation(workflow),
            Commands::CreateContainer(args) => args.to_operation(workflow),
            Commands::DeleteContainer(args) => args.to_operation(workflow),
            Commands::CreateDocument(args) => Ok(Operation::CreateDocument(args.target(workflow)?)),
            Commands::ReplaceDocument(args) => {
                Ok(Operation::ReplaceDocument(args.target(workflow)?))
            }
            Commands::DeleteDocument(args) => Ok(Operation::DeleteDocument(args.target(workflow)?)),
        }
    }
}
