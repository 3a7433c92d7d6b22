//! Core workflow logic.
//!
//! # Modules
//!
//! - [`operation`] - The set of demo operations
//! - [`workflow`] - The runner that executes them against the document store
//!
//! # Example
//!
//! ```rust,no_run
//! use cosmos_demo::adapters::database::ClientProvider;
//! use cosmos_demo::config::load_config;
//! use cosmos_demo::core::{Operation, WorkflowRunner};
//! use cosmos_demo::domain::ContainerRef;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("cosmos-demo.toml")?;
//! let provider = ClientProvider::from_config(&config.cosmosdb)?;
//!
//! let mut runner = WorkflowRunner::new(provider, std::io::stdout());
//! let target = ContainerRef::parse("Families", "Families")?;
//! runner.run(&Operation::DeleteDocument(target)).await?;
//! # Ok(())
//! # }
//! ```

pub mod operation;
pub mod workflow;

pub use operation::Operation;
pub use workflow::{ContainerSummary, WorkflowRunner, DEFAULT_DOCUMENT_PARTITION_KEY_PATH};
