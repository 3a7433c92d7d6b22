//! Domain models and types.
//!
//! # Overview
//!
//! The domain layer provides:
//! - **Validated identifiers** ([`DatabaseId`], [`ContainerId`], [`ContainerRef`])
//! - **Resource descriptors** ([`DatabaseDescriptor`], [`ContainerDescriptor`], [`ContainerSpec`])
//! - **Schema-less documents** ([`Document`])
//! - **Error types** ([`DemoError`], [`CosmosDbError`], [`ErrorKind`])
//! - **Result type alias** ([`Result`])
//!
//! # Error Handling
//!
//! All fallible operations return [`Result<T, DemoError>`]:
//!
//! ```rust
//! use cosmos_demo::domain::{DemoError, ErrorKind, Result};
//!
//! fn example() -> Result<()> {
//!     Err(DemoError::Configuration("cosmosdb.key cannot be empty".to_string()))
//! }
//!
//! assert_eq!(example().unwrap_err().kind(), ErrorKind::ConfigurationMissing);
//! ```

pub mod document;
pub mod errors;
pub mod ids;
pub mod resources;
pub mod result;

// Re-export commonly used types for convenience
pub use document::{query_by_name, Document, NEW_CUSTOMER_NAME, RENAMED_CUSTOMER_NAME};
pub use errors::{CosmosDbError, DemoError, ErrorKind};
pub use ids::{ContainerId, ContainerRef, DatabaseId};
pub use resources::{
    ContainerDescriptor, ContainerSpec, DatabaseDescriptor, LastModified, PartitionKeyPaths,
    DEFAULT_PARTITION_KEY_PATH, DEFAULT_THROUGHPUT,
};
pub use result::Result;
