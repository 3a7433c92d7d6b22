//! Azure Cosmos DB integration
//!
//! SDK-backed implementation of the document store.

pub mod adapter;
pub mod client;
pub mod models;

pub use adapter::CosmosDbAdapter;
pub use client::CosmosDbClient;
