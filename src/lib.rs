// Cosmos Demo - Azure Cosmos DB database, container and document workflows
// Copyright (c) 2025 Cosmos Demo Contributors
// Licensed under the MIT License

//! # Cosmos Demo
//!
//! A small command-line program that exercises the Azure Cosmos DB resource
//! model end to end: databases, containers with provisioned throughput, and
//! schema-less JSON documents.
//!
//! ## Overview
//!
//! This library provides:
//! - **Connecting** to an account once, from an endpoint and master key
//! - **Managing** databases and containers (list, create, delete)
//! - **Mutating** demo documents (create, rename, delete by name)
//!
//! ## Architecture
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`core`] - Workflow operations and the runner that executes them
//! - [`adapters`] - Cosmos DB integration behind the [`adapters::database::DocumentStore`] trait
//! - [`domain`] - Identifiers, descriptors, documents and errors
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging and observability
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use cosmos_demo::adapters::database::ClientProvider;
//! use cosmos_demo::config::load_config;
//! use cosmos_demo::core::WorkflowRunner;
//! use cosmos_demo::domain::DatabaseId;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = load_config("cosmos-demo.toml")?;
//!
//!     // One handle for the whole process
//!     let provider = ClientProvider::from_config(&config.cosmosdb)?;
//!
//!     let mut runner = WorkflowRunner::new(provider, std::io::stdout());
//!     let containers = runner
//!         .list_containers(&DatabaseId::new("Families")?)
//!         .await?;
//!
//!     println!("{} containers", containers.len());
//!     Ok(())
//! }
//! ```
//!
//! ## Document Workflows
//!
//! The document operations work on the demo "customer" shape:
//!
//! ```json
//! {
//!   "id": "<uuid>",
//!   "name": "New customer",
//!   "location": { "state": "New York", "country": "United States", "city": "Brooklyn" }
//! }
//! ```
//!
//! Replace and delete only act when exactly one document matches the name
//! query; zero or several matches leave the container untouched.
//!
//! ## Error Handling
//!
//! All fallible operations return [`domain::Result`], carrying a [`domain::DemoError`]:
//!
//! ```rust,no_run
//! use cosmos_demo::domain::DemoError;
//!
//! fn example() -> Result<(), DemoError> {
//!     let config = cosmos_demo::config::load_config("cosmos-demo.toml")?;
//!     Ok(())
//! }
//! ```
//!
//! ## Logging
//!
//! Structured logging with the `tracing` crate:
//!
//! ```rust,no_run
//! use tracing::{info, warn};
//!
//! info!("Starting workflow");
//! warn!(container = "Families", "No unique match");
//! ```

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
