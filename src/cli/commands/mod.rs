//! CLI subcommand arguments
//!
//! Each argument struct resolves itself into an [`Operation`](crate::core::Operation),
//! filling unspecified targets from the `[workflow]` configuration section.

pub mod container;
pub mod database;
pub mod document;

use crate::domain::{DatabaseId, DemoError, Result};

/// Parses a user-supplied database id, falling back to the configured one
pub(crate) fn database_or(database: Option<&str>, configured: &str) -> Result<DatabaseId> {
    DatabaseId::new(database.unwrap_or(configured))
        .map_err(|e| DemoError::Validation(format!("database: {e}")))
}
