//! Database subcommands

use crate::core::Operation;
use crate::domain::{DatabaseId, DemoError, Result};
use clap::Args;

/// Arguments for `create-database` and `delete-database`
#[derive(Args, Debug)]
pub struct DatabaseArgs {
    /// Database id
    pub name: String,
}

impl DatabaseArgs {
    fn database_id(&self) -> Result<DatabaseId> {
        DatabaseId::new(self.name.as_str())
            .map_err(|e| DemoError::Validation(format!("database: {e}")))
    }

    /// Resolve into a create-database operation
    pub fn create(&self) -> Result<Operation> {
        Ok(Operation::CreateDatabase(self.database_id()?))
    }

    /// Resolve into a delete-database operation
    pub fn delete(&self) -> Result<Operation> {
        Ok(Operation::DeleteDatabase(self.database_id()?))
    }
}
