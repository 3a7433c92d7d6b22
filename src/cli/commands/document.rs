//! Document subcommands

use super::database_or;
use crate::config::WorkflowConfig;
use crate::domain::{ContainerId, ContainerRef, DemoError, Result};
use clap::Args;

/// Arguments shared by the document subcommands
#[derive(Args, Debug, Default)]
pub struct DocumentArgs {
    /// Database id (defaults to workflow.database)
    #[arg(long)]
    pub database: Option<String>,

    /// Container id (defaults to workflow.container)
    #[arg(long)]
    pub container: Option<String>,
}

impl DocumentArgs {
    /// Resolve the target container
    pub fn target(&self, workflow: &WorkflowConfig) -> Result<ContainerRef> {
        let database = database_or(self.database.as_deref(), &workflow.database)?;
        let container = ContainerId::new(self.container.as_deref().unwrap_or(&workflow.container))
            .map_err(|e| DemoError::Validation(format!("container: {e}")))?;

        Ok(ContainerRef::new(database, container))
    }
}
