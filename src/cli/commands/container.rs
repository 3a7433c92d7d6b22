//! Container subcommands

use super::database_or;
use crate::config::WorkflowConfig;
use crate::core::Operation;
use crate::domain::{
    ContainerId, ContainerRef, ContainerSpec, DemoError, Result, DEFAULT_PARTITION_KEY_PATH,
    DEFAULT_THROUGHPUT,
};
use clap::Args;

/// Arguments for `list-containers`
#[derive(Args, Debug)]
pub struct ListContainersArgs {
    /// Database id (defaults to workflow.database)
    #[arg(short, long)]
    pub database: Option<String>,
}

impl ListContainersArgs {
    /// Resolve into a list-containers operation
    pub fn to_operation(&self, workflow: &WorkflowConfig) -> Result<Operation> {
        let database = database_or(self.database.as_deref(), &workflow.database)?;
        Ok(Operation::ListContainers(database))
    }
}

/// Arguments for `create-container`
#[derive(Args, Debug)]
pub struct CreateContainerArgs {
    /// Container id
    pub id: String,

    /// Database id (defaults to workflow.database)
    #[arg(short, long)]
    pub database: Option<String>,

    /// Manual throughput in request units
    #[arg(short, long, default_value_t = DEFAULT_THROUGHPUT)]
    pub throughput: u32,

    /// Partition key path
    #[arg(short, long, default_value = DEFAULT_PARTITION_KEY_PATH)]
    pub partition_key: String,
}

impl CreateContainerArgs {
    /// Resolve into a create-container operation
    pub fn to_operation(&self, workflow: &WorkflowConfig) -> Result<Operation> {
        let database = database_or(self.database.as_deref(), &workflow.database)?;
        ContainerId::new(self.id.as_str())
            .map_err(|e| DemoError::Validation(format!("container: {e}")))?;

        if self.throughput == 0 {
            return Err(DemoError::Validation(
                "throughput must be greater than 0".to_string(),
            ));
        }
        if !self.partition_key.starts_with('/') {
            return Err(DemoError::Validation(format!(
                "partition key path must start with '/': {}",
                self.partition_key
            )));
        }

        let spec = ContainerSpec::new(self.id.as_str())
            .with_throughput(self.throughput)
            .with_partition_key_path(self.partition_key.as_str());

        Ok(Operation::CreateContainer { database, spec })
    }
}

/// Arguments for `delete-container`
#[derive(Args, Debug)]
pub struct DeleteContainerArgs {
    /// Container id
    pub id: String,

    /// Database id (defaults to workflow.database)
    #[arg(short, long)]
    pub database: Option<String>,
}

impl DeleteContainerArgs {
    /// Resolve into a delete-container operation
    pub fn to_operation(&self, workflow: &WorkflowConfig) -> Result<Operation> {
        let database = database_or(self.database.as_deref(), &workflow.database)?;
        let container = ContainerId::new(self.id.as_str())
            .map_err(|e| DemoError::Validation(format!("container: {e}")))?;

        Ok(Operation::DeleteContainer(ContainerRef::new(database, container)))
    }
}
