//! Logging and observability
//!
//! Structured logging through `tracing`:
//! - Human-readable console output on stderr
//! - Optional JSON file logging with rotation
//! - Level from configuration, overridable with `RUST_LOG`

pub mod structured;

pub use structured::{init_logging, LoggingGuard};

/// Log the start of a workflow operation
///
/// # Example
///
/// ```no_run
/// use cosmos_demo::log_operation_start;
///
/// log_operation_start!("delete-document", "Families/Families");
/// ```
#[macro_export]
macro_rules! log_operation_start {
    ($operation:expr, $target:expr) => {
        tracing::info!(
            operation = $operation,
            resource = %$target,
            "Starting operation"
        );
    };
}

/// Log an error with context
///
/// # Example
///
/// ```no_run
/// use cosmos_demo::log_error_with_context;
/// use cosmos_demo::domain::DemoError;
///
/// let error = DemoError::Configuration("cosmosdb.key cannot be empty".to_string());
/// log_error_with_context!(&error, "Failed to load configuration");
/// ```
#[macro_export]
macro_rules! log_error_with_context {
    ($error:expr, $context:expr) => {
        tracing::error!(
            error = %$error,
            kind = %$error.kind(),
            context = $context,
            "Error occurred"
        );
    };
}
