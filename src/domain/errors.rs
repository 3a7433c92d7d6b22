//! Domain error types
//!
//! This module defines the error hierarchy for the demo. Errors raised by the
//! Cosmos DB SDK are converted into [`CosmosDbError`] at the adapter boundary,
//! so no third-party error types leak into the workflow layer.

use thiserror::Error;

/// Main error type
///
/// This is the primary error type used throughout the application.
#[derive(Debug, Error)]
pub enum DemoError {
    /// Configuration-related errors (missing file, missing values, invalid values)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Cosmos DB-related errors
    #[error("Cosmos DB error: {0}")]
    CosmosDb(#[from] CosmosDbError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Generic errors with context
    #[error("{0}")]
    Other(String),
}

/// Cosmos DB-specific errors
///
/// These errors don't expose SDK types; the SDK error text is carried as a message.
#[derive(Debug, Error)]
pub enum CosmosDbError {
    /// Failed to build the client or reach the account
    #[error("Failed to connect to Cosmos DB: {0}")]
    ConnectionFailed(String),

    /// Master key rejected (401/403)
    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    /// Database, container or document not found (404)
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Resource already exists (409)
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Throttling error (429)
    #[error("Request rate too large (429): {0}")]
    Throttled(String),

    /// Failed to query databases, containers or documents
    #[error("Failed to query: {0}")]
    QueryFailed(String),

    /// Failed to create, replace or delete a resource
    #[error("Failed to write: {0}")]
    WriteFailed(String),

    /// Failed to deserialize response
    #[error("Failed to deserialize response: {0}")]
    DeserializationFailed(String),

    /// Anything the service reported that doesn't fit the variants above
    #[error("Unexpected Cosmos DB error: {0}")]
    Unknown(String),
}

impl CosmosDbError {
    /// Classify an SDK error message into a specific variant
    ///
    /// The SDK reports the HTTP status in its error text, so the status code or
    /// its reason phrase decides the variant. Messages without a recognised
    /// status fall back to `fallback`.
    pub fn classify(message: String, fallback: fn(String) -> CosmosDbError) -> Self {
        let has = |needles: &[&str]| needles.iter().any(|n| message.contains(n));

        if has(&["404", "NotFound"]) {
            CosmosDbError::NotFound(message)
        } else if has(&["409", "Conflict"]) {
            CosmosDbError::Conflict(message)
        } else if has(&["401", "403", "Unauthorized", "Forbidden"]) {
            CosmosDbError::AuthenticationFailed(message)
        } else if has(&["429", "TooManyRequests", "Request rate is large"]) {
            CosmosDbError::Throttled(message)
        } else {
            fallback(message)
        }
    }
}

/// Coarse failure labels reported to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Endpoint or credential missing or invalid
    ConfigurationMissing,
    /// Client could not be built or the account could not be reached
    ConnectionFailure,
    /// Requested resource does not exist
    NotFound,
    /// Resource already exists
    Conflict,
    /// Everything else
    Unknown,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            ErrorKind::ConfigurationMissing => "ConfigurationMissing",
            ErrorKind::ConnectionFailure => "ConnectionFailure",
            ErrorKind::NotFound => "NotFound",
            ErrorKind::Conflict => "Conflict",
            ErrorKind::Unknown => "Unknown",
        };
        f.write_str(label)
    }
}

impl DemoError {
    /// Returns the coarse label for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            DemoError::Configuration(_) => ErrorKind::ConfigurationMissing,
            DemoError::CosmosDb(CosmosDbError::ConnectionFailed(_))
            | DemoError::CosmosDb(CosmosDbError::AuthenticationFailed(_)) => {
                ErrorKind::ConnectionFailure
            }
            DemoError::CosmosDb(CosmosDbError::NotFound(_)) => ErrorKind::NotFound,
            DemoError::CosmosDb(CosmosDbError::Conflict(_)) => ErrorKind::Conflict,
            _ => ErrorKind::Unknown,
        }
    }

    /// Process exit code for this error
    ///
    /// 2 = configuration error, 4 = connection error, 5 = operation failure.
    pub fn exit_code(&self) -> i32 {
        match self.kind() {
            ErrorKind::ConfigurationMissing => 2,
            ErrorKind::ConnectionFailure => 4,
            _ => 5,
        }
    }
}

// Conversion from std::io::Error
impl From<std::io::Error> for DemoError {
    fn from(err: std::io::Error) -> Self {
        DemoError::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for DemoError {
    fn from(err: serde_json::Error) -> Self {
        DemoError::Serialization(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for DemoError {
    fn from(err: toml::de::Error) -> Self {
        DemoError::Configuration(format!("TOML parse error: {err}"))
    }
}
