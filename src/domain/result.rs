//! Result type alias
//!
//! Convenience Result type that uses [`DemoError`] as the error type.

use super::errors::DemoError;

/// Result type alias for demo operations
///
/// # Examples
///
/// ```
/// use cosmos_demo::domain::result::Result;
/// use cosmos_demo::domain::errors::DemoError;
///
/// fn example_function() -> Result<String> {
///     Ok("success".to_string())
/// }
///
/// fn failing_function() -> Result<()> {
///     Err(DemoError::Validation("Invalid input".to_string()))
/// }
/// ```
pub type Result<T> = std::result::Result<T, DemoError>;
