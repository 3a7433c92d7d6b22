//! Resource identifier types with validation
//!
//! Newtype wrappers for Cosmos DB database and container ids. The service
//! rejects ids that are empty, longer than 255 characters, end with a space,
//! or contain `/`, `\`, `?` or `#`; these types reject them up front so the
//! error surfaces before any request is sent.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const MAX_ID_LEN: usize = 255;
const FORBIDDEN_CHARS: [char; 4] = ['/', '\\', '?', '#'];

fn validate_resource_id(kind: &str, id: &str) -> Result<(), String> {
    if id.trim().is_empty() {
        return Err(format!("{kind} ID cannot be empty"));
    }
    if id.chars().count() > MAX_ID_LEN {
        return Err(format!(
            "{kind} ID cannot be longer than {MAX_ID_LEN} characters"
        ));
    }
    if let Some(c) = id.chars().find(|c| FORBIDDEN_CHARS.contains(c)) {
        return Err(format!("{kind} ID '{id}' contains forbidden character '{c}'"));
    }
    if id.ends_with(' ') {
        return Err(format!("{kind} ID '{id}' cannot end with a space"));
    }
    Ok(())
}

/// Database identifier newtype wrapper
///
/// # Examples
///
/// ```
/// use cosmos_demo::domain::ids::DatabaseId;
/// use std::str::FromStr;
///
/// let database = DatabaseId::from_str("Families").unwrap();
/// assert_eq!(database.as_str(), "Families");
/// assert!(DatabaseId::from_str("a/b").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DatabaseId(String);

impl DatabaseId {
    /// Creates a new DatabaseId, validating it against the service's id rules
    pub fn new(id: impl Into<String>) -> Result<Self, String> {
        let id = id.into();
        validate_resource_id("Database", &id)?;
        Ok(Self(id))
    }

    /// Returns the database ID as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DatabaseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for DatabaseId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for DatabaseId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Container identifier newtype wrapper
///
/// A container is always addressed together with its database, see
/// [`ContainerRef`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContainerId(String);

impl ContainerId {
    /// Creates a new ContainerId, validating it against the service's id rules
    pub fn new(id: impl Into<String>) -> Result<Self, String> {
        let id = id.into();
        validate_resource_id("Container", &id)?;
        Ok(Self(id))
    }

    /// Returns the container ID as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ContainerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ContainerId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for ContainerId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A (database, container) pair
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContainerRef {
    /// Owning database
    pub database: DatabaseId,
    /// Container within the database
    pub container: ContainerId,
}

impl ContainerRef {
    /// Creates a new container reference
    pub fn new(database: DatabaseId, container: ContainerId) -> Self {
        Self {
            database,
            container,
        }
    }

    /// Parses both ids
    ///
    /// # Errors
    ///
    /// Returns the validation message of the first invalid id.
    pub fn parse(database: &str, container: &str) -> Result<Self, String> {
        Ok(Self::new(database.parse()?, container.parse()?))
    }
}

impl fmt::Display for ContainerRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.database, self.container)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn test_database_id_valid() {
        let id = DatabaseId::new("Families").unwrap();
        assert_eq!(id.as_str(), "Families");
        assert_eq!(id.to_string(), "Families");
    }

    #[test_case("" ; "empty")]
    #[test_case("   " ; "blank")]
    #[test_case("a/b" ; "slash")]
    #[test_case("a\\b" ; "backslash")]
    #[test_case("what?" ; "question mark")]
    #[test_case("#1" ; "hash")]
    #[test_case("trailing " ; "trailing space")]
    fn test_database_id_invalid(id: &str) {
        assert!(DatabaseId::new(id).is_err());
    }

    #[test]
    fn test_container_id_length_limit() {
        assert!(ContainerId::new("c".repeat(255)).is_ok());
        assert!(ContainerId::new("c".repeat(256)).is_err());
    }

    #[test]
    fn test_container_id_error_message() {
        let err = ContainerId::new("a#b").unwrap_err();
        assert!(err.contains("Container ID"));
        assert!(err.contains('#'));
    }

    #[test]
    fn test_container_ref_parse_and_display() {
        let target = ContainerRef::parse("Families", "Members").unwrap();
        assert_eq!(target.database.as_str(), "Families");
        assert_eq!(target.container.as_str(), "Members");
        assert_eq!(target.to_string(), "Families/Members");

        assert!(ContainerRef::parse("Families", "").is_err());
    }
}
