//! Master key handling using the secrecy crate
//!
//! The Cosmos DB master key grants full control over the account, so it is
//! kept in a [`secrecy::Secret`]: zeroed on drop, redacted in `Debug`, and
//! only reachable through `expose_secret()` at the point the SDK client is
//! built.
//!
//! # Example
//!
//! ```rust
//! use cosmos_demo::config::secret_string;
//! use secrecy::ExposeSecret;
//!
//! let key = secret_string("master-key".to_string());
//! assert_eq!(key.expose_secret().as_ref(), "master-key");
//! assert!(!format!("{key:?}").contains("master-key"));
//! ```

use secrecy::{CloneableSecret, DebugSecret, Secret, SerializableSecret};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use zeroize::Zeroize;

/// String newtype that satisfies the trait bounds `Secret` needs
#[derive(Clone, Debug, Zeroize)]
#[zeroize(drop)]
pub struct SecretValue(String);

impl CloneableSecret for SecretValue {}
impl DebugSecret for SecretValue {}
impl SerializableSecret for SecretValue {}

impl From<String> for SecretValue {
    fn from(s: String) -> Self {
        SecretValue(s)
    }
}

impl From<SecretValue> for String {
    fn from(mut s: SecretValue) -> Self {
        std::mem::take(&mut s.0)
    }
}

impl PartialEq<str> for SecretValue {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl AsRef<str> for SecretValue {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl SecretValue {
    /// Whether the secret is empty or whitespace only
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl Serialize for SecretValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for SecretValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        String::deserialize(deserializer).map(SecretValue)
    }
}

/// A secret string: zeroed on drop, redacted in `Debug`
pub type SecretString = Secret<SecretValue>;

/// Wraps a plain string as a [`SecretString`]
#[inline]
pub fn secret_string(value: String) -> SecretString {
    Secret::new(SecretValue::from(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    #[test]
    fn test_secret_string_creation() {
        let secret = secret_string("test-key".to_string());
        assert_eq!(secret.expose_secret(), "test-key");
    }

    #[test]
    fn test_secret_is_blank() {
        assert!(secret_string("  ".to_string()).expose_secret().is_blank());
        assert!(!secret_string("k".to_string()).expose_secret().is_blank());
    }

    #[test]
    fn test_secret_debug_redacted() {
        let secret = secret_string("sensitive-key".to_string());
        let debug_output = format!("{secret:?}");

        assert!(!debug_output.contains("sensitive-key"));
        assert!(debug_output.contains("REDACTED") || debug_output.contains("Secret"));
    }

    #[test]
    fn test_secret_deserialize_from_toml() {
        #[derive(Deserialize)]
        struct KeyOnly {
            key: SecretString,
        }

        let parsed: KeyOnly = toml::from_str("key = \"abc==\"").unwrap();
        assert_eq!(parsed.key.expose_secret(), "abc==");
    }
}
