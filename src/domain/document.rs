//! Schema-less document model
//!
//! Documents are arbitrary JSON objects. [`Document`] keeps the raw object and
//! offers typed accessors for the fields the workflows need: the `id`, the
//! `name`, and the value sitting at the container's partition-key path.

use crate::domain::{DemoError, Result};
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use uuid::Uuid;

/// Name given to documents created by the demo
pub const NEW_CUSTOMER_NAME: &str = "New customer";

/// Name a replaced document is renamed to, and the name the delete workflow looks for
pub const RENAMED_CUSTOMER_NAME: &str = "Test";

/// A schema-less JSON document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Document(Map<String, Value>);

impl Document {
    /// Wraps a JSON object
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    /// Builds the demo customer document with a freshly generated id
    ///
    /// ```
    /// use cosmos_demo::domain::Document;
    ///
    /// let doc = Document::new_customer();
    /// assert_eq!(doc.name(), Some("New customer"));
    /// assert_eq!(doc.value_at("/location/city").and_then(|v| v.as_str()), Some("Brooklyn"));
    /// ```
    pub fn new_customer() -> Self {
        let mut fields = Map::new();
        fields.insert("id".to_string(), Value::from(Uuid::new_v4().to_string()));
        fields.insert("name".to_string(), Value::from(NEW_CUSTOMER_NAME));
        fields.insert(
            "location".to_string(),
            json!({
                "state": "New York",
                "country": "United States",
                "city": "Brooklyn"
            }),
        );
        Self(fields)
    }

    /// Document id, if present and a string
    pub fn id(&self) -> Option<&str> {
        self.0.get("id").and_then(Value::as_str)
    }

    /// Document id
    ///
    /// # Errors
    ///
    /// Returns a validation error if the document has no string `id`.
    pub fn require_id(&self) -> Result<&str> {
        self.id()
            .ok_or_else(|| DemoError::Validation("Document has no string 'id' field".to_string()))
    }

    /// The `name` field, if present and a string
    pub fn name(&self) -> Option<&str> {
        self.0.get("name").and_then(Value::as_str)
    }

    /// Sets a top-level field, returning the previous value
    pub fn set_field(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(key.into(), value.into())
    }

    /// Looks up a value by partition-key style path (`/location/state`)
    pub fn value_at(&self, path: &str) -> Option<&Value> {
        let mut segments = path.strip_prefix('/')?.split('/');
        let first = segments.next()?;
        let mut current = self.0.get(first)?;
        for segment in segments {
            current = current.as_object()?.get(segment)?;
        }
        Some(current)
    }

    /// String partition-key value at `path`
    ///
    /// # Errors
    ///
    /// Returns a validation error if the path is missing or doesn't hold a string.
    pub fn partition_key_value(&self, path: &str) -> Result<&str> {
        self.value_at(path).and_then(Value::as_str).ok_or_else(|| {
            DemoError::Validation(format!(
                "Document {} has no string partition key value at '{path}'",
                self.id().unwrap_or("<no id>")
            ))
        })
    }
}

impl TryFrom<Value> for Document {
    type Error = DemoError;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::Object(fields) => Ok(Self(fields)),
            other => Err(DemoError::Serialization(format!(
                "Expected a JSON object document, got: {other}"
            ))),
        }
    }
}

impl From<Document> for Value {
    fn from(doc: Document) -> Self {
        Value::Object(doc.0)
    }
}

/// Builds a `SELECT * FROM c WHERE c.name = '...'` query
///
/// Single quotes in `name` are doubled.
pub fn query_by_name(name: &str) -> String {
    format!(
        "SELECT * FROM c WHERE c.name = '{}'",
        name.replace('\'', "''")
    )
}
