//! Database and container descriptors
//!
//! These mirror the subset of the service's resource properties the demo
//! prints, and keep the service's JSON field names (`id`, `_ts`,
//! `partitionKey.paths`).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Throughput provisioned by `create-container` when none is given
pub const DEFAULT_THROUGHPUT: u32 = 400;

/// Partition key path used by `create-container` when none is given
pub const DEFAULT_PARTITION_KEY_PATH: &str = "/partitionKey";

/// A database as reported by the service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatabaseDescriptor {
    /// Database id
    pub id: String,

    /// Last-modified timestamp (`_ts`, epoch seconds on the wire)
    #[serde(
        rename = "_ts",
        default,
        with = "chrono::serde::ts_seconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub last_modified: Option<DateTime<Utc>>,
}

/// Partition key definition of a container
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PartitionKeyPaths {
    /// Partition key paths, e.g. `["/location/state"]`
    #[serde(default)]
    pub paths: Vec<String>,
}

/// A container as reported by the service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContainerDescriptor {
    /// Container id
    pub id: String,

    /// Partition key definition
    #[serde(rename = "partitionKey", default)]
    pub partition_key: PartitionKeyPaths,

    /// Last-modified timestamp (`_ts`, epoch seconds on the wire)
    #[serde(
        rename = "_ts",
        default,
        with = "chrono::serde::ts_seconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub last_modified: Option<DateTime<Utc>>,
}

impl ContainerDescriptor {
    /// Partition key path(s) joined for display
    pub fn partition_key_path(&self) -> String {
        self.partition_key.paths.join(",")
    }
}

/// Properties for a container to be created
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainerSpec {
    /// Container id
    pub id: String,
    /// Manual throughput in request units
    pub throughput: u32,
    /// Partition key path
    pub partition_key_path: String,
}

impl ContainerSpec {
    /// Container spec with default throughput and partition key path
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            throughput: DEFAULT_THROUGHPUT,
            partition_key_path: DEFAULT_PARTITION_KEY_PATH.to_string(),
        }
    }

    /// Overrides the throughput
    pub fn with_throughput(mut self, throughput: u32) -> Self {
        self.throughput = throughput;
        self
    }

    /// Overrides the partition key path
    pub fn with_partition_key_path(mut self, path: impl Into<String>) -> Self {
        self.partition_key_path = path.into();
        self
    }
}

/// Display helper for an optional timestamp
pub struct LastModified<'a>(pub &'a Option<DateTime<Utc>>);

impl fmt::Display for LastModified<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(ts) => write!(f, "{}", ts.to_rfc3339()),
            None => f.write_str("unknown"),
        }
    }
}
