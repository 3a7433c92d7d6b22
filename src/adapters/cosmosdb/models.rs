//! Mapping from SDK property models to domain descriptors

use crate::domain::{ContainerDescriptor, DatabaseDescriptor, PartitionKeyPaths};
use azure_data_cosmos::models::{
    ContainerProperties, DatabaseProperties, SystemProperties, ThroughputProperties,
};
use chrono::{DateTime, Utc};

/// Last-modified time (`_ts`) of a resource, at second precision
fn last_modified(system: &SystemProperties) -> Option<DateTime<Utc>> {
    system
        .last_modified
        .and_then(|ts| DateTime::from_timestamp(ts.unix_timestamp(), 0))
}

/// Domain descriptor of a database
pub fn database_descriptor(properties: &DatabaseProperties) -> DatabaseDescriptor {
    DatabaseDescriptor {
        id: properties.id.clone(),
        last_modified: last_modified(&properties.system_properties),
    }
}

/// Domain descriptor of a container
pub fn container_descriptor(properties: &ContainerProperties) -> ContainerDescriptor {
    ContainerDescriptor {
        id: properties.id.to_string(),
        partition_key: PartitionKeyPaths {
            paths: properties.partition_key.paths.clone(),
        },
        last_modified: last_modified(&properties.system_properties),
    }
}

/// Manual throughput of an offer, `None` for autoscale offers
pub fn provisioned_throughput(properties: &ThroughputProperties) -> Option<usize> {
    properties.throughput()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_database_descriptor_keeps_timestamp() {
        let properties: DatabaseProperties = serde_json::from_value(json!({
            "id": "Families",
            "_rid": "Zq1cAA==",
            "_self": "dbs/Zq1cAA==/",
            "_etag": "\"0000e000-0000-0000-0000-000000000000\"",
            "_ts": 1_700_000_000
        }))
        .unwrap();

        let db = database_descriptor(&properties);
        assert_eq!(db.id, "Families");
        assert_eq!(
            db.last_modified.unwrap().to_rfc3339(),
            "2023-11-14T22:13:20+00:00"
        );
    }

    #[test]
    fn test_container_descriptor_keeps_timestamp_and_paths() {
        let properties: ContainerProperties = serde_json::from_value(json!({
            "id": "Families",
            "partitionKey": { "paths": ["/location/state"], "kind": "Hash", "version": 2 },
            "_ts": 1_700_000_000
        }))
        .unwrap();

        let container = container_descriptor(&properties);
        assert_eq!(container.id, "Families");
        assert_eq!(container.partition_key_path(), "/location/state");
        assert_eq!(
            container.last_modified.unwrap().timestamp(),
            1_700_000_000
        );
    }

    #[test]
    fn test_descriptor_without_timestamp() {
        let properties: ContainerProperties = serde_json::from_value(json!({
            "id": "Orders",
            "partitionKey": { "paths": ["/partitionKey"], "kind": "Hash" }
        }))
        .unwrap();

        assert!(container_descriptor(&properties).last_modified.is_none());
    }

    #[test]
    fn test_provisioned_throughput() {
        assert_eq!(
            provisioned_throughput(&ThroughputProperties::manual(400)),
            Some(400)
        );
        assert_eq!(
            provisioned_throughput(&ThroughputProperties::autoscale(4000, None)),
            None
        );
    }
}
