use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::null_as_default;

/// A volume as reported by the API server.
///
/// Keys also decode in the capitalised spelling (`"Name"`, `"Created_By"`)
/// older servers and fixtures use, and `null` anywhere means the zero value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Volume {
    /// Server-assigned UUID
    #[serde(alias = "ID", alias = "Id", deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(alias = "Name", deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(alias = "Description", deserialize_with = "null_as_default")]
    pub description: String,
    /// Pool the volume was allocated from
    #[serde(alias = "Pool", deserialize_with = "null_as_default")]
    pub pool: String,
    /// Size in GiB
    #[serde(alias = "Size", deserialize_with = "null_as_default")]
    pub size: u64,
    #[serde(alias = "Inode", deserialize_with = "null_as_default")]
    pub inode: u32,

    /// Placement of the serving copy
    #[serde(alias = "Master", deserialize_with = "null_as_default")]
    pub master: Deployment,
    /// Placement of the mirrors
    #[serde(alias = "Replicas", deserialize_with = "null_as_default")]
    pub replicas: Vec<Deployment>,

    #[serde(alias = "Created_By", deserialize_with = "null_as_default")]
    pub created_by: String,
    #[serde(alias = "Datacentre", deserialize_with = "null_as_default")]
    pub datacentre: String,
    #[serde(alias = "Tenant", deserialize_with = "null_as_default")]
    pub tenant: String,

    #[serde(alias = "Status", deserialize_with = "null_as_default")]
    pub status: String,
    #[serde(alias = "Status_Message", deserialize_with = "null_as_default")]
    pub status_message: String,
    #[serde(alias = "Health", deserialize_with = "null_as_default")]
    pub health: String,

    #[serde(alias = "Volume_Groups", deserialize_with = "null_as_default")]
    pub volume_groups: Vec<String>,
    #[serde(alias = "Tags", deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
    #[serde(alias = "Labels", deserialize_with = "null_as_default")]
    pub labels: HashMap<String, String>,

    #[serde(alias = "Mounted", deserialize_with = "null_as_default")]
    pub mounted: bool,
    #[serde(alias = "No_Of_Mounts", deserialize_with = "null_as_default")]
    pub no_of_mounts: u32,
    #[serde(alias = "Mounted_By", deserialize_with = "null_as_default")]
    pub mounted_by: String,
    #[serde(alias = "Mounted_At", with = "crate::types::timestamp")]
    pub mounted_at: Option<DateTime<Utc>>,

    #[serde(alias = "Created_At", with = "crate::types::timestamp")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Volume {
    /// Controller ids holding a copy, master first
    pub fn controllers(&self) -> impl Iterator<Item = &str> {
        std::iter::once(&self.master)
            .chain(self.replicas.iter())
            .map(|d| d.controller.as_str())
            .filter(|c| !c.is_empty())
    }
}

/// Where one copy of a volume lives (master or replica).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Deployment {
    #[serde(alias = "ID", alias = "Id", deserialize_with = "null_as_default")]
    pub id: String,
    /// Node serving this copy
    #[serde(alias = "Controller", deserialize_with = "null_as_default")]
    pub controller: String,
    #[serde(alias = "Inode", deserialize_with = "null_as_default")]
    pub inode: u32,
    #[serde(alias = "Status", deserialize_with = "null_as_default")]
    pub status: String,
    #[serde(alias = "Health", deserialize_with = "null_as_default")]
    pub health: String,
    #[serde(alias = "Created_At", with = "crate::types::timestamp")]
    pub created_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    const ACTIVE_VOLUME: &str = r#"{
        "id": "ef897b9f-0b47-08ee-b669-0a2057df981c",
        "master": {
            "controller": "b3eb8d63-4f1b-9ef5-a504-7d02d604feb4",
            "id": "55fb06cb-263d-08bf-584e-e5b889166f3b",
            "inode": 41560,
            "status": "active",
            "health": "",
            "created_at": "2017-01-25T02:17:05.507557244Z"
        },
        "replicas": null,
        "created_by": "storageos",
        "name": "test01",
        "status": "active",
        "pool": "213498fb-ead9-2a48-92e6-4dac2020f2ed",
        "size": 10,
        "inode": 41397,
        "volume_groups": null,
        "tags": ["filesystem", "compression"],
        "mounted": false,
        "no_of_mounts": 0,
        "mounted_by": "",
        "mounted_at": "0001-01-01T00:00:00Z",
        "created_at": "0001-01-01T00:00:00Z"
    }"#;

    #[test]
    fn test_decode_tolerates_nulls_and_zero_times() {
        let volume: Volume = serde_json::from_str(ACTIVE_VOLUME).unwrap();
        assert_eq!(volume.name, "test01");
        assert_eq!(volume.size, 10);
        assert_eq!(volume.inode, 41397);
        assert!(volume.replicas.is_empty());
        assert!(volume.volume_groups.is_empty());
        assert!(volume.labels.is_empty());
        assert_eq!(volume.tags, vec!["filesystem", "compression"]);
        assert_eq!(volume.master.inode, 41560);
        assert!(volume.master.created_at.is_some());
        assert_eq!(volume.mounted_at, None);
        assert_eq!(volume.created_at, None);
        // absent fields
        assert_eq!(volume.datacentre, "");
        assert_eq!(volume.description, "");
    }

    #[test]
    fn test_decode_empty_object() {
        let volume: Volume = serde_json::from_str("{}").unwrap();
        assert_eq!(volume, Volume::default());
    }

    #[test]
    fn test_reencode_decodes_to_same_value() {
        let volume: Volume = serde_json::from_str(ACTIVE_VOLUME).unwrap();
        let json = serde_json::to_string(&volume).unwrap();
        assert!(json.contains(r#""mounted_at":"0001-01-01T00:00:00Z""#));
        let again: Volume = serde_json::from_str(&json).unwrap();
        assert_eq!(again, volume);
    }

    #[test]
    fn test_controllers_skip_unplaced_copies() {
        let mut volume: Volume = serde_json::from_str(ACTIVE_VOLUME).unwrap();
        volume.replicas.push(Deployment {
            controller: "node-2".into(),
            ..Default::default()
        });
        volume.replicas.push(Deployment::default());
        let controllers: Vec<&str> = volume.controllers().collect();
        assert_eq!(
            controllers,
            vec!["b3eb8d63-4f1b-9ef5-a504-7d02d604feb4", "node-2"]
        );
    }

    #[test]
    fn test_decode_capitalised_keys() {
        let volume: Volume = serde_json::from_str(
            r#"{
                "Name": "unit01",
                "Description": "Unit test volume",
                "Pool": "default",
                "Size": 5,
                "Master": {"Controller": "node-1", "Inode": 7},
                "No_Of_Mounts": 2,
                "Created_By": "storageos"
            }"#,
        )
        .unwrap();
        assert_eq!(volume.name, "unit01");
        assert_eq!(volume.description, "Unit test volume");
        assert_eq!(volume.pool, "default");
        assert_eq!(volume.size, 5);
        assert_eq!(volume.master.controller, "node-1");
        assert_eq!(volume.master.inode, 7);
        assert_eq!(volume.no_of_mounts, 2);
        assert_eq!(volume.created_by, "storageos");
    }

    #[test]
    fn test_decode_null_scalars_and_master() {
        let volume: Volume = serde_json::from_str(r#"{"name": "a", "master": null}"#).unwrap();
        assert_eq!(volume.name, "a");
        assert_eq!(volume.master, Deployment::default());
        assert_eq!(volume.controllers().count(), 0);

        let volume: Volume = serde_json::from_str(
            r#"{
                "name": "a",
                "description": null,
                "size": null,
                "mounted": null,
                "master": {"controller": null, "created_at": null}
            }"#,
        )
        .unwrap();
        assert_eq!(volume.name, "a");
        assert_eq!(volume.description, "");
        assert_eq!(volume.size, 0);
        assert!(!volume.mounted);
        assert_eq!(volume.master, Deployment::default());
    }
}
