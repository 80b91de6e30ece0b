use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::{null_as_default, CapacityStats};

/// A storage controller taking part in the cluster.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Node {
    #[serde(alias = "ID", alias = "Id", deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(alias = "Name", deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(alias = "Address", deserialize_with = "null_as_default")]
    pub address: String,
    #[serde(alias = "Api_Port", deserialize_with = "null_as_default")]
    pub api_port: u16,
    #[serde(alias = "Description", deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(alias = "Health", deserialize_with = "null_as_default")]
    pub health: String,
    #[serde(alias = "Health_Updated_At", with = "crate::types::timestamp")]
    pub health_updated_at: Option<DateTime<Utc>>,
    #[serde(alias = "Version", deserialize_with = "null_as_default")]
    pub version: String,
    /// Node currently runs the cluster scheduler
    #[serde(alias = "Scheduler", deserialize_with = "null_as_default")]
    pub scheduler: bool,
    #[serde(alias = "Labels", deserialize_with = "null_as_default")]
    pub labels: HashMap<String, String>,
    #[serde(alias = "Capacity_Stats", deserialize_with = "null_as_default")]
    pub capacity_stats: CapacityStats,
}
