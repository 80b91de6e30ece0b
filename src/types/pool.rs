use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::null_as_default;

/// A named grouping of storage capacity volumes are allocated from.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Pool {
    #[serde(alias = "ID", alias = "Id", deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(alias = "Name", deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(alias = "Description", deserialize_with = "null_as_default")]
    pub description: String,
    /// Used when a volume is created without naming a pool
    #[serde(alias = "Default", deserialize_with = "null_as_default")]
    pub default: bool,
    #[serde(alias = "Default_Driver", deserialize_with = "null_as_default")]
    pub default_driver: String,
    #[serde(alias = "Controller_Names", deserialize_with = "null_as_default")]
    pub controller_names: Vec<String>,
    #[serde(alias = "Driver_Names", deserialize_with = "null_as_default")]
    pub driver_names: Vec<String>,
    #[serde(alias = "Active", deserialize_with = "null_as_default")]
    pub active: bool,
    #[serde(alias = "Capacity_Stats", deserialize_with = "null_as_default")]
    pub capacity_stats: CapacityStats,
    #[serde(alias = "Labels", deserialize_with = "null_as_default")]
    pub labels: HashMap<String, String>,
}

/// Capacity counters, in bytes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CapacityStats {
    #[serde(alias = "Total_Capacity_Bytes", deserialize_with = "null_as_default")]
    pub total_capacity_bytes: u64,
    #[serde(alias = "Available_Capacity_Bytes", deserialize_with = "null_as_default")]
    pub available_capacity_bytes: u64,
    #[serde(alias = "Provisioned_Capacity_Bytes", deserialize_with = "null_as_default")]
    pub provisioned_capacity_bytes: u64,
}

impl CapacityStats {
    pub fn used_bytes(&self) -> u64 {
        self.total_capacity_bytes
            .saturating_sub(self.available_capacity_bytes)
    }
}
