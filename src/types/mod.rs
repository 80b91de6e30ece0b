//! Wire types for the StorageOS API
//!
//! Everything here is decoded per call and discarded; the server owns the
//! real state. Decoding is lenient: absent or `null` fields take their zero
//! value, and keys are also accepted in their capitalised spelling.

pub mod node;
pub mod options;
pub mod pool;
pub mod timestamp;
pub mod volume;

pub use node::Node;
pub use options::{ListOptions, PoolCreateOptions, VolumeCreateOptions, VolumeMountOptions, VolumeUpdateOptions};
pub use pool::{CapacityStats, Pool};
pub use volume::{Deployment, Volume};

use serde::{Deserialize, Deserializer};

/// Decode `null` as the type's default (empty string, empty vec, zero, ...).
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
