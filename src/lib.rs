//! # storageos-client
//!
//! A typed async client for the StorageOS HTTP API:
//! - Volumes: list, create, inspect, update, delete, mount, unmount
//! - Pools: list, create, inspect, delete
//! - Nodes: list, inspect
//!
//! The client does no work of its own. Each call is one HTTP round trip,
//! and the status code decides between a decoded value, a named
//! [`ApiError`] and a generic [`Error`].
//!
//! ## Architecture
//!
//! ```text
//! caller
//!   │  client.volume_delete("vol1")
//! ┌─▼──────────────────────────────┐
//! │ Client<T>                      │  url = {endpoint}/{version}/volumes/vol1
//! │  - JSON encode / decode        │  status → value | ApiError | Error
//! └─┬──────────────────────────────┘
//!   │  ApiRequest
//! ┌─▼──────────────────────────────┐
//! │ Transport (HttpTransport)      │  headers, auth, timeout
//! └─┬──────────────────────────────┘
//!   │  HTTP/1.1 + JSON
//!   ▼
//! StorageOS API server
//! ```
//!
//! ## Usage
//!
//! ```no_run
//! use storageos_client::{ApiError, Client, ClientConfig, Error, ListOptions};
//!
//! # async fn run() -> storageos_client::Result<()> {
//! let config = ClientConfig::new("http://10.1.5.249:5705").with_basic_auth("storageos", "storageos");
//! let client = Client::new(&config)?;
//!
//! for volume in client.volume_list(&ListOptions::default()).await? {
//!     println!("{} {}GiB {}", volume.name, volume.size, volume.status);
//! }
//!
//! match client.volume_delete("scratch").await {
//!     Ok(()) => {}
//!     Err(Error::Api(ApiError::VolumeInUse)) => eprintln!("still mounted"),
//!     Err(e) => return Err(e),
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod common;
pub mod transport;
pub mod types;

// Re-export commonly used types
pub use client::Client;
pub use common::{ApiError, ClientConfig, Error, ResourceKind, Result};
pub use transport::{ApiRequest, ApiResponse, HttpTransport, Transport};
pub use types::{
    ListOptions, Node, Pool, PoolCreateOptions, Volume, VolumeCreateOptions, VolumeMountOptions,
    VolumeUpdateOptions,
};

/// Current version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
