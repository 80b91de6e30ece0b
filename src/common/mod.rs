//! Common utilities and types shared across storageos-client

pub mod config;
pub mod error;
pub mod utils;

pub use config::ClientConfig;
pub use error::{ApiError, Error, ResourceKind, Result, STATUS_ERRORS};
pub use utils::{encode_segment, parse_duration, validate_name};
