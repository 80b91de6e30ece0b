//! Error types for storageos-client

use reqwest::StatusCode;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Resource family an API call operates on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Volume,
    Pool,
    Node,
}

impl std::fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResourceKind::Volume => write!(f, "volume"),
            ResourceKind::Pool => write!(f, "pool"),
            ResourceKind::Node => write!(f, "node"),
        }
    }
}

/// Named errors for status codes the API documents per resource.
///
/// These are plain values and compare with `==`, so callers can match on
/// them the same way regardless of the response body the server sent.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiError {
    #[error("no such volume")]
    NoSuchVolume,

    #[error("volume in use and cannot be removed")]
    VolumeInUse,

    #[error("no such pool")]
    NoSuchPool,

    #[error("pool in use and cannot be removed")]
    PoolInUse,
}

/// Status code → sentinel mapping, keyed by resource kind.
pub static STATUS_ERRORS: &[(StatusCode, ResourceKind, ApiError)] = &[
    (StatusCode::NOT_FOUND, ResourceKind::Volume, ApiError::NoSuchVolume),
    (StatusCode::CONFLICT, ResourceKind::Volume, ApiError::VolumeInUse),
    (StatusCode::NOT_FOUND, ResourceKind::Pool, ApiError::NoSuchPool),
    (StatusCode::CONFLICT, ResourceKind::Pool, ApiError::PoolInUse),
];

impl ApiError {
    /// Look up the sentinel for a status returned while operating on `kind`.
    pub fn from_status(status: StatusCode, kind: ResourceKind) -> Option<ApiError> {
        STATUS_ERRORS
            .iter()
            .find(|(s, k, _)| *s == status && *k == kind)
            .map(|(_, _, err)| *err)
    }

    /// The status code this sentinel is raised for.
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NoSuchVolume | ApiError::NoSuchPool => StatusCode::NOT_FOUND,
            ApiError::VolumeInUse | ApiError::PoolInUse => StatusCode::CONFLICT,
        }
    }
}

#[derive(Error, Debug)]
pub enum Error {
    // === API Errors ===
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("Unexpected status {status}: {body}")]
    Status { status: StatusCode, body: String },

    // === Network Errors ===
    #[error("HTTP error: {0}")]
    Transport(#[from] reqwest::Error),

    // === Encoding Errors ===
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // === Argument / Config Errors ===
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Config error: {0}")]
    Config(#[from] ::config::ConfigError),
}

impl Error {
    /// Build the generic error for an unexpected response.
    pub fn unexpected(status: StatusCode, body: &[u8]) -> Self {
        Error::Status {
            status,
            body: String::from_utf8_lossy(body).trim().to_string(),
        }
    }

    /// HTTP status associated with this error, if the server answered.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Error::Api(api) => Some(api.status()),
            Error::Status { status, .. } => Some(*status),
            Error::Transport(e) => e.status(),
            _ => None,
        }
    }

    /// Did the server report the resource as missing?
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(StatusCode::NOT_FOUND)
    }

    /// Did the server refuse the call because the resource is busy?
    pub fn is_conflict(&self) -> bool {
        self.status() == Some(StatusCode::CONFLICT)
    }
}
