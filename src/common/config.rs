//! Client configuration

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use crate::common::utils::parse_duration;
use crate::{Error, Result};

/// Environment variable prefix (`STORAGEOS_ENDPOINT`, `STORAGEOS_TOKEN`, ...)
pub const ENV_PREFIX: &str = "STORAGEOS";

/// Connection settings shared by every call a [`Client`](crate::Client) makes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL of the API server
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// API version path segment
    #[serde(default = "default_api_version")]
    pub api_version: String,

    /// HTTP basic auth user
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    /// HTTP basic auth password
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,

    /// Bearer token; takes precedence over basic auth
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,

    /// Per-request timeout ("30s", "500ms", ...)
    #[serde(default = "default_timeout")]
    pub timeout: String,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_endpoint() -> String {
    "http://localhost:8000".to_string()
}
fn default_api_version() -> String {
    "v1".to_string()
}
fn default_timeout() -> String {
    "30s".to_string()
}
fn default_user_agent() -> String {
    format!("storageos-client/{}", crate::VERSION)
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            api_version: default_api_version(),
            username: None,
            password: None,
            token: None,
            timeout: default_timeout(),
            user_agent: default_user_agent(),
        }
    }
}

impl ClientConfig {
    /// Config pointing at `endpoint` with every other field defaulted.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            ..Default::default()
        }
    }

    pub fn with_basic_auth(mut self, username: impl Into<String>, password: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self.password = Some(password.into());
        self
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Layer defaults, an optional TOML file and `STORAGEOS_*` variables.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = ::config::Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(::config::File::from(path).required(true));
        }
        let settings = builder
            .add_source(::config::Environment::with_prefix(ENV_PREFIX))
            .build()?;

        let config: ClientConfig = settings.try_deserialize()?;
        config.validate()?;
        tracing::debug!(endpoint = %config.endpoint, "loaded client config");
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.endpoint.starts_with("http://") || self.endpoint.starts_with("https://")) {
            return Err(Error::InvalidConfig(format!(
                "endpoint must start with http:// or https://: {}",
                self.endpoint
            )));
        }
        if self.api_version.trim_matches('/').is_empty() {
            return Err(Error::InvalidConfig("api_version cannot be empty".into()));
        }
        if self.password.is_some() && self.username.is_none() {
            return Err(Error::InvalidConfig(
                "password given without a username".into(),
            ));
        }
        self.timeout_duration()?;
        Ok(())
    }

    pub fn timeout_duration(&self) -> Result<Duration> {
        parse_duration(&self.timeout)
    }

    /// `{endpoint}/{api_version}`, without a trailing slash
    pub fn base_url(&self) -> String {
        format!(
            "{}/{}",
            self.endpoint.trim_end_matches('/'),
            self.api_version.trim_matches('/')
        )
    }
}
