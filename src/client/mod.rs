//! Typed API client
//!
//! Every public method maps to exactly one HTTP round trip:
//! - build `{endpoint}/{api_version}/{path}`
//! - encode the body as JSON
//! - branch on the status: decode, map to a sentinel, or fail generically

pub mod node;
pub mod pool;
pub mod volume;

use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::common::{encode_segment, validate_name, ApiError, ResourceKind};
use crate::transport::{ApiRequest, ApiResponse, HttpTransport, Transport};
use crate::{ClientConfig, Error, Result};

pub const VOLUME_API_PREFIX: &str = "volumes";
pub const POOL_API_PREFIX: &str = "pools";
pub const NODE_API_PREFIX: &str = "nodes";

/// Client for one API server.
///
/// Holds no per-call state, so a single instance can be shared freely
/// between tasks.
#[derive(Debug, Clone)]
pub struct Client<T = HttpTransport> {
    base_url: String,
    transport: T,
}

impl Client<HttpTransport> {
    /// Client talking HTTP to the server described by `config`.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        config.validate()?;
        let transport = HttpTransport::new(config)?;
        Ok(Self::with_transport(config, transport))
    }
}

impl<T: Transport> Client<T> {
    pub fn with_transport(config: &ClientConfig, transport: T) -> Self {
        Self {
            base_url: config.base_url(),
            transport,
        }
    }

    /// Absolute URL for an API path such as `volumes` or `pools/default`.
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    async fn send(&self, request: ApiRequest) -> Result<ApiResponse> {
        tracing::debug!(method = %request.method, url = %request.url, "sending request");
        let response = self.transport.round_trip(request).await?;
        tracing::debug!(
            status = %response.status,
            bytes = response.body.len(),
            "received response"
        );
        Ok(response)
    }

    /// GET expecting 200 and a JSON array; `null` or an empty body is an
    /// empty list.
    async fn list<R: DeserializeOwned>(
        &self,
        path: &str,
        query: Vec<(String, String)>,
    ) -> Result<Vec<R>> {
        let request = ApiRequest::new(Method::GET, self.url(path)).with_query(query);
        let response = self.send(request).await?;
        if response.status != StatusCode::OK {
            return Err(Error::unexpected(response.status, &response.body));
        }
        if response.body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Vec::new());
        }
        let items: Option<Vec<R>> = serde_json::from_slice(&response.body)?;
        Ok(items.unwrap_or_default())
    }

    /// GET expecting 200 and a single JSON value.
    async fn get<R: DeserializeOwned>(&self, path: &str) -> Result<R> {
        let response = self
            .send(ApiRequest::new(Method::GET, self.url(path)))
            .await?;
        Self::decode_ok(response)
    }

    /// POST a JSON body expecting 200 and a JSON value back.
    async fn create<B: Serialize, R: DeserializeOwned>(&self, path: &str, body: &B) -> Result<R> {
        let request = ApiRequest::new(Method::POST, self.url(path)).with_body(serde_json::to_vec(body)?);
        let response = self.send(request).await?;
        Self::decode_ok(response)
    }

    /// Call that returns nothing on success (200 or 204). Statuses listed in
    /// the sentinel table for `kind` become [`ApiError`]s.
    async fn exec<B: Serialize>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
        kind: ResourceKind,
    ) -> Result<()> {
        let mut request = ApiRequest::new(method, self.url(path));
        if let Some(body) = body {
            request = request.with_body(serde_json::to_vec(body)?);
        }
        let response = self.send(request).await?;
        let status = response.status;
        if status == StatusCode::OK || status == StatusCode::NO_CONTENT {
            return Ok(());
        }
        match ApiError::from_status(status, kind) {
            Some(err) => {
                tracing::warn!(%status, path, error = %err, "request rejected");
                Err(err.into())
            }
            None => Err(Error::unexpected(status, &response.body)),
        }
    }

    fn decode_ok<R: DeserializeOwned>(response: ApiResponse) -> Result<R> {
        if response.status != StatusCode::OK {
            return Err(Error::unexpected(response.status, &response.body));
        }
        Ok(serde_json::from_slice(&response.body)?)
    }
}

/// `{prefix}/{name}` with the name validated and kept as one segment.
fn resource_path(prefix: &str, kind: ResourceKind, name: &str) -> Result<String> {
    validate_name(kind, name)?;
    Ok(format!("{}/{}", prefix, encode_segment(name)))
}
