//! Production transport on top of `reqwest`

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE, USER_AGENT};

use super::{ApiRequest, ApiResponse, Transport};
use crate::{ClientConfig, Error, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Auth {
    None,
    Basic {
        username: String,
        password: Option<String>,
    },
    Bearer(String),
}

/// Sends requests with a pooled `reqwest::Client`.
///
/// Cloning is cheap and clones share the connection pool.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    http: reqwest::Client,
    auth: Auth,
}

impl HttpTransport {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        let agent = HeaderValue::from_str(&config.user_agent)
            .map_err(|e| Error::InvalidConfig(format!("invalid user agent: {}", e)))?;
        headers.insert(USER_AGENT, agent);

        let http = reqwest::Client::builder()
            .timeout(config.timeout_duration()?)
            .default_headers(headers)
            .build()?;

        let auth = match (&config.token, &config.username) {
            (Some(token), _) => Auth::Bearer(token.clone()),
            (None, Some(username)) => Auth::Basic {
                username: username.clone(),
                password: config.password.clone(),
            },
            (None, None) => Auth::None,
        };

        Ok(Self { http, auth })
    }
}

impl Transport for HttpTransport {
    async fn round_trip(&self, request: ApiRequest) -> Result<ApiResponse> {
        let mut builder = self.http.request(request.method, &request.url);
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(body) = request.body {
            builder = builder.header(CONTENT_TYPE, "application/json").body(body);
        }
        builder = match &self.auth {
            Auth::None => builder,
            Auth::Basic { username, password } => builder.basic_auth(username, password.as_ref()),
            Auth::Bearer(token) => builder.bearer_auth(token),
        };

        let response = builder.send().await?;
        let status = response.status();
        let body = response.bytes().await?;
        Ok(ApiResponse { status, body })
    }
}
