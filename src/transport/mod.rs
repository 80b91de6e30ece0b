//! HTTP transport seam
//!
//! A [`Transport`] performs one round trip: it takes a fully built
//! [`ApiRequest`] and hands back the status and raw body. It never
//! interprets the status; that is the [`Client`](crate::Client)'s job.

pub mod http;

#[cfg(test)]
pub(crate) mod fake;

pub use http::HttpTransport;

use bytes::Bytes;
use reqwest::{Method, StatusCode};
use std::future::Future;

use crate::Result;

/// One outgoing request.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    /// Absolute URL, without query string
    pub url: String,
    pub query: Vec<(String, String)>,
    /// JSON body, if any
    pub body: Option<Bytes>,
}

impl ApiRequest {
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            query: Vec::new(),
            body: None,
        }
    }

    pub fn with_query(mut self, query: Vec<(String, String)>) -> Self {
        self.query = query;
        self
    }

    pub fn with_body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = Some(body.into());
        self
    }
}

/// Status and raw body of a completed round trip.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: StatusCode,
    pub body: Bytes,
}

pub trait Transport: Send + Sync {
    /// Issue exactly one HTTP request. Network failures are errors;
    /// every status code the server answers with is a successful return.
    fn round_trip(&self, request: ApiRequest) -> impl Future<Output = Result<ApiResponse>> + Send;
}
