//! Recording transport for unit tests.

use bytes::Bytes;
use reqwest::StatusCode;
use std::sync::{Arc, Mutex};

use super::{ApiRequest, ApiResponse, Transport};
use crate::Result;

/// Answers every request with the same canned response and keeps a copy of
/// each request it saw. Clones share the request log.
#[derive(Debug, Clone)]
pub(crate) struct FakeTransport {
    status: StatusCode,
    body: Bytes,
    requests: Arc<Mutex<Vec<ApiRequest>>>,
}

impl FakeTransport {
    pub(crate) fn new(status: StatusCode, body: &str) -> Self {
        Self {
            status,
            body: Bytes::copy_from_slice(body.as_bytes()),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub(crate) fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// The single request issued so far; panics on zero or several.
    pub(crate) fn only_request(&self) -> ApiRequest {
        let requests = self.requests();
        assert_eq!(requests.len(), 1, "expected exactly one request, got {:?}", requests);
        requests.into_iter().next().unwrap()
    }
}

impl Transport for FakeTransport {
    async fn round_trip(&self, request: ApiRequest) -> Result<ApiResponse> {
        self.requests.lock().unwrap().push(request);
        Ok(ApiResponse {
            status: self.status,
            body: self.body.clone(),
        })
    }
}
