//! Transport-level request and response values

use crate::error::Result;
use crate::request::{Endpoint, RequestBody};
use async_trait::async_trait;
use bytes::Bytes;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::Method;
use url::Url;

/// A fully resolved request, ready to send
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: Method,
    pub url: Url,
    pub headers: HeaderMap,
    pub body: Option<Bytes>,
}

impl HttpRequest {
    /// Resolve an endpoint against a base URL
    ///
    /// A body sets the matching `Content-Type`, replacing any default.
    pub fn build(base_url: &str, endpoint: Endpoint, mut headers: HeaderMap) -> Result<Self> {
        let mut url = Url::parse(&format!("{}{}", base_url.trim_end_matches('/'), endpoint.path))?;
        if !endpoint.query.is_empty() {
            url.query_pairs_mut().extend_pairs(&endpoint.query);
        }

        let body = match endpoint.body {
            Some(RequestBody::Json(value)) => {
                headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
                Some(Bytes::from(serde_json::to_vec(&value)?))
            }
            Some(RequestBody::Form(encoded)) => {
                headers.insert(
                    CONTENT_TYPE,
                    HeaderValue::from_static("application/x-www-form-urlencoded"),
                );
                Some(Bytes::from(encoded))
            }
            None => None,
        };

        Ok(Self {
            method: endpoint.method,
            url,
            headers,
            body,
        })
    }
}

/// Status, headers and raw body of a response
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            headers: HeaderMap::new(),
            body: body.into(),
        }
    }
}

/// Sends one request and returns the raw response
///
/// Implementations must not retry and must not interpret the status code.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse>;
}
