//! Networking boundary for endpoint checks.
//!
//! Provides a trait-based abstraction over the HTTP client so the checker
//! can be exercised against stub transports in tests, plus the reqwest-based
//! production implementation.

use super::types::HttpMethod;
use crate::infra::dns::host_resolves;
use serde_json::Value;
use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

/// Timeout applied to every check, measured from request dispatch.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// Fully resolved request shape handed to the transport: endpoint defaults
/// and any override already merged.
#[derive(Debug, Clone, PartialEq)]
pub struct EffectiveRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: HashMap<String, String>,
    pub body: Option<Value>,
}

/// Raw outcome of a dispatched request before classification.
#[derive(Debug, Clone)]
pub struct TransportResponse {
    pub status: u16,
    pub body: String,
}

/// Transport-level failures, normalized so the checker can map each class
/// to its user-facing message.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("Timeout")]
    Timeout,

    #[error("Host not found")]
    HostNotFound,

    #[error("{0}")]
    Request(String),

    #[error("Unknown error")]
    Unknown,
}

/// Trait for transports that dispatch effective requests.
///
/// Mirrors the shape of the HTTP client boundary: one request in, one
/// status/body pair or a normalized transport error out.
pub trait Transport: Send + Sync {
    fn dispatch(
        &self,
        request: EffectiveRequest,
    ) -> Pin<Box<dyn Future<Output = Result<TransportResponse, TransportError>> + Send + '_>>;
}

/// Production transport backed by a shared reqwest client.
#[derive(Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("Failed to create HTTP client");

        Self { client }
    }

    pub fn arc() -> Arc<Self> {
        Arc::new(Self::new())
    }

    async fn send(&self, request: EffectiveRequest) -> Result<TransportResponse, TransportError> {
        // Pre-flight the hostname so resolution failures classify distinctly
        // from other connect errors.
        if let Ok(parsed) = url::Url::parse(&request.url) {
            if let Some(host) = parsed.host_str() {
                if !host_resolves(host).await {
                    return Err(TransportError::HostNotFound);
                }
            }
        }

        let mut builder = self
            .client
            .request(reqwest::Method::from(request.method), request.url.as_str());

        for (key, value) in &request.headers {
            builder = builder.header(key, value);
        }

        if let Some(body) = &request.body {
            builder = builder.body(body.to_string());
        }

        let response = builder.send().await.map_err(classify_reqwest_error)?;
        let status = response.status().as_u16();

        match response.text().await {
            Ok(body) => Ok(TransportResponse { status, body }),
            Err(e) if e.is_timeout() => Err(TransportError::Timeout),
            Err(e) => Err(classify_reqwest_error(e)),
        }
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for HttpTransport {
    fn dispatch(
        &self,
        request: EffectiveRequest,
    ) -> Pin<Box<dyn Future<Output = Result<TransportResponse, TransportError>> + Send + '_>> {
        Box::pin(async move { self.send(request).await })
    }
}

/// Maps a reqwest error onto the transport taxonomy.
fn classify_reqwest_error(err: reqwest::Error) -> TransportError {
    if err.is_timeout() {
        return TransportError::Timeout;
    }

    // reqwest surfaces resolver failures as connect errors; the cause chain
    // is the only place the DNS origin is visible.
    let mut cause = std::error::Error::source(&err);
    while let Some(inner) = cause {
        let text = inner.to_string();
        if text.contains("dns error") || text.contains("failed to lookup address") {
            return TransportError::HostNotFound;
        }
        cause = inner.source();
    }

    let message = err.to_string();
    if message.is_empty() {
        TransportError::Unknown
    } else {
        TransportError::Request(message)
    }
}
