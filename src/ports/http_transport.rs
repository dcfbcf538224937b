//! HTTP transport port.
//!
//! The client needs exactly one capability from its HTTP layer: send an
//! authenticated request and get back a status code and body. Everything
//! else (TLS, pooling, retries) is the adapter's business.

use async_trait::async_trait;
use http::Method;
use thiserror::Error;

/// Raw response handed back by a transport.
#[derive(Debug, Clone)]
pub struct TransportResponse {
    /// HTTP status code.
    pub status: u16,

    /// Response body bytes, possibly empty.
    pub body: Vec<u8>,
}

impl TransportResponse {
    /// True for any 2xx status.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Transport-level failures (the request never produced an HTTP response).
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("connection error: {0}")]
    Connection(String),

    #[error("request timed out")]
    Timeout,

    #[error("failed to build request: {0}")]
    Request(String),
}

/// Port for sending authenticated requests to the gateway.
///
/// Implementations apply authentication and the `Idempotency-Key` header;
/// callers supply method, path (relative to the gateway base URL) and an
/// optional JSON body.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Sends a request and returns the raw response.
    ///
    /// `idempotency_key` is only meaningful for POST requests; transports
    /// ignore it otherwise.
    async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<serde_json::Value>,
        idempotency_key: Option<&str>,
    ) -> Result<TransportResponse, TransportError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_transport_is_object_safe() {
        fn _accepts_dyn(_transport: &dyn HttpTransport) {}
    }

    #[test]
    fn success_classification() {
        let ok = TransportResponse {
            status: 204,
            body: Vec::new(),
        };
        let err = TransportResponse {
            status: 400,
            body: Vec::new(),
        };
        assert!(ok.is_success());
        assert!(!err.is_success());
    }
}
