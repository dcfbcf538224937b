//! `reqwest`-backed HTTP transport.
//!
//! Applies Basic authentication from the merchant credentials, JSON bodies,
//! and the `Idempotency-Key` header on POST requests. The gateway requires
//! TLS 1.2 or newer.

use std::time::Duration;

use async_trait::async_trait;
use http::Method;
use secrecy::{ExposeSecret, SecretString};

use crate::config::Environment;
use crate::ports::{HttpTransport, TransportError, TransportResponse};

/// Request timeout matching the gateway's recommended client settings.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

const USER_AGENT: &str = concat!("datatrans-rust/", env!("CARGO_PKG_VERSION"));

/// [`HttpTransport`] implementation over `reqwest`.
pub struct ReqwestTransport {
    merchant_id: String,
    password: SecretString,
    base_url: String,
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Creates a transport for the given environment and merchant credentials.
    pub fn new(
        environment: Environment,
        merchant_id: impl Into<String>,
        password: SecretString,
    ) -> Result<Self, TransportError> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .min_tls_version(reqwest::tls::Version::TLS_1_2)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| TransportError::Request(e.to_string()))?;

        Ok(Self {
            merchant_id: merchant_id.into(),
            password,
            base_url: environment.api_base_url().to_string(),
            client,
        })
    }

    /// Overrides the base URL (for tests against a local server).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<serde_json::Value>,
        idempotency_key: Option<&str>,
    ) -> Result<TransportResponse, TransportError> {
        let url = format!("{}{}", self.base_url, path);
        let is_post = method == Method::POST;

        // reqwest 0.11 carries http 0.2 types; convert through the wire name.
        let method = reqwest::Method::from_bytes(method.as_str().as_bytes())
            .map_err(|e| TransportError::Request(e.to_string()))?;

        let mut request = self
            .client
            .request(method, &url)
            .basic_auth(&self.merchant_id, Some(self.password.expose_secret()));

        if let Some(body) = body {
            request = request.json(&body);
        }

        if let (Some(key), true) = (idempotency_key, is_post) {
            request = request.header("Idempotency-Key", key);
        }

        tracing::debug!(%url, "sending gateway request");

        let response = request.send().await.map_err(|e| {
            if e.is_timeout() {
                TransportError::Timeout
            } else {
                TransportError::Connection(e.to_string())
            }
        })?;

        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(|e| TransportError::Connection(e.to_string()))?
            .to_vec();

        tracing::debug!(status, body_len = body.len(), "gateway response");

        Ok(TransportResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_for_both_environments() {
        let sandbox = ReqwestTransport::new(
            Environment::Sandbox,
            "1100000000",
            SecretString::new("pw".to_string()),
        )
        .unwrap();
        assert!(sandbox.base_url.contains("sandbox"));

        let production = ReqwestTransport::new(
            Environment::Production,
            "1100000000",
            SecretString::new("pw".to_string()),
        )
        .unwrap();
        assert_eq!(production.base_url, "https://api.datatrans.com");
    }

    #[test]
    fn base_url_can_be_overridden() {
        let transport = ReqwestTransport::new(
            Environment::Sandbox,
            "m",
            SecretString::new("pw".to_string()),
        )
        .unwrap()
        .with_base_url("http://127.0.0.1:9999");
        assert_eq!(transport.base_url, "http://127.0.0.1:9999");
    }
}
