use thiserror::Error;

use crate::domain::validation::ValidationError;
use crate::models::GatewayErrorDetail;
use crate::ports::TransportError;

/// Errors surfaced by the API client.
#[derive(Debug, Error)]
pub enum DatatransError {
    /// The gateway rejected the request with a 4xx or 5xx status.
    #[error("API error {status}: {message}")]
    Api {
        status: u16,
        message: String,
        /// Structured error block, when the gateway returned one.
        detail: Option<GatewayErrorDetail>,
    },

    /// The request never produced a usable HTTP response.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The request failed local validation and was not sent.
    #[error("invalid request: {0}")]
    Validation(#[from] ValidationError),

    /// The response body could not be decoded into the expected shape.
    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl DatatransError {
    /// Gateway error code, when the failure carries one.
    pub fn error_code(&self) -> Option<&str> {
        match self {
            DatatransError::Api { detail, .. } => detail.as_ref().map(|d| d.code.as_str()),
            _ => None,
        }
    }

    /// True when retrying with the same idempotency key is reasonable.
    pub fn is_retryable(&self) -> bool {
        match self {
            DatatransError::Api { status, .. } => *status >= 500,
            DatatransError::Transport(TransportError::Timeout) => true,
            DatatransError::Transport(TransportError::Connection(_)) => true,
            _ => false,
        }
    }
}
