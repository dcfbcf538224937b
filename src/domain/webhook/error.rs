//! Webhook error types.
//!
//! Defines every failure mode of signature verification and notification
//! processing, with HTTP status code mapping for the integrating handler.

use http::StatusCode;
use thiserror::Error;

/// Errors that occur during webhook verification and processing.
///
/// Verification failures are distinct, catchable variants — never a boolean
/// `false` that could be mistaken for a benign negative. The handler that
/// receives one of these must reject the request and must not apply the
/// requested state transition.
#[derive(Debug, Error)]
pub enum WebhookError {
    /// The configured HMAC key is not valid hex (construction time).
    #[error("HMAC key is not valid hex")]
    InvalidKey,

    /// Signature header does not have exactly two comma-separated segments,
    /// or a segment could not be parsed.
    #[error("malformed signature header: {0}")]
    MalformedHeader(&'static str),

    /// Header present but lacks a `t=` or `s0=` segment.
    #[error("missing timestamp or signature in header")]
    MissingField,

    /// Absolute age of the signature timestamp exceeds the allowed window.
    ///
    /// Covers timestamps implausibly far in the future as well; the check is
    /// on absolute difference, not just staleness.
    #[error("signature timestamp outside allowed window")]
    TimestampTooOld,

    /// Cryptographic comparison failed.
    #[error("signature mismatch")]
    SignatureMismatch,

    /// Webhook body is not valid JSON.
    #[error("invalid webhook payload: {0}")]
    InvalidPayload(String),

    /// Payload parsed but lacks the required transaction identifier.
    #[error("missing transactionId in webhook payload")]
    MissingTransactionId,

    /// Transaction store operation failed.
    #[error("transaction store error: {0}")]
    Store(String),
}

impl WebhookError {
    /// Maps the error to an HTTP status code for the webhook handler.
    ///
    /// The exact code is a policy choice for the integrating application;
    /// this mapping keeps auth failures on 401, malformed input on 400 and
    /// downstream failures on 500 so the sender's retry policy behaves.
    pub fn status_code(&self) -> StatusCode {
        match self {
            // Auth failures - reject, sender must re-sign and resend
            WebhookError::TimestampTooOld | WebhookError::SignatureMismatch => {
                StatusCode::UNAUTHORIZED
            }

            // Malformed input - reject, retrying verbatim cannot succeed
            WebhookError::MalformedHeader(_)
            | WebhookError::MissingField
            | WebhookError::InvalidPayload(_)
            | WebhookError::MissingTransactionId => StatusCode::BAD_REQUEST,

            // Server-side problems
            WebhookError::InvalidKey | WebhookError::Store(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Returns true when the failure is in the request itself rather than in
    /// this process (configuration or storage).
    pub fn is_rejection(&self) -> bool {
        !matches!(self, WebhookError::InvalidKey | WebhookError::Store(_))
    }
}
