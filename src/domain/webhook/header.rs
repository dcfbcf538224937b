//! `Datatrans-Signature` header parsing.
//!
//! The header carries exactly two comma-separated fields:
//! `t=<ms-timestamp>,s0=<hex-hmac>`. Field order is not significant.

use super::error::WebhookError;

/// Parsed components of the `Datatrans-Signature` header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignatureHeader {
    /// Sender-asserted signing time, milliseconds since epoch.
    pub timestamp: i64,

    /// The `s0` signature exactly as it appeared on the wire.
    ///
    /// Kept as opaque text: comparison against the expected digest is
    /// case-sensitive and no normalization is performed.
    pub signature: String,
}

impl SignatureHeader {
    /// Parses a signature header string.
    ///
    /// # Errors
    ///
    /// - [`WebhookError::MalformedHeader`] if the header does not split into
    ///   exactly two segments, or the timestamp is not a decimal integer.
    /// - [`WebhookError::MissingField`] if either the `t=` or `s0=` segment
    ///   is absent.
    pub fn parse(header: &str) -> Result<Self, WebhookError> {
        let parts: Vec<&str> = header.split(',').collect();
        if parts.len() != 2 {
            return Err(WebhookError::MalformedHeader("expected 2 segments"));
        }

        let mut timestamp: Option<i64> = None;
        let mut signature: Option<&str> = None;

        for part in parts {
            if let Some(raw) = part.strip_prefix("t=") {
                timestamp = Some(
                    raw.parse()
                        .map_err(|_| WebhookError::MalformedHeader("invalid timestamp"))?,
                );
            } else if let Some(sig) = part.strip_prefix("s0=") {
                signature = Some(sig);
            }
        }

        match (timestamp, signature) {
            (Some(timestamp), Some(signature)) => Ok(Self {
                timestamp,
                signature: signature.to_string(),
            }),
            _ => Err(WebhookError::MissingField),
        }
    }
}
