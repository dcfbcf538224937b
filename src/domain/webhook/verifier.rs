//! Datatrans webhook signature verification.
//!
//! Authenticates inbound webhook notifications with HMAC-SHA256, bounded by
//! a replay window on the signed timestamp and compared in constant time.
//!
//! Verification is defined over the raw request body exactly as received on
//! the wire. Re-serializing parsed JSON before verifying invalidates the
//! signature; always verify first, then parse.

use hmac::{Hmac, Mac};
use secrecy::{ExposeSecret, SecretVec};
use sha2::Sha256;
use subtle::ConstantTimeEq;

use super::error::WebhookError;
use super::header::SignatureHeader;

type HmacSha256 = Hmac<Sha256>;

/// Default maximum age for a signed timestamp (5 minutes).
pub const DEFAULT_MAX_AGE_SECS: i64 = 300;

/// Verifier for `Datatrans-Signature` webhook headers.
///
/// Holds the HMAC key decoded from the hex string provisioned in the
/// Datatrans dashboard. Stateless after construction and safe to share
/// across threads; each verification is fully independent.
pub struct WebhookVerifier {
    /// Raw HMAC key bytes. Never logged, never echoed in errors.
    key: SecretVec<u8>,
}

impl WebhookVerifier {
    /// Creates a verifier from the hex-encoded HMAC key.
    ///
    /// The key is decoded eagerly so a misconfigured secret fails at
    /// construction rather than on the first inbound webhook.
    ///
    /// # Errors
    ///
    /// Returns [`WebhookError::InvalidKey`] if the string is not valid hex.
    pub fn new(hex_key: &str) -> Result<Self, WebhookError> {
        let key = hex::decode(hex_key).map_err(|_| WebhookError::InvalidKey)?;
        Ok(Self {
            key: SecretVec::new(key),
        })
    }

    /// Verifies a signature header against the raw payload.
    ///
    /// Uses the current wall clock and the default 300-second window.
    pub fn verify(&self, signature_header: &str, payload: &str) -> Result<(), WebhookError> {
        self.verify_with_max_age(signature_header, payload, DEFAULT_MAX_AGE_SECS)
    }

    /// Verifies with a caller-chosen replay window.
    pub fn verify_with_max_age(
        &self,
        signature_header: &str,
        payload: &str,
        max_age_seconds: i64,
    ) -> Result<(), WebhookError> {
        let now_ms = chrono::Utc::now().timestamp_millis();
        self.verify_at(signature_header, payload, max_age_seconds, now_ms)
    }

    /// Verifies against a fixed clock.
    ///
    /// The wall-clock read is the only nondeterminism in verification, so
    /// tests pass a fixed `now_ms` here instead of sleeping.
    ///
    /// # Errors
    ///
    /// - [`WebhookError::MalformedHeader`] - wrong segment count or
    ///   unparsable timestamp
    /// - [`WebhookError::MissingField`] - no `t=` or `s0=` segment
    /// - [`WebhookError::TimestampTooOld`] - `|now - t|` exceeds the window
    ///   (symmetric: far-future timestamps are rejected too)
    /// - [`WebhookError::SignatureMismatch`] - HMAC comparison failed
    pub fn verify_at(
        &self,
        signature_header: &str,
        payload: &str,
        max_age_seconds: i64,
        now_ms: i64,
    ) -> Result<(), WebhookError> {
        let header = SignatureHeader::parse(signature_header)?;

        let age_ms = (now_ms - header.timestamp).abs();
        if age_ms > max_age_seconds * 1000 {
            tracing::warn!(
                signed_at = header.timestamp,
                now = now_ms,
                age_ms,
                "webhook timestamp outside replay window"
            );
            return Err(WebhookError::TimestampTooOld);
        }

        let expected = self.compute_signature(header.timestamp, payload);

        // The received signature is opaque text; no case normalization.
        if !constant_time_eq(expected.as_bytes(), header.signature.as_bytes()) {
            tracing::warn!(signed_at = header.timestamp, "webhook signature mismatch");
            return Err(WebhookError::SignatureMismatch);
        }

        Ok(())
    }

    /// Computes `hex(HMAC-SHA256(key, timestamp ++ payload))`.
    ///
    /// The timestamp is re-stringified from the parsed integer, not taken
    /// from the original header substring.
    fn compute_signature(&self, timestamp: i64, payload: &str) -> String {
        let message = format!("{}{}", timestamp, payload);
        let mut mac = HmacSha256::new_from_slice(self.key.expose_secret())
            .expect("HMAC accepts any key size");
        mac.update(message.as_bytes());
        hex::encode(mac.finalize().into_bytes())
    }
}

impl std::fmt::Debug for WebhookVerifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WebhookVerifier").finish_non_exhaustive()
    }
}

/// Constant-time equality over byte slices.
///
/// Execution time does not depend on where the inputs first differ, so a
/// forger cannot binary-search the correct signature byte by byte. The
/// length check short-circuits, but the length of the expected digest is
/// not secret.
fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    a.len() == b.len() && bool::from(a.ct_eq(b))
}

/// Computes the signature a sender would attach, for building test fixtures.
#[cfg(test)]
pub fn sign_for_test(hex_key: &str, timestamp: i64, payload: &str) -> String {
    let key = hex::decode(hex_key).expect("test key is valid hex");
    let mut mac = HmacSha256::new_from_slice(&key).expect("HMAC accepts any key size");
    mac.update(format!("{}{}", timestamp, payload).as_bytes());
    hex::encode(mac.finalize().into_bytes())
}
