//! Webhook signature verification and notification processing.
//!
//! This is the trust boundary of the SDK: inbound HTTP requests claiming to
//! originate from Datatrans are authenticated here before their payload is
//! acted on.
//!
//! # Security
//!
//! - HMAC-SHA256 over `timestamp ++ raw body`, compared in constant time
//! - Replay window on the signed timestamp (default 5 minutes, symmetric)
//! - The HMAC key is decoded once at construction and held in `secrecy`
//!
//! # Usage
//!
//! ```ignore
//! let verifier = WebhookVerifier::new(&hmac_key_hex)?;
//! verifier.verify(signature_header, raw_body)?;
//! // only now parse raw_body and act on it
//! ```

mod error;
mod header;
mod processor;
pub(crate) mod verifier;

pub use error::WebhookError;
pub use header::SignatureHeader;
pub use processor::{WebhookCard, WebhookNotification, WebhookOutcome, WebhookProcessor};
pub use verifier::{WebhookVerifier, DEFAULT_MAX_AGE_SECS};
