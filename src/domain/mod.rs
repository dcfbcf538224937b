//! Domain layer: transaction lifecycle, field validation, webhook security.
//!
//! # Module Organization
//!
//! - `transaction` - Locally tracked transaction records and status lifecycle
//! - `validation` - Field validation shared by the request models
//! - `webhook` - Signature verification and notification processing

pub mod transaction;
pub mod validation;
pub mod webhook;

pub use transaction::{TransactionRecord, TransactionStatus};
pub use validation::ValidationError;
pub use webhook::{WebhookError, WebhookOutcome, WebhookProcessor, WebhookVerifier};
