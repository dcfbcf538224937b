//! Rust SDK for the Datatrans payment gateway.
//!
//! Two concerns, one crate:
//!
//! - **API client** ([`client::DatatransClient`]): typed, validated access to
//!   the transaction and alias endpoints over an authenticated HTTPS
//!   transport.
//! - **Webhook verification** ([`domain::webhook`]): replay-resistant
//!   HMAC-SHA256 signature verification for inbound notifications, plus a
//!   processor that applies verified notifications to locally tracked
//!   transactions.
//!
//! The crate follows hexagonal architecture: `domain` holds the business
//! rules, `ports` the interfaces to the outside world, `adapters` the
//! concrete implementations, and `models` the wire types.
//!
//! # Quick start
//!
//! ```no_run
//! use datatrans::client::DatatransClient;
//! use datatrans::config::DatatransConfig;
//! use datatrans::domain::webhook::WebhookVerifier;
//! use datatrans::models::InitRequest;
//! use secrecy::ExposeSecret;
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let config = DatatransConfig::load()?;
//! config.validate()?;
//!
//! // Outbound: initialize a payment.
//! let client = DatatransClient::from_config(&config)?;
//! let response = client
//!     .init_transaction(&InitRequest::new("CHF", "order-1"), None)
//!     .await?;
//!
//! // Inbound: verify a webhook before trusting its payload.
//! let verifier = WebhookVerifier::new(config.hmac_key.expose_secret())?;
//! # let (header, raw_body) = ("", "");
//! verifier.verify(header, raw_body)?;
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod client;
pub mod config;
pub mod domain;
pub mod models;
pub mod ports;
