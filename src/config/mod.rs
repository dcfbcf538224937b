//! SDK configuration.
//!
//! Credentials come from an operator-controlled configuration store, loaded
//! from environment variables using the `config` and `dotenvy` crates with
//! the `DATATRANS` prefix. Secrets are never hard-coded and never derived
//! from request data.
//!
//! # Example
//!
//! ```no_run
//! use datatrans::config::DatatransConfig;
//!
//! // DATATRANS__MERCHANT_ID, DATATRANS__PASSWORD, DATATRANS__HMAC_KEY
//! let config = DatatransConfig::load().expect("failed to load configuration");
//! config.validate().expect("invalid configuration");
//! ```

mod error;

pub use error::{ConfigError, ValidationError};

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

/// Gateway environment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Sandbox,
    Production,
}

impl Environment {
    /// Base URL for the transaction API.
    pub fn api_base_url(&self) -> &'static str {
        match self {
            Environment::Sandbox => "https://api.sandbox.datatrans.com",
            Environment::Production => "https://api.datatrans.com",
        }
    }

    /// Base URL for the hosted payment pages.
    pub fn pay_base_url(&self) -> &'static str {
        match self {
            Environment::Sandbox => "https://pay.sandbox.datatrans.com",
            Environment::Production => "https://pay.datatrans.com",
        }
    }

    /// Redirect URL for a transaction initialized for the payment page.
    pub fn redirect_url(&self, transaction_id: &str) -> String {
        format!("{}/v1/start/{}", self.pay_base_url(), transaction_id)
    }
}

/// Datatrans SDK configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DatatransConfig {
    /// Merchant identifier issued by the gateway.
    pub merchant_id: String,

    /// API password for Basic authentication.
    pub password: SecretString,

    /// Hex-encoded HMAC key from the webhook settings in the dashboard.
    pub hmac_key: SecretString,

    /// Target environment (defaults to sandbox).
    #[serde(default)]
    pub environment: Environment,
}

impl DatatransConfig {
    /// Creates a configuration directly, for callers with their own
    /// configuration store.
    pub fn new(
        merchant_id: impl Into<String>,
        password: impl Into<String>,
        hmac_key: impl Into<String>,
    ) -> Self {
        Self {
            merchant_id: merchant_id.into(),
            password: SecretString::new(password.into()),
            hmac_key: SecretString::new(hmac_key.into()),
            environment: Environment::Sandbox,
        }
    }

    /// Selects the environment.
    pub fn with_environment(mut self, environment: Environment) -> Self {
        self.environment = environment;
        self
    }

    /// Loads configuration from environment variables.
    ///
    /// Reads a `.env` file if present, then environment variables with the
    /// `DATATRANS` prefix and `__` as the nesting separator:
    ///
    /// - `DATATRANS__MERCHANT_ID`
    /// - `DATATRANS__PASSWORD`
    /// - `DATATRANS__HMAC_KEY`
    /// - `DATATRANS__ENVIRONMENT` (`sandbox` or `production`, optional)
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("DATATRANS")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validates configuration values.
    ///
    /// Checks required fields are non-empty and that the HMAC key is valid
    /// hex, so misconfiguration surfaces at startup rather than on the
    /// first webhook.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.merchant_id.is_empty() {
            return Err(ValidationError::MissingRequired("DATATRANS__MERCHANT_ID"));
        }
        if !self.merchant_id.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ValidationError::InvalidMerchantId);
        }
        if self.password.expose_secret().is_empty() {
            return Err(ValidationError::MissingRequired("DATATRANS__PASSWORD"));
        }
        let hmac_key = self.hmac_key.expose_secret();
        if hmac_key.is_empty() {
            return Err(ValidationError::MissingRequired("DATATRANS__HMAC_KEY"));
        }
        if hex::decode(hmac_key).is_err() {
            return Err(ValidationError::InvalidHmacKey);
        }
        Ok(())
    }
}
