//! Request bodies for the transaction API.
//!
//! Every request validates locally before going on the wire, so obviously
//! broken input fails without burning a round trip. Provider-specific
//! blocks (`PAP`, `TWI`, `KLN`, `mcp`, `airlineData` and friends) are
//! carried as extension bags.

use serde::{Deserialize, Serialize};

use crate::domain::validation::{
    validate_amount, validate_card_number, validate_currency, validate_expiry_month,
    validate_expiry_year, validate_length, validate_optional_length, validate_refno,
    ValidationError,
};

use super::card::{Card, CardOnFile, CardholderData};
use super::common::{
    Address, Customer, Language, Metadata, Order, PaymentMethod, Redirect, ThreeDSecure,
    TransactionOptions, WebhookOptions,
};
use super::extension::ExtensionBag;

/// Initializes a transaction for the payment page or a saved card.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InitRequest {
    pub currency: String,
    pub refno: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refno2: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer: Option<Customer>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing: Option<Address>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping: Option<Address>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<Order>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_settle: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub option: Option<TransactionOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<Language>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect: Option<Redirect>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub webhook: Option<WebhookOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_methods: Option<Vec<PaymentMethod>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card: Option<Card>,
    #[serde(rename = "PAP", skip_serializing_if = "Option::is_none")]
    pub pap: Option<ExtensionBag>,
    #[serde(rename = "TWI", skip_serializing_if = "Option::is_none")]
    pub twi: Option<ExtensionBag>,
    #[serde(rename = "KLN", skip_serializing_if = "Option::is_none")]
    pub kln: Option<ExtensionBag>,
    #[serde(rename = "PFC", skip_serializing_if = "Option::is_none")]
    pub pfc: Option<ExtensionBag>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mcp: Option<ExtensionBag>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dcc: Option<ExtensionBag>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub airline_data: Option<ExtensionBag>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

impl InitRequest {
    /// Minimal init request for the hosted payment page.
    pub fn new(currency: impl Into<String>, refno: impl Into<String>) -> Self {
        Self {
            currency: currency.into(),
            refno: refno.into(),
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(amount) = self.amount {
            validate_amount(amount)?;
        }
        validate_currency(&self.currency)?;
        validate_refno(&self.refno)?;
        validate_optional_length(self.refno2.as_deref(), 0, 40, "refno2")?;

        if let Some(customer) = &self.customer {
            customer.validate()?;
        }
        if let Some(billing) = &self.billing {
            billing.validate()?;
        }
        if let Some(shipping) = &self.shipping {
            shipping.validate()?;
        }
        if let Some(order) = &self.order {
            order.validate()?;
        }
        if let Some(redirect) = &self.redirect {
            redirect.validate()?;
        }
        if let Some(webhook) = &self.webhook {
            webhook.validate()?;
        }
        if let Some(card) = &self.card {
            card.validate()?;
        }
        Ok(())
    }
}

/// Initializes a Secure Fields transaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SecureFieldsInitRequest {
    pub currency: String,
    pub return_url: String,
    pub amount: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_resources: Option<bool>,
    /// `GET` or `POST`, defaults to `POST` on the gateway side.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_method: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mcp: Option<ExtensionBag>,
    #[serde(rename = "threeD", skip_serializing_if = "Option::is_none")]
    pub three_d: Option<ThreeDSecure>,
}

impl SecureFieldsInitRequest {
    pub fn new(currency: impl Into<String>, return_url: impl Into<String>, amount: i64) -> Self {
        Self {
            currency: currency.into(),
            return_url: return_url.into(),
            amount,
            return_resources: None,
            return_method: None,
            mcp: None,
            three_d: None,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_amount(self.amount)?;
        validate_currency(&self.currency)?;
        validate_length(&self.return_url, 1, 4000, "returnUrl")?;

        if let Some(method) = &self.return_method {
            if method != "GET" && method != "POST" {
                return Err(ValidationError::Invalid(
                    "returnMethod must be GET or POST".to_string(),
                ));
            }
        }
        Ok(())
    }
}

/// Authorizes a transaction directly, server to server.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorizeRequest {
    pub amount: i64,
    pub currency: String,
    pub refno: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refno2: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer: Option<Customer>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing: Option<Address>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping: Option<Address>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<Order>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_settle: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub option: Option<TransactionOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card: Option<Card>,
    #[serde(rename = "PAP", skip_serializing_if = "Option::is_none")]
    pub pap: Option<ExtensionBag>,
    #[serde(rename = "TWI", skip_serializing_if = "Option::is_none")]
    pub twi: Option<ExtensionBag>,
    #[serde(rename = "KLN", skip_serializing_if = "Option::is_none")]
    pub kln: Option<ExtensionBag>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mcp: Option<ExtensionBag>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dcc: Option<ExtensionBag>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub airline_data: Option<ExtensionBag>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

impl AuthorizeRequest {
    pub fn new(amount: i64, currency: impl Into<String>, refno: impl Into<String>) -> Self {
        Self {
            amount,
            currency: currency.into(),
            refno: refno.into(),
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_amount(self.amount)?;
        validate_currency(&self.currency)?;
        validate_refno(&self.refno)?;
        validate_optional_length(self.refno2.as_deref(), 0, 40, "refno2")?;

        if let Some(card) = &self.card {
            card.validate()?;
        }
        Ok(())
    }
}

/// Authorizes a previously authenticated transaction.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorizeSplitRequest {
    pub refno: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refno2: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_settle: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub airline_data: Option<ExtensionBag>,
    #[serde(rename = "threeD", skip_serializing_if = "Option::is_none")]
    pub three_d: Option<ThreeDSecure>,
}

impl AuthorizeSplitRequest {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(amount) = self.amount {
            validate_amount(amount)?;
        }
        validate_length(&self.refno, 0, 40, "refno")?;
        validate_optional_length(self.refno2.as_deref(), 0, 40, "refno2")?;
        Ok(())
    }
}

/// Validates a stored alias without moving money.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidateRequest {
    pub refno: String,
    pub currency: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refno2: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card: Option<Card>,
    #[serde(rename = "PFC", skip_serializing_if = "Option::is_none")]
    pub pfc: Option<ExtensionBag>,
    #[serde(rename = "KLN", skip_serializing_if = "Option::is_none")]
    pub kln: Option<ExtensionBag>,
    #[serde(rename = "PAP", skip_serializing_if = "Option::is_none")]
    pub pap: Option<ExtensionBag>,
}

impl ValidateRequest {
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_refno(&self.refno)?;
        validate_optional_length(self.refno2.as_deref(), 0, 40, "refno2")?;
        validate_currency(&self.currency)?;

        if let Some(card) = &self.card {
            card.validate()?;
        }
        Ok(())
    }
}

/// Settles (captures) an authorized transaction.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettleRequest {
    pub amount: i64,
    pub currency: String,
    pub refno: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refno2: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub airline_data: Option<ExtensionBag>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mcp: Option<ExtensionBag>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub partial_capture: Option<ExtensionBag>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extensions: Option<ExtensionBag>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<Order>,
}

impl SettleRequest {
    pub fn new(amount: i64, currency: impl Into<String>, refno: impl Into<String>) -> Self {
        Self {
            amount,
            currency: currency.into(),
            refno: refno.into(),
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_amount(self.amount)?;
        validate_currency(&self.currency)?;
        validate_refno(&self.refno)?;
        validate_optional_length(self.refno2.as_deref(), 0, 40, "refno2")?;

        if let Some(order) = &self.order {
            order.validate()?;
        }
        Ok(())
    }
}

/// Refunds a settled transaction. Omitting the amount refunds in full.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreditRequest {
    pub currency: String,
    pub refno: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refno2: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub airline_data: Option<ExtensionBag>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marketplace: Option<ExtensionBag>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extensions: Option<ExtensionBag>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mcp: Option<ExtensionBag>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<Order>,
}

impl CreditRequest {
    pub fn new(currency: impl Into<String>, refno: impl Into<String>) -> Self {
        Self {
            currency: currency.into(),
            refno: refno.into(),
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(amount) = self.amount {
            validate_amount(amount)?;
        }
        validate_currency(&self.currency)?;
        validate_refno(&self.refno)?;
        validate_optional_length(self.refno2.as_deref(), 0, 40, "refno2")?;

        if let Some(order) = &self.order {
            order.validate()?;
        }
        Ok(())
    }
}

/// Raises the authorized amount of an open transaction.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IncreaseRequest {
    pub amount: i64,
    pub currency: String,
    pub refno: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

impl IncreaseRequest {
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_amount(self.amount)?;
        validate_currency(&self.currency)?;
        validate_refno(&self.refno)
    }
}

/// Screens a customer for pay-by-invoice eligibility.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScreenRequest {
    pub amount: i64,
    pub currency: String,
    pub refno: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer: Option<Customer>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing: Option<Address>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping: Option<Address>,
    #[serde(rename = "INT", skip_serializing_if = "Option::is_none")]
    pub int: Option<ExtensionBag>,
    #[serde(rename = "MFA", skip_serializing_if = "Option::is_none")]
    pub mfa: Option<ExtensionBag>,
    #[serde(rename = "DVI", skip_serializing_if = "Option::is_none")]
    pub dvi: Option<ExtensionBag>,
}

impl ScreenRequest {
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_amount(self.amount)?;
        validate_currency(&self.currency)?;
        validate_refno(&self.refno)?;

        if let Some(customer) = &self.customer {
            customer.validate()?;
        }
        if let Some(billing) = &self.billing {
            billing.validate()?;
        }
        if let Some(shipping) = &self.shipping {
            shipping.validate()?;
        }
        Ok(())
    }
}

/// Card reference for a DCC quote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DccCardType {
    #[serde(rename = "PLAIN")]
    Plain,
    #[serde(rename = "ALIAS")]
    Alias,
}

/// Requests a Dynamic Currency Conversion quote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DccRequest {
    #[serde(rename = "type")]
    pub card_type: DccCardType,
    pub currency: String,
    pub amount: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
}

impl DccRequest {
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_amount(self.amount)?;
        validate_currency(&self.currency)?;

        match self.card_type {
            DccCardType::Plain => match &self.card_number {
                Some(number) => validate_card_number(number),
                None => Err(ValidationError::Invalid(
                    "cardNumber is required for PLAIN card type".to_string(),
                )),
            },
            DccCardType::Alias => match &self.alias {
                Some(alias) => validate_length(alias, 10, 100, "alias"),
                None => Err(ValidationError::Invalid(
                    "alias is required for ALIAS card type".to_string(),
                )),
            },
        }
    }
}

/// Updates a stored alias.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AliasPatchRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remove_plain: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiry_month: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiry_year: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cardholder: Option<CardholderData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_network_token: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card_on_file: Option<CardOnFile>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card_holder_name_verification: Option<ExtensionBag>,
}

impl AliasPatchRequest {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(month) = &self.expiry_month {
            validate_expiry_month(month)?;
        }
        if let Some(year) = &self.expiry_year {
            validate_expiry_year(year)?;
        }
        if let Some(card_on_file) = &self.card_on_file {
            card_on_file.validate()?;
        }
        Ok(())
    }
}
