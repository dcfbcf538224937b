//! Shared wire types: gateway enums and the nested request blocks.

use serde::{Deserialize, Serialize};

use crate::domain::validation::{
    validate_amount, validate_currency, validate_optional_length, ValidationError,
};

use super::extension::ExtensionBag;

/// Gateway payment method codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentMethod {
    #[serde(rename = "VIS")]
    Visa,
    #[serde(rename = "ECA")]
    Mastercard,
    #[serde(rename = "AMX")]
    Amex,
    #[serde(rename = "PAP")]
    Paypal,
    #[serde(rename = "TWI")]
    Twint,
    #[serde(rename = "PFC")]
    PostfinanceCard,
    #[serde(rename = "KLN")]
    Klarna,
    #[serde(rename = "APL")]
    ApplePay,
    #[serde(rename = "PAY")]
    GooglePay,
    #[serde(rename = "ALP")]
    Alipay,
    #[serde(rename = "SWH")]
    Swish,
    #[serde(rename = "VPS")]
    Vipps,
    #[serde(rename = "MBP")]
    Mobilepay,
    #[serde(rename = "PFP")]
    PostfinancePay,
}

/// Transaction kinds reported by the status endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionType {
    Payment,
    Credit,
    CardCheck,
}

/// Payment page languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[allow(clippy::upper_case_acronyms)]
pub enum Language {
    EN,
    DE,
    FR,
    IT,
    ES,
    EL,
    FI,
    HU,
    KO,
    NL,
    NO,
    DA,
    PL,
    PT,
    RU,
    JA,
    SK,
    SL,
    SV,
    TR,
    ZH,
}

/// Postal address used for billing and shipping blocks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street2: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zip_code: Option<String>,
    /// ISO 3166-1 alpha-2 country code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
}

impl Address {
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_optional_length(self.street.as_deref(), 0, 100, "street")?;
        validate_optional_length(self.street2.as_deref(), 0, 100, "street2")?;
        validate_optional_length(self.city.as_deref(), 0, 100, "city")?;
        validate_optional_length(self.zip_code.as_deref(), 0, 20, "zipCode")?;
        validate_optional_length(self.country.as_deref(), 0, 2, "country")?;
        validate_optional_length(self.state.as_deref(), 0, 100, "state")?;
        Ok(())
    }
}

/// Customer details attached to a transaction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    /// `YYYY-MM-DD`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cell_phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub customer_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_address: Option<String>,
}

impl Customer {
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_optional_length(self.id.as_deref(), 0, 100, "id")?;
        validate_optional_length(self.title.as_deref(), 0, 50, "title")?;
        validate_optional_length(self.first_name.as_deref(), 0, 100, "firstName")?;
        validate_optional_length(self.last_name.as_deref(), 0, 100, "lastName")?;
        validate_optional_length(self.email.as_deref(), 0, 255, "email")?;
        validate_optional_length(self.phone.as_deref(), 0, 50, "phone")?;
        validate_optional_length(self.cell_phone.as_deref(), 0, 50, "cellPhone")?;
        validate_optional_length(self.language.as_deref(), 0, 2, "language")?;
        validate_optional_length(self.customer_type.as_deref(), 0, 1, "type")?;
        validate_optional_length(self.ip_address.as_deref(), 0, 45, "ipAddress")?;

        if let Some(birth_date) = &self.birth_date {
            if chrono::NaiveDate::parse_from_str(birth_date, "%Y-%m-%d").is_err() {
                return Err(ValidationError::Invalid(
                    "birthDate must be in YYYY-MM-DD format".to_string(),
                ));
            }
        }
        Ok(())
    }
}

/// One article of an order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vat: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vat_amount: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl Article {
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_optional_length(self.code.as_deref(), 0, 100, "code")?;
        validate_optional_length(self.name.as_deref(), 0, 100, "name")?;
        validate_optional_length(self.description.as_deref(), 0, 500, "description")?;
        validate_optional_length(self.image_url.as_deref(), 0, 2000, "imageUrl")?;

        if let Some(quantity) = self.quantity {
            if quantity <= 0 {
                return Err(ValidationError::Invalid(
                    "quantity must be positive".to_string(),
                ));
            }
        }
        if let Some(amount) = self.amount {
            validate_amount(amount)?;
        }
        if let Some(vat) = self.vat {
            if vat < 0.0 {
                return Err(ValidationError::Invalid("vat cannot be negative".to_string()));
            }
        }
        if let Some(vat_amount) = self.vat_amount {
            validate_amount(vat_amount)?;
        }
        Ok(())
    }
}

/// Order block carrying the article list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Order {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub articles: Vec<Article>,
}

impl Order {
    pub fn validate(&self) -> Result<(), ValidationError> {
        for article in &self.articles {
            article.validate()?;
        }
        Ok(())
    }
}

/// Redirect URLs for the hosted payment page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Redirect {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub success_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cancel_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_url: Option<String>,
}

impl Redirect {
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_optional_length(self.success_url.as_deref(), 0, 4000, "successUrl")?;
        validate_optional_length(self.cancel_url.as_deref(), 0, 4000, "cancelUrl")?;
        validate_optional_length(self.error_url.as_deref(), 0, 4000, "errorUrl")?;
        Ok(())
    }
}

/// Per-transaction webhook override.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebhookOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// `GET` or `POST`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
}

impl WebhookOptions {
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_optional_length(self.url.as_deref(), 0, 4000, "url")?;
        if let Some(method) = &self.method {
            if method != "GET" && method != "POST" {
                return Err(ValidationError::Invalid(
                    "method must be GET or POST".to_string(),
                ));
            }
        }
        Ok(())
    }
}

/// 3-D Secure parameters.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThreeDSecure {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub challenge_indicator: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exemption: Option<String>,
    #[serde(rename = "threeDSTransactionId", skip_serializing_if = "Option::is_none")]
    pub three_ds_transaction_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authentication_response: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trans_status_reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cardholder_info: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_extensions: Option<Vec<ExtensionBag>>,
}

/// Options for transaction initialization and authorization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_alias: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authenticate_only: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_mobile_token: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remember_me: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub store_customer_data: Option<bool>,
}

/// Merchant reference data carried through the gateway untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    #[serde(default, skip_serializing_if = "ExtensionBag::is_empty")]
    pub custom: ExtensionBag,
}

/// Card metadata reported by the gateway.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub card_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issuer: Option<String>,
}

/// One side of a Dynamic Currency Conversion quote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DccOption {
    pub amount: i64,
    pub currency: String,
    #[serde(default = "default_exponent")]
    pub exponent: i64,
}

fn default_exponent() -> i64 {
    2
}

impl DccOption {
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_amount(self.amount)?;
        validate_currency(&self.currency)?;
        if self.exponent < 0 {
            return Err(ValidationError::Invalid(
                "exponent cannot be negative".to_string(),
            ));
        }
        Ok(())
    }
}
