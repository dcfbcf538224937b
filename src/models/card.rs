//! Card payment means.
//!
//! The gateway accepts four card shapes, discriminated by the `type` field:
//! a raw PAN, a stored-card alias, a network token, and a wallet device
//! token (Apple Pay / Google Pay). This is a closed tagged union, not open
//! subclassing; deserialization dispatches on the discriminant.

use serde::{Deserialize, Serialize};

use crate::domain::validation::{
    validate_card_number, validate_cvv, validate_expiry_month, validate_expiry_year,
    validate_length, ValidationError,
};

/// Cardholder details attached to a card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardholderData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_address: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_address: Option<String>,
}

/// Card-on-file agreement indicator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardOnFile {
    /// `FIRST`, `SUBSEQUENT` or `RESUBMISSION`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction: Option<String>,

    /// `RECURRING`, `INSTALLMENT` or `UNSCHEDULED`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agreement: Option<String>,
}

impl CardOnFile {
    const TRANSACTIONS: [&'static str; 3] = ["FIRST", "SUBSEQUENT", "RESUBMISSION"];
    const AGREEMENTS: [&'static str; 3] = ["RECURRING", "INSTALLMENT", "UNSCHEDULED"];

    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(transaction) = &self.transaction {
            if !Self::TRANSACTIONS.contains(&transaction.as_str()) {
                return Err(ValidationError::Invalid(format!(
                    "transaction must be one of {:?}",
                    Self::TRANSACTIONS
                )));
            }
        }
        if let Some(agreement) = &self.agreement {
            if !Self::AGREEMENTS.contains(&agreement.as_str()) {
                return Err(ValidationError::Invalid(format!(
                    "agreement must be one of {:?}",
                    Self::AGREEMENTS
                )));
            }
        }
        Ok(())
    }
}

/// A card in one of the four shapes the gateway accepts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Card {
    /// Raw card number, optionally with CVV.
    #[serde(rename = "PLAIN")]
    #[serde(rename_all = "camelCase")]
    Plain {
        number: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        cvv: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        expiry_month: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        expiry_year: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        cardholder: Option<CardholderData>,
        #[serde(skip_serializing_if = "Option::is_none")]
        card_on_file: Option<CardOnFile>,
    },

    /// Stored-card alias issued by the gateway.
    #[serde(rename = "ALIAS")]
    #[serde(rename_all = "camelCase")]
    Alias {
        alias: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        expiry_month: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        expiry_year: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        cardholder: Option<CardholderData>,
        #[serde(skip_serializing_if = "Option::is_none")]
        card_on_file: Option<CardOnFile>,
    },

    /// Scheme-issued network token.
    #[serde(rename = "NETWORK_TOKEN")]
    #[serde(rename_all = "camelCase")]
    NetworkToken {
        token: String,
        expiry_month: String,
        expiry_year: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        cvv: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        cardholder: Option<CardholderData>,
        #[serde(skip_serializing_if = "Option::is_none")]
        card_on_file: Option<CardOnFile>,
    },

    /// Wallet device token (Apple Pay / Google Pay).
    #[serde(rename = "DEVICE_TOKEN")]
    #[serde(rename_all = "camelCase")]
    DeviceToken {
        token: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        cvv: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        expiry_month: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        expiry_year: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        cardholder: Option<CardholderData>,
        #[serde(skip_serializing_if = "Option::is_none")]
        card_on_file: Option<CardOnFile>,
    },
}

impl Card {
    /// Validates the card for the shape it carries.
    pub fn validate(&self) -> Result<(), ValidationError> {
        match self {
            Card::Plain {
                number,
                cvv,
                expiry_month,
                expiry_year,
                card_on_file,
                ..
            } => {
                validate_card_number(number)?;
                if let Some(cvv) = cvv {
                    validate_cvv(cvv)?;
                }
                validate_optional_expiry(expiry_month.as_deref(), expiry_year.as_deref())?;
                validate_optional_card_on_file(card_on_file.as_ref())
            }
            Card::Alias {
                alias,
                expiry_month,
                expiry_year,
                card_on_file,
                ..
            } => {
                validate_length(alias, 10, 100, "alias")?;
                validate_optional_expiry(expiry_month.as_deref(), expiry_year.as_deref())?;
                validate_optional_card_on_file(card_on_file.as_ref())
            }
            Card::NetworkToken {
                token,
                expiry_month,
                expiry_year,
                cvv,
                card_on_file,
                ..
            } => {
                validate_length(token, 0, 100, "token")?;
                validate_expiry_month(expiry_month)?;
                validate_expiry_year(expiry_year)?;
                if let Some(cvv) = cvv {
                    validate_cvv(cvv)?;
                }
                validate_optional_card_on_file(card_on_file.as_ref())
            }
            Card::DeviceToken {
                token,
                cvv,
                expiry_month,
                expiry_year,
                card_on_file,
                ..
            } => {
                validate_length(token, 0, 2000, "token")?;
                if let Some(cvv) = cvv {
                    validate_cvv(cvv)?;
                }
                validate_optional_expiry(expiry_month.as_deref(), expiry_year.as_deref())?;
                validate_optional_card_on_file(card_on_file.as_ref())
            }
        }
    }
}

fn validate_optional_expiry(
    month: Option<&str>,
    year: Option<&str>,
) -> Result<(), ValidationError> {
    if let Some(month) = month {
        validate_expiry_month(month)?;
    }
    if let Some(year) = year {
        validate_expiry_year(year)?;
    }
    Ok(())
}

fn validate_optional_card_on_file(card_on_file: Option<&CardOnFile>) -> Result<(), ValidationError> {
    match card_on_file {
        Some(cof) => cof.validate(),
        None => Ok(()),
    }
}
