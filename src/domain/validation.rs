//! Field validation for outbound request models.
//!
//! Validation runs before serialization so a bad request never reaches the
//! wire. The rules mirror the gateway's documented constraints: length
//! bounds, digit-only fields, Luhn for card numbers, two-digit expiry parts.

use thiserror::Error;

/// A request field failed validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field} must be between {min} and {max} characters")]
    Length {
        field: &'static str,
        min: usize,
        max: usize,
    },

    #[error("{field} must contain only digits")]
    NotDigits { field: &'static str },

    #[error("card number failed the Luhn check")]
    InvalidCardNumber,

    #[error("expiry month must be two digits between 01 and 12")]
    InvalidExpiryMonth,

    #[error("expiry year must be two digits")]
    InvalidExpiryYear,

    #[error("amount must be positive")]
    NonPositiveAmount,

    #[error("{field} is required")]
    Missing { field: &'static str },

    #[error("{0}")]
    Invalid(String),
}

/// Checks a string length against inclusive bounds.
pub fn validate_length(
    value: &str,
    min: usize,
    max: usize,
    field: &'static str,
) -> Result<(), ValidationError> {
    if value.len() < min || value.len() > max {
        return Err(ValidationError::Length { field, min, max });
    }
    Ok(())
}

/// Like [`validate_length`] but skips `None`.
pub fn validate_optional_length(
    value: Option<&str>,
    min: usize,
    max: usize,
    field: &'static str,
) -> Result<(), ValidationError> {
    match value {
        Some(value) => validate_length(value, min, max, field),
        None => Ok(()),
    }
}

fn is_digits(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit())
}

/// Validates a card number: digits only, 12-19 long, Luhn-valid.
pub fn validate_card_number(number: &str) -> Result<(), ValidationError> {
    if !is_digits(number) {
        return Err(ValidationError::NotDigits { field: "number" });
    }
    validate_length(number, 12, 19, "number")?;
    if !luhn_valid(number) {
        return Err(ValidationError::InvalidCardNumber);
    }
    Ok(())
}

/// Luhn checksum over an all-digit string.
fn luhn_valid(number: &str) -> bool {
    let mut sum = 0u32;
    for (i, b) in number.bytes().rev().enumerate() {
        let mut digit = (b - b'0') as u32;
        if i % 2 == 1 {
            digit *= 2;
            if digit > 9 {
                digit -= 9;
            }
        }
        sum += digit;
    }
    sum % 10 == 0
}

/// Validates a two-digit expiry month in `01..=12`.
pub fn validate_expiry_month(month: &str) -> Result<(), ValidationError> {
    if month.len() != 2 || !is_digits(month) {
        return Err(ValidationError::InvalidExpiryMonth);
    }
    let m: u8 = month.parse().map_err(|_| ValidationError::InvalidExpiryMonth)?;
    if !(1..=12).contains(&m) {
        return Err(ValidationError::InvalidExpiryMonth);
    }
    Ok(())
}

/// Validates a two-digit expiry year.
pub fn validate_expiry_year(year: &str) -> Result<(), ValidationError> {
    if year.len() != 2 || !is_digits(year) {
        return Err(ValidationError::InvalidExpiryYear);
    }
    Ok(())
}

/// Validates a CVV: 3-4 digits.
pub fn validate_cvv(cvv: &str) -> Result<(), ValidationError> {
    if !is_digits(cvv) {
        return Err(ValidationError::NotDigits { field: "cvv" });
    }
    validate_length(cvv, 3, 4, "cvv")
}

/// Validates an amount in minor units is positive.
pub fn validate_amount(amount: i64) -> Result<(), ValidationError> {
    if amount <= 0 {
        return Err(ValidationError::NonPositiveAmount);
    }
    Ok(())
}

/// Validates an ISO 4217 currency code (exactly 3 characters).
pub fn validate_currency(currency: &str) -> Result<(), ValidationError> {
    validate_length(currency, 3, 3, "currency")
}

/// Validates a merchant reference (`refno`, 1-40 characters).
pub fn validate_refno(refno: &str) -> Result<(), ValidationError> {
    validate_length(refno, 1, 40, "refno")
}
