//! Response bodies from the transaction API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::{CardInfo, DccOption};
use super::extension::ExtensionBag;

/// Structured error block the gateway embeds in failure responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GatewayErrorDetail {
    pub code: String,
    pub message: String,
}

/// Error envelope as returned by the gateway: `{"error": {...}}`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GatewayErrorBody {
    pub error: GatewayErrorDetail,
}

/// Secure Fields resource reference with its integrity hash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceInfo {
    pub integrity: String,
}

/// Response to transaction initialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InitResponse {
    pub transaction_id: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub resources: Vec<ResourceInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<GatewayErrorDetail>,
}

/// Response to Secure Fields initialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SecureFieldsInitResponse {
    pub transaction_id: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub resources: Vec<ResourceInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<GatewayErrorDetail>,
}

/// Response to a direct authorization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorizeResponse {
    pub transaction_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub acquirer_authorization_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card: Option<ExtensionBag>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<GatewayErrorDetail>,
}

/// Response to authorizing an authenticated transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorizeSplitResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub acquirer_authorization_code: Option<String>,
}

/// Response to an alias validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidateResponse {
    pub transaction_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub acquirer_authorization_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card: Option<ExtensionBag>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<GatewayErrorDetail>,
}

/// Response to a credit (refund).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreditResponse {
    pub transaction_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub acquirer_authorization_code: Option<String>,
}

/// Response to an amount increase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncreaseResponse {
    pub increased_amount: i64,
}

/// Response to customer screening.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScreenResponse {
    pub transaction_id: String,
    #[serde(rename = "INT", skip_serializing_if = "Option::is_none")]
    pub int: Option<ExtensionBag>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<GatewayErrorDetail>,
}

/// Dynamic Currency Conversion quote.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DccResponse {
    pub dcc_available: bool,
    pub original_option: DccOption,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dcc_option: Option<DccOption>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_rate: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rate: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub correlation_id: Option<String>,
}

/// Per-operation detail blocks in a status response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatusDetail {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authorize: Option<ExtensionBag>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub settle: Option<ExtensionBag>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credit: Option<ExtensionBag>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cancel: Option<ExtensionBag>,
}

/// One entry of a transaction's history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub action: String,
    pub date: DateTime<Utc>,
    pub source: String,
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip: Option<String>,
}

/// Full transaction status.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusResponse {
    pub transaction_id: String,
    pub status: String,
    pub currency: String,
    pub refno: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merchant_id: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub transaction_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<StatusDetail>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card: Option<ExtensionBag>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub history: Vec<HistoryEntry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mcp: Option<ExtensionBag>,
}

/// Network token details attached to an alias.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkTokenInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiry_month: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiry_year: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_account_reference: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token_requestor_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token_created: Option<bool>,
}

/// Card details in an alias response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardInfoResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiry_month: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiry_year: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last4: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pan_removed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card_info: Option<CardInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card_on_file: Option<ExtensionBag>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network_token: Option<NetworkTokenInfo>,
}

/// Alias details from the alias API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AliasInfoResponse {
    pub alias: String,
    pub date_created: DateTime<Utc>,
    #[serde(rename = "type")]
    pub alias_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fingerprint: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub masked: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valid_until: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card: Option<CardInfoResponse>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_response_parses() {
        let json = serde_json::json!({
            "transactionId": "240101123456789012",
            "resources": [{"integrity": "sha384-abc"}],
        });
        let response: InitResponse = serde_json::from_value(json).unwrap();
        assert_eq!(response.transaction_id, "240101123456789012");
        assert_eq!(response.resources.len(), 1);
        assert!(response.error.is_none());
    }

    #[test]
    fn init_response_resources_default_empty() {
        let json = serde_json::json!({"transactionId": "1"});
        let response: InitResponse = serde_json::from_value(json).unwrap();
        assert!(response.resources.is_empty());
    }

    #[test]
    fn gateway_error_body_parses() {
        let json = serde_json::json!({
            "error": {"code": "INVALID_PROPERTY", "message": "init.refno must not be null"}
        });
        let body: GatewayErrorBody = serde_json::from_value(json).unwrap();
        assert_eq!(body.error.code, "INVALID_PROPERTY");
    }

    #[test]
    fn status_response_parses_history() {
        let json = serde_json::json!({
            "transactionId": "240101123456789012",
            "status": "settled",
            "currency": "CHF",
            "refno": "order-1",
            "paymentMethod": "VIS",
            "detail": {"settle": {"amount": 1000}},
            "history": [{
                "action": "authorize",
                "date": "2024-01-01T12:00:00Z",
                "source": "api",
                "success": true,
                "amount": 1000,
            }],
        });
        let response: StatusResponse = serde_json::from_value(json).unwrap();
        assert_eq!(response.status, "settled");
        assert_eq!(response.history.len(), 1);
        assert!(response.history[0].success);
        assert!(response.detail.unwrap().settle.is_some());
    }

    #[test]
    fn alias_info_parses_dates() {
        let json = serde_json::json!({
            "alias": "70119122433810042",
            "dateCreated": "2024-01-01T12:00:00Z",
            "type": "CARD",
            "masked": "424242xxxxxx4242",
            "card": {
                "expiryMonth": "06",
                "expiryYear": "26",
                "networkToken": {"status": "ACTIVE"},
            },
        });
        let response: AliasInfoResponse = serde_json::from_value(json).unwrap();
        assert_eq!(response.alias_type, "CARD");
        let card = response.card.unwrap();
        assert_eq!(card.network_token.unwrap().status.as_deref(), Some("ACTIVE"));
    }

    #[test]
    fn dcc_response_parses() {
        let json = serde_json::json!({
            "dccAvailable": true,
            "originalOption": {"amount": 1000, "currency": "CHF", "exponent": 2},
            "dccOption": {"amount": 1080, "currency": "EUR", "exponent": 2},
            "rate": 1.08,
        });
        let response: DccResponse = serde_json::from_value(json).unwrap();
        assert!(response.dcc_available);
        assert_eq!(response.dcc_option.unwrap().currency, "EUR");
    }
}
