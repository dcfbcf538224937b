//! Transaction records tracked alongside gateway state.
//!
//! Mirrors what the gateway reports about a transaction so webhook
//! notifications can be applied locally. Persistence itself lives behind
//! the [`TransactionStore`](crate::ports::TransactionStore) port.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle states a Datatrans transaction moves through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
    Initialized,
    Authorized,
    Settled,
    Canceled,
    Failed,
    Refunded,
    Compensated,
    Transmitted,
}

impl TransactionStatus {
    /// True when the transaction can still move to a settled state.
    pub fn is_open(&self) -> bool {
        matches!(
            self,
            TransactionStatus::Initialized | TransactionStatus::Authorized
        )
    }

    /// True for states the money has actually moved in.
    pub fn is_final(&self) -> bool {
        matches!(
            self,
            TransactionStatus::Settled
                | TransactionStatus::Canceled
                | TransactionStatus::Failed
                | TransactionStatus::Refunded
        )
    }
}

impl std::fmt::Display for TransactionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            TransactionStatus::Initialized => "initialized",
            TransactionStatus::Authorized => "authorized",
            TransactionStatus::Settled => "settled",
            TransactionStatus::Canceled => "canceled",
            TransactionStatus::Failed => "failed",
            TransactionStatus::Refunded => "refunded",
            TransactionStatus::Compensated => "compensated",
            TransactionStatus::Transmitted => "transmitted",
        };
        write!(f, "{}", s)
    }
}

/// Locally tracked state for one gateway transaction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionRecord {
    /// Gateway transaction identifier.
    pub transaction_id: String,

    /// Merchant reference (`refno`), if known.
    pub merchant_reference: Option<String>,

    /// Amount in minor units.
    pub amount: Option<i64>,

    /// ISO 4217 currency code.
    pub currency: Option<String>,

    /// Gateway payment method code (e.g. `VIS`).
    pub payment_method: Option<String>,

    /// Current status.
    pub status: TransactionStatus,

    /// Masked card number, when the gateway reported one.
    pub masked_card: Option<String>,

    /// Stored-card alias, when one was created.
    pub alias: Option<String>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub authorized_at: Option<DateTime<Utc>>,
    pub settled_at: Option<DateTime<Utc>>,

    /// Most recent webhook payload applied to this record, verbatim.
    pub webhook_data: Option<serde_json::Value>,
}

impl TransactionRecord {
    /// Creates a fresh record in the `initialized` state.
    pub fn new(transaction_id: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            transaction_id: transaction_id.into(),
            merchant_reference: None,
            amount: None,
            currency: None,
            payment_method: None,
            status: TransactionStatus::Initialized,
            masked_card: None,
            alias: None,
            created_at: now,
            updated_at: now,
            authorized_at: None,
            settled_at: None,
            webhook_data: None,
        }
    }

    /// Applies a status transition, stamping the transition timestamps and
    /// retaining the webhook payload that caused it.
    pub fn apply_status(&mut self, status: TransactionStatus, data: Option<serde_json::Value>) {
        self.status = status;
        self.updated_at = Utc::now();

        match status {
            TransactionStatus::Authorized => self.authorized_at = Some(self.updated_at),
            TransactionStatus::Settled => self.settled_at = Some(self.updated_at),
            _ => {}
        }

        if data.is_some() {
            self.webhook_data = data;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_record_starts_initialized() {
        let record = TransactionRecord::new("240101123456789012");
        assert_eq!(record.status, TransactionStatus::Initialized);
        assert!(record.authorized_at.is_none());
        assert!(record.settled_at.is_none());
    }

    #[test]
    fn authorized_transition_stamps_timestamp() {
        let mut record = TransactionRecord::new("tx1");
        record.apply_status(TransactionStatus::Authorized, None);

        assert_eq!(record.status, TransactionStatus::Authorized);
        assert!(record.authorized_at.is_some());
        assert!(record.settled_at.is_none());
    }

    #[test]
    fn settled_transition_stamps_timestamp() {
        let mut record = TransactionRecord::new("tx1");
        record.apply_status(TransactionStatus::Settled, None);

        assert!(record.settled_at.is_some());
    }

    #[test]
    fn apply_status_retains_webhook_payload() {
        let mut record = TransactionRecord::new("tx1");
        let payload = serde_json::json!({"transactionId": "tx1", "status": "settled"});

        record.apply_status(TransactionStatus::Settled, Some(payload.clone()));

        assert_eq!(record.webhook_data, Some(payload));
    }

    #[test]
    fn apply_status_without_payload_keeps_previous() {
        let mut record = TransactionRecord::new("tx1");
        let payload = serde_json::json!({"status": "authorized"});
        record.apply_status(TransactionStatus::Authorized, Some(payload.clone()));

        record.apply_status(TransactionStatus::Settled, None);

        assert_eq!(record.webhook_data, Some(payload));
    }

    #[test]
    fn status_classification() {
        assert!(TransactionStatus::Initialized.is_open());
        assert!(TransactionStatus::Authorized.is_open());
        assert!(!TransactionStatus::Settled.is_open());

        assert!(TransactionStatus::Settled.is_final());
        assert!(TransactionStatus::Refunded.is_final());
        assert!(!TransactionStatus::Transmitted.is_final());
    }

    #[test]
    fn status_serializes_lowercase() {
        let json = serde_json::to_string(&TransactionStatus::Authorized).unwrap();
        assert_eq!(json, "\"authorized\"");
    }
}
