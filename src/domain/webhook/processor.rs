//! Webhook notification processing.
//!
//! Coordinates the verify-then-apply pipeline: the signature is checked over
//! the raw body exactly as received, and only then is the payload parsed and
//! the transaction updated through the [`TransactionStore`] port.

use serde::Deserialize;

use crate::domain::transaction::TransactionStatus;
use crate::ports::TransactionStore;

use super::error::WebhookError;
use super::verifier::WebhookVerifier;

/// Fields this SDK reads out of a webhook payload.
///
/// Datatrans sends the full transaction object; everything beyond these
/// fields is carried opaquely in the retained raw JSON.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookNotification {
    pub transaction_id: Option<String>,
    pub status: Option<TransactionStatus>,
    pub amount: Option<i64>,
    pub currency: Option<String>,
    pub payment_method: Option<String>,
    pub card: Option<WebhookCard>,
}

/// Card block inside a webhook payload.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookCard {
    pub masked: Option<String>,
    pub alias: Option<String>,
}

/// Outcome of processing one webhook delivery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WebhookOutcome {
    /// Transaction status was updated.
    Updated {
        transaction_id: String,
        status: TransactionStatus,
    },
    /// Payload verified and parsed but carried no status to apply.
    NoStatusChange { transaction_id: String },
}

/// Verifies inbound webhook deliveries and applies their status updates.
///
/// Stateless beyond the verifier key and the store handle; safe for
/// concurrent use, each delivery is processed independently.
pub struct WebhookProcessor<S: TransactionStore> {
    verifier: WebhookVerifier,
    store: S,
}

impl<S: TransactionStore> WebhookProcessor<S> {
    pub fn new(verifier: WebhookVerifier, store: S) -> Self {
        Self { verifier, store }
    }

    /// Processes one webhook delivery.
    ///
    /// `payload` must be the raw request body as received on the wire; the
    /// signature is defined over those exact bytes, so any re-encoding
    /// before this call invalidates it.
    ///
    /// On any error the state transition is NOT applied; the caller maps the
    /// error to an HTTP response via [`WebhookError::status_code`] and must
    /// fail closed.
    pub async fn process(
        &self,
        signature_header: &str,
        payload: &str,
    ) -> Result<WebhookOutcome, WebhookError> {
        // Verify before parsing, over the untouched body.
        self.verifier.verify(signature_header, payload)?;
        self.apply(payload).await
    }

    /// Fixed-clock variant of [`process`](Self::process) for deterministic tests.
    pub async fn process_at(
        &self,
        signature_header: &str,
        payload: &str,
        max_age_seconds: i64,
        now_ms: i64,
    ) -> Result<WebhookOutcome, WebhookError> {
        self.verifier
            .verify_at(signature_header, payload, max_age_seconds, now_ms)?;
        self.apply(payload).await
    }

    async fn apply(&self, payload: &str) -> Result<WebhookOutcome, WebhookError> {
        let raw: serde_json::Value = serde_json::from_str(payload)
            .map_err(|e| WebhookError::InvalidPayload(e.to_string()))?;
        let notification: WebhookNotification = serde_json::from_value(raw.clone())
            .map_err(|e| WebhookError::InvalidPayload(e.to_string()))?;

        let transaction_id = notification
            .transaction_id
            .filter(|id| !id.is_empty())
            .ok_or(WebhookError::MissingTransactionId)?;

        let mut record = self
            .store
            .find_or_create(&transaction_id)
            .await
            .map_err(|e| WebhookError::Store(e.to_string()))?;

        let Some(status) = notification.status else {
            tracing::debug!(%transaction_id, "webhook carried no status field");
            return Ok(WebhookOutcome::NoStatusChange { transaction_id });
        };

        record.apply_status(status, Some(raw));

        if notification.amount.is_some() {
            record.amount = notification.amount;
        }
        if notification.currency.is_some() {
            record.currency = notification.currency;
        }
        if notification.payment_method.is_some() {
            record.payment_method = notification.payment_method;
        }
        if let Some(card) = notification.card {
            if card.masked.is_some() {
                record.masked_card = card.masked;
            }
            if card.alias.is_some() {
                record.alias = card.alias;
            }
        }

        self.store
            .update(record)
            .await
            .map_err(|e| WebhookError::Store(e.to_string()))?;

        tracing::info!(%transaction_id, %status, "transaction status updated from webhook");

        Ok(WebhookOutcome::Updated {
            transaction_id,
            status,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemoryTransactionStore;
    use crate::domain::webhook::verifier::sign_for_test;

    const KEY: &str = "6168";
    const NOW: i64 = 1_700_000_000_000;

    fn processor() -> WebhookProcessor<InMemoryTransactionStore> {
        WebhookProcessor::new(
            WebhookVerifier::new(KEY).unwrap(),
            InMemoryTransactionStore::new(),
        )
    }

    fn header_for(payload: &str) -> String {
        format!("t={},s0={}", NOW, sign_for_test(KEY, NOW, payload))
    }

    #[tokio::test]
    async fn applies_status_update_for_verified_payload() {
        let processor = processor();
        let payload = r#"{"transactionId":"tx9","status":"settled","amount":1500,"currency":"CHF","paymentMethod":"VIS","card":{"masked":"424242xxxxxx4242"}}"#;

        let outcome = processor
            .process_at(&header_for(payload), payload, 300, NOW)
            .await
            .unwrap();

        assert_eq!(
            outcome,
            WebhookOutcome::Updated {
                transaction_id: "tx9".to_string(),
                status: TransactionStatus::Settled,
            }
        );
    }

    #[tokio::test]
    async fn rejects_bad_signature_without_touching_store() {
        let processor = processor();
        let payload = r#"{"transactionId":"tx9","status":"settled"}"#;
        let header = format!("t={},s0=deadbeef", NOW);

        let result = processor.process_at(&header, payload, 300, NOW).await;

        assert!(matches!(result, Err(WebhookError::SignatureMismatch)));
    }

    #[tokio::test]
    async fn rejects_payload_without_transaction_id() {
        let processor = processor();
        let payload = r#"{"status":"settled"}"#;

        let result = processor
            .process_at(&header_for(payload), payload, 300, NOW)
            .await;

        assert!(matches!(result, Err(WebhookError::MissingTransactionId)));
    }

    #[tokio::test]
    async fn rejects_non_json_payload_after_verification() {
        let processor = processor();
        let payload = "not json";

        let result = processor
            .process_at(&header_for(payload), payload, 300, NOW)
            .await;

        assert!(matches!(result, Err(WebhookError::InvalidPayload(_))));
    }

    #[tokio::test]
    async fn payload_without_status_reports_no_change() {
        let processor = processor();
        let payload = r#"{"transactionId":"tx2"}"#;

        let outcome = processor
            .process_at(&header_for(payload), payload, 300, NOW)
            .await
            .unwrap();

        assert_eq!(
            outcome,
            WebhookOutcome::NoStatusChange {
                transaction_id: "tx2".to_string()
            }
        );
    }

    #[tokio::test]
    async fn unknown_payload_fields_are_carried_opaquely() {
        let processor = processor();
        let payload = r#"{"transactionId":"tx3","status":"authorized","acquirer":{"code":"07"}}"#;

        processor
            .process_at(&header_for(payload), payload, 300, NOW)
            .await
            .unwrap();
    }
}
