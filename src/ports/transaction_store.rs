//! Transaction store port.
//!
//! The webhook pipeline needs exactly two capabilities from persistence:
//! find-or-create a transaction by its gateway id, and write back an
//! updated record. Where and how records are stored is the adapter's
//! concern.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::transaction::TransactionRecord;

/// Persistence failures surfaced to the webhook pipeline.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage backend error: {0}")]
    Backend(String),
}

/// Port for persisting locally tracked transactions.
///
/// Implementations must tolerate concurrent webhook deliveries for the same
/// transaction; last write wins is acceptable, losing a create is not.
#[async_trait]
pub trait TransactionStore: Send + Sync {
    /// Returns the record for `transaction_id`, creating a fresh
    /// `initialized` record if none exists yet.
    async fn find_or_create(&self, transaction_id: &str)
        -> Result<TransactionRecord, StoreError>;

    /// Writes back an updated record.
    async fn update(&self, record: TransactionRecord) -> Result<(), StoreError>;
}

// Shared handles are stores too, so a processor and a repository can hold
// the same backing store.
#[async_trait]
impl<S: TransactionStore + ?Sized> TransactionStore for std::sync::Arc<S> {
    async fn find_or_create(
        &self,
        transaction_id: &str,
    ) -> Result<TransactionRecord, StoreError> {
        (**self).find_or_create(transaction_id).await
    }

    async fn update(&self, record: TransactionRecord) -> Result<(), StoreError> {
        (**self).update(record).await
    }
}
