//! In-memory transaction store.
//!
//! Backing store for tests and examples. Production integrations implement
//! [`TransactionStore`] over their own database.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::transaction::TransactionRecord;
use crate::ports::{StoreError, TransactionStore};

/// Thread-safe in-memory implementation of [`TransactionStore`].
#[derive(Default)]
pub struct InMemoryTransactionStore {
    records: RwLock<HashMap<String, TransactionRecord>>,
}

impl InMemoryTransactionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the stored record for a transaction, if any.
    pub async fn get(&self, transaction_id: &str) -> Option<TransactionRecord> {
        self.records.read().await.get(transaction_id).cloned()
    }

    /// Number of tracked transactions.
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[async_trait]
impl TransactionStore for InMemoryTransactionStore {
    async fn find_or_create(
        &self,
        transaction_id: &str,
    ) -> Result<TransactionRecord, StoreError> {
        let mut records = self.records.write().await;
        let record = records
            .entry(transaction_id.to_string())
            .or_insert_with(|| TransactionRecord::new(transaction_id));
        Ok(record.clone())
    }

    async fn update(&self, record: TransactionRecord) -> Result<(), StoreError> {
        let mut records = self.records.write().await;
        records.insert(record.transaction_id.clone(), record);
        Ok(())
    }
}
