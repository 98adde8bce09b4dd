//! Vector-backed [`TransactionLog`].

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::domain::TransactionRecord;
use crate::domain::ports::{TransactionLog, TransactionLogError};

/// Append-only log kept in memory. Clones share the same records.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTransactionLog {
    records: Arc<Mutex<Vec<TransactionRecord>>>,
}

impl InMemoryTransactionLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every appended record, oldest first.
    pub fn records(&self) -> Vec<TransactionRecord> {
        self.records
            .lock()
            .map(|records| records.clone())
            .unwrap_or_else(|poisoned| poisoned.into_inner().clone())
    }
}

#[async_trait]
impl TransactionLog for InMemoryTransactionLog {
    async fn append(&self, record: &TransactionRecord) -> Result<(), TransactionLogError> {
        self.records
            .lock()
            .map_err(|_| TransactionLogError::query("transaction log lock poisoned"))?
            .push(record.clone());
        Ok(())
    }
}
