//! Port for the append-only transaction log.

use async_trait::async_trait;

use crate::domain::TransactionRecord;

use super::define_port_error;

define_port_error! {
    /// Errors raised by transaction log adapters.
    pub enum TransactionLogError {
        /// Log connection could not be established.
        Connection { message: String } =>
            "transaction log connection failed: {message}",
        /// The append failed during execution.
        Query { message: String } =>
            "transaction log append failed: {message}",
    }
}

/// Append-only audit sink. Records are never updated or removed.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TransactionLog: Send + Sync {
    async fn append(&self, record: &TransactionRecord) -> Result<(), TransactionLogError>;
}

/// Log that accepts and discards records.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureTransactionLog;

#[async_trait]
impl TransactionLog for FixtureTransactionLog {
    async fn append(&self, _record: &TransactionRecord) -> Result<(), TransactionLogError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ActorId, ItemId, Quantity, TransactionKind};
    use chrono::Utc;

    #[tokio::test]
    async fn fixture_log_accepts_records() {
        let record = TransactionRecord::new(
            ItemId::random(),
            ActorId::random(),
            TransactionKind::Purchase,
            Quantity::new(2).expect("quantity"),
            Utc::now(),
        );
        FixtureTransactionLog
            .append(&record)
            .await
            .expect("fixture append succeeds");
    }
}
