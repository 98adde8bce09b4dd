//! Port for reading items and changing their stock level.
//!
//! A stock change and its transaction record land together or not at all:
//! an adapter applies the conditional quantity change and appends the record
//! inside one atomic unit, or reports, via [`StockUpdate`], why it did not.
//! Adapters must never read the quantity, check it, and write it back in
//! separate steps.

use async_trait::async_trait;

use crate::domain::{Item, ItemId, StockUpdate, TransactionRecord};

use super::define_port_error;
use super::transaction_log::TransactionLogError;

define_port_error! {
    /// Errors raised by item store adapters.
    pub enum ItemStoreError {
        /// Store connection could not be established.
        Connection { message: String } =>
            "item store connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "item store query failed: {message}",
    }
}

impl From<TransactionLogError> for ItemStoreError {
    fn from(error: TransactionLogError) -> Self {
        match error {
            TransactionLogError::Connection { message } => Self::connection(message),
            TransactionLogError::Query { message } => Self::query(message),
        }
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ItemStore: Send + Sync {
    /// Fetch an item by id.
    async fn find_by_id(&self, id: &ItemId) -> Result<Option<Item>, ItemStoreError>;

    /// Apply the stock change `record` describes and append `record` to the
    /// transaction log.
    ///
    /// A purchase subtracts `record.quantity()` only when at least that much
    /// is on hand, otherwise [`StockUpdate::Insufficient`]. A restock adds it
    /// unless the sum would exceed [`crate::domain::MAX_STORABLE_QUANTITY`],
    /// otherwise [`StockUpdate::Overflow`]. Unless the result is
    /// [`StockUpdate::Applied`], neither the stock nor the log changes; an
    /// append failure is returned as an error with the stock untouched.
    async fn apply_change(
        &self,
        record: &TransactionRecord,
    ) -> Result<StockUpdate, ItemStoreError>;
}

/// Store that holds no items.
///
/// Every lookup misses and every change reports [`StockUpdate::Missing`].
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureItemStore;

#[async_trait]
impl ItemStore for FixtureItemStore {
    async fn find_by_id(&self, _id: &ItemId) -> Result<Option<Item>, ItemStoreError> {
        Ok(None)
    }

    async fn apply_change(&self, _record: &TransactionRecord) -> Result<StockUpdate, ItemStoreError> {
        Ok(StockUpdate::Missing)
    }
}
