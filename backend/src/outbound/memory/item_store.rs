//! Map-backed [`ItemStore`].
//!
//! The map sits behind an async mutex that stays held while the record is
//! appended, so the quantity is written only after the log accepted the
//! record and no other change can interleave.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use tokio::sync::Mutex;

use crate::domain::ports::{ItemStore, ItemStoreError, TransactionLog};
use crate::domain::{
    Item, ItemId, MAX_STORABLE_QUANTITY, StockUpdate, TransactionKind, TransactionRecord,
};

/// Item store keeping every item in memory and recording changes in `log`.
#[derive(Clone)]
pub struct InMemoryItemStore {
    items: Arc<Mutex<HashMap<ItemId, Item>>>,
    log: Arc<dyn TransactionLog>,
    clock: Arc<dyn Clock>,
}

impl InMemoryItemStore {
    /// Create an empty store.
    pub fn new(log: Arc<dyn TransactionLog>, clock: Arc<dyn Clock>) -> Self {
        Self::with_items([], log, clock)
    }

    /// Create a store seeded with `items`.
    pub fn with_items(
        items: impl IntoIterator<Item = Item>,
        log: Arc<dyn TransactionLog>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let items = items.into_iter().map(|item| (item.id, item)).collect();
        Self {
            items: Arc::new(Mutex::new(items)),
            log,
            clock,
        }
    }

    /// Insert or replace an item.
    pub async fn insert(&self, item: Item) {
        self.items.lock().await.insert(item.id, item);
    }
}

/// Stock level after `record` is applied to `available`, or the rejection.
fn next_quantity(available: u32, record: &TransactionRecord) -> Result<u32, StockUpdate> {
    let amount = record.quantity().get();
    match record.kind() {
        TransactionKind::Purchase => available
            .checked_sub(amount)
            .ok_or(StockUpdate::Insufficient { available }),
        TransactionKind::Restock => available
            .checked_add(amount)
            .filter(|next| *next <= MAX_STORABLE_QUANTITY)
            .ok_or(StockUpdate::Overflow { available }),
    }
}

#[async_trait]
impl ItemStore for InMemoryItemStore {
    async fn find_by_id(&self, id: &ItemId) -> Result<Option<Item>, ItemStoreError> {
        Ok(self.items.lock().await.get(id).cloned())
    }

    async fn apply_change(&self, record: &TransactionRecord) -> Result<StockUpdate, ItemStoreError> {
        let mut items = self.items.lock().await;
        let Some(item) = items.get_mut(&record.item_id()) else {
            return Ok(StockUpdate::Missing);
        };
        let next = match next_quantity(item.quantity, record) {
            Ok(next) => next,
            Err(rejection) => return Ok(rejection),
        };

        self.log.append(record).await?;
        item.quantity = next;
        item.updated_at = self.clock.utc();
        Ok(StockUpdate::Applied(item.clone()))
    }
}
