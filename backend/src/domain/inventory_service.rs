//! Inventory mutation core.
//!
//! [`InventoryService`] implements [`InventoryCommand`]. Every call follows the
//! same shape: authorise, validate, then hand the item store one
//! [`TransactionRecord`] to apply. The store changes the stock and appends the
//! record atomically, so a mutation without its audit record is never
//! observable. Validation failures never reach the store.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use tracing::{Instrument, debug, error, info, info_span, warn};

use crate::domain::ports::{InventoryCommand, ItemStore, ItemStoreError};
use crate::domain::{
    ActorContext, InventoryError, Item, ItemId, StockUpdate, TransactionKind, TransactionRecord,
    validate_mutation,
};

/// Domain service applying purchases and restocks.
#[derive(Clone)]
pub struct InventoryService<S> {
    item_store: Arc<S>,
    clock: Arc<dyn Clock>,
}

impl<S> InventoryService<S> {
    /// Create a service over the given store.
    pub fn new(item_store: Arc<S>, clock: Arc<dyn Clock>) -> Self {
        Self { item_store, clock }
    }
}

impl<S> InventoryService<S>
where
    S: ItemStore,
{
    async fn mutate(
        &self,
        kind: TransactionKind,
        item_id: &ItemId,
        raw_quantity: Option<i64>,
        actor: &ActorContext,
    ) -> Result<Item, InventoryError> {
        let quantity = validate_mutation(kind, raw_quantity, actor).inspect_err(|err| {
            debug!(reason = %err, "mutation rejected before reaching the store");
        })?;

        let record = TransactionRecord::new(
            *item_id,
            actor.actor_id(),
            kind,
            quantity,
            self.clock.utc(),
        );
        let update = self
            .item_store
            .apply_change(&record)
            .await
            .map_err(map_store_error)?;

        match update {
            StockUpdate::Applied(item) => {
                info!(
                    transaction_id = %record.id(),
                    stock = item.quantity,
                    "stock mutation applied"
                );
                Ok(item)
            }
            StockUpdate::Missing => {
                debug!("item not found");
                Err(InventoryError::NotFound)
            }
            StockUpdate::Insufficient { available } if kind == TransactionKind::Purchase => {
                info!(available, "insufficient stock");
                Err(InventoryError::InsufficientStock {
                    available,
                    requested: quantity.get(),
                })
            }
            StockUpdate::Overflow { available } if kind == TransactionKind::Restock => {
                info!(available, "restock would overflow stored quantity");
                Err(InventoryError::StockOverflow {
                    available,
                    requested: quantity.get(),
                })
            }
            other => {
                error!(?other, "item store returned an outcome that does not match the mutation");
                Err(InventoryError::store_query(format!(
                    "unexpected {kind} outcome from item store"
                )))
            }
        }
    }

    async fn traced(
        &self,
        kind: TransactionKind,
        item_id: &ItemId,
        raw_quantity: Option<i64>,
        actor: &ActorContext,
    ) -> Result<Item, InventoryError> {
        let span = info_span!(
            "inventory_mutation",
            %kind,
            %item_id,
            actor_id = %actor.actor_id(),
            quantity = raw_quantity,
        );
        self.mutate(kind, item_id, raw_quantity, actor)
            .instrument(span)
            .await
    }
}

#[async_trait]
impl<S> InventoryCommand for InventoryService<S>
where
    S: ItemStore,
{
    async fn purchase(
        &self,
        item_id: &ItemId,
        quantity: Option<i64>,
        actor: &ActorContext,
    ) -> Result<Item, InventoryError> {
        self.traced(TransactionKind::Purchase, item_id, quantity, actor)
            .await
    }

    async fn restock(
        &self,
        item_id: &ItemId,
        quantity: Option<i64>,
        actor: &ActorContext,
    ) -> Result<Item, InventoryError> {
        self.traced(TransactionKind::Restock, item_id, quantity, actor)
            .await
    }
}

fn map_store_error(error: ItemStoreError) -> InventoryError {
    warn!(error = %error, "item store failed; no stock change recorded");
    match error {
        ItemStoreError::Connection { message } => InventoryError::store_unavailable(message),
        ItemStoreError::Query { message } => InventoryError::store_query(message),
    }
}

#[cfg(test)]
#[path = "inventory_service_tests.rs"]
mod tests;
