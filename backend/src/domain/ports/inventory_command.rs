//! Driving port for stock mutations.
//!
//! HTTP handlers call [`InventoryCommand`] after resolving the caller. The raw
//! request quantity is passed through untouched so validation stays in the
//! core.

use async_trait::async_trait;

use crate::domain::{ActorContext, InventoryError, Item, ItemId};

/// Purchase and restock operations on catalogue stock.
///
/// Each successful call changes one item's quantity and appends exactly one
/// transaction record. A rejected call changes nothing.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait InventoryCommand: Send + Sync {
    /// Remove `quantity` units from stock on behalf of any authenticated actor.
    async fn purchase(
        &self,
        item_id: &ItemId,
        quantity: Option<i64>,
        actor: &ActorContext,
    ) -> Result<Item, InventoryError>;

    /// Add `quantity` units to stock. Administrators only.
    async fn restock(
        &self,
        item_id: &ItemId,
        quantity: Option<i64>,
        actor: &ActorContext,
    ) -> Result<Item, InventoryError>;
}

/// Command that knows no items.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureInventoryCommand;

#[async_trait]
impl InventoryCommand for FixtureInventoryCommand {
    async fn purchase(
        &self,
        _item_id: &ItemId,
        _quantity: Option<i64>,
        _actor: &ActorContext,
    ) -> Result<Item, InventoryError> {
        Err(InventoryError::NotFound)
    }

    async fn restock(
        &self,
        _item_id: &ItemId,
        _quantity: Option<i64>,
        _actor: &ActorContext,
    ) -> Result<Item, InventoryError> {
        Err(InventoryError::NotFound)
    }
}
