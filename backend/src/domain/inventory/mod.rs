//! Inventory types: items, validated quantities, and transaction records.
//!
//! Purpose: model the stock-bearing side of the catalogue. The core mutates
//! only `Item::quantity`; every successful mutation yields one
//! [`TransactionRecord`].

mod error;
mod item;
mod quantity;
mod transaction;

pub use self::error::InventoryError;
pub use self::item::{Item, ItemId, ItemIdValidationError};
pub use self::quantity::Quantity;
pub use self::transaction::{
    ParseTransactionKindError, TransactionId, TransactionKind, TransactionRecord,
};

/// Outcome of an atomic conditional quantity change.
///
/// Stores report why a change was not applied instead of failing, so the core
/// can map each case to its own rejection.
#[derive(Debug, Clone, PartialEq)]
pub enum StockUpdate {
    /// The change was applied; carries the item as stored afterwards.
    Applied(Item),
    /// No item has the requested id.
    Missing,
    /// A decrement would drop below zero.
    Insufficient { available: u32 },
    /// An increment would exceed the storable maximum.
    Overflow { available: u32 },
}

/// Largest quantity the durable store can hold.
pub const MAX_STORABLE_QUANTITY: u32 = i32::MAX as u32;

/// Checks every mutation passes before touching a store.
///
/// Restocks require an administrator; the admin check runs before quantity
/// validation.
///
/// # Examples
/// ```
/// use sweetshop::domain::{
///     ActorContext, ActorId, InventoryError, TransactionKind, validate_mutation,
/// };
///
/// let customer = ActorContext::customer(ActorId::random());
/// assert_eq!(
///     validate_mutation(TransactionKind::Restock, Some(0), &customer),
///     Err(InventoryError::Forbidden)
/// );
/// assert_eq!(
///     validate_mutation(TransactionKind::Purchase, Some(3), &customer).map(|q| q.get()),
///     Ok(3)
/// );
/// ```
pub fn validate_mutation(
    kind: TransactionKind,
    raw_quantity: Option<i64>,
    actor: &crate::domain::ActorContext,
) -> Result<Quantity, InventoryError> {
    if kind == TransactionKind::Restock && !actor.is_admin() {
        return Err(InventoryError::Forbidden);
    }
    Quantity::try_from_raw(raw_quantity)
}
