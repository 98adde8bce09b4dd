//! Domain ports defining the edges of the hexagon.
//!
//! Driven ports ([`ItemStore`], [`AuthorizationGate`]) describe what the
//! inventory core needs from storage and identity. [`TransactionLog`] is the
//! audit sink an item store appends to while it holds a stock change open.
//! The driving port [`InventoryCommand`] is what inbound adapters call. Each
//! driven port exposes a typed error so adapters map their failures into
//! predictable variants.

mod macros;
pub(crate) use macros::define_port_error;

mod authorization_gate;
mod inventory_command;
mod item_store;
mod transaction_log;

#[cfg(test)]
pub use authorization_gate::MockAuthorizationGate;
pub use authorization_gate::{
    AuthorizationGate, AuthorizationGateError, FixtureAuthorizationGate,
};
#[cfg(test)]
pub use inventory_command::MockInventoryCommand;
pub use inventory_command::{FixtureInventoryCommand, InventoryCommand};
#[cfg(test)]
pub use item_store::MockItemStore;
pub use item_store::{FixtureItemStore, ItemStore, ItemStoreError};
#[cfg(test)]
pub use transaction_log::MockTransactionLog;
pub use transaction_log::{FixtureTransactionLog, TransactionLog, TransactionLogError};
