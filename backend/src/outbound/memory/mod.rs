//! In-process adapters for development and tests.
//!
//! Each conditional stock change, together with its log append, happens under
//! a single lock acquisition, so concurrent callers observe the same atomicity
//! as the PostgreSQL transaction provides.

mod authorization_gate;
mod item_store;
mod transaction_log;

pub use authorization_gate::{DEV_ADMIN_TOKEN, DEV_CUSTOMER_TOKEN, StaticAuthorizationGate};
pub use item_store::InMemoryItemStore;
pub use transaction_log::InMemoryTransactionLog;
