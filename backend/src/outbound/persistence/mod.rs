//! PostgreSQL adapters built on Diesel.
//!
//! Adapters translate between Diesel rows and domain types and carry no
//! business rules. Row structs (`models`) and table definitions (`schema`)
//! stay private to this module. Connections come from a `bb8` pool of
//! `diesel-async` connections; every failure is mapped to the owning port's
//! error type.
//!
//! # Example
//!
//! ```ignore
//! use sweetshop::outbound::persistence::{DbPool, DieselItemStore, PoolConfig};
//!
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/sweets")).await?;
//! let store = DieselItemStore::new(pool);
//! ```

mod diesel_authorization_gate;
mod diesel_error_mapping;
mod diesel_item_store;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_authorization_gate::DieselAuthorizationGate;
pub use diesel_item_store::DieselItemStore;
pub use migrations::{MIGRATIONS, MigrationError, run_pending_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};
