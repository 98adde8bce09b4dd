//! HTTP inbound adapter exposing the inventory endpoints.

pub mod actor;
pub mod error;
pub mod health;
pub mod inventory;
pub mod schemas;
pub mod state;
#[cfg(test)]
pub mod test_utils;

pub use error::{ApiResult, json_error_handler};
