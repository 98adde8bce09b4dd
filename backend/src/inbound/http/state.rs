//! Shared HTTP adapter state.
//!
//! Handlers receive this through `web::Data` and depend only on domain ports,
//! so they stay testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{AuthorizationGate, InventoryCommand};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub inventory: Arc<dyn InventoryCommand>,
    pub authorization: Arc<dyn AuthorizationGate>,
}

impl HttpState {
    pub fn new(
        inventory: Arc<dyn InventoryCommand>,
        authorization: Arc<dyn AuthorizationGate>,
    ) -> Self {
        Self {
            inventory,
            authorization,
        }
    }
}
