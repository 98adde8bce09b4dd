//! Builders wiring domain ports to adapters for the HTTP state.

use std::sync::Arc;

use mockable::{Clock, DefaultClock};
use tracing::{info, warn};

use crate::domain::InventoryService;
use crate::domain::ports::{AuthorizationGate, InventoryCommand};
use crate::inbound::http::state::HttpState;
use crate::outbound::memory::{InMemoryItemStore, InMemoryTransactionLog, StaticAuthorizationGate};
use crate::outbound::persistence::{DbPool, DieselAuthorizationGate, DieselItemStore};

use super::ServerConfig;

fn diesel_ports(
    pool: &DbPool,
    clock: Arc<dyn Clock>,
) -> (Arc<dyn InventoryCommand>, Arc<dyn AuthorizationGate>) {
    let store = DieselItemStore::new(pool.clone());
    let service = InventoryService::new(Arc::new(store), clock.clone());
    let gate = DieselAuthorizationGate::new(pool.clone(), clock);
    (Arc::new(service), Arc::new(gate))
}

fn in_memory_ports(
    dev_tokens_enabled: bool,
    clock: Arc<dyn Clock>,
) -> (Arc<dyn InventoryCommand>, Arc<dyn AuthorizationGate>) {
    warn!(
        "in-memory item store starts empty and cannot be seeded at runtime; \
         every mutation reports item_not_found until a database is configured"
    );
    let store = InMemoryItemStore::new(Arc::new(InMemoryTransactionLog::new()), clock.clone());
    let service = InventoryService::new(Arc::new(store), clock);
    let gate = if dev_tokens_enabled {
        warn!("development tokens accepted; do not expose this instance");
        StaticAuthorizationGate::development()
    } else {
        StaticAuthorizationGate::new()
    };
    (Arc::new(service), Arc::new(gate))
}

/// Build handler state from the configured adapters.
///
/// Uses the Diesel adapters when a pool is configured and the in-memory
/// adapters otherwise.
pub(crate) fn build_http_state(config: &ServerConfig) -> HttpState {
    let clock: Arc<dyn Clock> = Arc::new(DefaultClock);
    let (inventory, authorization) = match &config.db_pool {
        Some(pool) => {
            info!("using PostgreSQL inventory adapters");
            diesel_ports(pool, clock)
        }
        None => {
            info!("no database configured; using in-memory inventory adapters");
            in_memory_ports(config.dev_tokens_enabled, clock)
        }
    };
    HttpState::new(inventory, authorization)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    use crate::domain::{BearerToken, ItemId};
    use crate::outbound::memory::DEV_ADMIN_TOKEN;

    fn memory_config(dev_tokens: bool) -> ServerConfig {
        ServerConfig::new("127.0.0.1:0".parse().expect("address")).with_dev_tokens(dev_tokens)
    }

    #[rstest]
    #[case(true, true)]
    #[case(false, false)]
    #[tokio::test]
    async fn dev_tokens_follow_configuration(#[case] enabled: bool, #[case] accepted: bool) {
        let state = build_http_state(&memory_config(enabled));
        let token = BearerToken::new(DEV_ADMIN_TOKEN).expect("token");

        let resolved = state.authorization.resolve(&token).await;

        assert_eq!(resolved.is_ok(), accepted);
    }

    #[rstest]
    #[tokio::test]
    async fn in_memory_store_starts_empty() {
        let state = build_http_state(&memory_config(true));
        let token = BearerToken::new(DEV_ADMIN_TOKEN).expect("token");
        let actor = state.authorization.resolve(&token).await.expect("admin");

        let result = state
            .inventory
            .restock(&ItemId::random(), Some(1), &actor)
            .await;

        assert_eq!(result, Err(crate::domain::InventoryError::NotFound));
    }
}
