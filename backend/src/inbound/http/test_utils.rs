//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use chrono::Utc;
use mockable::DefaultClock;

use crate::domain::{ActorContext, ActorId, BearerToken, InventoryService, Item, ItemId};
use crate::inbound::http::state::HttpState;
use crate::outbound::memory::{InMemoryItemStore, InMemoryTransactionLog, StaticAuthorizationGate};

pub const ADMIN_TOKEN: &str = "admin-token";
pub const CUSTOMER_TOKEN: &str = "customer-token";

/// In-memory stores backing a [`HttpState`], kept so tests can inspect them.
pub struct TestShop {
    pub store: InMemoryItemStore,
    pub log: InMemoryTransactionLog,
    pub state: HttpState,
}

/// Gate recognising [`ADMIN_TOKEN`] and [`CUSTOMER_TOKEN`].
pub fn test_gate() -> StaticAuthorizationGate {
    let admin = BearerToken::new(ADMIN_TOKEN).expect("admin token");
    let customer = BearerToken::new(CUSTOMER_TOKEN).expect("customer token");
    StaticAuthorizationGate::new()
        .with_token(&admin, ActorContext::administrator(ActorId::random()))
        .with_token(&customer, ActorContext::customer(ActorId::random()))
}

/// Build a shop holding `items`, wired through the real inventory service.
pub fn test_shop(items: impl IntoIterator<Item = Item>) -> TestShop {
    let clock = Arc::new(DefaultClock);
    let log = InMemoryTransactionLog::new();
    let store = InMemoryItemStore::with_items(items, Arc::new(log.clone()), clock.clone());
    let service = InventoryService::new(Arc::new(store.clone()), clock);
    let state = HttpState::new(Arc::new(service), Arc::new(test_gate()));
    TestShop { store, log, state }
}

/// State with no items, for extractor-level tests.
pub fn test_state() -> HttpState {
    test_shop([]).state
}

/// Item with the given stock level.
pub fn sweet(quantity: u32) -> Item {
    Item::new(ItemId::random(), "Liquorice", "Chewy", 1.25, quantity, Utc::now())
}
