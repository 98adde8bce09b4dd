//! Behavioural tests for purchases and restocks over a real HTTP listener.
//!
//! The world owns a single-threaded Tokio runtime plus a `LocalSet` because
//! Actix uses `spawn_local` internally. Dropping the fixture stops the server
//! even if a step panics.

use std::cell::RefCell;
use std::net::TcpListener;
use std::rc::Rc;
use std::sync::Arc;

use actix_web::dev::ServerHandle;
use actix_web::http::header::AUTHORIZATION;
use actix_web::{HttpServer, web};
use awc::Client;
use chrono::Utc;
use mockable::{Clock, DefaultClock};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use serde_json::{Value, json};
use tokio::runtime::Runtime;
use tokio::task::LocalSet;

use sweetshop::domain::ports::ItemStore;
use sweetshop::domain::{
    ActorContext, ActorId, BearerToken, InventoryService, Item, ItemId, TransactionKind,
};
use sweetshop::inbound::http::health::HealthState;
use sweetshop::inbound::http::state::HttpState;
use sweetshop::outbound::memory::{
    InMemoryItemStore, InMemoryTransactionLog, StaticAuthorizationGate,
};
use sweetshop::server::{AppDependencies, build_app};

const ADMIN_TOKEN: &str = "bdd-admin";
const CUSTOMER_TOKEN: &str = "bdd-customer";

struct InventoryWorld {
    runtime: Runtime,
    local: LocalSet,
    base_url: String,
    server: Option<ServerHandle>,
    store: InMemoryItemStore,
    log: InMemoryTransactionLog,
    item_id: ItemId,
    last_status: Option<u16>,
    last_body: Option<Value>,
}

type SharedWorld = Rc<RefCell<InventoryWorld>>;

struct WorldFixture {
    world: SharedWorld,
}

impl WorldFixture {
    fn world(&self) -> SharedWorld {
        self.world.clone()
    }
}

impl Drop for WorldFixture {
    fn drop(&mut self) {
        let ctx = self.world.borrow();
        if let Some(server) = ctx.server.clone() {
            ctx.local.block_on(&ctx.runtime, async move {
                server.stop(true).await;
            });
        }
    }
}

fn token(raw: &str) -> BearerToken {
    BearerToken::new(raw).expect("fixture token")
}

fn spawn_server(http_state: HttpState) -> Result<(String, ServerHandle), String> {
    let listener = TcpListener::bind("127.0.0.1:0").map_err(|err| err.to_string())?;
    let addr = listener.local_addr().map_err(|err| err.to_string())?;
    let health_state = web::Data::new(HealthState::new());
    health_state.mark_ready();
    let http_state = web::Data::new(http_state);

    let server = HttpServer::new(move || {
        build_app(AppDependencies {
            health_state: health_state.clone(),
            http_state: http_state.clone(),
        })
    })
    .disable_signals()
    .workers(1)
    .listen(listener)
    .map_err(|err| err.to_string())?
    .run();

    let handle = server.handle();
    actix_web::rt::spawn(server);
    Ok((format!("http://{addr}"), handle))
}

#[fixture]
fn world() -> WorldFixture {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("tokio runtime");
    let clock: Arc<dyn Clock> = Arc::new(DefaultClock);
    let log = InMemoryTransactionLog::new();
    let store = InMemoryItemStore::new(Arc::new(log.clone()), clock.clone());
    let gate = StaticAuthorizationGate::new()
        .with_token(
            &token(ADMIN_TOKEN),
            ActorContext::administrator(ActorId::random()),
        )
        .with_token(
            &token(CUSTOMER_TOKEN),
            ActorContext::customer(ActorId::random()),
        );
    let service = InventoryService::new(Arc::new(store.clone()), clock);
    let http_state = HttpState::new(Arc::new(service), Arc::new(gate));

    WorldFixture {
        world: Rc::new(RefCell::new(InventoryWorld {
            runtime,
            local: LocalSet::new(),
            base_url: String::new(),
            server: None,
            store,
            log,
            item_id: ItemId::random(),
            last_status: None,
            last_body: None,
        })),
    }
    .started(http_state)
}

impl WorldFixture {
    fn started(self, http_state: HttpState) -> Self {
        {
            let mut ctx = self.world.borrow_mut();
            let (base_url, server) = ctx
                .local
                .block_on(&ctx.runtime, async { spawn_server(http_state) })
                .expect("server should start");
            ctx.base_url = base_url;
            ctx.server = Some(server);
        }
        self
    }
}

fn post_mutation(
    world: &WorldFixture,
    item_id: ItemId,
    action: &str,
    bearer: Option<&str>,
    body: Value,
) {
    let shared = world.world();
    let (status, body) = {
        let ctx = shared.borrow();
        let url = format!("{}/inventory/sweets/{item_id}/{action}", ctx.base_url);
        let bearer = bearer.map(|raw| format!("Bearer {raw}"));
        ctx.local.block_on(&ctx.runtime, async move {
            let mut request = Client::default().post(url);
            if let Some(value) = bearer {
                request = request.insert_header((AUTHORIZATION, value));
            }
            let mut response = request.send_json(&body).await.expect("request");
            let status = response.status().as_u16();
            let body: Value = response.json().await.expect("json body");
            (status, body)
        })
    };
    let mut ctx = shared.borrow_mut();
    ctx.last_status = Some(status);
    ctx.last_body = Some(body);
}

fn token_for(actor: &str) -> &'static str {
    match actor {
        "admin" => ADMIN_TOKEN,
        "customer" => CUSTOMER_TOKEN,
        other => panic!("unknown actor {other}"),
    }
}

#[given("a running inventory service with a sweet stocked at {quantity}")]
fn a_running_service_with_stock(world: &WorldFixture, quantity: u32) {
    let shared = world.world();
    let ctx = shared.borrow();
    let item = Item::new(ctx.item_id, "Liquorice", "Chewy", 1.25, quantity, Utc::now());
    ctx.local.block_on(&ctx.runtime, ctx.store.insert(item));
}

#[when("the {actor} purchases {quantity} units")]
fn actor_purchases(world: &WorldFixture, actor: String, quantity: i64) {
    let item_id = world.world().borrow().item_id;
    post_mutation(
        world,
        item_id,
        "purchase",
        Some(token_for(&actor)),
        json!({ "quantity": quantity }),
    );
}

#[when("the {actor} restocks {quantity} units")]
fn actor_restocks(world: &WorldFixture, actor: String, quantity: i64) {
    let item_id = world.world().borrow().item_id;
    post_mutation(
        world,
        item_id,
        "restock",
        Some(token_for(&actor)),
        json!({ "quantity": quantity }),
    );
}

#[when("an anonymous caller purchases {quantity} units")]
fn anonymous_purchase(world: &WorldFixture, quantity: i64) {
    let item_id = world.world().borrow().item_id;
    post_mutation(world, item_id, "purchase", None, json!({ "quantity": quantity }));
}

#[when("the admin restocks an unknown sweet")]
fn admin_restocks_unknown(world: &WorldFixture) {
    post_mutation(
        world,
        ItemId::random(),
        "restock",
        Some(ADMIN_TOKEN),
        json!({ "quantity": 1 }),
    );
}

#[then("the response status is {status}")]
fn the_response_status_is(world: &WorldFixture, status: u16) {
    assert_eq!(world.world().borrow().last_status, Some(status));
}

#[then("the error detail code is {code}")]
fn the_error_detail_code_is(world: &WorldFixture, code: String) {
    let shared = world.world();
    let ctx = shared.borrow();
    let body = ctx.last_body.as_ref().expect("response body");
    assert_eq!(body["details"]["code"], Value::String(code));
    assert!(body.get("traceId").is_some(), "error should carry a trace id");
}

#[then("the sweet has {quantity} units in stock")]
fn the_sweet_has_stock(world: &WorldFixture, quantity: u32) {
    let shared = world.world();
    let ctx = shared.borrow();
    let stored = ctx
        .local
        .block_on(&ctx.runtime, ctx.store.find_by_id(&ctx.item_id))
        .expect("lookup")
        .expect("sweet present");
    assert_eq!(stored.quantity, quantity);
}

#[then("the last transaction is a {kind} of {quantity} units")]
fn the_last_transaction_is(world: &WorldFixture, kind: TransactionKind, quantity: u32) {
    let shared = world.world();
    let ctx = shared.borrow();
    let records = ctx.log.records();
    let last = records.last().expect("at least one record");
    assert_eq!(last.kind(), kind);
    assert_eq!(last.quantity().get(), quantity);
    assert_eq!(last.item_id(), ctx.item_id);
}

#[then("the transaction log holds {count} entries")]
fn the_log_holds(world: &WorldFixture, count: usize) {
    assert_eq!(world.world().borrow().log.records().len(), count);
}

#[scenario(
    path = "tests/features/inventory_mutations.feature",
    name = "Purchases and restocks keep stock and the audit trail consistent"
)]
fn purchases_and_restocks(world: WorldFixture) {
    drop(world);
}

#[scenario(
    path = "tests/features/inventory_mutations.feature",
    name = "Requests without a credential are rejected before any change"
)]
fn anonymous_requests(world: WorldFixture) {
    drop(world);
}

#[scenario(
    path = "tests/features/inventory_mutations.feature",
    name = "Non-positive quantities are rejected without side effects"
)]
fn non_positive_quantities(world: WorldFixture) {
    drop(world);
}

#[scenario(
    path = "tests/features/inventory_mutations.feature",
    name = "Unknown sweets are reported as not found"
)]
fn unknown_sweets(world: WorldFixture) {
    drop(world);
}
