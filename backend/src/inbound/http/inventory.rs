//! Inventory mutation HTTP handlers.
//!
//! ```text
//! POST /inventory/sweets/{item_id}/purchase
//! POST /inventory/sweets/{item_id}/restock
//! ```

use actix_web::{post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{
    ActorContext, Error, InventoryError, Item, ItemId, TransactionKind, validate_mutation,
};
use crate::inbound::http::ApiResult;
use crate::inbound::http::actor::AuthenticatedActor;
use crate::inbound::http::schemas::{ErrorSchema, ItemSchema};
use crate::inbound::http::state::HttpState;

/// Request body shared by purchase and restock.
///
/// `quantity` stays optional and signed here; the domain rejects missing,
/// zero, and negative values with a single error.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct StockChangeRequest {
    #[schema(example = 5)]
    pub quantity: Option<i64>,
}

/// Confirmation returned after a successful mutation.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StockChangeResponse {
    #[schema(example = "Purchase successful")]
    pub message: String,
    #[schema(value_type = ItemSchema)]
    pub item: Item,
}

impl StockChangeResponse {
    fn new(message: &str, item: Item) -> Self {
        Self {
            message: message.to_owned(),
            item,
        }
    }
}

/// Unwrap the JSON body extracted for a mutation.
///
/// A restock from a non-administrator is forbidden whatever its body holds, so
/// that rejection outranks a malformed payload. Other body failures keep the
/// envelope built by [`json_error_handler`](crate::inbound::http::json_error_handler).
fn accept_body(
    payload: Result<web::Json<StockChangeRequest>, actix_web::Error>,
    kind: TransactionKind,
    actor: &ActorContext,
) -> Result<StockChangeRequest, Error> {
    match payload {
        Ok(body) => Ok(body.into_inner()),
        Err(_) if kind == TransactionKind::Restock && !actor.is_admin() => {
            Err(InventoryError::Forbidden.into())
        }
        Err(body_error) => Err(body_error
            .as_error::<Error>()
            .cloned()
            .unwrap_or_else(|| Error::invalid_request("Invalid request body"))),
    }
}

/// Resolve the path segment to an item id.
///
/// An unparseable id names no item, but the pre-store checks still run first
/// so callers see the same precedence as for a well-formed unknown id.
fn resolve_item_id(
    raw: &str,
    kind: TransactionKind,
    quantity: Option<i64>,
    actor: &ActorContext,
) -> Result<ItemId, Error> {
    ItemId::new(raw).or_else(|_| {
        validate_mutation(kind, quantity, actor)?;
        Err(InventoryError::NotFound.into())
    })
}

/// Buy units of an item, decrementing its stock.
#[utoipa::path(
    post,
    path = "/inventory/sweets/{item_id}/purchase",
    description = "Decrement stock for any authenticated actor and record a purchase.",
    params(("item_id" = String, Path, description = "Item identifier (UUID)")),
    request_body = StockChangeRequest,
    responses(
        (status = 200, description = "Purchase applied", body = StockChangeResponse),
        (status = 400, description = "Invalid quantity, insufficient stock, or malformed body", body = ErrorSchema),
        (status = 401, description = "Missing or invalid credential", body = ErrorSchema),
        (status = 404, description = "Item not found", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema),
        (status = 503, description = "Store unavailable", body = ErrorSchema)
    ),
    tags = ["inventory"],
    operation_id = "purchaseSweet"
)]
#[post("/inventory/sweets/{item_id}/purchase")]
pub async fn purchase(
    state: web::Data<HttpState>,
    actor: AuthenticatedActor,
    path: web::Path<String>,
    payload: Result<web::Json<StockChangeRequest>, actix_web::Error>,
) -> ApiResult<web::Json<StockChangeResponse>> {
    let quantity = accept_body(payload, TransactionKind::Purchase, actor.context())?.quantity;
    let item_id = resolve_item_id(&path, TransactionKind::Purchase, quantity, actor.context())?;
    let item = state
        .inventory
        .purchase(&item_id, quantity, actor.context())
        .await?;
    Ok(web::Json(StockChangeResponse::new("Purchase successful", item)))
}

/// Add units to an item's stock. Administrators only.
#[utoipa::path(
    post,
    path = "/inventory/sweets/{item_id}/restock",
    description = "Increment stock and record a restock. Requires an administrator.",
    params(("item_id" = String, Path, description = "Item identifier (UUID)")),
    request_body = StockChangeRequest,
    responses(
        (status = 200, description = "Restock applied", body = StockChangeResponse),
        (status = 400, description = "Invalid quantity, overflow, or malformed body", body = ErrorSchema),
        (status = 401, description = "Missing or invalid credential", body = ErrorSchema),
        (status = 403, description = "Administrator rights required; checked before the body", body = ErrorSchema),
        (status = 404, description = "Item not found", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema),
        (status = 503, description = "Store unavailable", body = ErrorSchema)
    ),
    tags = ["inventory"],
    operation_id = "restockSweet"
)]
#[post("/inventory/sweets/{item_id}/restock")]
pub async fn restock(
    state: web::Data<HttpState>,
    actor: AuthenticatedActor,
    path: web::Path<String>,
    payload: Result<web::Json<StockChangeRequest>, actix_web::Error>,
) -> ApiResult<web::Json<StockChangeResponse>> {
    let quantity = accept_body(payload, TransactionKind::Restock, actor.context())?.quantity;
    let item_id = resolve_item_id(&path, TransactionKind::Restock, quantity, actor.context())?;
    let item = state
        .inventory
        .restock(&item_id, quantity, actor.context())
        .await?;
    Ok(web::Json(StockChangeResponse::new("Restock successful", item)))
}
