//! Domain primitives, ports, and the inventory mutation core.
//!
//! Purpose: define strongly typed inventory entities and the services that
//! change them. Types are framework agnostic; inbound and outbound adapters
//! translate them at the edges.
//!
//! Public surface:
//! - Error / ErrorCode: transport-agnostic error payload.
//! - ActorContext / ActorId: who is calling and whether they may restock.
//! - BearerToken: credential presented by the caller.
//! - Item / ItemId / Quantity / TransactionRecord: inventory data.
//! - InventoryService: implementation of [`ports::InventoryCommand`].

pub mod actor;
pub mod credential;
pub mod error;
pub mod inventory;
mod inventory_service;
pub mod ports;
pub mod trace_id;

pub use self::actor::{ActorContext, ActorId, ActorValidationError};
pub use self::credential::{BearerToken, CredentialError};
pub use self::error::{Error, ErrorCode};
pub use self::inventory::{
    InventoryError, Item, ItemId, ItemIdValidationError, MAX_STORABLE_QUANTITY,
    ParseTransactionKindError, Quantity, StockUpdate, TransactionId, TransactionKind,
    TransactionRecord, validate_mutation,
};
pub use self::inventory_service::InventoryService;
pub use self::trace_id::{TRACE_ID_HEADER, TraceId, TraceIdParseError, TraceOrigin};

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use actix_web::HttpResponse;
/// use sweetshop::domain::{ApiResult, Error};
///
/// fn handler() -> ApiResult<HttpResponse> {
///     Err(Error::forbidden("nope"))
/// }
/// ```
pub type ApiResult<T> = Result<T, Error>;
