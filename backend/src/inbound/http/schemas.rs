//! OpenAPI schema definitions for domain types.
//!
//! Domain types stay framework agnostic by not deriving `ToSchema`. The
//! wrappers here mirror their serialised shape and exist only for the OpenAPI
//! document.

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::ErrorCode`].
#[derive(ToSchema)]
#[schema(as = crate::domain::ErrorCode)]
pub enum ErrorCodeSchema {
    /// The request is malformed or fails validation.
    #[schema(rename = "invalid_request")]
    InvalidRequest,
    /// Authentication failed or is missing.
    #[schema(rename = "unauthorized")]
    Unauthorized,
    /// Authenticated but not permitted to perform this action.
    #[schema(rename = "forbidden")]
    Forbidden,
    /// The requested resource does not exist.
    #[schema(rename = "not_found")]
    NotFound,
    /// A backing store is temporarily unreachable.
    #[schema(rename = "service_unavailable")]
    ServiceUnavailable,
    /// An unexpected error occurred on the server.
    #[schema(rename = "internal_error")]
    InternalError,
}

/// OpenAPI schema for [`crate::domain::Error`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Error)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ErrorSchema {
    /// Stable machine-readable error code.
    #[schema(example = "invalid_request")]
    code: ErrorCodeSchema,
    /// Human-readable message returned to clients.
    #[schema(example = "Insufficient quantity in stock")]
    message: String,
    /// Correlation identifier echoed in the `trace-id` header.
    #[schema(rename = "traceId", example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    trace_id: Option<String>,
    /// Supplementary details; `details.code` refines the error code.
    #[schema(example = json!({ "code": "insufficient_stock", "available": 5, "requested": 10 }))]
    details: Option<serde_json::Value>,
}

/// OpenAPI schema for [`crate::domain::Item`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Item)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ItemSchema {
    #[schema(example = "7d9f3c52-4c1e-4b8e-9d6a-0b2f5e3a1c44")]
    id: String,
    #[schema(example = "Toffee")]
    name: String,
    #[schema(example = "Chewy")]
    category: String,
    #[schema(example = 1.5)]
    price: f64,
    /// Units on hand after the mutation.
    #[schema(example = 25, minimum = 0)]
    quantity: u32,
    description: Option<String>,
    #[schema(rename = "imageUrl")]
    image_url: Option<String>,
    #[schema(rename = "createdAt", format = DateTime)]
    created_at: String,
    #[schema(rename = "updatedAt", format = DateTime)]
    updated_at: String,
}
