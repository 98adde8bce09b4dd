//! Failure taxonomy of the inventory core.

use serde_json::json;

use crate::domain::{CredentialError, Error};

/// Why a purchase or restock was refused.
///
/// Every variant except [`InventoryError::StoreFailure`] is raised before any
/// write reaches the stores.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InventoryError {
    #[error("Quantity must be greater than 0")]
    InvalidQuantity,
    #[error("Sweet not found")]
    NotFound,
    #[error("Insufficient quantity in stock")]
    InsufficientStock { available: u32, requested: u32 },
    #[error("Restock would exceed the maximum storable quantity")]
    StockOverflow { available: u32, requested: u32 },
    #[error("Admin access required")]
    Forbidden,
    #[error("{0}")]
    Unauthenticated(CredentialError),
    /// A collaborator failed. `unavailable` marks connection-level failures.
    #[error("inventory store failure: {message}")]
    StoreFailure { message: String, unavailable: bool },
}

impl InventoryError {
    /// Stable detail code surfaced to clients alongside the error code.
    pub fn detail_code(&self) -> Option<&'static str> {
        match self {
            Self::InvalidQuantity => Some("invalid_quantity"),
            Self::NotFound => Some("item_not_found"),
            Self::InsufficientStock { .. } => Some("insufficient_stock"),
            Self::StockOverflow { .. } => Some("stock_overflow"),
            Self::Forbidden => Some("admin_required"),
            Self::Unauthenticated(reason) => Some(reason.reason_code()),
            Self::StoreFailure { .. } => None,
        }
    }

    pub(crate) fn store_unavailable(message: impl Into<String>) -> Self {
        Self::StoreFailure {
            message: message.into(),
            unavailable: true,
        }
    }

    pub(crate) fn store_query(message: impl Into<String>) -> Self {
        Self::StoreFailure {
            message: message.into(),
            unavailable: false,
        }
    }
}

impl From<InventoryError> for Error {
    fn from(value: InventoryError) -> Self {
        let message = value.to_string();
        let code = value.detail_code();
        match value {
            InventoryError::InvalidQuantity => {
                Error::invalid_request(message).with_details(json!({ "code": code }))
            }
            InventoryError::NotFound => {
                Error::not_found(message).with_details(json!({ "code": code }))
            }
            InventoryError::InsufficientStock {
                available,
                requested,
            }
            | InventoryError::StockOverflow {
                available,
                requested,
            } => Error::invalid_request(message).with_details(json!({
                "code": code,
                "available": available,
                "requested": requested,
            })),
            InventoryError::Forbidden => {
                Error::forbidden(message).with_details(json!({ "code": code }))
            }
            InventoryError::Unauthenticated(_) => {
                Error::unauthorized(message).with_details(json!({ "code": code }))
            }
            InventoryError::StoreFailure {
                unavailable: true, ..
            } => Error::service_unavailable("Inventory store unavailable"),
            InventoryError::StoreFailure { message, .. } => Error::internal(message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorCode;
    use rstest::rstest;

    #[rstest]
    #[case(InventoryError::InvalidQuantity, ErrorCode::InvalidRequest, "Quantity must be greater than 0", "invalid_quantity")]
    #[case(InventoryError::NotFound, ErrorCode::NotFound, "Sweet not found", "item_not_found")]
    #[case(
        InventoryError::InsufficientStock { available: 5, requested: 10 },
        ErrorCode::InvalidRequest,
        "Insufficient quantity in stock",
        "insufficient_stock"
    )]
    #[case(
        InventoryError::StockOverflow { available: 5, requested: u32::MAX },
        ErrorCode::InvalidRequest,
        "Restock would exceed the maximum storable quantity",
        "stock_overflow"
    )]
    #[case(InventoryError::Forbidden, ErrorCode::Forbidden, "Admin access required", "admin_required")]
    #[case(
        InventoryError::Unauthenticated(CredentialError::Missing),
        ErrorCode::Unauthorized,
        "Authorization required",
        "missing_credential"
    )]
    #[case(
        InventoryError::Unauthenticated(CredentialError::Rejected),
        ErrorCode::Unauthorized,
        "Invalid token",
        "invalid_credential"
    )]
    fn maps_to_error_envelope(
        #[case] source: InventoryError,
        #[case] code: ErrorCode,
        #[case] message: &str,
        #[case] detail: &str,
    ) {
        let error = Error::from(source);
        assert_eq!(error.code(), code);
        assert_eq!(error.message(), message);
        let details = error.details().expect("details present");
        assert_eq!(details["code"], detail);
    }

    #[rstest]
    fn insufficient_stock_reports_amounts() {
        let error = Error::from(InventoryError::InsufficientStock {
            available: 5,
            requested: 10,
        });
        let details = error.details().expect("details present");
        assert_eq!(details["available"], 5);
        assert_eq!(details["requested"], 10);
    }

    #[rstest]
    #[case(true, ErrorCode::ServiceUnavailable)]
    #[case(false, ErrorCode::InternalError)]
    fn store_failures_map_by_availability(#[case] unavailable: bool, #[case] code: ErrorCode) {
        let error = Error::from(InventoryError::StoreFailure {
            message: "connection refused".into(),
            unavailable,
        });
        assert_eq!(error.code(), code);
        assert!(error.details().is_none());
    }
}
