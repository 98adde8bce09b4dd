//! Audit records appended for every stock mutation.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use super::{ItemId, Quantity};
use crate::domain::ActorId;

/// Direction of a stock mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionKind {
    Purchase,
    Restock,
}

impl TransactionKind {
    /// Stable lowercase label used in storage and log fields.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Purchase => "purchase",
            Self::Restock => "restock",
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown [`TransactionKind`] label.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown transaction kind: {0}")]
pub struct ParseTransactionKindError(pub String);

impl FromStr for TransactionKind {
    type Err = ParseTransactionKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "purchase" => Ok(Self::Purchase),
            "restock" => Ok(Self::Restock),
            other => Err(ParseTransactionKindError(other.to_owned())),
        }
    }
}

/// Identifier of an appended transaction record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct TransactionId(Uuid);

impl TransactionId {
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Immutable audit entry describing one successful mutation.
///
/// # Examples
/// ```
/// use chrono::Utc;
/// use sweetshop::domain::{ActorId, ItemId, Quantity, TransactionKind, TransactionRecord};
///
/// let quantity = Quantity::new(5).unwrap();
/// let record = TransactionRecord::new(
///     ItemId::random(),
///     ActorId::random(),
///     TransactionKind::Purchase,
///     quantity,
///     Utc::now(),
/// );
/// assert_eq!(record.kind(), TransactionKind::Purchase);
/// assert_eq!(record.quantity(), quantity);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionRecord {
    id: TransactionId,
    item_id: ItemId,
    actor_id: ActorId,
    kind: TransactionKind,
    quantity: Quantity,
    recorded_at: DateTime<Utc>,
}

impl TransactionRecord {
    /// Create a record with a freshly generated identifier.
    pub fn new(
        item_id: ItemId,
        actor_id: ActorId,
        kind: TransactionKind,
        quantity: Quantity,
        recorded_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: TransactionId::random(),
            item_id,
            actor_id,
            kind,
            quantity,
            recorded_at,
        }
    }

    pub fn id(&self) -> TransactionId {
        self.id
    }

    pub fn item_id(&self) -> ItemId {
        self.item_id
    }

    pub fn actor_id(&self) -> ActorId {
        self.actor_id
    }

    pub fn kind(&self) -> TransactionKind {
        self.kind
    }

    pub fn quantity(&self) -> Quantity {
        self.quantity
    }

    pub fn recorded_at(&self) -> DateTime<Utc> {
        self.recorded_at
    }
}
