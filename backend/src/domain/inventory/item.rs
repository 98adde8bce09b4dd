//! Catalogue item as seen by the inventory core.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Validation errors returned by [`ItemId::new`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ItemIdValidationError {
    #[error("item id must not be empty")]
    Empty,
    #[error("item id must be a valid UUID")]
    Invalid,
}

/// Stable identifier of a catalogue item.
///
/// # Examples
/// ```
/// use sweetshop::domain::ItemId;
///
/// let id = ItemId::new("7d9f3c52-4c1e-4b8e-9d6a-0b2f5e3a1c44").unwrap();
/// assert_eq!(id.to_string(), "7d9f3c52-4c1e-4b8e-9d6a-0b2f5e3a1c44");
/// assert!(ItemId::new("sweet-42").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(Uuid);

impl ItemId {
    /// Parse an identifier from its textual UUID form.
    pub fn new(id: impl AsRef<str>) -> Result<Self, ItemIdValidationError> {
        let raw = id.as_ref();
        if raw.trim().is_empty() {
            return Err(ItemIdValidationError::Empty);
        }
        Uuid::parse_str(raw)
            .map(Self)
            .map_err(|_| ItemIdValidationError::Invalid)
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A sellable item and its stock level.
///
/// The inventory core only ever changes `quantity`; the remaining fields are
/// owned by catalogue management and carried through unchanged. Stores bump
/// `updated_at` whenever the quantity moves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub category: String,
    pub price: f64,
    /// Units on hand. Never negative.
    pub quantity: u32,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Item {
    /// Build an item with empty optional fields, timestamped at `now`.
    ///
    /// # Examples
    /// ```
    /// use chrono::Utc;
    /// use sweetshop::domain::{Item, ItemId};
    ///
    /// let item = Item::new(ItemId::random(), "Toffee", "Chewy", 1.5, 10, Utc::now());
    /// assert_eq!(item.quantity, 10);
    /// assert_eq!(item.created_at, item.updated_at);
    /// ```
    pub fn new(
        id: ItemId,
        name: impl Into<String>,
        category: impl Into<String>,
        price: f64,
        quantity: u32,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            category: category.into(),
            price,
            quantity,
            description: None,
            image_url: None,
            created_at: now,
            updated_at: now,
        }
    }
}
