//! Internal Diesel row structs.
//!
//! These types never leave the persistence layer. Adapters convert them to
//! and from domain types at the port boundary.

use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use crate::domain::{Item, ItemId, TransactionRecord};

use super::schema::{sweets, transactions};

/// Row read from the `sweets` table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = sweets)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct SweetRow {
    pub id: Uuid,
    pub name: String,
    pub category: String,
    pub price: f64,
    pub quantity: i32,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl SweetRow {
    /// Convert into the domain item, rejecting negative stock.
    pub fn into_item(self) -> Result<Item, String> {
        let quantity = u32::try_from(self.quantity)
            .map_err(|_| format!("sweet {} has negative quantity {}", self.id, self.quantity))?;
        Ok(Item {
            id: ItemId::from_uuid(self.id),
            name: self.name,
            category: self.category,
            price: self.price,
            quantity,
            description: self.description,
            image_url: self.image_url,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

/// Insertable transaction log entry.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = transactions)]
pub(crate) struct NewTransactionRow<'a> {
    pub id: Uuid,
    pub sweet_id: Uuid,
    pub user_id: Uuid,
    pub transaction_type: &'a str,
    pub quantity: i32,
    pub created_at: DateTime<Utc>,
}

impl<'a> NewTransactionRow<'a> {
    /// Build a row from a domain record.
    ///
    /// Returns `None` when the quantity does not fit the `INTEGER` column.
    pub fn from_record(record: &'a TransactionRecord) -> Option<Self> {
        let quantity = i32::try_from(record.quantity().get()).ok()?;
        Some(Self {
            id: *record.id().as_uuid(),
            sweet_id: *record.item_id().as_uuid(),
            user_id: *record.actor_id().as_uuid(),
            transaction_type: record.kind().as_str(),
            quantity,
            created_at: record.recorded_at(),
        })
    }
}
