//! PostgreSQL-backed [`ItemStore`].
//!
//! A stock change is one database transaction holding a conditional
//! `UPDATE ... RETURNING` and, when a row came back, the `transactions` insert:
//!
//! ```sql
//! BEGIN;
//! UPDATE sweets SET quantity = quantity - $n, updated_at = now()
//! WHERE id = $id AND quantity >= $n
//! RETURNING *;
//! INSERT INTO transactions (...) VALUES (...);
//! COMMIT;
//! ```
//!
//! A failed insert rolls the update back. When no row comes back, a follow-up
//! read tells a missing item apart from one with too little (or too much)
//! stock. That read only shapes the rejection; it never feeds a write.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::AsyncConnection as _;
use diesel_async::scoped_futures::ScopedFutureExt as _;
use diesel_async::{AsyncPgConnection, RunQueryDsl};
use uuid::Uuid;

use crate::domain::ports::{ItemStore, ItemStoreError};
use crate::domain::{
    Item, ItemId, MAX_STORABLE_QUANTITY, Quantity, StockUpdate, TransactionKind,
    TransactionRecord,
};

use super::diesel_error_mapping::{map_diesel_error, map_pool_error};
use super::models::{NewTransactionRow, SweetRow};
use super::pool::{DbPool, PoolError};
use super::schema::{sweets, transactions};

/// Diesel implementation of the item store port.
///
/// Transaction records are written to the `transactions` table from inside the
/// same database transaction as the stock change.
#[derive(Clone)]
pub struct DieselItemStore {
    pool: DbPool,
}

impl DieselItemStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn pool_error(error: PoolError) -> ItemStoreError {
    map_pool_error(error, |message| ItemStoreError::connection(message))
}

fn diesel_error(error: diesel::result::Error) -> ItemStoreError {
    map_diesel_error(
        error,
        |message| ItemStoreError::query(message),
        |message| ItemStoreError::connection(message),
    )
}

fn to_item(row: SweetRow) -> Result<Item, ItemStoreError> {
    row.into_item().map_err(|message| ItemStoreError::query(message))
}

fn stored_amount(quantity: Quantity) -> Option<i32> {
    i32::try_from(quantity.get()).ok()
}

fn available(stock: i32) -> u32 {
    u32::try_from(stock).unwrap_or(0)
}

/// Explain why a guarded update matched no row, from the stock read afterwards.
fn classify_rejection(kind: TransactionKind, stock: Option<i32>) -> StockUpdate {
    match (kind, stock) {
        (_, None) => StockUpdate::Missing,
        (TransactionKind::Purchase, Some(stock)) => StockUpdate::Insufficient {
            available: available(stock),
        },
        (TransactionKind::Restock, Some(stock)) => StockUpdate::Overflow {
            available: available(stock),
        },
    }
}

async fn current_stock(
    conn: &mut AsyncPgConnection,
    id: Uuid,
) -> Result<Option<i32>, ItemStoreError> {
    sweets::table
        .filter(sweets::id.eq(id))
        .select(sweets::quantity)
        .first::<i32>(conn)
        .await
        .optional()
        .map_err(diesel_error)
}

/// Run the guarded update for `kind` and, when it matched, insert `entry`.
async fn update_and_record(
    conn: &mut AsyncPgConnection,
    kind: TransactionKind,
    item_id: Uuid,
    amount: i32,
    entry: &NewTransactionRow<'_>,
) -> QueryResult<Option<SweetRow>> {
    let ceiling = i32::try_from(MAX_STORABLE_QUANTITY).unwrap_or(i32::MAX);
    let updated = match kind {
        TransactionKind::Purchase => {
            diesel::update(sweets::table)
                .filter(sweets::id.eq(item_id))
                .filter(sweets::quantity.ge(amount))
                .set((
                    sweets::quantity.eq(sweets::quantity - amount),
                    sweets::updated_at.eq(diesel::dsl::now),
                ))
                .returning(SweetRow::as_returning())
                .get_result(conn)
                .await
                .optional()?
        }
        TransactionKind::Restock => {
            diesel::update(sweets::table)
                .filter(sweets::id.eq(item_id))
                .filter(sweets::quantity.le(ceiling - amount))
                .set((
                    sweets::quantity.eq(sweets::quantity + amount),
                    sweets::updated_at.eq(diesel::dsl::now),
                ))
                .returning(SweetRow::as_returning())
                .get_result(conn)
                .await
                .optional()?
        }
    };

    if updated.is_some() {
        diesel::insert_into(transactions::table)
            .values(entry)
            .execute(conn)
            .await?;
    }
    Ok(updated)
}

#[async_trait]
impl ItemStore for DieselItemStore {
    async fn find_by_id(&self, id: &ItemId) -> Result<Option<Item>, ItemStoreError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;
        sweets::table
            .filter(sweets::id.eq(id.as_uuid()))
            .select(SweetRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(diesel_error)?
            .map(to_item)
            .transpose()
    }

    async fn apply_change(&self, record: &TransactionRecord) -> Result<StockUpdate, ItemStoreError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;
        let kind = record.kind();
        let item_id = *record.item_id().as_uuid();

        let (Some(amount), Some(entry)) = (
            stored_amount(record.quantity()),
            NewTransactionRow::from_record(record),
        ) else {
            let stock = current_stock(&mut conn, item_id).await?;
            return Ok(classify_rejection(kind, stock));
        };

        let updated = conn
            .transaction(|conn| {
                async move { update_and_record(conn, kind, item_id, amount, &entry).await }
                    .scope_boxed()
            })
            .await
            .map_err(diesel_error)?;

        match updated {
            Some(row) => to_item(row).map(StockUpdate::Applied),
            None => {
                let stock = current_stock(&mut conn, item_id).await?;
                Ok(classify_rejection(kind, stock))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    //! Pure helpers only; the SQL runs against PostgreSQL in
    //! `tests/diesel_inventory_adapters.rs`.

    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(1, Some(1))]
    #[case(MAX_STORABLE_QUANTITY, Some(i32::MAX))]
    #[case(MAX_STORABLE_QUANTITY + 1, None)]
    fn stored_amount_respects_column_range(#[case] raw: u32, #[case] expected: Option<i32>) {
        let quantity = Quantity::new(raw).expect("positive quantity");
        assert_eq!(stored_amount(quantity), expected);
    }

    #[rstest]
    #[case(TransactionKind::Purchase, None, StockUpdate::Missing)]
    #[case(TransactionKind::Restock, None, StockUpdate::Missing)]
    #[case(TransactionKind::Purchase, Some(3), StockUpdate::Insufficient { available: 3 })]
    #[case(TransactionKind::Restock, Some(9), StockUpdate::Overflow { available: 9 })]
    fn unmatched_updates_are_classified_by_kind(
        #[case] kind: TransactionKind,
        #[case] stock: Option<i32>,
        #[case] expected: StockUpdate,
    ) {
        assert_eq!(classify_rejection(kind, stock), expected);
    }

    #[rstest]
    fn pool_failures_become_connection_errors() {
        let err = pool_error(PoolError::checkout("timed out"));
        assert_eq!(err, ItemStoreError::connection("timed out"));
    }
}
