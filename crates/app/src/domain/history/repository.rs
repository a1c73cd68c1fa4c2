//! Inventory History Repository

use jiff::Timestamp;
use sqlx::{FromRow, Row, Sqlite, Transaction, query_as, sqlite::SqliteRow};

use crate::{
    columns::{count_from_column, timestamp_from_column, timestamp_to_column},
    domain::{
        history::models::{ChangeType, HistoryEntryId, InventoryHistoryEntry, StockChange},
        products::models::ProductId,
    },
};

const RECORD_CHANGE_SQL: &str = include_str!("sql/record_change.sql");
const LIST_HISTORY_SQL: &str = include_str!("sql/list_history.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct SqliteHistoryRepository;

impl SqliteHistoryRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    /// Append an entry for `change`.
    ///
    /// Runs on the caller's transaction so the entry commits or rolls back
    /// together with the stock update that caused it.
    pub(crate) async fn record_change(
        &self,
        tx: &mut Transaction<'_, Sqlite>,
        change: &StockChange,
        now: Timestamp,
    ) -> Result<InventoryHistoryEntry, sqlx::Error> {
        query_as::<Sqlite, InventoryHistoryEntry>(RECORD_CHANGE_SQL)
            .bind(change.product_id().into_i64())
            .bind(i64::from(change.previous_stock()))
            .bind(i64::from(change.new_stock()))
            .bind(i64::from(change.change_amount()))
            .bind(change.change_type().as_str())
            .bind(change.note())
            .bind(timestamp_to_column(now))
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn list_history(
        &self,
        tx: &mut Transaction<'_, Sqlite>,
        product: ProductId,
    ) -> Result<Vec<InventoryHistoryEntry>, sqlx::Error> {
        query_as::<Sqlite, InventoryHistoryEntry>(LIST_HISTORY_SQL)
            .bind(product.into_i64())
            .fetch_all(&mut **tx)
            .await
    }
}

impl<'r> FromRow<'r, SqliteRow> for InventoryHistoryEntry {
    fn from_row(row: &'r SqliteRow) -> sqlx::Result<Self> {
        let change_type: String = row.try_get("change_type")?;

        let change_type =
            change_type
                .parse::<ChangeType>()
                .map_err(|e| sqlx::Error::ColumnDecode {
                    index: "change_type".to_string(),
                    source: Box::new(e),
                })?;

        Ok(Self {
            id: HistoryEntryId::from_i64(row.try_get("id")?),
            product_id: ProductId::from_i64(row.try_get("product_id")?),
            previous_stock: count_from_column(row, "previous_stock")?,
            new_stock: count_from_column(row, "new_stock")?,
            change_amount: count_from_column(row, "change_amount")?,
            change_type,
            notes: row.try_get("notes")?,
            created_at: timestamp_from_column(row, "created_at")?,
        })
    }
}
