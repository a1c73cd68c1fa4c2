//! Inventory history service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    database::Db,
    domain::{
        history::{
            errors::HistoryServiceError, models::InventoryHistoryEntry,
            repository::SqliteHistoryRepository,
        },
        products::models::ProductId,
    },
};

#[derive(Debug, Clone)]
pub struct SqliteHistoryService {
    db: Db,
    repository: SqliteHistoryRepository,
}

impl SqliteHistoryService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: SqliteHistoryRepository::new(),
        }
    }
}

#[async_trait]
impl HistoryService for SqliteHistoryService {
    async fn product_history(
        &self,
        product: ProductId,
    ) -> Result<Vec<InventoryHistoryEntry>, HistoryServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let entries = self.repository.list_history(&mut tx, product).await?;

        tx.commit().await?;

        Ok(entries)
    }
}

#[automock]
#[async_trait]
pub trait HistoryService: Send + Sync {
    /// Stock changes for a product, newest first. Unknown products have none.
    async fn product_history(
        &self,
        product: ProductId,
    ) -> Result<Vec<InventoryHistoryEntry>, HistoryServiceError>;
}
