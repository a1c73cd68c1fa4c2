//! Products service.

use async_trait::async_trait;
use jiff::Timestamp;
use mockall::automock;
use tracing::info;

use crate::{
    database::Db,
    domain::{
        history::{models::StockChange, repository::SqliteHistoryRepository},
        products::{
            data::{NewProduct, ProductUpdate},
            errors::ProductsServiceError,
            models::{Product, ProductFilter, ProductId},
            repository::SqliteProductsRepository,
        },
    },
};

#[derive(Debug, Clone)]
pub struct SqliteProductsService {
    db: Db,
    repository: SqliteProductsRepository,
    history: SqliteHistoryRepository,
}

impl SqliteProductsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: SqliteProductsRepository::new(),
            history: SqliteHistoryRepository::new(),
        }
    }
}

#[async_trait]
impl ProductsService for SqliteProductsService {
    async fn list_products(
        &self,
        filter: ProductFilter,
    ) -> Result<Vec<Product>, ProductsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let products = self.repository.list_products(&mut tx, &filter).await?;

        tx.commit().await?;

        Ok(products)
    }

    async fn get_product(&self, product: ProductId) -> Result<Product, ProductsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let product = self.repository.get_product(&mut tx, product).await?;

        tx.commit().await?;

        Ok(product)
    }

    async fn create_product(&self, product: NewProduct) -> Result<Product, ProductsServiceError> {
        let product = product.validated()?;

        let mut tx = self.db.begin_write_transaction().await?;

        let created = self
            .repository
            .create_product(&mut tx, &product, Timestamp::now())
            .await?;

        tx.commit().await?;

        info!(product.id = %created.id, product.sku = %created.sku, "created product");

        Ok(created)
    }

    async fn update_product(
        &self,
        product: ProductId,
        update: ProductUpdate,
    ) -> Result<Product, ProductsServiceError> {
        let update = update.validated()?;

        let mut tx = self.db.begin_write_transaction().await?;
        let now = Timestamp::now();

        let current = self.repository.get_product(&mut tx, product).await?;

        let updated = self
            .repository
            .update_product(&mut tx, product, &update, now)
            .await?;

        if let Some(change) = StockChange::between(product, current.stock, updated.stock) {
            self.history.record_change(&mut tx, &change, now).await?;

            info!(
                product.id = %product,
                previous_stock = change.previous_stock(),
                new_stock = change.new_stock(),
                "recorded stock change"
            );
        }

        tx.commit().await?;

        Ok(updated)
    }

    async fn delete_product(&self, product: ProductId) -> Result<(), ProductsServiceError> {
        let mut tx = self.db.begin_write_transaction().await?;

        let rows_affected = self.repository.delete_product(&mut tx, product).await?;

        if rows_affected == 0 {
            return Err(ProductsServiceError::NotFound);
        }

        tx.commit().await?;

        info!(product.id = %product, "deleted product");

        Ok(())
    }

    async fn list_categories(&self) -> Result<Vec<String>, ProductsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let categories = self.repository.list_categories(&mut tx).await?;

        tx.commit().await?;

        Ok(categories)
    }
}

#[automock]
#[async_trait]
pub trait ProductsService: Send + Sync {
    /// Retrieves products matching `filter`, newest first.
    async fn list_products(
        &self,
        filter: ProductFilter,
    ) -> Result<Vec<Product>, ProductsServiceError>;

    /// Retrieve a single product.
    async fn get_product(&self, product: ProductId) -> Result<Product, ProductsServiceError>;

    /// Creates a new product.
    async fn create_product(&self, product: NewProduct) -> Result<Product, ProductsServiceError>;

    /// Overwrites every mutable field of a product.
    ///
    /// A change in stock level appends a history entry in the same
    /// transaction as the product write.
    async fn update_product(
        &self,
        product: ProductId,
        update: ProductUpdate,
    ) -> Result<Product, ProductsServiceError>;

    /// Deletes a product together with its history.
    async fn delete_product(&self, product: ProductId) -> Result<(), ProductsServiceError>;

    /// Distinct categories in use, sorted ascending.
    async fn list_categories(&self) -> Result<Vec<String>, ProductsServiceError>;
}
