//! Bulk transfer service.

use async_trait::async_trait;
use jiff::Timestamp;
use mockall::automock;
use tracing::{info, warn};

use crate::{
    database::Db,
    domain::{
        products::{ProductsServiceError, repository::SqliteProductsRepository},
        transfer::{
            codec,
            data::{ImportReport, ImportRow, RowOutcome},
            errors::TransferServiceError,
        },
    },
};

#[derive(Debug, Clone)]
pub struct SqliteTransferService {
    db: Db,
    repository: SqliteProductsRepository,
}

impl SqliteTransferService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: SqliteProductsRepository::new(),
        }
    }

    /// Import a single row in its own transaction.
    async fn import_row(&self, row: &ImportRow) -> Result<RowOutcome, sqlx::Error> {
        let Some(sku) = row.sku() else {
            return Ok(RowOutcome::failed(row, "missing required fields"));
        };

        let mut tx = self.db.begin_write_transaction().await?;

        if self
            .repository
            .find_product_by_sku(&mut tx, sku)
            .await?
            .is_some()
        {
            return Ok(RowOutcome::Duplicate(sku.to_string()));
        }

        let product = match row.to_new_product() {
            Ok(product) => product,
            Err(reason) => return Ok(RowOutcome::failed(row, reason)),
        };

        let product = match product.validated() {
            Ok(product) => product,
            Err(error) => return Ok(RowOutcome::failed(row, error.to_string())),
        };

        if let Err(error) = self
            .repository
            .create_product(&mut tx, &product, Timestamp::now())
            .await
        {
            return Ok(match ProductsServiceError::from(error) {
                // Lost a race with a concurrent writer of the same SKU.
                ProductsServiceError::AlreadyExists => RowOutcome::Duplicate(product.sku),
                other => RowOutcome::failed(row, other.to_string()),
            });
        }

        tx.commit().await?;

        Ok(RowOutcome::Imported)
    }
}

#[async_trait]
impl TransferService for SqliteTransferService {
    async fn export_products(&self) -> Result<String, TransferServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let products = self.repository.list_products_by_id(&mut tx).await?;

        tx.commit().await?;

        codec::write_products(&products)
    }

    async fn import_products(
        &self,
        rows: Vec<ImportRow>,
    ) -> Result<ImportReport, TransferServiceError> {
        let mut outcomes = Vec::with_capacity(rows.len());

        for row in &rows {
            let outcome = match self.import_row(row).await {
                Ok(outcome) => outcome,
                Err(error) => {
                    warn!(sku = row.sku_label(), error = %error, "import row failed");

                    RowOutcome::failed(row, ProductsServiceError::from(error).to_string())
                }
            };

            outcomes.push(outcome);
        }

        let report: ImportReport = outcomes.into_iter().collect();

        info!(
            imported = report.imported,
            duplicates = report.duplicates.len(),
            errors = report.errors.len(),
            "import finished"
        );

        Ok(report)
    }

    async fn import_csv(&self, csv: String) -> Result<ImportReport, TransferServiceError> {
        let rows = codec::read_rows(csv.as_bytes())?;

        self.import_products(rows).await
    }
}

#[automock]
#[async_trait]
pub trait TransferService: Send + Sync {
    /// Every product as CSV, in id order, with a header row.
    async fn export_products(&self) -> Result<String, TransferServiceError>;

    /// Create each row whose SKU is not yet taken.
    ///
    /// Rows are processed in order and independently: duplicates and per-row
    /// failures are reported, never raised.
    async fn import_products(
        &self,
        rows: Vec<ImportRow>,
    ) -> Result<ImportReport, TransferServiceError>;

    /// Parse CSV text and import its rows.
    async fn import_csv(&self, csv: String) -> Result<ImportReport, TransferServiceError>;
}
