//! Product request and response bodies.

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

use stockpile_app::domain::{
    history::models::InventoryHistoryEntry,
    products::{
        data::{NewProduct, ProductUpdate},
        models::Product,
    },
    transfer::data::ImportReport,
};

use crate::errors::ApiError;

/// Product fields sent on create and update.
///
/// Every field is optional at the parsing stage so that an absent field is
/// reported as a missing field rather than a malformed body.
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductPayload {
    /// Stock keeping unit, unique across products
    pub sku: Option<String>,

    /// Display name
    pub name: Option<String>,

    /// Category label
    pub category: Option<String>,

    /// Unit price, not negative
    pub price: Option<f64>,

    /// Units in stock, not negative
    pub stock: Option<i64>,

    /// Supplier name
    pub supplier: Option<String>,
}

impl ProductPayload {
    fn into_fields(self) -> Result<(String, String, String, f64, u32, Option<String>), ApiError> {
        let (Some(sku), Some(name), Some(category), Some(price), Some(stock)) =
            (self.sku, self.name, self.category, self.price, self.stock)
        else {
            return Err(ApiError::bad_request("Missing required fields"));
        };

        let stock =
            u32::try_from(stock).map_err(|_ignored| ApiError::bad_request("Invalid product data"))?;

        Ok((sku, name, category, price, stock, self.supplier))
    }

    pub(crate) fn into_new_product(self) -> Result<NewProduct, ApiError> {
        let (sku, name, category, price, stock, supplier) = self.into_fields()?;

        Ok(NewProduct {
            sku,
            name,
            category,
            price,
            stock,
            supplier,
        })
    }

    pub(crate) fn into_update(self) -> Result<ProductUpdate, ApiError> {
        let (sku, name, category, price, stock, supplier) = self.into_fields()?;

        Ok(ProductUpdate {
            sku,
            name,
            category,
            price,
            stock,
            supplier,
        })
    }
}

/// Product as returned by the API.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductResponse {
    /// Product id
    pub id: i64,

    /// Stock keeping unit
    pub sku: String,

    /// Display name
    pub name: String,

    /// Category label
    pub category: String,

    /// Unit price
    pub price: f64,

    /// Units in stock
    pub stock: u32,

    /// Supplier name
    pub supplier: Option<String>,

    /// `out_of_stock`, `low_stock` or `in_stock`
    pub stock_status: String,

    /// The date and time the product was created
    pub created_at: String,

    /// The date and time the product was last updated
    pub updated_at: String,
}

impl ProductResponse {
    pub(crate) fn new(product: Product, low_stock_threshold: u32) -> Self {
        Self {
            stock_status: product
                .stock_status(low_stock_threshold)
                .as_str()
                .to_string(),
            id: product.id.into_i64(),
            sku: product.sku,
            name: product.name,
            category: product.category,
            price: product.price,
            stock: product.stock,
            supplier: product.supplier,
            created_at: product.created_at.to_string(),
            updated_at: product.updated_at.to_string(),
        }
    }
}

/// Single product envelope.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductEnvelope {
    /// The product
    pub product: ProductResponse,
}

/// Product list envelope.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductsResponse {
    /// Products, newest first
    pub products: Vec<ProductResponse>,
}

/// Confirmation message.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct MessageResponse {
    /// What happened
    pub message: String,
}

/// Category list envelope.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CategoriesResponse {
    /// Distinct categories, sorted ascending
    pub categories: Vec<String>,
}

/// A recorded stock change.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct HistoryEntryResponse {
    /// Entry id
    pub id: i64,

    /// Product whose stock changed
    pub product_id: i64,

    /// Stock before the change
    pub previous_stock: u32,

    /// Stock after the change
    pub new_stock: u32,

    /// Absolute size of the change
    pub change_amount: u32,

    /// `increase` or `decrease`
    pub change_type: String,

    /// Description of the change
    pub notes: Option<String>,

    /// When the change was recorded
    pub created_at: String,
}

impl From<InventoryHistoryEntry> for HistoryEntryResponse {
    fn from(entry: InventoryHistoryEntry) -> Self {
        Self {
            id: entry.id.into_i64(),
            product_id: entry.product_id.into_i64(),
            previous_stock: entry.previous_stock,
            new_stock: entry.new_stock,
            change_amount: entry.change_amount,
            change_type: entry.change_type.as_str().to_string(),
            notes: entry.notes,
            created_at: entry.created_at.to_string(),
        }
    }
}

/// History envelope.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct HistoryResponse {
    /// Stock changes, newest first
    pub history: Vec<HistoryEntryResponse>,
}

/// Outcome of a bulk import.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ImportResults {
    /// Rows created
    pub imported: u32,

    /// SKUs skipped because they already exist
    pub duplicates: Vec<String>,

    /// Per-row failures, each naming its SKU
    pub errors: Vec<String>,
}

impl From<ImportReport> for ImportResults {
    fn from(report: ImportReport) -> Self {
        Self {
            imported: report.imported,
            duplicates: report.duplicates,
            errors: report.errors,
        }
    }
}

/// Bulk import envelope.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ImportResponse {
    /// Import outcome
    pub results: ImportResults,
}
