//! Products Repository

use jiff::Timestamp;
use sqlx::{
    FromRow, Row, Sqlite, Transaction, query, query_as, query_scalar, sqlite::SqliteRow,
};

use crate::{
    columns::{count_from_column, timestamp_from_column, timestamp_to_column},
    domain::products::{
        data::{NewProduct, ProductUpdate},
        models::{Product, ProductFilter, ProductId},
    },
};

const LIST_PRODUCTS_SQL: &str = include_str!("sql/list_products.sql");
const LIST_PRODUCTS_BY_ID_SQL: &str = include_str!("sql/list_products_by_id.sql");
const GET_PRODUCT_SQL: &str = include_str!("sql/get_product.sql");
const FIND_PRODUCT_BY_SKU_SQL: &str = include_str!("sql/find_product_by_sku.sql");
const CREATE_PRODUCT_SQL: &str = include_str!("sql/create_product.sql");
const UPDATE_PRODUCT_SQL: &str = include_str!("sql/update_product.sql");
const DELETE_PRODUCT_SQL: &str = include_str!("sql/delete_product.sql");
const LIST_CATEGORIES_SQL: &str = include_str!("sql/list_categories.sql");
const COUNT_PRODUCTS_SQL: &str = include_str!("sql/count_products.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct SqliteProductsRepository;

impl SqliteProductsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn list_products(
        &self,
        tx: &mut Transaction<'_, Sqlite>,
        filter: &ProductFilter,
    ) -> Result<Vec<Product>, sqlx::Error> {
        query_as::<Sqlite, Product>(LIST_PRODUCTS_SQL)
            .bind(filter.search_pattern())
            .bind(filter.category())
            .fetch_all(&mut **tx)
            .await
    }

    /// All products in insertion order.
    pub(crate) async fn list_products_by_id(
        &self,
        tx: &mut Transaction<'_, Sqlite>,
    ) -> Result<Vec<Product>, sqlx::Error> {
        query_as::<Sqlite, Product>(LIST_PRODUCTS_BY_ID_SQL)
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn get_product(
        &self,
        tx: &mut Transaction<'_, Sqlite>,
        product: ProductId,
    ) -> Result<Product, sqlx::Error> {
        query_as::<Sqlite, Product>(GET_PRODUCT_SQL)
            .bind(product.into_i64())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn find_product_by_sku(
        &self,
        tx: &mut Transaction<'_, Sqlite>,
        sku: &str,
    ) -> Result<Option<ProductId>, sqlx::Error> {
        let id: Option<i64> = query_scalar(FIND_PRODUCT_BY_SKU_SQL)
            .bind(sku)
            .fetch_optional(&mut **tx)
            .await?;

        Ok(id.map(ProductId::from_i64))
    }

    pub(crate) async fn create_product(
        &self,
        tx: &mut Transaction<'_, Sqlite>,
        product: &NewProduct,
        now: Timestamp,
    ) -> Result<Product, sqlx::Error> {
        query_as::<Sqlite, Product>(CREATE_PRODUCT_SQL)
            .bind(&product.sku)
            .bind(&product.name)
            .bind(&product.category)
            .bind(product.price)
            .bind(i64::from(product.stock))
            .bind(product.supplier.as_deref())
            .bind(timestamp_to_column(now))
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn update_product(
        &self,
        tx: &mut Transaction<'_, Sqlite>,
        product: ProductId,
        update: &ProductUpdate,
        now: Timestamp,
    ) -> Result<Product, sqlx::Error> {
        query_as::<Sqlite, Product>(UPDATE_PRODUCT_SQL)
            .bind(product.into_i64())
            .bind(&update.sku)
            .bind(&update.name)
            .bind(&update.category)
            .bind(update.price)
            .bind(i64::from(update.stock))
            .bind(update.supplier.as_deref())
            .bind(timestamp_to_column(now))
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn delete_product(
        &self,
        tx: &mut Transaction<'_, Sqlite>,
        product: ProductId,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_PRODUCT_SQL)
            .bind(product.into_i64())
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }

    pub(crate) async fn list_categories(
        &self,
        tx: &mut Transaction<'_, Sqlite>,
    ) -> Result<Vec<String>, sqlx::Error> {
        query_scalar::<Sqlite, String>(LIST_CATEGORIES_SQL).fetch_all(&mut **tx).await
    }

    pub(crate) async fn count_products(
        &self,
        tx: &mut Transaction<'_, Sqlite>,
    ) -> Result<i64, sqlx::Error> {
        query_scalar::<Sqlite, i64>(COUNT_PRODUCTS_SQL).fetch_one(&mut **tx).await
    }
}

impl<'r> FromRow<'r, SqliteRow> for Product {
    fn from_row(row: &'r SqliteRow) -> sqlx::Result<Self> {
        Ok(Self {
            id: ProductId::from_i64(row.try_get("id")?),
            sku: row.try_get("sku")?,
            name: row.try_get("name")?,
            category: row.try_get("category")?,
            price: row.try_get("price")?,
            stock: count_from_column(row, "stock")?,
            supplier: row.try_get("supplier")?,
            created_at: timestamp_from_column(row, "created_at")?,
            updated_at: timestamp_from_column(row, "updated_at")?,
        })
    }
}
