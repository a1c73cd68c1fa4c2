//! Demonstration catalog.

use jiff::Timestamp;
use tracing::info;

use crate::{
    database::Db,
    domain::products::{data::NewProduct, repository::SqliteProductsRepository},
};

/// `(sku, name, category, price, stock, supplier)`
const DEMO_CATALOG: [(&str, &str, &str, f64, u32, &str); 15] = [
    ("LAP-001", "MacBook Pro 16\"", "Electronics", 2499.99, 15, "Apple Inc."),
    ("LAP-002", "Dell XPS 15", "Electronics", 1899.99, 8, "Dell Technologies"),
    ("PHN-001", "iPhone 15 Pro", "Electronics", 999.99, 25, "Apple Inc."),
    ("PHN-002", "Samsung Galaxy S24", "Electronics", 899.99, 20, "Samsung"),
    ("TAB-001", "iPad Air", "Electronics", 599.99, 12, "Apple Inc."),
    ("ACC-001", "USB-C Cable", "Accessories", 19.99, 150, "Generic"),
    ("ACC-002", "Wireless Mouse", "Accessories", 49.99, 45, "Logitech"),
    ("ACC-003", "Mechanical Keyboard", "Accessories", 129.99, 30, "Corsair"),
    ("MON-001", "LG UltraWide 34\"", "Electronics", 799.99, 10, "LG Electronics"),
    ("MON-002", "Dell 27\" 4K Monitor", "Electronics", 549.99, 18, "Dell Technologies"),
    ("HDP-001", "Sony WH-1000XM5", "Accessories", 349.99, 22, "Sony"),
    ("SPK-001", "HomePod Mini", "Electronics", 99.99, 35, "Apple Inc."),
    ("CAM-001", "Logitech Webcam", "Accessories", 79.99, 40, "Logitech"),
    ("DES-001", "Standing Desk", "Furniture", 599.99, 5, "IKEA"),
    ("CHR-001", "Ergonomic Chair", "Furniture", 399.99, 7, "Herman Miller"),
];

/// Insert the demonstration catalog when the product table is empty.
///
/// Returns the number of products inserted, which is zero when any product
/// already exists.
///
/// # Errors
///
/// Returns an error when the count or any insert fails; nothing is inserted
/// in that case.
pub async fn seed_if_empty(db: &Db) -> Result<usize, sqlx::Error> {
    let repository = SqliteProductsRepository::new();
    let mut tx = db.begin_write_transaction().await?;

    if repository.count_products(&mut tx).await? > 0 {
        return Ok(0);
    }

    let now = Timestamp::now();

    for (sku, name, category, price, stock, supplier) in DEMO_CATALOG {
        let product = NewProduct {
            sku: sku.to_string(),
            name: name.to_string(),
            category: category.to_string(),
            price,
            stock,
            supplier: Some(supplier.to_string()),
        };

        repository.create_product(&mut tx, &product, now).await?;
    }

    tx.commit().await?;

    info!(products = DEMO_CATALOG.len(), "seeded demonstration catalog");

    Ok(DEMO_CATALOG.len())
}
