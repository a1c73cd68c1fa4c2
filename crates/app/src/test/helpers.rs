//! Test Helpers

use crate::{
    domain::products::{
        ProductsService, ProductsServiceError,
        data::NewProduct,
        models::Product,
    },
    test::TestContext,
};

/// A valid product: name `Test`, category `X`, price `10.5`, no supplier.
pub(crate) fn new_product(sku: &str, stock: u32) -> NewProduct {
    NewProduct {
        sku: sku.to_string(),
        name: "Test".to_string(),
        category: "X".to_string(),
        price: 10.5,
        stock,
        supplier: None,
    }
}

pub(crate) async fn create_product(
    ctx: &TestContext,
    sku: &str,
    stock: u32,
) -> Result<Product, ProductsServiceError> {
    ctx.products.create_product(new_product(sku, stock)).await
}
