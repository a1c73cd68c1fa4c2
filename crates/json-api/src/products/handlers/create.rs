//! Create Product Handler

use std::sync::Arc;

use salvo::{http::header::LOCATION, prelude::*};

use crate::{
    errors::ApiError,
    extensions::*,
    products::{
        errors::into_api_error,
        models::{ProductEnvelope, ProductPayload, ProductResponse},
    },
    state::State,
};

/// Create Product Handler
///
/// Expects `{sku, name, category, price, stock, supplier?}`.
#[endpoint(
    tags("products"),
    summary = "Create Product",
    responses(
        (status_code = StatusCode::CREATED, description = "Product created"),
        (status_code = StatusCode::CONFLICT, description = "Product already exists"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<ProductEnvelope>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let product = req
        .json_or_400::<ProductPayload>("Invalid product data")
        .await?
        .into_new_product()?;

    let created = state
        .app
        .products
        .create_product(product)
        .await
        .map_err(|error| into_api_error(error, "Failed to create product"))?;

    res.add_header(LOCATION, format!("/products/{}", created.id), true)
        .or_500("Failed to create product")?
        .status_code(StatusCode::CREATED);

    Ok(Json(ProductEnvelope {
        product: ProductResponse::new(created, state.low_stock_threshold),
    }))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use stockpile_app::domain::products::{
        MockProductsService, ProductsServiceError, data::NewProduct,
    };

    use crate::{
        errors::ErrorResponse,
        test_helpers::{MockApp, make_product},
    };

    use super::*;

    fn make_service(products: MockProductsService) -> Service {
        MockApp::with_products(products).service(Router::with_path("products").post(handler))
    }

    fn expected() -> NewProduct {
        NewProduct {
            sku: "T-1".to_string(),
            name: "Test".to_string(),
            category: "X".to_string(),
            price: 10.5,
            stock: 5,
            supplier: None,
        }
    }

    #[tokio::test]
    async fn test_create_product_success() -> TestResult {
        let mut products = MockProductsService::new();

        products
            .expect_create_product()
            .once()
            .withf(|new| *new == expected())
            .return_once(|_| Ok(make_product(1, "T-1", 5)));

        let mut res = TestClient::post("http://example.com/products")
            .json(&json!({ "sku": "T-1", "name": "Test", "category": "X", "price": 10.5, "stock": 5 }))
            .send(&make_service(products))
            .await;

        let body: ProductEnvelope = res.take_json().await?;
        let location = res.headers().get("location").and_then(|v| v.to_str().ok());

        assert_eq!(res.status_code, Some(StatusCode::CREATED));
        assert_eq!(location, Some("/products/1"));
        assert_eq!(body.product.id, 1);
        assert_eq!(body.product.stock, 5);

        Ok(())
    }

    #[tokio::test]
    async fn test_create_product_conflict_returns_409() -> TestResult {
        let mut products = MockProductsService::new();

        products
            .expect_create_product()
            .once()
            .return_once(|_| Err(ProductsServiceError::AlreadyExists));

        let mut res = TestClient::post("http://example.com/products")
            .json(&json!({ "sku": "T-1", "name": "Test", "category": "X", "price": 10.5, "stock": 5 }))
            .send(&make_service(products))
            .await;

        let body: ErrorResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::CONFLICT));
        assert_eq!(body.error, "Product with this SKU already exists");

        Ok(())
    }

    #[tokio::test]
    async fn test_create_product_missing_field_returns_400() -> TestResult {
        let mut products = MockProductsService::new();

        products.expect_create_product().never();

        let mut res = TestClient::post("http://example.com/products")
            .json(&json!({ "sku": "T-1", "name": "Test", "price": 10.5, "stock": 5 }))
            .send(&make_service(products))
            .await;

        let body: ErrorResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
        assert_eq!(body.error, "Missing required fields");

        Ok(())
    }

    #[tokio::test]
    async fn test_create_product_malformed_body_returns_400() -> TestResult {
        let mut products = MockProductsService::new();

        products.expect_create_product().never();

        let mut res = TestClient::post("http://example.com/products")
            .json(&json!({ "sku": "T-1", "name": "Test", "category": "X", "price": "cheap", "stock": 5 }))
            .send(&make_service(products))
            .await;

        let body: ErrorResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
        assert_eq!(body.error, "Invalid product data");

        Ok(())
    }

    #[tokio::test]
    async fn test_create_product_storage_error_returns_500() -> TestResult {
        let mut products = MockProductsService::new();

        products
            .expect_create_product()
            .once()
            .return_once(|_| Err(ProductsServiceError::Sql(sqlx::Error::PoolTimedOut)));

        let mut res = TestClient::post("http://example.com/products")
            .json(&json!({ "sku": "T-1", "name": "Test", "category": "X", "price": 10.5, "stock": 5 }))
            .send(&make_service(products))
            .await;

        let body: ErrorResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::INTERNAL_SERVER_ERROR));
        assert_eq!(body.error, "Failed to create product");

        Ok(())
    }
}
