//! Product Index Handler

use std::sync::Arc;

use salvo::{oapi::extract::QueryParam, prelude::*};

use stockpile_app::domain::products::models::ProductFilter;

use crate::{
    errors::ApiError,
    extensions::*,
    products::models::{ProductResponse, ProductsResponse},
    state::State,
};

/// Product Index Handler
///
/// Returns products newest first. `search` matches name, SKU or supplier
/// case-insensitively; `category` must match exactly, with `all` meaning any.
#[endpoint(
    tags("products"),
    summary = "List Products",
    responses(
        (status_code = StatusCode::OK, description = "Matching products"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    search: QueryParam<String, false>,
    category: QueryParam<String, false>,
    depot: &mut Depot,
) -> Result<Json<ProductsResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let filter = ProductFilter::new(search.into_inner(), category.into_inner());

    let products = state
        .app
        .products
        .list_products(filter)
        .await
        .or_500("Failed to fetch products")?;

    Ok(Json(ProductsResponse {
        products: products
            .into_iter()
            .map(|product| ProductResponse::new(product, state.low_stock_threshold))
            .collect(),
    }))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use stockpile_app::domain::products::{MockProductsService, ProductsServiceError};

    use crate::{
        errors::ErrorResponse,
        test_helpers::{MockApp, make_product},
    };

    use super::*;

    fn make_service(products: MockProductsService) -> Service {
        MockApp::with_products(products).service(Router::with_path("products").get(handler))
    }

    #[tokio::test]
    async fn test_index_returns_empty_list() -> TestResult {
        let mut products = MockProductsService::new();

        products
            .expect_list_products()
            .once()
            .withf(|filter| *filter == ProductFilter::default())
            .return_once(|_| Ok(vec![]));

        let response: ProductsResponse = TestClient::get("http://example.com/products")
            .send(&make_service(products))
            .await
            .take_json()
            .await?;

        assert!(response.products.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn test_index_returns_products_with_stock_status() -> TestResult {
        let mut products = MockProductsService::new();

        products
            .expect_list_products()
            .once()
            .return_once(|_| {
                Ok(vec![
                    make_product(3, "C-1", 0),
                    make_product(2, "B-1", 4),
                    make_product(1, "A-1", 40),
                ])
            });

        let response: ProductsResponse = TestClient::get("http://example.com/products")
            .send(&make_service(products))
            .await
            .take_json()
            .await?;

        let statuses: Vec<(i64, &str)> = response
            .products
            .iter()
            .map(|product| (product.id, product.stock_status.as_str()))
            .collect();

        assert_eq!(
            statuses,
            vec![(3, "out_of_stock"), (2, "low_stock"), (1, "in_stock")]
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_index_forwards_search_and_category() -> TestResult {
        let mut products = MockProductsService::new();

        products
            .expect_list_products()
            .once()
            .withf(|filter| {
                *filter == ProductFilter::new(Some("mac".to_string()), Some("Laptops".to_string()))
            })
            .return_once(|_| Ok(vec![]));

        let res = TestClient::get("http://example.com/products?search=mac&category=Laptops")
            .send(&make_service(products))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        Ok(())
    }

    #[tokio::test]
    async fn test_index_all_category_is_unfiltered() -> TestResult {
        let mut products = MockProductsService::new();

        products
            .expect_list_products()
            .once()
            .withf(|filter| filter.category().is_none())
            .return_once(|_| Ok(vec![]));

        let res = TestClient::get("http://example.com/products?category=all")
            .send(&make_service(products))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        Ok(())
    }

    #[tokio::test]
    async fn test_index_service_error_returns_500() -> TestResult {
        let mut products = MockProductsService::new();

        products
            .expect_list_products()
            .once()
            .return_once(|_| Err(ProductsServiceError::Sql(sqlx::Error::PoolTimedOut)));

        let mut res = TestClient::get("http://example.com/products")
            .send(&make_service(products))
            .await;

        let body: ErrorResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::INTERNAL_SERVER_ERROR));
        assert_eq!(body.error, "Failed to fetch products");

        Ok(())
    }
}
