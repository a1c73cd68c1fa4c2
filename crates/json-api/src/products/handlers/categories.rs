//! Product Categories Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{errors::ApiError, extensions::*, products::models::CategoriesResponse, state::State};

/// Product Categories Handler
///
/// Returns the distinct categories in use, sorted ascending.
#[endpoint(
    tags("products"),
    summary = "List Categories",
    responses(
        (status_code = StatusCode::OK, description = "Distinct categories"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<CategoriesResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let categories = state
        .app
        .products
        .list_categories()
        .await
        .or_500("Failed to fetch categories")?;

    Ok(Json(CategoriesResponse { categories }))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use stockpile_app::domain::products::{MockProductsService, ProductsServiceError};

    use crate::{errors::ErrorResponse, test_helpers::MockApp};

    use super::*;

    fn make_service(products: MockProductsService) -> Service {
        MockApp::with_products(products)
            .service(Router::with_path("products/categories").get(handler))
    }

    #[tokio::test]
    async fn test_categories_returns_service_order() -> TestResult {
        let mut products = MockProductsService::new();

        products
            .expect_list_categories()
            .once()
            .return_once(|| Ok(vec!["Accessories".to_string(), "Furniture".to_string()]));

        let response: CategoriesResponse =
            TestClient::get("http://example.com/products/categories")
                .send(&make_service(products))
                .await
                .take_json()
                .await?;

        assert_eq!(response.categories, vec!["Accessories", "Furniture"]);

        Ok(())
    }

    #[tokio::test]
    async fn test_categories_service_error_returns_500() -> TestResult {
        let mut products = MockProductsService::new();

        products
            .expect_list_categories()
            .once()
            .return_once(|| Err(ProductsServiceError::Sql(sqlx::Error::PoolTimedOut)));

        let mut res = TestClient::get("http://example.com/products/categories")
            .send(&make_service(products))
            .await;

        let body: ErrorResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::INTERNAL_SERVER_ERROR));
        assert_eq!(body.error, "Failed to fetch categories");

        Ok(())
    }
}
