//! App Router

use salvo::Router;

use crate::{healthcheck, observability, products};

/// Every route the API serves, without middleware or documentation.
///
/// Fixed `/products/...` paths are registered before `{id}` so they are never
/// read as a product id.
pub(crate) fn app_router() -> Router {
    Router::new()
        .push(Router::with_path("healthcheck").get(healthcheck::handler))
        .push(Router::with_path("metrics").get(observability::metrics_handler))
        .push(
            Router::with_path("products")
                .get(products::index::handler)
                .post(products::create::handler)
                .push(Router::with_path("categories").get(products::categories::handler))
                .push(Router::with_path("export").get(products::export::handler))
                .push(
                    Router::with_path("import")
                        .post(products::import::handler)
                        .push(Router::with_path("csv").post(products::import_csv::handler)),
                )
                .push(Router::with_path("history/{id}").get(products::history::handler))
                .push(
                    Router::with_path("{id}")
                        .get(products::get::handler)
                        .put(products::update::handler)
                        .delete(products::delete::handler),
                ),
        )
}

#[cfg(test)]
mod tests {
    use salvo::{
        http::StatusCode,
        test::{ResponseExt, TestClient},
    };
    use serde_json::{Value, json};
    use testresult::TestResult;

    use stockpile_app::context::{AppContext, DatabaseOptions, initialise_database};

    use crate::{
        errors::ErrorResponse,
        products::models::{
            CategoriesResponse, HistoryResponse, ImportResponse, MessageResponse, ProductEnvelope,
            ProductsResponse,
        },
        test_helpers::app_service,
    };

    use super::*;

    async fn service() -> TestResult<salvo::Service> {
        let db = initialise_database(&DatabaseOptions {
            url: "sqlite::memory:".to_string(),
            max_connections: 1,
            seed_demo_data: false,
        })
        .await?;

        Ok(app_service(AppContext::from_db(&db), app_router()))
    }

    fn product(sku: &str, stock: i64) -> Value {
        json!({ "sku": sku, "name": "Test", "category": "X", "price": 10.5, "stock": stock })
    }

    #[tokio::test]
    async fn stock_changes_are_tracked_until_delete() -> TestResult {
        let service = service().await?;

        let mut res = TestClient::post("http://example.com/products")
            .json(&product("T-1", 5))
            .send(&service)
            .await;

        assert_eq!(res.status_code, Some(StatusCode::CREATED));

        let created: ProductEnvelope = res.take_json().await?;
        let id = created.product.id;

        for _ in 0..2 {
            let res = TestClient::put(format!("http://example.com/products/{id}"))
                .json(&product("T-1", 3))
                .send(&service)
                .await;

            assert_eq!(res.status_code, Some(StatusCode::OK));
        }

        let history: HistoryResponse =
            TestClient::get(format!("http://example.com/products/history/{id}"))
                .send(&service)
                .await
                .take_json()
                .await?;

        let moves: Vec<(u32, u32, u32, &str)> = history
            .history
            .iter()
            .map(|entry| {
                (
                    entry.previous_stock,
                    entry.new_stock,
                    entry.change_amount,
                    entry.change_type.as_str(),
                )
            })
            .collect();

        assert_eq!(moves, vec![(5, 3, 2, "decrease")]);

        let mut res = TestClient::post("http://example.com/products")
            .json(&product("T-1", 1))
            .send(&service)
            .await;

        let conflict: ErrorResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::CONFLICT));
        assert_eq!(conflict.error, "Product with this SKU already exists");

        let mut res = TestClient::delete(format!("http://example.com/products/{id}"))
            .send(&service)
            .await;

        let deleted: MessageResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(deleted.message, "Product deleted successfully");

        let history: HistoryResponse =
            TestClient::get(format!("http://example.com/products/history/{id}"))
                .send(&service)
                .await
                .take_json()
                .await?;

        assert!(history.history.is_empty());

        let res = TestClient::get(format!("http://example.com/products/{id}"))
            .send(&service)
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }

    #[tokio::test]
    async fn fixed_paths_are_not_product_ids() -> TestResult {
        let service = service().await?;

        for (sku, category) in [("B-1", "Tools"), ("A-1", "Audio"), ("C-1", "Tools")] {
            TestClient::post("http://example.com/products")
                .json(&json!({ "sku": sku, "name": "Test", "category": category, "price": 1, "stock": 1 }))
                .send(&service)
                .await;
        }

        let categories: CategoriesResponse =
            TestClient::get("http://example.com/products/categories")
                .send(&service)
                .await
                .take_json()
                .await?;

        assert_eq!(categories.categories, vec!["Audio", "Tools"]);

        let res = TestClient::get("http://example.com/products/export")
            .send(&service)
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        let res = TestClient::get("http://example.com/products/unknown")
            .send(&service)
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn export_then_import_reports_every_row_duplicate() -> TestResult {
        let service = service().await?;

        for (sku, stock) in [("A-1", 0), ("B-1", 4), ("C-1", 25)] {
            TestClient::post("http://example.com/products")
                .json(&product(sku, stock))
                .send(&service)
                .await;
        }

        let csv = TestClient::get("http://example.com/products/export")
            .send(&service)
            .await
            .take_string()
            .await?;

        let import: ImportResponse = TestClient::post("http://example.com/products/import/csv")
            .text(csv)
            .send(&service)
            .await
            .take_json()
            .await?;

        assert_eq!(import.results.imported, 0);
        assert_eq!(import.results.duplicates, vec!["A-1", "B-1", "C-1"]);
        assert!(import.results.errors.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn json_import_then_search() -> TestResult {
        let service = service().await?;

        let import: ImportResponse = TestClient::post("http://example.com/products/import")
            .json(&json!({
                "products": [
                    { "sku": "LAP-9", "name": "MacBook Air", "category": "Laptops", "price": "999.99", "stock": "4" },
                    { "sku": "DSK-9", "name": "Standing Desk", "category": "Furniture", "price": 450, "stock": 12 },
                    { "sku": "BAD-9", "name": "Broken", "category": "X", "price": "free", "stock": 1 },
                ]
            }))
            .send(&service)
            .await
            .take_json()
            .await?;

        assert_eq!(import.results.imported, 2);
        assert_eq!(import.results.errors, vec!["SKU BAD-9: invalid price \"free\""]);

        let found: ProductsResponse = TestClient::get("http://example.com/products?search=MAC")
            .send(&service)
            .await
            .take_json()
            .await?;

        let skus: Vec<(&str, &str)> = found
            .products
            .iter()
            .map(|product| (product.sku.as_str(), product.stock_status.as_str()))
            .collect();

        assert_eq!(skus, vec![("LAP-9", "low_stock")]);

        Ok(())
    }
}
