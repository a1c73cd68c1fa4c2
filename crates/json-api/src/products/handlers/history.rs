//! Product History Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use crate::{
    errors::ApiError,
    extensions::*,
    products::models::{HistoryEntryResponse, HistoryResponse},
    state::State,
};

/// Product History Handler
///
/// Returns a product's stock changes, newest first. Unknown products have an
/// empty history.
#[endpoint(
    tags("products"),
    summary = "Product Inventory History",
    responses(
        (status_code = StatusCode::OK, description = "Stock changes"),
        (status_code = StatusCode::BAD_REQUEST, description = "Invalid product id"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    id: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<HistoryResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let product = id.into_product_id()?;

    let history = state
        .app
        .history
        .product_history(product)
        .await
        .or_500("Failed to fetch inventory history")?;

    Ok(Json(HistoryResponse {
        history: history.into_iter().map(HistoryEntryResponse::from).collect(),
    }))
}
