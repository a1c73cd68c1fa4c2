//! Get Product Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use crate::{
    errors::ApiError,
    extensions::*,
    products::{
        errors::into_api_error,
        models::{ProductEnvelope, ProductResponse},
    },
    state::State,
};

/// Get Product Handler
///
/// Returns a product.
#[endpoint(
    tags("products"),
    summary = "Get Product",
    responses(
        (status_code = StatusCode::OK, description = "The product"),
        (status_code = StatusCode::BAD_REQUEST, description = "Invalid product id"),
        (status_code = StatusCode::NOT_FOUND, description = "Product not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    id: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<ProductEnvelope>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let product = id.into_product_id()?;

    let product = state
        .app
        .products
        .get_product(product)
        .await
        .map_err(|error| into_api_error(error, "Failed to fetch product"))?;

    Ok(Json(ProductEnvelope {
        product: ProductResponse::new(product, state.low_stock_threshold),
    }))
}
