//! Update Product Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use tracing::instrument;

use crate::{
    errors::ApiError,
    extensions::*,
    products::{
        errors::into_api_error,
        models::{ProductEnvelope, ProductPayload, ProductResponse},
    },
    state::State,
};

/// Update Product Handler
///
/// Replaces every field of a product. A stock change is recorded in the
/// product's inventory history.
#[endpoint(
    tags("products"),
    summary = "Update Product",
    responses(
        (status_code = StatusCode::OK, description = "Product updated"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::NOT_FOUND, description = "Product not found"),
        (status_code = StatusCode::CONFLICT, description = "Product already exists"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[instrument(name = "products.update", skip_all)]
pub(crate) async fn handler(
    id: PathParam<String>,
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<ProductEnvelope>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let product = id.into_product_id()?;

    let update = req
        .json_or_400::<ProductPayload>("Invalid product data")
        .await?
        .into_update()?;

    let updated = state
        .app
        .products
        .update_product(product, update)
        .await
        .map_err(|error| into_api_error(error, "Failed to update product"))?;

    Ok(Json(ProductEnvelope {
        product: ProductResponse::new(updated, state.low_stock_threshold),
    }))
}
