//! Product Errors

use tracing::{error, warn};

use stockpile_app::domain::products::ProductsServiceError;

use crate::errors::ApiError;

/// Map a service failure to a response; `failure` is the message used for
/// internal errors.
pub(crate) fn into_api_error(error: ProductsServiceError, failure: &str) -> ApiError {
    match error {
        ProductsServiceError::AlreadyExists => {
            ApiError::conflict("Product with this SKU already exists")
        }
        ProductsServiceError::NotFound => ApiError::not_found("Product not found"),
        ProductsServiceError::MissingRequiredData => {
            ApiError::bad_request("Missing required fields")
        }
        ProductsServiceError::InvalidData | ProductsServiceError::InvalidReference => {
            warn!("rejected product payload: {error}");

            ApiError::bad_request("Invalid product data")
        }
        ProductsServiceError::Sql(source) => {
            error!("{failure}: {source}");

            ApiError::internal(failure)
        }
    }
}
