//! Product id path parameter parsing.

use salvo::oapi::extract::PathParam;

use stockpile_app::domain::products::models::ProductId;

use crate::errors::ApiError;

pub(crate) trait ProductIdExt {
    fn into_product_id(self) -> Result<ProductId, ApiError>;
}

impl ProductIdExt for PathParam<String> {
    fn into_product_id(self) -> Result<ProductId, ApiError> {
        self.into_inner()
            .trim()
            .parse::<i64>()
            .map(ProductId::from_i64)
            .map_err(|_ignored| ApiError::bad_request("Invalid product id"))
    }
}
