//! Import Products CSV Handler

use std::sync::Arc;

use salvo::prelude::*;

use stockpile_app::domain::transfer::TransferServiceError;

use crate::{
    errors::ApiError,
    extensions::*,
    products::models::{ImportResponse, ImportResults},
    state::State,
};

const INVALID_CSV: &str = "Invalid CSV data";

/// Import Products CSV Handler
///
/// Accepts a CSV body with a header row, as produced by the export, and
/// imports it the same way as the JSON import.
#[endpoint(
    tags("products"),
    summary = "Import Products From CSV",
    responses(
        (status_code = StatusCode::OK, description = "Import summary"),
        (status_code = StatusCode::BAD_REQUEST, description = "Body is not readable CSV"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<ImportResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let csv = req.text_or_400(INVALID_CSV).await?;

    let report = match state.app.transfer.import_csv(csv).await {
        Ok(report) => report,
        Err(TransferServiceError::Csv(_)) => return Err(ApiError::bad_request(INVALID_CSV)),
        Err(error) => return Err(error).or_500("Failed to import products"),
    };

    Ok(Json(ImportResponse {
        results: ImportResults::from(report),
    }))
}
