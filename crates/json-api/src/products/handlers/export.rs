//! Export Products Handler

use std::sync::Arc;

use jiff::Timestamp;
use salvo::{
    http::header::{CONTENT_DISPOSITION, CONTENT_TYPE},
    prelude::*,
};

use crate::{errors::ApiError, extensions::*, state::State};

const CSV_CONTENT_TYPE: &str = "text/csv; charset=utf-8";

/// Export Products Handler
///
/// Returns every product as a CSV attachment, in id order.
#[endpoint(
    tags("products"),
    summary = "Export Products",
    responses(
        (status_code = StatusCode::OK, description = "Products as CSV"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(depot: &mut Depot, res: &mut Response) -> Result<(), ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let csv = state
        .app
        .transfer
        .export_products()
        .await
        .or_500("Failed to export products")?;

    let filename = format!("products-{}.csv", Timestamp::now().as_millisecond());

    res.add_header(CONTENT_TYPE, CSV_CONTENT_TYPE, true)
        .or_500("Failed to export products")?
        .add_header(
            CONTENT_DISPOSITION,
            format!("attachment; filename=\"{filename}\""),
            true,
        )
        .or_500("Failed to export products")?
        .write_body(csv)
        .or_500("Failed to export products")?;

    Ok(())
}
