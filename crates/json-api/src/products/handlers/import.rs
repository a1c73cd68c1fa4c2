//! Import Products Handler

use std::sync::Arc;

use salvo::prelude::*;
use serde_json::{Map, Value};

use stockpile_app::domain::transfer::data::ImportRow;

use crate::{
    errors::ApiError,
    extensions::*,
    products::models::{ImportResponse, ImportResults},
    state::State,
};

const INVALID_PAYLOAD: &str = "Invalid products data";

/// Import Products Handler
///
/// Expects `{"products": [row, ...]}`. Each row is imported independently;
/// existing SKUs are reported as duplicates and bad rows as errors.
#[endpoint(
    tags("products"),
    summary = "Import Products",
    responses(
        (status_code = StatusCode::OK, description = "Import summary"),
        (status_code = StatusCode::BAD_REQUEST, description = "Payload is not a product list"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<ImportResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let payload = req.json_or_400::<Value>(INVALID_PAYLOAD).await?;

    let rows = payload
        .get("products")
        .and_then(Value::as_array)
        .ok_or_else(|| ApiError::bad_request(INVALID_PAYLOAD))?
        .iter()
        .map(import_row)
        .collect();

    let report = state
        .app
        .transfer
        .import_products(rows)
        .await
        .or_500("Failed to import products")?;

    Ok(Json(ImportResponse {
        results: ImportResults::from(report),
    }))
}

/// Rows that are not objects have every field missing and fail on import.
fn import_row(value: &Value) -> ImportRow {
    let Some(object) = value.as_object() else {
        return ImportRow::default();
    };

    ImportRow {
        sku: cell(object, "sku"),
        name: cell(object, "name"),
        category: cell(object, "category"),
        price: cell(object, "price"),
        stock: cell(object, "stock"),
        supplier: cell(object, "supplier"),
    }
}

fn cell(object: &Map<String, Value>, key: &str) -> Option<String> {
    match object.get(key)? {
        Value::Null => None,
        Value::String(text) => Some(text.clone()),
        other => Some(other.to_string()),
    }
}
