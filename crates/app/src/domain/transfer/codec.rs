//! CSV encoding of the product catalog.

use std::io::Read;

use csv::{ReaderBuilder, StringRecord, Trim, WriterBuilder};
use serde::Serialize;

use crate::domain::{
    products::models::Product,
    transfer::{data::ImportRow, errors::TransferServiceError},
};

#[derive(Debug, Serialize)]
struct ExportRecord<'a> {
    sku: &'a str,
    name: &'a str,
    category: &'a str,
    price: f64,
    stock: u32,
    supplier: &'a str,
}

impl<'a> From<&'a Product> for ExportRecord<'a> {
    fn from(product: &'a Product) -> Self {
        Self {
            sku: &product.sku,
            name: &product.name,
            category: &product.category,
            price: product.price,
            stock: product.stock,
            supplier: product.supplier.as_deref().unwrap_or_default(),
        }
    }
}

/// Render products as CSV with a `sku,name,category,price,stock,supplier`
/// header row.
///
/// # Errors
///
/// Returns an error if a record cannot be serialised.
pub fn write_products(products: &[Product]) -> Result<String, TransferServiceError> {
    // Header is written explicitly so an empty catalog still has one.
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());

    writer.write_record(["sku", "name", "category", "price", "stock", "supplier"])?;

    for product in products {
        writer.serialize(ExportRecord::from(product))?;
    }

    let bytes = writer.into_inner().map_err(|e| e.into_error())?;

    Ok(String::from_utf8(bytes)?)
}

/// Column positions resolved from a header row.
#[derive(Debug, Default)]
struct Columns {
    sku: Option<usize>,
    name: Option<usize>,
    category: Option<usize>,
    price: Option<usize>,
    stock: Option<usize>,
    supplier: Option<usize>,
}

impl Columns {
    fn from_headers(headers: &StringRecord) -> Self {
        let mut columns = Self::default();

        for (index, header) in headers.iter().enumerate() {
            let slot = match header.trim().to_ascii_lowercase().as_str() {
                "sku" => &mut columns.sku,
                "name" => &mut columns.name,
                "category" => &mut columns.category,
                "price" => &mut columns.price,
                "stock" => &mut columns.stock,
                "supplier" => &mut columns.supplier,
                _ => continue,
            };

            slot.get_or_insert(index);
        }

        columns
    }

    fn row(&self, record: &StringRecord) -> ImportRow {
        let cell = |column: Option<usize>| {
            column
                .and_then(|index| record.get(index))
                .filter(|value| !value.is_empty())
                .map(str::to_string)
        };

        ImportRow {
            sku: cell(self.sku),
            name: cell(self.name),
            category: cell(self.category),
            price: cell(self.price),
            stock: cell(self.stock),
            supplier: cell(self.supplier),
        }
    }
}

/// Read import rows from CSV with a header row.
///
/// Headers are matched case-insensitively and unknown columns are ignored.
/// Records may be shorter than the header; absent cells become missing
/// fields and are reported per row by the import.
///
/// # Errors
///
/// Returns an error when the input is not readable CSV.
pub fn read_rows(input: impl Read) -> Result<Vec<ImportRow>, TransferServiceError> {
    let mut reader = ReaderBuilder::new()
        .flexible(true)
        .trim(Trim::All)
        .from_reader(input);

    let columns = Columns::from_headers(reader.headers()?);

    let mut rows = Vec::new();

    for record in reader.records() {
        rows.push(columns.row(&record?));
    }

    Ok(rows)
}
