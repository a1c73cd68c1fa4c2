//! Import rows and the per-row accounting of an import run.

use crate::domain::products::data::NewProduct;

/// Label used in error messages for rows without a SKU.
const MISSING_SKU: &str = "(missing)";

/// One candidate product as supplied by the caller.
///
/// Every field is raw text so a malformed row can be reported instead of
/// rejecting the whole import.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportRow {
    pub sku: Option<String>,
    pub name: Option<String>,
    pub category: Option<String>,
    pub price: Option<String>,
    pub stock: Option<String>,
    pub supplier: Option<String>,
}

impl ImportRow {
    /// The trimmed SKU, if the row has a non-blank one.
    #[must_use]
    pub fn sku(&self) -> Option<&str> {
        present(self.sku.as_deref())
    }

    /// SKU as shown in error messages.
    #[must_use]
    pub fn sku_label(&self) -> &str {
        self.sku().unwrap_or(MISSING_SKU)
    }

    /// Parse the row into a product ready to insert.
    ///
    /// # Errors
    ///
    /// Returns a human-readable reason when a required field is missing or a
    /// numeric field does not parse.
    pub fn to_new_product(&self) -> Result<NewProduct, String> {
        let (Some(sku), Some(name), Some(category), Some(price), Some(stock)) = (
            self.sku(),
            present(self.name.as_deref()),
            present(self.category.as_deref()),
            present(self.price.as_deref()),
            present(self.stock.as_deref()),
        ) else {
            return Err("missing required fields".to_string());
        };

        Ok(NewProduct {
            sku: sku.to_string(),
            name: name.to_string(),
            category: category.to_string(),
            price: parse_price(price).ok_or_else(|| format!("invalid price {price:?}"))?,
            stock: parse_stock(stock).ok_or_else(|| format!("invalid stock {stock:?}"))?,
            supplier: present(self.supplier.as_deref()).map(str::to_string),
        })
    }
}

fn present(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|value| !value.is_empty())
}

fn parse_price(value: &str) -> Option<f64> {
    value
        .parse::<f64>()
        .ok()
        .filter(|price| price.is_finite() && *price >= 0.0)
}

/// Accepts integers and whole-number decimals such as `12.0`.
fn parse_stock(value: &str) -> Option<u32> {
    if let Ok(stock) = value.parse::<u32>() {
        return Some(stock);
    }

    let stock = value.parse::<f64>().ok()?;

    if stock.fract() != 0.0 || !(0.0..=f64::from(u32::MAX)).contains(&stock) {
        return None;
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    Some(stock as u32)
}

/// What happened to a single import row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowOutcome {
    Imported,
    Duplicate(String),
    Failed(String),
}

impl RowOutcome {
    /// A failure for `row`, prefixed with its SKU.
    #[must_use]
    pub fn failed(row: &ImportRow, reason: impl AsRef<str>) -> Self {
        Self::Failed(format!("SKU {}: {}", row.sku_label(), reason.as_ref()))
    }
}

/// Aggregate result of an import run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportReport {
    pub imported: u32,
    pub duplicates: Vec<String>,
    pub errors: Vec<String>,
}

impl ImportReport {
    fn apply(mut self, outcome: RowOutcome) -> Self {
        match outcome {
            RowOutcome::Imported => self.imported += 1,
            RowOutcome::Duplicate(sku) => self.duplicates.push(sku),
            RowOutcome::Failed(message) => self.errors.push(message),
        }

        self
    }
}

impl FromIterator<RowOutcome> for ImportReport {
    fn from_iter<I: IntoIterator<Item = RowOutcome>>(outcomes: I) -> Self {
        outcomes.into_iter().fold(Self::default(), Self::apply)
    }
}
