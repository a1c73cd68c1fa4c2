//! Product Models

use jiff::Timestamp;

use crate::ids::TypedId;

/// Product ID
pub type ProductId = TypedId<Product>;

/// Stock below this level is reported as low unless configured otherwise.
pub const DEFAULT_LOW_STOCK_THRESHOLD: u32 = 10;

/// Product Model
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: ProductId,
    pub sku: String,
    pub name: String,
    pub category: String,
    pub price: f64,
    pub stock: u32,
    pub supplier: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Product {
    /// Classify the current stock level against `low_stock_threshold`.
    #[must_use]
    pub fn stock_status(&self, low_stock_threshold: u32) -> StockStatus {
        StockStatus::classify(self.stock, low_stock_threshold)
    }
}

/// Coarse stock level shown next to each product.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockStatus {
    InStock,
    LowStock,
    OutOfStock,
}

impl StockStatus {
    #[must_use]
    pub fn classify(stock: u32, low_stock_threshold: u32) -> Self {
        if stock == 0 {
            Self::OutOfStock
        } else if stock < low_stock_threshold {
            Self::LowStock
        } else {
            Self::InStock
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InStock => "in_stock",
            Self::LowStock => "low_stock",
            Self::OutOfStock => "out_of_stock",
        }
    }
}

/// Product list filter.
///
/// Blank values and the `all` category are treated as "no filter".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductFilter {
    search: Option<String>,
    category: Option<String>,
}

impl ProductFilter {
    /// Category value meaning "every category".
    pub const ALL_CATEGORIES: &'static str = "all";

    #[must_use]
    pub fn new(search: Option<String>, category: Option<String>) -> Self {
        let search = search.filter(|term| !term.is_empty());

        let category = category
            .filter(|category| !category.trim().is_empty())
            .filter(|category| category != Self::ALL_CATEGORIES);

        Self { search, category }
    }

    #[must_use]
    pub fn search(&self) -> Option<&str> {
        self.search.as_deref()
    }

    #[must_use]
    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    /// `LIKE` pattern matching the search term anywhere, with wildcard
    /// characters in the term escaped so they match literally.
    pub(crate) fn search_pattern(&self) -> Option<String> {
        self.search.as_deref().map(|term| {
            let mut pattern = String::with_capacity(term.len() + 2);

            pattern.push('%');

            for c in term.chars() {
                if matches!(c, '%' | '_' | '\\') {
                    pattern.push('\\');
                }
                pattern.push(c);
            }

            pattern.push('%');
            pattern
        })
    }
}
