//! Inventory History Models

use std::{fmt, str::FromStr};

use jiff::Timestamp;

use crate::{domain::products::models::ProductId, ids::TypedId};

/// History Entry ID
pub type HistoryEntryId = TypedId<InventoryHistoryEntry>;

/// Direction of a stock change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeType {
    Increase,
    Decrease,
}

impl ChangeType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Increase => "increase",
            Self::Decrease => "decrease",
        }
    }
}

impl fmt::Display for ChangeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a stored change type is neither `increase` nor `decrease`.
#[derive(Debug, thiserror::Error)]
#[error("unknown change type {0:?}")]
pub struct UnknownChangeType(pub String);

impl FromStr for ChangeType {
    type Err = UnknownChangeType;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "increase" => Ok(Self::Increase),
            "decrease" => Ok(Self::Decrease),
            other => Err(UnknownChangeType(other.to_string())),
        }
    }
}

/// Inventory History Entry Model
///
/// Entries are never edited; they disappear only with their product.
#[derive(Debug, Clone, PartialEq)]
pub struct InventoryHistoryEntry {
    pub id: HistoryEntryId,
    pub product_id: ProductId,
    pub previous_stock: u32,
    pub new_stock: u32,
    pub change_amount: u32,
    pub change_type: ChangeType,
    pub notes: Option<String>,
    pub created_at: Timestamp,
}

/// A stock movement about to be recorded.
///
/// Only constructible for an actual change, so a no-op update can never
/// produce an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StockChange {
    product_id: ProductId,
    previous_stock: u32,
    new_stock: u32,
}

impl StockChange {
    /// Returns `None` when the stock level did not move.
    #[must_use]
    pub fn between(product_id: ProductId, previous_stock: u32, new_stock: u32) -> Option<Self> {
        (previous_stock != new_stock).then_some(Self {
            product_id,
            previous_stock,
            new_stock,
        })
    }

    #[must_use]
    pub fn product_id(&self) -> ProductId {
        self.product_id
    }

    #[must_use]
    pub fn previous_stock(&self) -> u32 {
        self.previous_stock
    }

    #[must_use]
    pub fn new_stock(&self) -> u32 {
        self.new_stock
    }

    #[must_use]
    pub fn change_amount(&self) -> u32 {
        self.new_stock.abs_diff(self.previous_stock)
    }

    #[must_use]
    pub fn change_type(&self) -> ChangeType {
        if self.new_stock > self.previous_stock {
            ChangeType::Increase
        } else {
            ChangeType::Decrease
        }
    }

    #[must_use]
    pub fn note(&self) -> String {
        format!(
            "Stock updated from {} to {}",
            self.previous_stock, self.new_stock
        )
    }
}
