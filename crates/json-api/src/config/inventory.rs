//! Inventory Config

use clap::Args;

use stockpile_app::domain::products::models::DEFAULT_LOW_STOCK_THRESHOLD;

/// Stock reporting settings.
#[derive(Debug, Args)]
pub struct InventoryConfig {
    /// Stock levels below this are reported as `low_stock`
    #[arg(long, env = "LOW_STOCK_THRESHOLD", default_value_t = DEFAULT_LOW_STOCK_THRESHOLD)]
    pub low_stock_threshold: u32,
}
