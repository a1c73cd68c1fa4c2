//! Database Config

use clap::{ArgAction, Args};

use stockpile_app::context::DatabaseOptions;

/// Database settings.
#[derive(Debug, Args)]
pub struct DatabaseConfig {
    /// `SQLite` connection string; the file is created when missing
    #[arg(long, env = "DATABASE_URL", default_value = "sqlite://inventory.db")]
    pub database_url: String,

    /// Maximum pooled connections
    #[arg(long, env = "DATABASE_MAX_CONNECTIONS", default_value_t = 5_u32)]
    pub max_connections: u32,

    /// Seed the demonstration catalog when no products exist
    #[arg(
        long,
        env = "SEED_DEMO_DATA",
        default_value_t = true,
        action = ArgAction::Set
    )]
    pub seed_demo_data: bool,
}

impl DatabaseConfig {
    /// Options for opening the product store.
    #[must_use]
    pub fn options(&self) -> DatabaseOptions {
        DatabaseOptions {
            url: self.database_url.clone(),
            max_connections: self.max_connections,
            seed_demo_data: self.seed_demo_data,
        }
    }
}
