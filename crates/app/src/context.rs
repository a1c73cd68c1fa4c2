//! App Context

use std::sync::Arc;

use thiserror::Error;
use tracing::info;

use crate::{
    database::{self, Db},
    domain::{
        history::{HistoryService, SqliteHistoryService},
        products::{ProductsService, SqliteProductsService},
        transfer::{SqliteTransferService, TransferService},
    },
    seed,
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to connect to database")]
    Database(#[source] sqlx::Error),

    #[error("failed to create database schema")]
    Schema(#[source] sqlx::Error),

    #[error("failed to seed demonstration catalog")]
    Seed(#[source] sqlx::Error),
}

/// How to open the product store.
#[derive(Debug, Clone)]
pub struct DatabaseOptions {
    pub url: String,
    pub max_connections: u32,
    pub seed_demo_data: bool,
}

/// Connect, create the schema, and optionally seed the demonstration catalog.
///
/// # Errors
///
/// Returns an error when any of the three steps fails.
pub async fn initialise_database(options: &DatabaseOptions) -> Result<Db, AppInitError> {
    let pool = database::connect(&options.url, options.max_connections)
        .await
        .map_err(AppInitError::Database)?;

    database::initialise_schema(&pool)
        .await
        .map_err(AppInitError::Schema)?;

    let db = Db::new(pool);

    if options.seed_demo_data {
        seed::seed_if_empty(&db).await.map_err(AppInitError::Seed)?;
    }

    info!(max_connections = options.max_connections, "database ready");

    Ok(db)
}

#[derive(Clone)]
pub struct AppContext {
    pub products: Arc<dyn ProductsService>,
    pub history: Arc<dyn HistoryService>,
    pub transfer: Arc<dyn TransferService>,
}

impl AppContext {
    /// Build the SQLite-backed services over a shared database handle.
    #[must_use]
    pub fn from_db(db: &Db) -> Self {
        Self {
            products: Arc::new(SqliteProductsService::new(db.clone())),
            history: Arc::new(SqliteHistoryService::new(db.clone())),
            transfer: Arc::new(SqliteTransferService::new(db.clone())),
        }
    }
}
