//! Inventory history service errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum HistoryServiceError {
    #[error("storage error")]
    Sql(#[from] sqlx::Error),
}
