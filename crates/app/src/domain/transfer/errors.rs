//! Transfer service errors.

use std::{io, string::FromUtf8Error};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TransferServiceError {
    #[error("could not read CSV data")]
    Csv(#[from] csv::Error),

    #[error("could not write CSV data")]
    Io(#[from] io::Error),

    #[error("CSV output is not valid UTF-8")]
    Encoding(#[from] FromUtf8Error),

    #[error("storage error")]
    Sql(#[from] sqlx::Error),
}
