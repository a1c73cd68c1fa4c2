//! Bulk Transfer

pub mod codec;
pub mod data;
pub mod errors;
pub mod service;

pub use errors::TransferServiceError;
pub use service::*;
