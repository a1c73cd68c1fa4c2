//! Stockpile Domain Concerns

pub mod history;
pub mod products;
pub mod transfer;
