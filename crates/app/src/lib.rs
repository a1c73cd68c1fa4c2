//! Shared application domain and persistence modules.

pub mod context;
pub mod database;
pub mod domain;
pub mod ids;
pub mod seed;

mod columns;

#[cfg(test)]
mod test;
