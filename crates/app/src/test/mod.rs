//! Shared test fixtures.

pub(crate) mod helpers;

pub(crate) use context::TestContext;
pub(crate) use db::TestFileDb;
