//! Extension traits

mod depot;
mod product_id;
mod request;
mod result;

pub(crate) use depot::DepotExt as _;
pub(crate) use product_id::ProductIdExt as _;
pub(crate) use request::RequestExt as _;
pub(crate) use result::ResultExt as _;
