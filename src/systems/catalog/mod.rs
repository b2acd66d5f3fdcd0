mod commands;
mod worker;

pub(crate) use commands::{CatalogCommand, CatalogEvent};
pub(crate) use worker::spawn;
