//! Static game-data catalogs for Wakforge.
//!
//! The codec resolves ids through the [`Catalog`](wakforge_model::Catalog)
//! trait. This crate provides [`StaticCatalog`], the in-memory
//! implementation the planner and the command-line tool use:
//!
//! - built up in code (tests, fixtures) with the `insert_*` methods, or
//! - loaded from a JSON catalog file with [`StaticCatalog::from_json_str`]
//!   or [`StaticCatalog::from_path`].
//!
//! Once built, a catalog is only ever read. It must be fully loaded before
//! the first decode.

mod error;
mod loader;
mod store;

pub use error::CatalogError;
pub use loader::CatalogFile;
pub use store::StaticCatalog;
