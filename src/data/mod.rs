//! Data layer - the built-in symbol catalog
//!
//! This module contains the static symbol data and the `Catalog` wrapper
//! the renderers consume.

pub mod catalog;

pub use catalog::{lookup_alias, Catalog, SymbolEntry, ALIAS_INDEX, ALIAS_SEPARATOR, SYMBOLS};
