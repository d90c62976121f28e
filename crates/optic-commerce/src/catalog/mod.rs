//! Product catalog module.
//!
//! Contains product records, categories, the read-only catalog store and
//! listing queries.

mod category;
mod product;
mod query;
mod seed;
mod store;

pub use category::Category;
pub use product::{Product, ProductRecord};
pub use query::{CatalogQuery, CatalogSort};
pub use store::{CatalogFile, CatalogStore};
