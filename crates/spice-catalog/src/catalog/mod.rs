//! Product catalog module.
//!
//! Contains product types, categories, and the validated catalog loader.

mod category;
mod product;
mod store;

pub use category::Category;
pub use product::{Product, ProductRecord};
pub use store::Catalog;
