//! Spice catalog domain types and logic.
//!
//! This crate holds everything the storefront needs beyond rendering:
//!
//! - **Catalog**: Products, categories, the bundled spice catalog
//! - **Search**: Category filter, substring search, sorting, pagination
//! - **Blog**: Articles with the same filter/search/paginate pipeline
//! - **Contact**: Typed contact-form validation
//!
//! # Example
//!
//! ```rust
//! use spice_catalog::prelude::*;
//!
//! let catalog = Catalog::builtin().unwrap();
//!
//! let query = CatalogQuery::new()
//!     .with_category(CategoryFilter::Only(Category::Blend))
//!     .with_search("masala")
//!     .with_sort(SortKey::PriceAsc)
//!     .with_pagination(1, 6);
//!
//! let page = catalog.resolve(&query);
//! assert!(page.items.len() <= 6);
//! assert!(page.items.iter().all(|p| p.category == Category::Blend));
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod blog;
pub mod catalog;
pub mod contact;
pub mod search;

pub use error::CatalogError;
pub use ids::*;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CatalogError;
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};

    pub use crate::blog::{BlogCategory, BlogPost, BlogQuery, Journal};
    pub use crate::catalog::{Catalog, Category, Product, ProductRecord};
    pub use crate::contact::{ContactError, ContactForm, ContactRequest, InquiryType, Notice, NoticeKind};
    pub use crate::search::{
        compare_names, resolve, CatalogQuery, CategoryFilter, Facet, FacetValue, Listing, Pagination, ResultPage,
        SortKey,
    };
}
