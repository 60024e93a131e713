//! Search module.
//!
//! Contains the catalog query engine and the filter/pagination pieces it
//! shares with the blog listing.

mod engine;
pub mod filter;
mod query;
mod results;

pub use engine::{compare_names, resolve, sort_products};
pub use filter::{CategoryFilter, CategoryTag, Listing};
pub use query::{CatalogQuery, SortKey, DEFAULT_PAGE_SIZE};
pub use results::{paginate, Facet, FacetValue, Pagination, ResultPage};
