//! Blog module.
//!
//! Articles share the catalog's category filter, search and pagination.

mod journal;
mod post;

pub use journal::{BlogQuery, Journal, POSTS_PER_PAGE};
pub use post::{BlogCategory, BlogPost};
