//! The read-only collection of blog posts.

use std::collections::HashSet;

use tracing::{debug, info};

use crate::blog::{BlogCategory, BlogPost};
use crate::error::CatalogError;
use crate::search::{filter, paginate, CategoryFilter, Facet, ResultPage};

const BUILTIN_POSTS: &str = include_str!("../../data/posts.json");

/// Default number of posts per page.
pub const POSTS_PER_PAGE: i64 = 6;

/// One blog listing lookup. Posts keep publication order; there is no sort.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlogQuery {
    pub category: CategoryFilter<BlogCategory>,
    pub search: String,
    pub page: i64,
    pub per_page: i64,
}

impl Default for BlogQuery {
    fn default() -> Self {
        Self::new()
    }
}

impl BlogQuery {
    pub fn new() -> Self {
        Self {
            category: CategoryFilter::All,
            search: String::new(),
            page: 1,
            per_page: POSTS_PER_PAGE,
        }
    }

    pub fn with_category(mut self, category: CategoryFilter<BlogCategory>) -> Self {
        self.category = category;
        self
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    pub fn with_page(mut self, page: i64) -> Self {
        self.page = page;
        self
    }

    pub fn with_per_page(mut self, per_page: i64) -> Self {
        self.per_page = per_page;
        self
    }

    /// Whether this is the unfiltered listing (where the featured post shows).
    pub fn is_unfiltered(&self) -> bool {
        self.category.is_all() && filter::normalize_term(&self.search).is_none()
    }
}

/// Immutable, validated set of blog posts.
#[derive(Debug, Clone, PartialEq)]
pub struct Journal {
    posts: Vec<BlogPost>,
}

impl Journal {
    /// Validate posts: positive unique ids and non-empty titles.
    pub fn from_posts(posts: Vec<BlogPost>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for post in &posts {
            let id = post.id.get();
            if !post.id.is_valid() {
                return Err(CatalogError::InvalidId(id));
            }
            if !seen.insert(id) {
                return Err(CatalogError::DuplicateId(id));
            }
            if post.title.trim().is_empty() {
                return Err(CatalogError::EmptyField { id, field: "title" });
            }
        }

        info!(posts = posts.len(), "journal loaded");
        Ok(Self { posts })
    }

    /// Parse a JSON array of posts.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        Self::from_posts(serde_json::from_str(json)?)
    }

    /// The articles bundled with the crate.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json(BUILTIN_POSTS)
    }

    pub fn posts(&self) -> &[BlogPost] {
        &self.posts
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    /// The post highlighted above the listing.
    pub fn featured(&self) -> Option<&BlogPost> {
        self.posts.first()
    }

    /// Filter by category, search title/excerpt/tags, then paginate.
    pub fn resolve(&self, query: &BlogQuery) -> ResultPage<'_, BlogPost> {
        let matched = filter::select(&self.posts, query.category, &query.search);
        let page = paginate(matched, query.page, query.per_page);

        debug!(
            category = %query.category,
            search = %query.search,
            matched = page.total_matched,
            page = page.current_page,
            "blog query resolved"
        );

        page
    }

    /// Per-category post counts for the sidebar.
    pub fn category_facet(&self, selected: CategoryFilter<BlogCategory>) -> Facet {
        let mut facet = Facet::terms("Category", "category");
        facet.add_value("all", "All Posts", self.posts.len(), selected.is_all());

        for category in BlogCategory::ALL {
            let count = self.posts.iter().filter(|p| p.category == category).count();
            facet.add_value(
                category.as_str(),
                category.display_name(),
                count,
                selected == CategoryFilter::Only(category),
            );
        }

        facet
    }
}
