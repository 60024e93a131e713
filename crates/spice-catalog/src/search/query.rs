//! Catalog query builder.

use crate::catalog::Category;
use crate::search::CategoryFilter;
use tracing::warn;

/// Default number of products per page.
pub const DEFAULT_PAGE_SIZE: i64 = 12;

/// Sort options for catalog results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortKey {
    /// Sort by name A-Z.
    #[default]
    Name,
    /// Sort by price, low to high.
    PriceAsc,
    /// Sort by price, high to low.
    PriceDesc,
    /// Sort by highest rated.
    RatingDesc,
}

impl SortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Name => "name",
            SortKey::PriceAsc => "price-ascending",
            SortKey::PriceDesc => "price-descending",
            SortKey::RatingDesc => "rating-descending",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SortKey::Name => "Sort by Name",
            SortKey::PriceAsc => "Price: Low to High",
            SortKey::PriceDesc => "Price: High to Low",
            SortKey::RatingDesc => "Highest Rated",
        }
    }

    /// Strict parse. Accepts the long names and the storefront's short
    /// select values (`price-low`, `price-high`, `rating`).
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "name" => Some(SortKey::Name),
            "price-ascending" | "price-low" => Some(SortKey::PriceAsc),
            "price-descending" | "price-high" => Some(SortKey::PriceDesc),
            "rating-descending" | "rating" => Some(SortKey::RatingDesc),
            _ => None,
        }
    }

    /// Lenient parse: unknown keys sort by name.
    pub fn parse(s: &str) -> Self {
        Self::from_str(s).unwrap_or_else(|| {
            warn!(sort = s, "unknown sort key, sorting by name");
            SortKey::Name
        })
    }
}

/// One catalog lookup: filter, search, sort and page.
///
/// Out-of-range values are accepted here and degraded by the engine, so a
/// query can be built straight from UI state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogQuery {
    /// Category selection.
    pub category: CategoryFilter<Category>,
    /// Free-text search (case-insensitive substring).
    pub search: String,
    /// Sort option.
    pub sort: SortKey,
    /// Requested page (1-indexed).
    pub page: i64,
    /// Items per page.
    pub page_size: i64,
}

impl Default for CatalogQuery {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogQuery {
    /// Create a query matching everything, sorted by name.
    pub fn new() -> Self {
        Self {
            category: CategoryFilter::All,
            search: String::new(),
            sort: SortKey::Name,
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    /// Build a query from raw control values. Missing or unknown values
    /// fall back to their defaults.
    pub fn from_params(
        category: Option<&str>,
        search: Option<&str>,
        sort: Option<&str>,
        page: Option<i64>,
        page_size: Option<i64>,
    ) -> Self {
        Self {
            category: category.map(CategoryFilter::parse).unwrap_or_default(),
            search: search.unwrap_or_default().to_string(),
            sort: sort.map(SortKey::parse).unwrap_or_default(),
            page: page.unwrap_or(1),
            page_size: page_size.unwrap_or(DEFAULT_PAGE_SIZE),
        }
    }

    pub fn with_category(mut self, category: CategoryFilter<Category>) -> Self {
        self.category = category;
        self
    }

    /// Set the search text.
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    /// Set sort option.
    pub fn with_sort(mut self, sort: SortKey) -> Self {
        self.sort = sort;
        self
    }

    /// Set pagination.
    pub fn with_pagination(mut self, page: i64, page_size: i64) -> Self {
        self.page = page;
        self.page_size = page_size;
        self
    }

    /// Go to another page, keeping every other parameter.
    pub fn at_page(&self, page: i64) -> Self {
        Self {
            page,
            ..self.clone()
        }
    }
}
