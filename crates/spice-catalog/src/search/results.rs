//! Result pages, pagination and facets.

use serde::Serialize;

/// One page of matched entries.
///
/// Items borrow from the collection the query ran against; nothing is
/// copied and nothing is cached between calls.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultPage<'a, T> {
    /// Entries on this page, in result order.
    pub items: Vec<&'a T>,
    /// Entries matching the category and search before pagination.
    pub total_matched: usize,
    /// `ceil(total_matched / page_size)`, zero when nothing matched.
    pub total_pages: usize,
    /// The page actually served, after clamping.
    pub current_page: usize,
    /// Effective page size.
    pub page_size: usize,
}

impl<'a, T> ResultPage<'a, T> {
    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Get number of items in this page.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Pagination view for page controls.
    pub fn pagination(&self) -> Pagination {
        Pagination::new(self.current_page, self.page_size, self.total_matched)
    }

    /// "12 results, page 1 of 2".
    pub fn summary(&self) -> String {
        let noun = if self.total_matched == 1 { "result" } else { "results" };
        format!(
            "{} {}, page {} of {}",
            self.total_matched, noun, self.current_page, self.total_pages
        )
    }
}

/// Split an ordered match list into the requested page.
///
/// A non-positive page size counts as 1; the page is clamped into
/// `[1, max(total_pages, 1)]`.
pub fn paginate<'a, T>(matched: Vec<&'a T>, page: i64, page_size: i64) -> ResultPage<'a, T> {
    let page_size = usize::try_from(page_size.max(1)).unwrap_or(usize::MAX);
    let total_matched = matched.len();
    let total_pages = total_matched.div_ceil(page_size);
    let last_page = total_pages.max(1);

    let current_page = if page < 1 {
        1
    } else {
        usize::try_from(page).unwrap_or(usize::MAX).min(last_page)
    };

    let offset = (current_page - 1).saturating_mul(page_size);
    let items = matched.into_iter().skip(offset).take(page_size).collect();

    ResultPage {
        items,
        total_matched,
        total_pages,
        current_page,
        page_size,
    }
}

/// Pagination info.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct Pagination {
    /// Current page (1-indexed).
    pub page: usize,
    /// Items per page.
    pub per_page: usize,
    /// Total number of items.
    pub total: usize,
    /// Total number of pages.
    pub total_pages: usize,
    /// Whether there's a next page.
    pub has_next: bool,
    /// Whether there's a previous page.
    pub has_prev: bool,
}

impl Pagination {
    /// Create pagination info.
    pub fn new(page: usize, per_page: usize, total: usize) -> Self {
        let per_page = per_page.max(1);
        let total_pages = total.div_ceil(per_page);

        Self {
            page,
            per_page,
            total,
            total_pages,
            has_next: page < total_pages,
            has_prev: page > 1,
        }
    }

    /// Zero-based offset of the first item on this page.
    pub fn offset(&self) -> usize {
        self.page.saturating_sub(1) * self.per_page
    }

    /// Get page numbers for display (e.g., [3, 4, 5, 6, 7]).
    pub fn page_numbers(&self, max_visible: usize) -> Vec<usize> {
        if max_visible == 0 {
            return Vec::new();
        }
        if self.total_pages <= max_visible {
            return (1..=self.total_pages).collect();
        }

        let half = max_visible / 2;
        let start = self.page.saturating_sub(half).max(1);
        let end = (start + max_visible - 1).min(self.total_pages);
        let start = (end + 1).saturating_sub(max_visible).max(1);

        (start..=end).collect()
    }

    /// Check if on first page.
    pub fn is_first(&self) -> bool {
        self.page <= 1
    }

    /// Check if on last page.
    pub fn is_last(&self) -> bool {
        self.page >= self.total_pages
    }

    /// Get start item number (1-indexed).
    pub fn start_item(&self) -> usize {
        if self.total == 0 {
            0
        } else {
            self.offset() + 1
        }
    }

    /// Get end item number.
    pub fn end_item(&self) -> usize {
        (self.page * self.per_page).min(self.total)
    }
}

/// A facet for filter controls.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Facet {
    /// Facet name (e.g., "Category").
    pub name: String,
    /// Field this facet filters on.
    pub field: String,
    /// Facet values.
    pub values: Vec<FacetValue>,
}

impl Facet {
    /// Create a new terms facet.
    pub fn terms(name: impl Into<String>, field: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            field: field.into(),
            values: Vec::new(),
        }
    }

    /// Add a value to the facet.
    pub fn add_value(
        &mut self,
        value: impl Into<String>,
        label: impl Into<String>,
        count: usize,
        selected: bool,
    ) {
        self.values.push(FacetValue {
            value: value.into(),
            label: label.into(),
            count,
            selected,
        });
    }
}

/// A single facet value.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FacetValue {
    /// The value passed back as a filter.
    pub value: String,
    /// Human-readable label.
    pub label: String,
    /// Number of entries with this value.
    pub count: usize,
    /// Whether currently selected.
    pub selected: bool,
}
