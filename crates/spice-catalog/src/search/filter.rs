//! Category and search-term filtering.

use std::fmt;

use tracing::warn;

/// A closed set of category tags that a listing can be filtered on.
pub trait CategoryTag: Copy + Eq + fmt::Debug {
    /// Tag as it appears in URLs and data files.
    fn tag(&self) -> &'static str;

    /// Parse a tag. Matching is exact and case-sensitive.
    fn parse_tag(s: &str) -> Option<Self>;
}

/// Anything the filter/search pipeline can run over.
pub trait Listing {
    type Category: CategoryTag;

    fn category(&self) -> Self::Category;

    /// Whether the entry matches an already-lowercased search term.
    fn matches_term(&self, term: &str) -> bool;
}

/// Category selection: everything, or exactly one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CategoryFilter<C> {
    All,
    Only(C),
}

impl<C> Default for CategoryFilter<C> {
    fn default() -> Self {
        CategoryFilter::All
    }
}

impl<C: CategoryTag> CategoryFilter<C> {
    /// Parse user input. `"all"`, empty and unknown tags all mean
    /// [`CategoryFilter::All`].
    pub fn parse(s: &str) -> Self {
        if s.is_empty() || s == "all" {
            return CategoryFilter::All;
        }
        match C::parse_tag(s) {
            Some(category) => CategoryFilter::Only(category),
            None => {
                warn!(category = s, "unknown category, showing all");
                CategoryFilter::All
            }
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, CategoryFilter::All)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CategoryFilter::All => "all",
            CategoryFilter::Only(category) => category.tag(),
        }
    }

    /// Whether an entry of `category` passes this filter.
    pub fn admits(&self, category: C) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(selected) => *selected == category,
        }
    }
}

impl<C: CategoryTag> fmt::Display for CategoryFilter<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Lowercased search term, or `None` when the input is blank.
///
/// Only blankness is judged on the trimmed input; the term itself is
/// matched as typed.
pub fn normalize_term(search: &str) -> Option<String> {
    if search.trim().is_empty() {
        None
    } else {
        Some(search.to_lowercase())
    }
}

/// Apply the category filter, then the search term, keeping input order.
pub fn select<'a, T: Listing>(
    items: &'a [T],
    category: CategoryFilter<T::Category>,
    search: &str,
) -> Vec<&'a T> {
    let mut matched: Vec<&T> = items
        .iter()
        .filter(|item| category.admits(item.category()))
        .collect();

    if let Some(term) = normalize_term(search) {
        matched.retain(|item| item.matches_term(&term));
    }

    matched
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Shelf {
        Top,
        Bottom,
    }

    impl CategoryTag for Shelf {
        fn tag(&self) -> &'static str {
            match self {
                Shelf::Top => "top",
                Shelf::Bottom => "bottom",
            }
        }

        fn parse_tag(s: &str) -> Option<Self> {
            match s {
                "top" => Some(Shelf::Top),
                "bottom" => Some(Shelf::Bottom),
                _ => None,
            }
        }
    }

    struct Jar {
        label: &'static str,
        shelf: Shelf,
    }

    impl Listing for Jar {
        type Category = Shelf;

        fn category(&self) -> Shelf {
            self.shelf
        }

        fn matches_term(&self, term: &str) -> bool {
            self.label.to_lowercase().contains(term)
        }
    }

    fn jars() -> Vec<Jar> {
        vec![
            Jar { label: "Cumin", shelf: Shelf::Top },
            Jar { label: "Clove", shelf: Shelf::Bottom },
            Jar { label: "Curry Leaf", shelf: Shelf::Top },
        ]
    }

    #[test]
    fn test_parse_filter() {
        assert_eq!(CategoryFilter::<Shelf>::parse("all"), CategoryFilter::All);
        assert_eq!(CategoryFilter::<Shelf>::parse(""), CategoryFilter::All);
        assert_eq!(CategoryFilter::<Shelf>::parse("top"), CategoryFilter::Only(Shelf::Top));
        assert_eq!(CategoryFilter::<Shelf>::parse("Top"), CategoryFilter::All);
        assert_eq!(CategoryFilter::<Shelf>::parse("middle"), CategoryFilter::All);
    }

    #[test]
    fn test_normalize_term() {
        assert_eq!(normalize_term(""), None);
        assert_eq!(normalize_term("   \t"), None);
        assert_eq!(normalize_term("MaSaLa").as_deref(), Some("masala"));
        assert_eq!(normalize_term(" Leaf").as_deref(), Some(" leaf"));
    }

    #[test]
    fn test_select_filters_then_searches() {
        let jars = jars();

        let top = select(&jars, CategoryFilter::Only(Shelf::Top), "");
        assert_eq!(top.iter().map(|j| j.label).collect::<Vec<_>>(), vec!["Cumin", "Curry Leaf"]);

        let cu = select(&jars, CategoryFilter::All, "CU");
        assert_eq!(cu.iter().map(|j| j.label).collect::<Vec<_>>(), vec!["Cumin", "Curry Leaf"]);

        let none = select(&jars, CategoryFilter::Only(Shelf::Bottom), "cu");
        assert!(none.is_empty());
    }
}
