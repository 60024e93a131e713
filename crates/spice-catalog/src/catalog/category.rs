//! Product categories.

use crate::search::CategoryTag;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The closed set of product categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Ground spices.
    Powder,
    /// Whole seeds, pods, sticks and leaves.
    Whole,
    /// Masala blends.
    Blend,
}

impl Category {
    /// All categories in display order.
    pub const ALL: [Category; 3] = [Category::Powder, Category::Whole, Category::Blend];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Powder => "powder",
            Category::Whole => "whole",
            Category::Blend => "blend",
        }
    }

    /// Label for filter controls.
    pub fn display_name(&self) -> &'static str {
        match self {
            Category::Powder => "Powder Spices",
            Category::Whole => "Whole Spices",
            Category::Blend => "Spice Blends",
        }
    }

    /// Parse a category tag. Matching is exact and case-sensitive.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "powder" => Some(Category::Powder),
            "whole" => Some(Category::Whole),
            "blend" => Some(Category::Blend),
            _ => None,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl CategoryTag for Category {
    fn tag(&self) -> &'static str {
        self.as_str()
    }

    fn parse_tag(s: &str) -> Option<Self> {
        Category::from_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_parse_is_exact() {
        assert_eq!(Category::from_str("powder"), Some(Category::Powder));
        assert_eq!(Category::from_str("blend"), Some(Category::Blend));
        assert_eq!(Category::from_str("Powder"), None);
        assert_eq!(Category::from_str(" whole"), None);
    }

    #[test]
    fn test_category_serde_lowercase() {
        let json = serde_json::to_string(&Category::Whole).unwrap();
        assert_eq!(json, "\"whole\"");
    }
}
