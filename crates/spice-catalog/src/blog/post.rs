//! Blog post types.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::ids::PostId;
use crate::search::{CategoryTag, Listing};

/// Blog categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlogCategory {
    Health,
    Tips,
    Recipes,
    Education,
    Culture,
}

impl BlogCategory {
    pub const ALL: [BlogCategory; 5] = [
        BlogCategory::Health,
        BlogCategory::Tips,
        BlogCategory::Recipes,
        BlogCategory::Education,
        BlogCategory::Culture,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BlogCategory::Health => "health",
            BlogCategory::Tips => "tips",
            BlogCategory::Recipes => "recipes",
            BlogCategory::Education => "education",
            BlogCategory::Culture => "culture",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            BlogCategory::Health => "Health & Wellness",
            BlogCategory::Tips => "Tips & Tricks",
            BlogCategory::Recipes => "Recipes & Cooking",
            BlogCategory::Education => "Education",
            BlogCategory::Culture => "Culture & History",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == s)
    }
}

impl fmt::Display for BlogCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl CategoryTag for BlogCategory {
    fn tag(&self) -> &'static str {
        self.as_str()
    }

    fn parse_tag(s: &str) -> Option<Self> {
        BlogCategory::from_str(s)
    }
}

/// A published article.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BlogPost {
    pub id: PostId,
    pub title: String,
    pub excerpt: String,
    #[serde(default)]
    pub content: String,
    pub category: BlogCategory,
    pub author: String,
    /// Publication date (`YYYY-MM-DD` in data files).
    pub date: NaiveDate,
    /// Estimated reading time.
    pub read_minutes: u32,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl BlogPost {
    /// Date as shown on cards, e.g. "January 15, 2024".
    pub fn display_date(&self) -> String {
        self.date.format("%B %-d, %Y").to_string()
    }

    /// "5 min read".
    pub fn read_time(&self) -> String {
        format!("{} min read", self.read_minutes)
    }
}

impl Listing for BlogPost {
    type Category = BlogCategory;

    fn category(&self) -> BlogCategory {
        self.category
    }

    fn matches_term(&self, term: &str) -> bool {
        self.title.to_lowercase().contains(term)
            || self.excerpt.to_lowercase().contains(term)
            || self.tags.iter().any(|tag| tag.to_lowercase().contains(term))
    }
}
