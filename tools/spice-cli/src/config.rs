//! CLI configuration.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// CLI configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CliConfig {
    /// Product listing settings.
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Blog listing settings.
    #[serde(default)]
    pub blog: BlogConfig,

    /// Price and page-control display.
    #[serde(default)]
    pub display: DisplayConfig,
}

impl CliConfig {
    /// Load config from a file.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;

        Self::parse(path, &content)
    }

    /// Parse config content; the format follows the file extension.
    pub fn parse(path: &str, content: &str) -> Result<Self> {
        if path.ends_with(".json") {
            serde_json::from_str(content)
                .with_context(|| format!("Failed to parse JSON config: {}", path))
        } else {
            toml::from_str(content)
                .with_context(|| format!("Failed to parse TOML config: {}", path))
        }
    }

    /// Problems that make the config unusable.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.catalog.page_size < 1 {
            errors.push("catalog.page_size must be at least 1".to_string());
        }
        if self.blog.posts_per_page < 1 {
            errors.push("blog.posts_per_page must be at least 1".to_string());
        }
        if spice_catalog::Currency::from_code(&self.display.currency).is_none() {
            errors.push(format!("display.currency '{}' is not supported", self.display.currency));
        }
        if !(self.display.exchange_rate.is_finite() && self.display.exchange_rate > 0.0) {
            errors.push("display.exchange_rate must be positive".to_string());
        }

        errors
    }

    /// Suspicious but usable settings.
    pub fn warnings(&self) -> Vec<String> {
        let mut warnings = Vec::new();

        if spice_catalog::search::SortKey::from_str(&self.catalog.default_sort).is_none() {
            warnings.push(format!(
                "catalog.default_sort '{}' is unknown, products will sort by name",
                self.catalog.default_sort
            ));
        }
        if self.display.page_window == 0 {
            warnings.push("display.page_window is 0, page controls will be hidden".to_string());
        }

        warnings
    }
}

/// Product listing settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Products per page.
    #[serde(default = "default_page_size")]
    pub page_size: i64,

    /// Sort used when none is given.
    #[serde(default = "default_sort")]
    pub default_sort: String,

    /// JSON catalog to load instead of the bundled one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub products_file: Option<String>,
}

fn default_page_size() -> i64 {
    12
}

fn default_sort() -> String {
    "name".to_string()
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            default_sort: default_sort(),
            products_file: None,
        }
    }
}

/// Blog listing settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlogConfig {
    #[serde(default = "default_posts_per_page")]
    pub posts_per_page: i64,

    /// JSON posts file to load instead of the bundled one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub posts_file: Option<String>,
}

fn default_posts_per_page() -> i64 {
    6
}

impl Default for BlogConfig {
    fn default() -> Self {
        Self {
            posts_per_page: default_posts_per_page(),
            posts_file: None,
        }
    }
}

/// Display settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Currency code prices are shown in.
    #[serde(default = "default_currency")]
    pub currency: String,

    /// Display-currency units per catalog-currency unit.
    #[serde(default = "default_exchange_rate")]
    pub exchange_rate: f64,

    /// Number of page links shown in page controls.
    #[serde(default = "default_page_window")]
    pub page_window: usize,
}

fn default_currency() -> String {
    "NPR".to_string()
}

fn default_exchange_rate() -> f64 {
    133.0
}

fn default_page_window() -> usize {
    5
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            currency: default_currency(),
            exchange_rate: default_exchange_rate(),
            page_window: default_page_window(),
        }
    }
}

/// Generate a default spice.toml config file.
pub fn generate_default_config() -> String {
    r#"# Spice storefront configuration

[catalog]
page_size = 12
default_sort = "name"
# products_file = "catalog.json"

[blog]
posts_per_page = 6
# posts_file = "posts.json"

[display]
currency = "NPR"
exchange_rate = 133.0
page_window = 5
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_round_trips() {
        let parsed = CliConfig::parse("spice.toml", &generate_default_config()).unwrap();
        assert_eq!(parsed.catalog.page_size, 12);
        assert_eq!(parsed.blog.posts_per_page, 6);
        assert_eq!(parsed.display.currency, "NPR");
        assert!(parsed.validate().is_empty());
        assert!(parsed.warnings().is_empty());
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let parsed = CliConfig::parse("spice.toml", "[catalog]\npage_size = 4\n").unwrap();
        assert_eq!(parsed.catalog.page_size, 4);
        assert_eq!(parsed.catalog.default_sort, "name");
        assert!((parsed.display.exchange_rate - 133.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_json_config() {
        let parsed =
            CliConfig::parse("spice.json", r#"{"display": {"currency": "USD"}}"#).unwrap();
        assert_eq!(parsed.display.currency, "USD");
    }

    #[test]
    fn test_validate_reports_problems() {
        let mut config = CliConfig::default();
        config.catalog.page_size = 0;
        config.display.currency = "XYZ".to_string();
        config.display.exchange_rate = -1.0;
        config.catalog.default_sort = "newest".to_string();

        assert_eq!(config.validate().len(), 3);
        assert_eq!(config.warnings().len(), 1);
    }
}
