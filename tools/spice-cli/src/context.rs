//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use spice_catalog::prelude::*;
use tracing::debug;

use crate::config::CliConfig;
use crate::output::Output;

/// Config file names, searched in order in each directory.
pub const CONFIG_NAMES: [&str; 3] = ["spice.toml", ".spice.toml", "spice.json"];

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: CliConfig,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
    /// Where the config came from, if a file was found.
    pub config_path: Option<PathBuf>,
}

impl Context {
    /// Load context from config file.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let (config, config_path) = if let Some(path) = config_path {
            (CliConfig::load(path)?, Some(PathBuf::from(path)))
        } else {
            // Try to find config in current directory or parent directories
            match Self::find_config(&cwd) {
                Some(path) => (CliConfig::load(&path.to_string_lossy())?, Some(path)),
                None => (CliConfig::default(), None),
            }
        };

        if let Some(ref path) = config_path {
            debug!(path = %path.display(), "config loaded");
        }

        Ok(Self {
            config,
            output,
            cwd,
            config_path,
        })
    }

    /// Find config file in directory tree.
    fn find_config(start: &Path) -> Option<PathBuf> {
        let mut current = start.to_path_buf();
        loop {
            for name in &CONFIG_NAMES {
                let config_path = current.join(name);
                if config_path.is_file() {
                    return Some(config_path);
                }
            }

            if !current.pop() {
                return None;
            }
        }
    }

    /// Resolve a path relative to the working directory.
    pub fn resolve_path(&self, path: &str) -> PathBuf {
        if Path::new(path).is_absolute() {
            PathBuf::from(path)
        } else {
            self.cwd.join(path)
        }
    }

    /// Load the product catalog: `file` if given, then the configured file,
    /// then the bundled data.
    pub fn load_catalog(&self, file: Option<&str>) -> Result<Catalog> {
        match file.or(self.config.catalog.products_file.as_deref()) {
            Some(file) => {
                let path = self.resolve_path(file);
                let json = std::fs::read_to_string(&path)
                    .with_context(|| format!("Failed to read catalog: {}", path.display()))?;
                Catalog::from_json(&json, Currency::USD)
                    .with_context(|| format!("Invalid catalog: {}", path.display()))
            }
            None => Catalog::builtin().context("Bundled catalog is invalid"),
        }
    }

    /// Load the blog posts, from the configured file or the bundled data.
    pub fn load_journal(&self) -> Result<Journal> {
        match self.config.blog.posts_file.as_deref() {
            Some(file) => {
                let path = self.resolve_path(file);
                let json = std::fs::read_to_string(&path)
                    .with_context(|| format!("Failed to read posts: {}", path.display()))?;
                Journal::from_json(&json)
                    .with_context(|| format!("Invalid posts file: {}", path.display()))
            }
            None => Journal::builtin().context("Bundled posts are invalid"),
        }
    }

    /// Currency prices are displayed in. Unknown codes keep the catalog currency.
    pub fn display_currency(&self) -> Option<Currency> {
        Currency::from_code(&self.config.display.currency)
    }

    /// Format a catalog price for display.
    pub fn display_price(&self, price: &Money) -> String {
        match self.display_currency() {
            Some(currency) if currency != price.currency => price
                .convert(currency, self.config.display.exchange_rate)
                .display_grouped(),
            _ => price.display_grouped(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context(config: CliConfig) -> Context {
        Context {
            config,
            output: Output::new(false, true),
            cwd: std::env::temp_dir(),
            config_path: None,
        }
    }

    #[test]
    fn test_display_price_converts() {
        let ctx = context(CliConfig::default());
        let price = Money::new(12000, Currency::USD);
        assert_eq!(ctx.display_price(&price), "\u{20a8}15,960.00");
    }

    #[test]
    fn test_display_price_same_currency() {
        let mut config = CliConfig::default();
        config.display.currency = "USD".to_string();
        let ctx = context(config);
        assert_eq!(ctx.display_price(&Money::new(12000, Currency::USD)), "$120.00");
    }

    #[test]
    fn test_resolve_path() {
        let ctx = context(CliConfig::default());
        assert_eq!(ctx.resolve_path("a.json"), std::env::temp_dir().join("a.json"));
        assert_eq!(ctx.resolve_path("/x/a.json"), PathBuf::from("/x/a.json"));
    }

    #[test]
    fn test_missing_catalog_file_errors() {
        let ctx = context(CliConfig::default());
        let err = ctx.load_catalog(Some("definitely-missing-catalog.json")).unwrap_err();
        assert!(format!("{:#}", err).contains("Failed to read catalog"));
    }

    #[test]
    fn test_builtin_data_loads() {
        let ctx = context(CliConfig::default());
        assert_eq!(ctx.load_catalog(None).unwrap().len(), 25);
        assert_eq!(ctx.load_journal().unwrap().len(), 8);
    }
}
