//! CLI command implementations.

pub mod blog;
pub mod categories;
pub mod config;
pub mod contact;
pub mod products;

use clap::{Args, Subcommand};

/// Arguments for the products command.
#[derive(Args)]
pub struct ProductsArgs {
    /// Category to show (powder, whole, blend or all).
    #[arg(short, long, default_value = "all")]
    pub category: String,

    /// Case-insensitive text to look for in names and descriptions.
    #[arg(short, long, default_value = "")]
    pub search: String,

    /// Sort order (name, price-ascending, price-descending, rating-descending).
    #[arg(long)]
    pub sort: Option<String>,

    /// Page to show (1-based).
    #[arg(short, long, default_value = "1", allow_negative_numbers = true)]
    pub page: i64,

    /// Products per page (default: catalog.page_size).
    #[arg(long, allow_negative_numbers = true)]
    pub page_size: Option<i64>,

    /// JSON catalog to load instead of the configured one.
    #[arg(short, long)]
    pub file: Option<String>,
}

/// Arguments for the categories command.
#[derive(Args)]
pub struct CategoriesArgs {
    /// JSON catalog to load instead of the configured one.
    #[arg(short, long)]
    pub file: Option<String>,
}

/// Arguments for the blog command.
#[derive(Args)]
pub struct BlogArgs {
    /// Blog category (health, tips, recipes, education, culture or all).
    #[arg(short, long, default_value = "all")]
    pub category: String,

    /// Case-insensitive text to look for in titles, excerpts and tags.
    #[arg(short, long, default_value = "")]
    pub search: String,

    /// Page to show (1-based).
    #[arg(short, long, default_value = "1", allow_negative_numbers = true)]
    pub page: i64,
}

/// Arguments for the contact command.
#[derive(Args)]
pub struct ContactArgs {
    /// Full name.
    #[arg(long)]
    pub name: Option<String>,

    /// Email address.
    #[arg(long)]
    pub email: Option<String>,

    /// Phone number.
    #[arg(long)]
    pub phone: Option<String>,

    /// Inquiry type (general, bulk, custom, partnership, support, feedback).
    #[arg(long)]
    pub inquiry: Option<String>,

    /// Message text.
    #[arg(long)]
    pub message: Option<String>,

    /// Answer to "5 + 3".
    #[arg(long)]
    pub captcha: Option<String>,

    /// Never prompt; missing fields are submitted empty.
    #[arg(long)]
    pub no_input: bool,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Initialize a new config file.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
    /// Validate the config file.
    Validate,
}
