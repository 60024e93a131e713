//! Spice CLI - Command line storefront for the spice catalog.
//!
//! Commands:
//! - `spice products` - Browse the catalog with filter, search, sort and paging
//! - `spice categories` - Show product counts per category
//! - `spice blog` - Browse blog articles
//! - `spice contact` - Validate a contact-form submission
//! - `spice config` - Manage configuration

mod commands;
mod config;
mod context;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use commands::{BlogArgs, CategoriesArgs, ConfigArgs, ContactArgs, ProductsArgs};

/// Spice CLI - Browse the spice catalog from the terminal
#[derive(Parser)]
#[command(name = "spice")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse products
    Products(ProductsArgs),

    /// Show product counts per category
    Categories(CategoriesArgs),

    /// Browse blog articles
    Blog(BlogArgs),

    /// Validate a contact-form submission
    Contact(ContactArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    // Setup output formatting
    let output = output::Output::new(cli.verbose, cli.json);

    // Load config
    let config_path = cli.config.as_deref();
    let ctx = match context::Context::load(config_path, output.clone()) {
        Ok(ctx) => ctx,
        Err(e) => {
            output.error(&format!("{:#}", e));
            std::process::exit(1);
        }
    };

    // Execute command
    let result = match cli.command {
        Commands::Products(args) => commands::products::run(args, &ctx),
        Commands::Categories(args) => commands::categories::run(args, &ctx),
        Commands::Blog(args) => commands::blog::run(args, &ctx),
        Commands::Contact(args) => commands::contact::run(args, &ctx),
        Commands::Config(args) => commands::config::run(args, &ctx),
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}

/// Logs go to stderr so `--json` output stays parseable. `RUST_LOG` wins
/// over `--verbose`.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}
