//! Configuration management commands.

use std::fs;

use anyhow::{bail, Result};

use super::{ConfigArgs, ConfigCommand};
use crate::config::generate_default_config;
use crate::context::Context;

/// Run the config command.
pub fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx),
        ConfigCommand::Init { force } => init_config(force, ctx),
        ConfigCommand::Validate => validate_config(ctx),
    }
}

fn show_config(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    ctx.output.header("Current Configuration");
    match ctx.config_path {
        Some(ref path) => ctx.output.kv("file", &path.display().to_string()),
        None => ctx.output.kv("file", "(defaults)"),
    }

    let catalog = &ctx.config.catalog;
    ctx.output.info("[catalog]");
    ctx.output.kv("page_size", &catalog.page_size.to_string());
    ctx.output.kv("default_sort", &catalog.default_sort);
    if let Some(ref file) = catalog.products_file {
        ctx.output.kv("products_file", file);
    }

    let blog = &ctx.config.blog;
    ctx.output.info("[blog]");
    ctx.output.kv("posts_per_page", &blog.posts_per_page.to_string());
    if let Some(ref file) = blog.posts_file {
        ctx.output.kv("posts_file", file);
    }

    let display = &ctx.config.display;
    ctx.output.info("[display]");
    ctx.output.kv("currency", &display.currency);
    ctx.output.kv("exchange_rate", &display.exchange_rate.to_string());
    ctx.output.kv("page_window", &display.page_window.to_string());

    Ok(())
}

fn init_config(force: bool, ctx: &Context) -> Result<()> {
    let config_path = ctx.cwd.join("spice.toml");

    if config_path.exists() && !force {
        bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    fs::write(&config_path, generate_default_config())?;

    ctx.output.success(&format!("Created: {}", config_path.display()));

    Ok(())
}

fn validate_config(ctx: &Context) -> Result<()> {
    ctx.output.header("Validating configuration");

    let errors = ctx.config.validate();
    let warnings = ctx.config.warnings();

    if errors.is_empty() && warnings.is_empty() {
        ctx.output.success("Configuration is valid");
        return Ok(());
    }

    for error in &errors {
        ctx.output.error(&format!("Error: {}", error));
    }

    for warning in &warnings {
        ctx.output.warn(&format!("Warning: {}", warning));
    }

    if !errors.is_empty() {
        bail!("Configuration has {} error(s)", errors.len());
    }

    ctx.output.success("Configuration is valid (with warnings)");

    Ok(())
}
