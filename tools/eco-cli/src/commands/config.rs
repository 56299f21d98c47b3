//! Configuration management commands.

use std::fs;

use anyhow::{bail, Result};
use eco_commerce::catalog::CatalogProvider;

use super::{ConfigArgs, ConfigCommand};
use crate::config::{generate_default_config, CONFIG_NAMES};
use crate::context::Context;

/// Run the config command.
pub async fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
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
    match &ctx.config_path {
        Some(path) => ctx.output.kv("file", &path.display().to_string()),
        None => ctx.output.kv("file", "(defaults)"),
    }

    let config = &ctx.config;

    ctx.output.info("[store]");
    ctx.output.kv("name", &config.store.name);
    ctx.output.kv("currency", config.store.currency.code());
    ctx.output.kv(
        "catalog",
        config.store.catalog.as_deref().unwrap_or("(built-in)"),
    );

    ctx.output.info("[filters]");
    ctx.output.kv("price_ceiling", &config.filters.price_ceiling.to_string());
    ctx.output.kv("price_step", &config.filters.price_step.to_string());

    ctx.output.info("[checkout]");
    ctx.output.kv("tax_rate_bps", &config.checkout.tax_rate_bps.to_string());
    ctx.output.kv(
        "processing_delay_ms",
        &config.checkout.processing_delay_ms.to_string(),
    );
    ctx.output.kv("order_prefix", &config.checkout.order_prefix);

    ctx.output.info("[logging]");
    ctx.output.kv("level", config.logging.level.as_directive());
    ctx.output.kv("format", config.logging.format.as_str());

    Ok(())
}

fn init_config(force: bool, ctx: &Context) -> Result<()> {
    let config_path = ctx.cwd.join(CONFIG_NAMES[0]);

    if config_path.exists() && !force {
        bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    fs::write(&config_path, generate_default_config(&ctx.config.store.name))?;
    ctx.output.success(&format!("Created: {}", config_path.display()));

    Ok(())
}

fn validate_config(ctx: &Context) -> Result<()> {
    ctx.output.header("Validating configuration");

    if ctx.config_path.is_none() {
        ctx.output.info("No config file found, using defaults. Looked for:");
        for name in CONFIG_NAMES {
            ctx.output.list_item(name);
        }
    }

    let (mut errors, warnings) = ctx.config.problems();

    match ctx.catalog() {
        Ok(catalog) => ctx
            .output
            .kv("catalog", &format!("{} products", catalog.len())),
        Err(e) => errors.push(format!("{:#}", e)),
    }

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
