//! Configuration management commands.

use std::fs;

use anyhow::{bail, Result};
use optic_commerce::catalog::CatalogStore;
use tracing_subscriber::EnvFilter;

use super::{ConfigArgs, ConfigCommand};
use crate::config::generate_default_config;
use crate::context::{Context, CONFIG_NAMES};

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
    match &ctx.config_path {
        Some(path) => ctx.output.debug(&format!("Loaded from {}", path.display())),
        None => ctx.output.debug("No config file found, using defaults"),
    }

    ctx.output.info("[store]");
    ctx.output.kv("name", &ctx.config.store.name);
    ctx.output.kv("currency", ctx.config.store.currency.code());

    ctx.output.info("[catalog]");
    ctx.output.kv(
        "path",
        ctx.config.catalog.path.as_deref().unwrap_or("(built-in)"),
    );

    ctx.output.info("[quote]");
    ctx.output.kv("id_prefix", &ctx.config.quote.id_prefix);

    ctx.output.info("[logging]");
    ctx.output.kv("level", &ctx.config.logging.level);

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

    let content = generate_default_config(&ctx.config.store.name);
    fs::write(&config_path, content)?;

    ctx.output.success(&format!("Created: {}", config_path.display()));

    Ok(())
}

fn validate_config(ctx: &Context) -> Result<()> {
    ctx.output.header("Validating configuration");

    let mut errors: Vec<String> = Vec::new();
    let mut warnings: Vec<String> = Vec::new();

    if ctx.config.store.name.trim().is_empty() {
        errors.push("store.name is required".to_string());
    }

    let prefix = ctx.config.quote.id_prefix.trim();
    if prefix.is_empty() {
        errors.push("quote.id_prefix is required".to_string());
    } else if prefix.contains(char::is_whitespace) {
        errors.push("quote.id_prefix must not contain spaces".to_string());
    }

    if EnvFilter::try_new(&ctx.config.logging.level).is_err() {
        errors.push(format!(
            "logging.level '{}' is not a valid filter",
            ctx.config.logging.level
        ));
    }

    match ctx.config.catalog.path.as_deref() {
        Some(path) => match CatalogStore::load(ctx.resolve_path(path)) {
            Ok(store) if store.is_empty() => {
                warnings.push(format!("catalog '{}' has no products", path))
            }
            Ok(store) if store.currency() != ctx.config.store.currency => warnings.push(format!(
                "catalog currency {} differs from store.currency {}",
                store.currency(),
                ctx.config.store.currency
            )),
            Ok(store) => ctx.output.debug(&format!("catalog has {} products", store.len())),
            Err(e) => errors.push(format!("catalog.path: {}", e)),
        },
        None => ctx.output.debug("using the built-in catalog"),
    }

    if ctx.config_path.is_none() {
        warnings.push("no config file found, defaults are in use".to_string());
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
