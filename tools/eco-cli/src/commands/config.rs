//! Configuration management commands.

use std::fs;

use anyhow::{bail, Context as _, Result};
use eco_commerce::config::StoreKind;
use eco_commerce::MarketplaceConfig;

use super::{ConfigArgs, ConfigCommand};
use crate::config::generate_default_config;
use crate::context::Context;

/// Run the config command.
pub async fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx).await,
        ConfigCommand::Init { force } => init_config(force, ctx).await,
        ConfigCommand::Validate => validate_config(ctx).await,
    }
}

async fn show_config(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    ctx.output.header("Current Configuration");
    match ctx.config_path {
        Some(ref path) => ctx.output.kv("file", &path.display().to_string()),
        None => ctx.output.kv("file", "(defaults)"),
    }

    let config = &ctx.config;

    ctx.output.info("[catalog]");
    let fixture = config
        .catalog
        .fixture
        .as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "(embedded)".to_string());
    ctx.output.kv("fixture", &fixture);
    ctx.output.kv("seed", &config.catalog.seed.to_string());
    ctx.output
        .kv("decoration", &format!("{:?}", config.catalog.decoration));

    ctx.output.info("[listings]");
    ctx.output.kv("store", &format!("{:?}", config.listings.store));
    ctx.output
        .kv("cancel_policy", &format!("{:?}", config.listings.cancel_policy));

    ctx.output.info("[logging]");
    ctx.output.kv("level", &config.logging.level.to_string());
    ctx.output.kv("format", &format!("{:?}", config.logging.format));

    Ok(())
}

async fn init_config(force: bool, ctx: &Context) -> Result<()> {
    let config_path = ctx.cwd.join("eco.toml");

    if config_path.exists() && !force {
        bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    fs::write(&config_path, generate_default_config())
        .with_context(|| format!("Failed to write {}", config_path.display()))?;

    ctx.output
        .success(&format!("Created: {}", config_path.display()));

    Ok(())
}

async fn validate_config(ctx: &Context) -> Result<()> {
    ctx.output.header("Validating configuration");

    let (errors, warnings) = check_config(&ctx.config);

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

/// Errors and warnings for `config`.
fn check_config(config: &MarketplaceConfig) -> (Vec<String>, Vec<String>) {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    if let Some(ref fixture) = config.catalog.fixture {
        if !fixture.exists() {
            errors.push(format!("catalog.fixture not found: {}", fixture.display()));
        }
    }

    if errors.is_empty() {
        if let Err(e) = config.validate() {
            errors.push(e.to_string());
        }
    }

    if config.listings.store == StoreKind::InMemory {
        warnings.push(
            "listings.store = \"in_memory\" keeps changes only for the life of one process"
                .to_string(),
        );
    }

    (errors, warnings)
}
