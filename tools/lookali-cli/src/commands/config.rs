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
    }
}

fn show_config(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    ctx.output.header("Current Configuration");
    ctx.output.kv("location", &ctx.config.location);

    ctx.output.info("[catalog]");
    ctx.output.kv(
        "path",
        ctx.config.catalog.path.as_deref().unwrap_or("(bundled demo catalog)"),
    );

    ctx.output.info("[browse]");
    ctx.output.kv("page_size", &ctx.config.browse.page_size.to_string());
    ctx.output.kv("default_sort", ctx.config.default_sort().as_str());

    ctx.output.info("[contact]");
    ctx.output.kv("fallback_phone", &ctx.config.contact.fallback_phone);
    ctx.output.kv("default_delivery", &ctx.config.contact.default_delivery);
    ctx.output.kv("share_base_url", &ctx.config.contact.share_base_url);

    ctx.output.info(&format!(
        "Catalog: {} produtos, {} serviços, {} vendedores, {} estadias",
        ctx.catalog.products.len(),
        ctx.catalog.services.len(),
        ctx.catalog.sellers.len(),
        ctx.catalog.stays.len()
    ));
    Ok(())
}

fn init_config(force: bool, ctx: &Context) -> Result<()> {
    let config_path = ctx.cwd.join("lookali.toml");

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
