//! Configuration management commands.

use std::fs;

use anyhow::{bail, Result};

use super::{ConfigArgs, ConfigCommand};
use crate::config::{generate_default_config, CONFIG_NAMES};
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
    match &ctx.config_path {
        Some(path) => ctx.output.kv("file", &path.display().to_string()),
        None => ctx.output.kv("file", "(defaults)"),
    }

    let catalog = ctx.catalog();
    let settings = catalog.settings();
    let lang = ctx.language;

    ctx.output.plain("");
    ctx.output.plain("[store]");
    ctx.output.kv("store_name", settings.store_name.get(lang));
    ctx.output.kv("contact_phone", &settings.contact_phone);
    ctx.output.kv("contact_whatsapp", &settings.contact_whatsapp);
    ctx.output.kv("address", settings.address.get(lang));
    ctx.output.kv("home_delivery_price", &settings.home_delivery_price.to_string());
    ctx.output.kv("office_delivery_price", &settings.office_delivery_price.to_string());

    ctx.output.plain("");
    ctx.output.plain("[catalog]");
    ctx.output.kv("seed", &ctx.config.catalog.seed.to_string());
    ctx.output.kv(
        "wilayas",
        ctx.config.catalog.wilayas.as_deref().unwrap_or("(built-in)"),
    );

    ctx.output.plain("");
    ctx.output.plain("[session]");
    ctx.output.kv("language", ctx.language.code());
    ctx.output.kv("data_dir", &ctx.data_dir().display().to_string());

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

    fs::write(&config_path, generate_default_config())?;
    ctx.output.success(&format!("Created: {}", config_path.display()));

    Ok(())
}
