//! Custom color commands.

use std::fs;
use std::path::Path;

use anyhow::{Context as _, Result, bail};
use hudstats_core::color::palette::{self, PALETTE};
use hudstats_core::{ColorEngine, FileStorage, Notice, catalog};
use owo_colors::OwoColorize;

use super::{hex_rgb, print_notice};
use crate::context::Context;

fn engine(ctx: &Context) -> ColorEngine<FileStorage> {
    ColorEngine::load(ctx.storage(), ctx.settings.theme)
}

fn swatch(label: &str, hex: &str) -> String {
    match hex_rgb(hex) {
        Some((r, g, b)) => label.truecolor(r, g, b).to_string(),
        None => label.to_string(),
    }
}

fn require_stat(id: &str) -> Result<()> {
    if catalog::find(id).is_none() {
        bail!("Unknown stat {}", id);
    }
    Ok(())
}

fn require_color(name: &str) -> Result<()> {
    if palette::find(name).is_none() {
        let names: Vec<&str> = PALETTE.iter().map(|p| p.name).collect();
        bail!("Unknown color {} (available: {})", name, names.join(", "));
    }
    Ok(())
}

pub fn list(ctx: &Context) -> Result<()> {
    let engine = engine(ctx);
    let mode = engine.mode();

    println!("{}", "Palette".bold());
    for entry in PALETTE {
        println!(
            "  {:<8} {}  light {}  dark {}",
            entry.name,
            swatch("■■■", entry.resolve(mode)),
            entry.light,
            entry.dark
        );
    }

    let config = engine.config();
    println!();
    match config.global_color() {
        Some(global) => println!(
            "Global color: {} ({})",
            swatch(global.name, global.resolve(mode)),
            if config.use_global_color() { "on" } else { "off" }
        ),
        None => println!("Global color: none"),
    }

    if config.custom_stats().is_empty() {
        println!("No custom stats");
        return Ok(());
    }
    println!("{}", "Custom stats".bold());
    for id in config.custom_stats() {
        match engine.custom_color(id) {
            Some(hex) => println!("  {:<8} {}", id, swatch(&hex, &hex)),
            None => println!("  {:<8} {}", id, "unset".dimmed()),
        }
    }
    Ok(())
}

pub fn toggle(ctx: &Context, id: &str) -> Result<()> {
    require_stat(id)?;
    let mut engine = engine(ctx);
    engine.toggle_custom_stat(id);
    let custom = engine.config().custom_stats().contains(id);
    println!("{} {} custom stats", id, if custom { "added to" } else { "removed from" });
    Ok(())
}

pub fn set(ctx: &Context, id: &str, color: &str) -> Result<()> {
    require_stat(id)?;
    require_color(color)?;
    engine(ctx).set_stat_color(id, color);
    println!("{} colored {}", id, color);
    Ok(())
}

pub fn global(ctx: &Context, color: &str) -> Result<()> {
    require_color(color)?;
    engine(ctx).set_global_color(color);
    println!("Global color set to {}", color);
    Ok(())
}

pub fn use_global(ctx: &Context) -> Result<()> {
    let mut engine = engine(ctx);
    engine.toggle_global_color();
    let on = engine.config().use_global_color();
    println!("Global color override {}", if on { "on" } else { "off" });
    Ok(())
}

pub fn apply_all(ctx: &Context, color: &str) -> Result<()> {
    require_color(color)?;
    let mut engine = engine(ctx);
    engine.apply_color_to_all_custom(color);
    println!(
        "Applied {} to {} custom stats",
        color,
        engine.config().custom_stats().len()
    );
    Ok(())
}

pub fn clear(ctx: &Context) -> Result<()> {
    engine(ctx).clear_all_customizations();
    print_notice(&Notice::done("Custom colors cleared"));
    Ok(())
}

pub fn export(ctx: &Context, output: Option<&Path>) -> Result<()> {
    let json = engine(ctx).export_config();
    match output {
        Some(path) => {
            fs::write(path, &json)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            print_notice(&Notice::done(format!("Exported to {}", path.display())));
        }
        None => println!("{}", json),
    }
    Ok(())
}

pub fn import(ctx: &Context, file: &Path) -> Result<()> {
    let text = fs::read_to_string(file)
        .with_context(|| format!("Failed to read {}", file.display()))?;
    let mut engine = engine(ctx);
    if let Err(e) = engine.import_config(&text) {
        let notice = Notice::import_rejected(&e);
        print_notice(&notice);
        bail!("{}", notice);
    }
    print_notice(&Notice::done(format!(
        "Imported {} custom stats",
        engine.config().custom_stats().len()
    )));
    Ok(())
}
