//! HUD layout commands.

use anyhow::{Result, bail};
use hudstats_core::{ColorEngine, HudEngine, Section, catalog};
use owo_colors::OwoColorize;

use super::hex_rgb;
use crate::context::Context;

pub fn show(ctx: &Context, section: Option<Section>, elevated: bool) -> Result<()> {
    let hud = HudEngine::load(ctx.storage());
    let colors = ColorEngine::load(ctx.storage(), ctx.settings.theme);
    let elevated = elevated || ctx.settings.elevated_access;

    let sections: Vec<Section> = match section {
        Some(s) => vec![s],
        None => Section::all().collect(),
    };

    for section in sections {
        let cells: Vec<String> = hud
            .visible_ordered_stats(section, elevated)
            .into_iter()
            .map(|stat| {
                let mut cell = stat.def.id.to_string();
                let rgb = colors.custom_color(stat.def.id).as_deref().and_then(hex_rgb);
                if let Some((r, g, b)) = rgb {
                    cell = cell.truecolor(r, g, b).to_string();
                }
                if hud.auto_copy_stats().contains(stat.def.id) {
                    cell = format!("{}*", cell);
                }
                if stat.is_blocked {
                    cell = format!("{} (locked)", cell).dimmed().to_string();
                }
                cell
            })
            .collect();
        println!("{:<9} {}", section.title().bold(), cells.join("  "));
    }
    println!("{}", "* auto-copy".dimmed());
    Ok(())
}

pub fn toggle(ctx: &Context, section: Section, id: &str) -> Result<()> {
    if !catalog::is_valid_for_section(section, id) {
        bail!("Unknown stat {} in section {}", id, section);
    }
    let mut hud = HudEngine::load(ctx.storage());
    hud.toggle_visibility(section, id);
    let visible = hud.config().is_visible(section, id);
    println!("{} is now {}", id, if visible { "visible" } else { "hidden" });
    Ok(())
}

pub fn auto_copy(ctx: &Context, id: &str) -> Result<()> {
    if catalog::find(id).is_none() {
        bail!("Unknown stat {}", id);
    }
    let mut hud = HudEngine::load(ctx.storage());
    hud.toggle_auto_copy(id);
    let enabled = hud.config().is_auto_copy(id);
    println!(
        "{} {} auto-copy",
        id,
        if enabled { "added to" } else { "removed from" }
    );
    Ok(())
}

pub fn order(ctx: &Context, section: Section, ids: &[String]) -> Result<()> {
    let mut hud = HudEngine::load(ctx.storage());
    hud.update_order(section, ids);
    println!("{}: {}", section.title(), hud.config().order(section).join(" "));
    Ok(())
}

pub fn reset(ctx: &Context) -> Result<()> {
    let mut hud = HudEngine::load(ctx.storage());
    hud.reset_to_default();
    println!("HUD layout restored to defaults");
    Ok(())
}
