//! Catalog listing.

use anyhow::Result;
use hudstats_core::{FREE_TIER_ALLOWLIST, Section, catalog};
use owo_colors::OwoColorize;

pub fn run(section: Option<Section>) -> Result<()> {
    let sections: Vec<Section> = match section {
        Some(s) => vec![s],
        None => Section::all().collect(),
    };

    for section in sections {
        println!("{}", section.title().bold());
        for def in catalog::stats_in_section(section) {
            let tier = if !def.premium {
                String::new()
            } else if FREE_TIER_ALLOWLIST.contains(&def.id) {
                "premium, free preview".yellow().to_string()
            } else {
                "premium".yellow().to_string()
            };
            println!(
                "  {:<6} {:<22} {}  {}",
                def.id,
                def.label,
                def.tooltip.dimmed(),
                tier
            );
        }
    }
    Ok(())
}
