//! Copy a player's selected stats in clipboard format.

use anyhow::{Result, bail};
use hudstats_core::selection::copy_to_clipboard;
use hudstats_core::{HudEngine, PlayerDashboard};
use tracing::debug;

use super::print_notice;
use crate::clipboard::StdoutClipboard;
use crate::context::Context;

/// Split `TITLE=VALUE`
fn parse_addition(raw: &str) -> Result<(&str, &str)> {
    match raw.split_once('=') {
        Some((title, value)) if !title.trim().is_empty() => Ok((title.trim(), value.trim())),
        _ => bail!("Expected TITLE=VALUE, got {:?}", raw),
    }
}

pub async fn run(ctx: &Context, player: &str, add: &[String], remove: &[String]) -> Result<()> {
    let additions = add
        .iter()
        .map(|raw| parse_addition(raw))
        .collect::<Result<Vec<_>>>()?;

    let hud = HudEngine::load(ctx.storage());
    let client = ctx.api_client()?;

    let mut dashboard = PlayerDashboard::new();
    if let Err(notice) = dashboard
        .load_player(&client, player, hud.auto_copy_stats())
        .await
    {
        print_notice(&notice);
        bail!("{}", notice);
    }

    let selection = dashboard.selection_mut();
    for title in remove {
        if selection.state().contains(title) {
            selection.toggle(title, "");
        }
    }
    for (title, value) in additions {
        if !selection.state().contains(title) {
            selection.toggle(title, value);
        }
    }
    debug!("Selection has {} entries", selection.state().len());

    if let Err(notice) = copy_to_clipboard(dashboard.selection().state(), &mut StdoutClipboard) {
        print_notice(&notice);
    }
    Ok(())
}
