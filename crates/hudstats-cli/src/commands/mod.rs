//! CLI command implementations.

pub mod catalog;
pub mod colors;
pub mod copy;
pub mod hud;
pub mod search;
pub mod session;

use hudstats_core::{Notice, NoticeSeverity};
use owo_colors::OwoColorize;

/// Print a user notice on stderr, colored by severity
pub fn print_notice(notice: &Notice) {
    match notice.severity {
        NoticeSeverity::Success => eprintln!("{}", notice.green()),
        NoticeSeverity::Normal => eprintln!("{}", notice.yellow()),
        NoticeSeverity::Critical => eprintln!("{}", notice.red().bold()),
    }
}

/// Parse `#RRGGBB` into its components
pub fn hex_rgb(hex: &str) -> Option<(u8, u8, u8)> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(digits.get(i..i + 2)?, 16).ok();
    Some((channel(0)?, channel(2)?, channel(4)?))
}
