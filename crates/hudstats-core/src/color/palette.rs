use serde::{Deserialize, Serialize};
use strum::{EnumString, IntoStaticStr};

use super::ColorPair;

/// Presentation mode a color is resolved for.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, EnumString, IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

/// A named palette color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaletteEntry {
    pub name: &'static str,
    /// Foreground on light backgrounds
    pub light: &'static str,
    /// Foreground on dark backgrounds
    pub dark: &'static str,
    /// Cell background tint
    pub background: &'static str,
}

impl PaletteEntry {
    /// Concrete color for the given mode
    pub fn resolve(&self, mode: ThemeMode) -> &'static str {
        match mode {
            ThemeMode::Light => self.light,
            ThemeMode::Dark => self.dark,
        }
    }

    pub fn pair(&self) -> ColorPair {
        ColorPair {
            light: self.light.to_string(),
            dark: self.dark.to_string(),
        }
    }
}

#[rustfmt::skip]
pub const PALETTE: &[PaletteEntry] = &[
    PaletteEntry { name: "red", light: "#C62828", dark: "#EF5350", background: "#FDECEA" },
    PaletteEntry { name: "orange", light: "#E65100", dark: "#FFA726", background: "#FFF3E0" },
    PaletteEntry { name: "yellow", light: "#9A7D0A", dark: "#FFEE58", background: "#FFFDE7" },
    PaletteEntry { name: "green", light: "#2E7D32", dark: "#66BB6A", background: "#E8F5E9" },
    PaletteEntry { name: "teal", light: "#00695C", dark: "#26A69A", background: "#E0F2F1" },
    PaletteEntry { name: "blue", light: "#1565C0", dark: "#42A5F5", background: "#E3F2FD" },
    PaletteEntry { name: "purple", light: "#6A1B9A", dark: "#AB47BC", background: "#F3E5F5" },
    PaletteEntry { name: "pink", light: "#AD1457", dark: "#EC407A", background: "#FCE4EC" },
    PaletteEntry { name: "gray", light: "#424242", dark: "#BDBDBD", background: "#F5F5F5" },
];

/// Look up a palette color by name, ignoring case
pub fn find(name: &str) -> Option<&'static PaletteEntry> {
    PALETTE.iter().find(|e| e.name.eq_ignore_ascii_case(name.trim()))
}

/// Palette entry whose light/dark variants equal `pair`
pub fn find_by_pair(pair: &ColorPair) -> Option<&'static PaletteEntry> {
    PALETTE.iter().find(|e| {
        e.light.eq_ignore_ascii_case(&pair.light) && e.dark.eq_ignore_ascii_case(&pair.dark)
    })
}

/// `#RRGGBB`
pub fn is_hex_color(s: &str) -> bool {
    s.len() == 7 && s.starts_with('#') && s[1..].chars().all(|c| c.is_ascii_hexdigit())
}
