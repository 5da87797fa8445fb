//! Custom stat colors.
//!
//! - `palette` - the fixed named colors with light, dark and tint variants
//! - `CustomColorConfiguration` - persisted per-stat and global color choices
//! - `ColorEngine` - write-through persistence, theme mode, import/export

mod config;
mod engine;
pub mod palette;

pub use config::{ColorPair, CustomColorConfiguration};
pub use engine::ColorEngine;
pub use palette::{PaletteEntry, ThemeMode};
