//! HUD configuration.
//!
//! Decides which stats are visible in each section, in which order, and
//! which are pre-selected for clipboard export:
//! - `HudConfiguration` - the persisted state and its repair pass
//! - `HudEngine` - write-through persistence around the configuration

mod config;
mod engine;

pub use config::{HudConfiguration, VisibleStat};
pub use engine::HudEngine;
