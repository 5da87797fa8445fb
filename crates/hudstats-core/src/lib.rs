//! # hudstats-core
//!
//! Client-side core of the poker statistics dashboard.
//!
//! This crate provides:
//! - The static stat catalog (sections, labels, source fields, premium gating)
//! - HUD configuration: visibility, ordering and auto-copy, persisted with repair on load
//! - Custom stat colors with a light/dark palette and import/export
//! - Stat selection and the `ABBR:val/ABBR:val` clipboard format
//! - Debounced player-name suggestions
//! - The REST client, session provider and durable storage collaborators

pub mod catalog;
pub mod color;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod hud;
pub mod network;
pub mod notice;
pub mod search;
pub mod selection;
pub mod session;
pub mod storage;

// Re-export from catalog module
pub use catalog::{FREE_TIER_ALLOWLIST, Section, StatDefinition, StatKind};

// Re-export from color module
pub use color::{ColorEngine, ColorPair, CustomColorConfiguration, PaletteEntry, ThemeMode};

// Re-export from config module
pub use config::Settings;

// Re-export from dashboard module
pub use dashboard::{PlayerDashboard, StatValue};

// Re-export from error module
pub use error::{Error, Result};

// Re-export from hud module
pub use hud::{HudConfiguration, HudEngine, VisibleStat};

// Re-export from network module
pub use network::{ApiClient, PlayerRecord, RecordSource, SuggestionSource};

// Re-export from notice module
pub use notice::{Notice, NoticeKind, NoticeSeverity};

// Re-export from search module
pub use search::{Debouncer, SearchSuggestions};

// Re-export from selection module
pub use selection::{Clipboard, SelectionState, StatSelection, serialize_for_clipboard};

// Re-export from session module
pub use session::{SessionProvider, StaticSession, StoredSession};

// Re-export from storage module
pub use storage::{FileStorage, MemoryStorage, Storage};
