use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::network::{DEFAULT_ENDPOINT, DEFAULT_ROOM};
use crate::color::ThemeMode;
use crate::error::Result;

pub const SETTINGS_FILE: &str = "hudstats.toml";

/// User settings.
///
/// Every field has a default, so a partial file only overrides what it names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Base URL of the statistics backend
    pub api_endpoint: String,
    /// Room/category selector sent with record and search requests
    pub room: String,
    pub theme: ThemeMode,
    /// Whether the subscription tier unlocks premium stats
    pub elevated_access: bool,
    /// Directory holding persisted configuration (defaults to the platform config dir)
    pub data_dir: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_endpoint: DEFAULT_ENDPOINT.to_string(),
            room: DEFAULT_ROOM.to_string(),
            theme: ThemeMode::Light,
            elevated_access: false,
            data_dir: None,
        }
    }
}

impl Settings {
    /// Load settings from a TOML file. A missing file yields the defaults.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            debug!("No settings file at {:?}, using defaults", path);
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Directory for persisted configuration
    pub fn resolved_data_dir(&self) -> PathBuf {
        self.data_dir.clone().unwrap_or_else(default_data_dir)
    }
}

/// Platform config directory joined with `hudstats`, or `./.hudstats` when unknown
pub fn default_data_dir() -> PathBuf {
    dirs::config_dir()
        .map(|dir| dir.join("hudstats"))
        .unwrap_or_else(|| PathBuf::from(".hudstats"))
}
