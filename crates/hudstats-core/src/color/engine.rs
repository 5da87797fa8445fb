use serde_json::Value as JsonValue;
use tracing::{debug, error, info, warn};

use super::{CustomColorConfiguration, ThemeMode};
use crate::config::storage::CUSTOM_COLORS_KEY;
use crate::error::Result;
use crate::storage::Storage;

/// Custom colors with write-through persistence and an ambient theme mode.
pub struct ColorEngine<S: Storage> {
    storage: S,
    config: CustomColorConfiguration,
    mode: ThemeMode,
}

impl<S: Storage> ColorEngine<S> {
    /// Load the stored configuration, keeping its valid parts.
    ///
    /// A stored value that needed repair is rewritten in its repaired form.
    pub fn load(storage: S, mode: ThemeMode) -> Self {
        let stored = match storage.get(CUSTOM_COLORS_KEY) {
            Ok(stored) => stored,
            Err(e) => {
                warn!("Failed to read color configuration: {}", e);
                None
            }
        };

        let mut engine = Self {
            config: stored
                .as_deref()
                .map(CustomColorConfiguration::from_stored)
                .unwrap_or_default(),
            storage,
            mode,
        };

        if let Some(raw) = stored.as_deref() {
            let stored_value = serde_json::from_str::<JsonValue>(raw).ok();
            let repaired_value = serde_json::to_value(&engine.config).ok();
            if stored_value != repaired_value {
                debug!("Persisting repaired color configuration");
                engine.persist();
            }
        }

        engine
    }

    pub fn config(&self) -> &CustomColorConfiguration {
        &self.config
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: ThemeMode) {
        self.mode = mode;
    }

    pub fn has_custom_color(&self, id: &str) -> bool {
        self.config.has_custom_color(id)
    }

    /// Color for `id` in the current mode, if it has one
    pub fn custom_color(&self, id: &str) -> Option<String> {
        self.config.custom_color(id, self.mode)
    }

    pub fn toggle_custom_stat(&mut self, id: &str) -> bool {
        let changed = self.config.toggle_custom_stat(id);
        if changed {
            self.persist();
        }
        changed
    }

    pub fn set_stat_color(&mut self, id: &str, color_name: &str) -> bool {
        let changed = self.config.set_stat_color(id, color_name);
        if changed {
            self.persist();
        }
        changed
    }

    pub fn set_global_color(&mut self, color_name: &str) -> bool {
        let changed = self.config.set_global_color(color_name);
        if changed {
            self.persist();
        }
        changed
    }

    pub fn toggle_global_color(&mut self) {
        self.config.toggle_global_color();
        self.persist();
    }

    pub fn apply_color_to_all_custom(&mut self, color_name: &str) -> bool {
        let changed = self.config.apply_color_to_all_custom(color_name);
        if changed {
            self.persist();
        }
        changed
    }

    pub fn clear_all_customizations(&mut self) {
        info!("Clearing all custom colors");
        self.config = CustomColorConfiguration::default();
        self.persist();
    }

    /// Serialize the configuration for transport
    pub fn export_config(&self) -> String {
        // Plain maps, sets and strings always serialize
        serde_json::to_string_pretty(&self.config).unwrap_or_default()
    }

    /// Replace the configuration with an exported snapshot.
    ///
    /// On rejection the current configuration is left untouched.
    pub fn import_config(&mut self, text: &str) -> Result<()> {
        let imported = CustomColorConfiguration::parse_snapshot(text).inspect_err(|e| {
            warn!("{}", e);
        })?;
        info!(
            "Imported color configuration ({} custom stats)",
            imported.custom_stats().len()
        );
        self.config = imported;
        self.persist();
        Ok(())
    }

    fn persist(&mut self) {
        let json = match serde_json::to_string(&self.config) {
            Ok(json) => json,
            Err(e) => {
                error!("Failed to serialize color configuration: {}", e);
                return;
            }
        };
        if let Err(e) = self.storage.set(CUSTOM_COLORS_KEY, &json) {
            error!("Failed to persist color configuration: {}", e);
        }
    }
}
