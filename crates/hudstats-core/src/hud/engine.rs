use std::collections::BTreeSet;

use serde_json::Value as JsonValue;
use tracing::{debug, error, info, warn};

use super::{HudConfiguration, VisibleStat};
use crate::catalog::Section;
use crate::config::storage::HUD_CONFIG_KEY;
use crate::storage::Storage;

/// HUD configuration with write-through persistence.
///
/// Every mutation that changes the configuration writes it whole to storage
/// before returning. Storage failures are logged; the in-memory state stays
/// authoritative so the dashboard keeps rendering.
pub struct HudEngine<S: Storage> {
    storage: S,
    config: HudConfiguration,
}

impl<S: Storage> HudEngine<S> {
    /// Load the stored configuration, repairing it, or start from the default.
    pub fn load(storage: S) -> Self {
        let stored = match storage.get(HUD_CONFIG_KEY) {
            Ok(stored) => stored,
            Err(e) => {
                warn!("Failed to read HUD configuration: {}", e);
                None
            }
        };

        let mut engine = Self {
            config: stored
                .as_deref()
                .map(HudConfiguration::from_stored)
                .unwrap_or_default(),
            storage,
        };

        // Write back whenever the repair pass changed anything
        let needs_write = match stored.as_deref() {
            Some(raw) => {
                let stored_value = serde_json::from_str::<JsonValue>(raw).ok();
                let repaired_value = serde_json::to_value(&engine.config).ok();
                stored_value != repaired_value
            }
            None => true,
        };
        if needs_write {
            debug!("Persisting repaired HUD configuration");
            engine.persist();
        }

        engine
    }

    pub fn config(&self) -> &HudConfiguration {
        &self.config
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn visible_ordered_stats(
        &self,
        section: Section,
        has_elevated_access: bool,
    ) -> Vec<VisibleStat> {
        self.config.visible_ordered_stats(section, has_elevated_access)
    }

    pub fn auto_copy_stats(&self) -> &BTreeSet<String> {
        self.config.auto_copy_stats()
    }

    pub fn toggle_visibility(&mut self, section: Section, id: &str) -> bool {
        let changed = self.config.toggle_visibility(section, id);
        if changed {
            self.persist();
        }
        changed
    }

    pub fn toggle_auto_copy(&mut self, id: &str) -> bool {
        let changed = self.config.toggle_auto_copy(id);
        if changed {
            self.persist();
        }
        changed
    }

    pub fn update_order<I, T>(&mut self, section: Section, prefix: I) -> bool
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let changed = self.config.update_order(section, prefix);
        if changed {
            self.persist();
        }
        changed
    }

    pub fn reset_to_default(&mut self) {
        info!("Resetting HUD configuration to defaults");
        self.config = HudConfiguration::default();
        self.persist();
    }

    fn persist(&mut self) {
        let json = match serde_json::to_string(&self.config) {
            Ok(json) => json,
            Err(e) => {
                error!("Failed to serialize HUD configuration: {}", e);
                return;
            }
        };
        if let Err(e) = self.storage.set(HUD_CONFIG_KEY, &json) {
            error!("Failed to persist HUD configuration: {}", e);
        }
    }
}
