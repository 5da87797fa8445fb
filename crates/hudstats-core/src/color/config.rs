use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use tracing::warn;

use super::palette::{self, PaletteEntry, ThemeMode};
use crate::catalog;
use crate::error::{Error, Result};

/// Light and dark variants of one color choice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ColorPair {
    pub light: String,
    pub dark: String,
}

impl ColorPair {
    pub fn resolve(&self, mode: ThemeMode) -> &str {
        match mode {
            ThemeMode::Light => &self.light,
            ThemeMode::Dark => &self.dark,
        }
    }
}

/// Persisted custom color choices.
///
/// `color_mapping` only ever holds ids that are in `custom_stats`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomColorConfiguration {
    custom_stats: BTreeSet<String>,
    color_mapping: BTreeMap<String, ColorPair>,
    use_global_color: bool,
    /// Palette name
    global_custom_color: Option<String>,
}

/// Wire shape accepted by import. Only `globalCustomColor` may be omitted.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct ColorSnapshot {
    custom_stats: Vec<String>,
    color_mapping: BTreeMap<String, ColorPair>,
    use_global_color: bool,
    global_custom_color: Option<String>,
}

impl CustomColorConfiguration {
    /// Parse and validate an exported snapshot. Any deviation is rejected
    /// with a reason; nothing is partially accepted.
    pub fn parse_snapshot(text: &str) -> Result<Self> {
        let snapshot: ColorSnapshot = serde_json::from_str(text)
            .map_err(|e| Error::ImportRejected(format!("not a color configuration: {}", e)))?;

        let mut custom_stats = BTreeSet::new();
        for id in snapshot.custom_stats {
            if catalog::find(&id).is_none() {
                return Err(Error::ImportRejected(format!("unknown stat '{}'", id)));
            }
            custom_stats.insert(id);
        }

        for (id, pair) in &snapshot.color_mapping {
            if !custom_stats.contains(id) {
                return Err(Error::ImportRejected(format!(
                    "color for '{}' but it is not in customStats",
                    id
                )));
            }
            if !palette::is_hex_color(&pair.light) || !palette::is_hex_color(&pair.dark) {
                return Err(Error::ImportRejected(format!(
                    "color for '{}' is not a #RRGGBB pair",
                    id
                )));
            }
        }

        let global_custom_color = match snapshot.global_custom_color {
            Some(name) => {
                let entry = palette::find(&name).ok_or_else(|| {
                    Error::ImportRejected(format!("unknown global color '{}'", name))
                })?;
                Some(entry.name.to_string())
            }
            None => None,
        };

        Ok(Self {
            custom_stats,
            color_mapping: snapshot.color_mapping,
            use_global_color: snapshot.use_global_color,
            global_custom_color,
        })
    }

    /// Parse stored state leniently, keeping whatever is valid.
    pub fn from_stored(raw: &str) -> Self {
        let value = match serde_json::from_str::<JsonValue>(raw) {
            Ok(value) => value,
            Err(e) => {
                warn!("Stored color configuration is not JSON ({}), starting empty", e);
                return Self::default();
            }
        };
        let Some(obj) = value.as_object() else {
            warn!("Stored color configuration is not an object, starting empty");
            return Self::default();
        };

        let custom_stats: BTreeSet<String> = obj
            .get("customStats")
            .and_then(JsonValue::as_array)
            .into_iter()
            .flatten()
            .filter_map(JsonValue::as_str)
            .filter(|id| catalog::find(id).is_some())
            .map(str::to_string)
            .collect();

        let color_mapping = obj
            .get("colorMapping")
            .and_then(JsonValue::as_object)
            .into_iter()
            .flatten()
            .filter(|(id, _)| custom_stats.contains(id.as_str()))
            .filter_map(|(id, pair)| {
                let pair: ColorPair = serde_json::from_value(pair.clone()).ok()?;
                let valid = palette::is_hex_color(&pair.light) && palette::is_hex_color(&pair.dark);
                valid.then(|| (id.clone(), pair))
            })
            .collect();

        let use_global_color = obj
            .get("useGlobalColor")
            .and_then(JsonValue::as_bool)
            .unwrap_or(false);

        let global_custom_color = obj
            .get("globalCustomColor")
            .and_then(JsonValue::as_str)
            .and_then(palette::find)
            .map(|entry| entry.name.to_string());

        Self {
            custom_stats,
            color_mapping,
            use_global_color,
            global_custom_color,
        }
    }

    pub fn custom_stats(&self) -> &BTreeSet<String> {
        &self.custom_stats
    }

    pub fn color_mapping(&self) -> &BTreeMap<String, ColorPair> {
        &self.color_mapping
    }

    pub fn use_global_color(&self) -> bool {
        self.use_global_color
    }

    pub fn global_color(&self) -> Option<&'static PaletteEntry> {
        self.global_custom_color.as_deref().and_then(palette::find)
    }

    pub fn has_custom_color(&self, id: &str) -> bool {
        self.custom_stats.contains(id)
    }

    /// Color to draw `id` with, resolved for `mode`.
    ///
    /// An active global color wins over the per-stat mapping.
    pub fn custom_color(&self, id: &str, mode: ThemeMode) -> Option<String> {
        if !self.custom_stats.contains(id) {
            return None;
        }
        if self.use_global_color
            && let Some(global) = self.global_color()
        {
            return Some(global.resolve(mode).to_string());
        }
        self.color_mapping
            .get(id)
            .map(|pair| pair.resolve(mode).to_string())
    }

    /// Add or remove `id`. Removal also drops its color.
    pub fn toggle_custom_stat(&mut self, id: &str) -> bool {
        if catalog::find(id).is_none() {
            warn!("Ignoring custom color toggle for unknown stat {:?}", id);
            return false;
        }
        if self.custom_stats.remove(id) {
            self.color_mapping.remove(id);
        } else {
            self.custom_stats.insert(id.to_string());
        }
        true
    }

    /// Color `id` with a palette color, flagging it as custom if needed.
    pub fn set_stat_color(&mut self, id: &str, color_name: &str) -> bool {
        let Some(entry) = palette::find(color_name) else {
            warn!("Ignoring unknown palette color {:?}", color_name);
            return false;
        };
        if catalog::find(id).is_none() {
            warn!("Ignoring color for unknown stat {:?}", id);
            return false;
        }
        self.custom_stats.insert(id.to_string());
        self.color_mapping.insert(id.to_string(), entry.pair());
        true
    }

    pub fn set_global_color(&mut self, color_name: &str) -> bool {
        let Some(entry) = palette::find(color_name) else {
            warn!("Ignoring unknown palette color {:?}", color_name);
            return false;
        };
        self.global_custom_color = Some(entry.name.to_string());
        true
    }

    pub fn toggle_global_color(&mut self) {
        self.use_global_color = !self.use_global_color;
    }

    /// Give every custom stat the same palette color.
    pub fn apply_color_to_all_custom(&mut self, color_name: &str) -> bool {
        let Some(entry) = palette::find(color_name) else {
            warn!("Ignoring unknown palette color {:?}", color_name);
            return false;
        };
        for id in &self.custom_stats {
            self.color_mapping.insert(id.clone(), entry.pair());
        }
        true
    }
}
