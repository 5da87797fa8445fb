use std::collections::{BTreeMap, BTreeSet, HashSet};

use serde::Serialize;
use serde_json::Value as JsonValue;
use tracing::warn;

use crate::catalog::{self, Section, StatDefinition};

/// Visible stats shown out of the box, per section.
const DEFAULT_VISIBLE: &[(Section, &[&str])] = &[
    (Section::Preflop, &["VPIP", "PFR", "3Bet"]),
    (Section::Postflop, &["AF", "WWSF", "Hands"]),
    (Section::Flop, &["CB", "FCB"]),
    (Section::Turn, &["CBT"]),
    (Section::River, &["CBR"]),
    (Section::Showdown, &["WTSD", "WSD"]),
];

const DEFAULT_AUTO_COPY: &[&str] = &["VPIP", "PFR", "3Bet"];

/// A stat to display, with its lock state for the current viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibleStat {
    pub def: &'static StatDefinition,
    pub is_blocked: bool,
}

/// Persisted HUD layout.
///
/// Only constructed through [`HudConfiguration::default`] or the repair pass,
/// so every order is a complete permutation of its section's catalog ids and
/// every visible id appears in its section's order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HudConfiguration {
    visible_stats: BTreeMap<Section, BTreeSet<String>>,
    stat_order: BTreeMap<Section, Vec<String>>,
    auto_copy_stats: BTreeSet<String>,
}

impl Default for HudConfiguration {
    fn default() -> Self {
        let visible_stats = Section::all()
            .map(|section| (section, default_visible(section)))
            .collect();
        let stat_order = Section::all()
            .map(|section| (section, catalog_order(section)))
            .collect();
        let auto_copy_stats = DEFAULT_AUTO_COPY.iter().map(|id| id.to_string()).collect();

        Self {
            visible_stats,
            stat_order,
            auto_copy_stats,
        }
    }
}

impl HudConfiguration {
    /// Parse a stored configuration and repair it.
    ///
    /// Never fails: unreadable input falls back to the default, unknown or
    /// duplicate ids are dropped, and missing ids are appended to each order.
    pub fn from_stored(raw: &str) -> Self {
        match serde_json::from_str::<JsonValue>(raw) {
            Ok(value) => Self::repair(&value),
            Err(e) => {
                warn!("Stored HUD configuration is not JSON ({}), using defaults", e);
                Self::default()
            }
        }
    }

    /// Build a valid configuration from an untrusted JSON value.
    pub fn repair(value: &JsonValue) -> Self {
        let Some(obj) = value.as_object() else {
            warn!("Stored HUD configuration is not an object, using defaults");
            return Self::default();
        };

        let stored_visible = obj.get("visibleStats").and_then(JsonValue::as_object);
        let stored_order = obj.get("statOrder").and_then(JsonValue::as_object);

        let mut visible_stats = BTreeMap::new();
        let mut stat_order = BTreeMap::new();

        for section in Section::all() {
            let visible = match stored_visible.and_then(|m| m.get(section.key())) {
                Some(ids) => read_ids(ids, Some(section)).into_iter().collect(),
                None => default_visible(section),
            };
            visible_stats.insert(section, visible);

            let prefix = stored_order
                .and_then(|m| m.get(section.key()))
                .map(|ids| read_ids(ids, Some(section)))
                .unwrap_or_default();
            stat_order.insert(section, complete_order(section, prefix));
        }

        let auto_copy_stats = match obj.get("autoCopyStats") {
            Some(ids) => read_ids(ids, None).into_iter().collect(),
            None => DEFAULT_AUTO_COPY.iter().map(|id| id.to_string()).collect(),
        };

        Self {
            visible_stats,
            stat_order,
            auto_copy_stats,
        }
    }

    /// Visible stats of `section` in display order.
    ///
    /// Follows `statOrder`; a visible id missing from the order is appended.
    pub fn visible_ordered_stats(
        &self,
        section: Section,
        has_elevated_access: bool,
    ) -> Vec<VisibleStat> {
        let Some(visible) = self.visible_stats.get(&section) else {
            return Vec::new();
        };
        let order = self.order(section);

        let in_order = order.iter().filter(|id| visible.contains(id.as_str()));
        let unordered = visible.iter().filter(|id| !order.contains(id));

        in_order
            .chain(unordered)
            .filter_map(|id| catalog::find_in_section(section, id))
            .map(|def| VisibleStat {
                def,
                is_blocked: def.is_blocked_for(has_elevated_access),
            })
            .collect()
    }

    pub fn order(&self, section: Section) -> &[String] {
        self.stat_order
            .get(&section)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn is_visible(&self, section: Section, id: &str) -> bool {
        self.visible_stats
            .get(&section)
            .is_some_and(|ids| ids.contains(id))
    }

    pub fn visible_ids(&self, section: Section) -> impl Iterator<Item = &str> {
        self.visible_stats
            .get(&section)
            .into_iter()
            .flatten()
            .map(String::as_str)
    }

    pub fn auto_copy_stats(&self) -> &BTreeSet<String> {
        &self.auto_copy_stats
    }

    pub fn is_auto_copy(&self, id: &str) -> bool {
        self.auto_copy_stats.contains(id)
    }

    /// Flip visibility of `id` in `section`. Returns false (and changes nothing)
    /// when `id` is not a catalog stat of that section.
    pub fn toggle_visibility(&mut self, section: Section, id: &str) -> bool {
        if !catalog::is_valid_for_section(section, id) {
            warn!("Ignoring visibility toggle for unknown stat {:?} in {}", id, section);
            return false;
        }

        let visible = self.visible_stats.entry(section).or_default();
        if !visible.remove(id) {
            visible.insert(id.to_string());
        }

        let order = self.stat_order.entry(section).or_default();
        if !order.iter().any(|o| o == id) {
            order.push(id.to_string());
        }
        true
    }

    /// Flip auto-copy membership of `id`. Returns false for unknown ids.
    pub fn toggle_auto_copy(&mut self, id: &str) -> bool {
        if catalog::find(id).is_none() {
            warn!("Ignoring auto-copy toggle for unknown stat {:?}", id);
            return false;
        }

        if !self.auto_copy_stats.remove(id) {
            self.auto_copy_stats.insert(id.to_string());
        }
        true
    }

    /// Replace the order of `section` with `prefix` followed by every remaining
    /// catalog id. Unknown and repeated ids in `prefix` are dropped.
    ///
    /// Returns whether the order changed.
    pub fn update_order<I, T>(&mut self, section: Section, prefix: I) -> bool
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let mut accepted = Vec::new();
        for id in prefix {
            let id = id.as_ref();
            if catalog::is_valid_for_section(section, id) {
                accepted.push(id.to_string());
            } else {
                warn!("Dropping unknown stat {:?} from {} order", id, section);
            }
        }

        let order = complete_order(section, accepted);
        if self.order(section) == order.as_slice() {
            return false;
        }
        self.stat_order.insert(section, order);
        true
    }
}

fn default_visible(section: Section) -> BTreeSet<String> {
    DEFAULT_VISIBLE
        .iter()
        .find(|(s, _)| *s == section)
        .map(|(_, ids)| ids.iter().map(|id| id.to_string()).collect())
        .unwrap_or_default()
}

fn catalog_order(section: Section) -> Vec<String> {
    catalog::ids_in_section(section)
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// `prefix` without duplicates, then the section's remaining catalog ids.
fn complete_order(section: Section, prefix: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut order: Vec<String> = prefix
        .into_iter()
        .filter(|id| seen.insert(id.clone()))
        .collect();

    for id in catalog::ids_in_section(section) {
        if seen.insert(id.to_string()) {
            order.push(id.to_string());
        }
    }
    order
}

/// Read a JSON array of ids, keeping valid, first-seen entries.
///
/// With a section, ids must belong to it; without one, any catalog id passes.
fn read_ids(value: &JsonValue, section: Option<Section>) -> Vec<String> {
    let Some(items) = value.as_array() else {
        warn!("Expected an array of stat ids, found {}", value);
        return Vec::new();
    };

    let mut seen = HashSet::new();
    let mut ids = Vec::new();
    for item in items {
        let Some(id) = item.as_str() else {
            warn!("Dropping non-string stat id {}", item);
            continue;
        };
        let valid = match section {
            Some(section) => catalog::is_valid_for_section(section, id),
            None => catalog::find(id).is_some(),
        };
        if !valid {
            warn!("Dropping unknown stat id {:?}", id);
            continue;
        }
        if seen.insert(id) {
            ids.push(id.to_string());
        }
    }
    ids
}
