//! Stat catalog.
//!
//! Every statistic the dashboard knows about, grouped by section:
//! - `Section` - the street or phase a stat belongs to
//! - `StatDefinition` - id, label, record field, premium flag, tooltip
//! - Free-tier allowlist and clipboard abbreviation registry

mod section;
mod stats;

pub use section::Section;
pub use stats::{StatDefinition, StatKind};

use stats::STATS;

/// Premium stats that free-tier accounts may still view.
pub const FREE_TIER_ALLOWLIST: &[&str] = &["3Bet", "F3B", "AFq"];

/// Clipboard abbreviations for titles that are not catalog ids or labels.
///
/// These are the ad-hoc titles shown in the player summary header.
const EXTRA_ABBREVIATIONS: &[(&str, &str)] = &[
    ("Ganancias USD", "Win$"),
    ("Ganancias BB/100", "BB100"),
    ("Manos", "Hands"),
    ("Total Hands", "Hands"),
];

/// All catalog entries in display order
pub fn all() -> &'static [StatDefinition] {
    STATS
}

/// Find a stat by id, regardless of section
pub fn find(id: &str) -> Option<&'static StatDefinition> {
    STATS.iter().find(|s| s.id == id)
}

/// Find a stat by id, only if it belongs to `section`
pub fn find_in_section(section: Section, id: &str) -> Option<&'static StatDefinition> {
    find(id).filter(|s| s.section == section)
}

pub fn is_valid_for_section(section: Section, id: &str) -> bool {
    find_in_section(section, id).is_some()
}

/// Stats of one section in catalog order
pub fn stats_in_section(section: Section) -> impl Iterator<Item = &'static StatDefinition> {
    STATS.iter().filter(move |s| s.section == section)
}

/// Ids of one section in catalog order
pub fn ids_in_section(section: Section) -> Vec<&'static str> {
    stats_in_section(section).map(|s| s.id).collect()
}

/// Find a stat by id or display label
pub fn find_by_title(title: &str) -> Option<&'static StatDefinition> {
    find(title).or_else(|| STATS.iter().find(|s| s.label == title))
}

/// Registered clipboard abbreviation for a selection title.
///
/// Catalog ids and labels map to the stat id; a few summary titles have
/// their own entries. Returns `None` for unknown titles.
pub fn abbreviation_for(title: &str) -> Option<&'static str> {
    if let Some(def) = find_by_title(title) {
        return Some(def.id);
    }
    EXTRA_ABBREVIATIONS
        .iter()
        .find(|(t, _)| *t == title)
        .map(|(_, abbr)| *abbr)
}

impl StatDefinition {
    /// Whether a viewer without elevated access sees this stat as locked
    pub fn is_blocked_for(&self, has_elevated_access: bool) -> bool {
        self.premium && !has_elevated_access && !FREE_TIER_ALLOWLIST.contains(&self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_ids_are_unique() {
        let mut seen = HashSet::new();
        for stat in all() {
            assert!(seen.insert(stat.id), "duplicate id {}", stat.id);
        }
    }

    #[test]
    fn test_source_fields_are_unique() {
        let mut seen = HashSet::new();
        for stat in all() {
            assert!(seen.insert(stat.source_field), "duplicate field {}", stat.source_field);
        }
    }

    #[test]
    fn test_every_section_has_stats() {
        for section in Section::all() {
            assert!(stats_in_section(section).count() > 0, "{} is empty", section);
        }
    }

    #[test]
    fn test_find_in_section() {
        assert!(find_in_section(Section::Preflop, "VPIP").is_some());
        assert!(find_in_section(Section::Flop, "VPIP").is_none());
        assert!(find_in_section(Section::Preflop, "NOPE").is_none());
    }

    #[test]
    fn test_allowlist_entries_are_premium() {
        for id in FREE_TIER_ALLOWLIST {
            let stat = find(id).unwrap();
            assert!(stat.premium, "{} does not need an allowlist entry", id);
        }
    }

    #[test]
    fn test_is_blocked_for() {
        let lf = find("LF").unwrap();
        assert!(lf.is_blocked_for(false));
        assert!(!lf.is_blocked_for(true));

        let three_bet = find("3Bet").unwrap();
        assert!(!three_bet.is_blocked_for(false));

        let vpip = find("VPIP").unwrap();
        assert!(!vpip.is_blocked_for(false));
    }

    #[test]
    fn test_abbreviation_for() {
        assert_eq!(abbreviation_for("VPIP"), Some("VPIP"));
        assert_eq!(abbreviation_for("Fold to 3-Bet"), Some("F3B"));
        assert_eq!(abbreviation_for("Ganancias USD"), Some("Win$"));
        assert_eq!(abbreviation_for("Something Else"), None);
    }
}
