//! Player dashboard state: the record on screen and its selection.

use std::collections::BTreeSet;

use tracing::{info, warn};

use crate::catalog::{Section, StatDefinition};
use crate::hud::HudConfiguration;
use crate::network::{PlayerRecord, RecordSource};
use crate::notice::Notice;
use crate::selection::StatSelection;

/// One rendered stat cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatValue {
    pub def: &'static StatDefinition,
    pub is_blocked: bool,
    /// Formatted value; `None` when blocked or missing from the record
    pub value: Option<String>,
}

/// The primary subject: whose record is shown and which stats are selected.
#[derive(Debug, Default)]
pub struct PlayerDashboard {
    player: Option<String>,
    record: Option<PlayerRecord>,
    selection: StatSelection,
}

impl PlayerDashboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn player(&self) -> Option<&str> {
        self.player.as_deref()
    }

    pub fn record(&self) -> Option<&PlayerRecord> {
        self.record.as_ref()
    }

    pub fn selection(&self) -> &StatSelection {
        &self.selection
    }

    pub fn selection_mut(&mut self) -> &mut StatSelection {
        &mut self.selection
    }

    /// Fetch `name` and make it the subject.
    ///
    /// On failure the previous record is cleared so stale numbers are never
    /// shown under a new name, and a notice describing the failure is
    /// returned.
    pub async fn load_player<R: RecordSource>(
        &mut self,
        source: &R,
        name: &str,
        auto_copy: &BTreeSet<String>,
    ) -> Result<(), Notice> {
        let name = name.trim();
        match source.fetch_record(name).await {
            Ok(record) => {
                info!("Loaded record for {}", name);
                self.selection.set_subject(name, &record, auto_copy);
                self.player = Some(name.to_string());
                self.record = Some(record);
                Ok(())
            }
            Err(e) => {
                warn!("Failed to load record for {}: {}", name, e);
                self.player = None;
                self.record = None;
                self.selection.clear_subject();
                Err(Notice::fetch_failed(&format!("player {}", name), &e))
            }
        }
    }

    /// Visible stats of `section` paired with their values
    pub fn stat_values(
        &self,
        config: &HudConfiguration,
        section: Section,
        has_elevated_access: bool,
    ) -> Vec<StatValue> {
        config
            .visible_ordered_stats(section, has_elevated_access)
            .into_iter()
            .map(|stat| StatValue {
                def: stat.def,
                is_blocked: stat.is_blocked,
                value: if stat.is_blocked {
                    None
                } else {
                    self.record.as_ref().and_then(|r| r.formatted(stat.def))
                },
            })
            .collect()
    }
}
