//! Integration tests for hudstats-core
//!
//! These tests drive the engines together through shared storage and fake
//! backend collaborators.

use std::collections::BTreeSet;
use std::sync::Arc;
use std::time::Duration;

use hudstats_core::selection::copy_to_clipboard;
use hudstats_core::{
    Clipboard, ColorEngine, Error, FileStorage, HudEngine, NoticeKind, PlayerDashboard,
    PlayerRecord, RecordSource, Result, SearchSuggestions, Section, SelectionState,
    SuggestionSource, ThemeMode, catalog, serialize_for_clipboard,
};
use parking_lot::Mutex;
use serde_json::json;
use tempfile::TempDir;

struct FakeBackend {
    searches: Mutex<Vec<String>>,
}

impl FakeBackend {
    fn new() -> Self {
        Self {
            searches: Mutex::new(Vec::new()),
        }
    }
}

impl RecordSource for FakeBackend {
    async fn fetch_record(&self, player: &str) -> Result<PlayerRecord> {
        match player {
            "villain" => Ok(PlayerRecord::from(json!({
                "vpip": 31, "pfr": 18, "af": 2.5, "winnings_usd": -15.7
            }))),
            "offline" => Err(Error::Network("connection reset".to_string())),
            other => Err(Error::PlayerNotFound(other.to_string())),
        }
    }
}

impl SuggestionSource for FakeBackend {
    async fn suggest(&self, query: &str) -> Result<Vec<String>> {
        self.searches.lock().push(query.to_string());
        Ok(["villain", "villager"]
            .iter()
            .filter(|name| name.starts_with(query))
            .map(|name| name.to_string())
            .collect())
    }
}

#[derive(Default)]
struct MemoryClipboard {
    text: Option<String>,
}

impl Clipboard for MemoryClipboard {
    fn write_text(&mut self, text: &str) -> Result<()> {
        self.text = Some(text.to_string());
        Ok(())
    }
}

/// HUD layout invariants across persistence
mod hud_tests {
    use super::*;

    fn assert_complete_orders(hud: &HudEngine<FileStorage>) {
        for section in Section::all() {
            let order: BTreeSet<&str> =
                hud.config().order(section).iter().map(String::as_str).collect();
            let catalog_ids: BTreeSet<&str> =
                catalog::ids_in_section(section).into_iter().collect();
            assert_eq!(order, catalog_ids, "order of {} is not a permutation", section);
            assert_eq!(hud.config().order(section).len(), catalog_ids.len());
            for id in hud.config().visible_ids(section) {
                assert!(catalog_ids.contains(id));
            }
        }
    }

    #[test]
    fn test_layout_survives_reload() {
        let temp = TempDir::new().unwrap();

        let mut hud = HudEngine::load(FileStorage::new(temp.path()));
        hud.toggle_visibility(Section::Preflop, "LF");
        hud.toggle_visibility(Section::Flop, "CB");
        hud.update_order(Section::River, ["BR"]);
        hud.toggle_auto_copy("AF");
        assert_complete_orders(&hud);

        let reloaded = HudEngine::load(FileStorage::new(temp.path()));
        assert_eq!(reloaded.config(), hud.config());
        assert_eq!(reloaded.config().order(Section::River)[0], "BR");
        assert!(reloaded.config().is_visible(Section::Preflop, "LF"));
        assert!(!reloaded.config().is_visible(Section::Flop, "CB"));
        assert_complete_orders(&reloaded);
    }

    #[test]
    fn test_corrupted_file_is_repaired_on_load() {
        let temp = TempDir::new().unwrap();
        std::fs::write(
            temp.path().join("hudConfig.json"),
            r#"{"visibleStats":{"preflop":["VPIP","NOPE","CB"]},"statOrder":{"preflop":["PFR","PFR"]},"autoCopyStats":["VPIP","bogus"]}"#,
        )
        .unwrap();

        let hud = HudEngine::load(FileStorage::new(temp.path()));
        assert_complete_orders(&hud);
        assert_eq!(hud.config().order(Section::Preflop)[0], "PFR");
        let visible: Vec<&str> = hud.config().visible_ids(Section::Preflop).collect();
        assert_eq!(visible, vec!["VPIP"]);
        let auto_copy: Vec<&str> = hud.auto_copy_stats().iter().map(String::as_str).collect();
        assert_eq!(auto_copy, vec!["VPIP"]);
    }

    #[test]
    fn test_premium_stat_blocked_without_access() {
        let temp = TempDir::new().unwrap();
        let mut hud = HudEngine::load(FileStorage::new(temp.path()));
        hud.toggle_visibility(Section::Preflop, "LF");

        let stat = |elevated| {
            hud.visible_ordered_stats(Section::Preflop, elevated)
                .into_iter()
                .find(|s| s.def.id == "LF")
                .unwrap()
        };
        assert!(stat(false).is_blocked);
        assert!(!stat(true).is_blocked);

        let three_bet = hud
            .visible_ordered_stats(Section::Preflop, false)
            .into_iter()
            .find(|s| s.def.id == "3Bet")
            .unwrap();
        assert!(!three_bet.is_blocked);
    }
}

/// Custom colors across persistence and import
mod color_tests {
    use super::*;

    #[test]
    fn test_cascade_and_import_atomicity() {
        let temp = TempDir::new().unwrap();
        let mut colors = ColorEngine::load(FileStorage::new(temp.path()), ThemeMode::Dark);

        colors.toggle_custom_stat("VPIP");
        colors.toggle_custom_stat("PFR");
        colors.set_stat_color("VPIP", "red");
        colors.set_stat_color("PFR", "blue");
        colors.toggle_custom_stat("PFR");
        assert!(!colors.config().color_mapping().contains_key("PFR"));
        assert_eq!(colors.custom_color("VPIP").as_deref(), Some("#EF5350"));

        let before = colors.config().clone();
        let rejected = colors.import_config(r#"{"customStats":["VPIP"],"colorMapping":{}}"#);
        assert!(matches!(rejected, Err(Error::ImportRejected(_))));
        assert_eq!(colors.config(), &before);

        let reloaded = ColorEngine::load(FileStorage::new(temp.path()), ThemeMode::Light);
        assert_eq!(reloaded.config(), &before);
        assert_eq!(reloaded.custom_color("VPIP").as_deref(), Some("#C62828"));
    }

    #[test]
    fn test_export_imports_into_fresh_store() {
        let source_dir = TempDir::new().unwrap();
        let mut colors = ColorEngine::load(FileStorage::new(source_dir.path()), ThemeMode::Light);
        colors.toggle_custom_stat("AF");
        colors.toggle_custom_stat("WTSD");
        colors.apply_color_to_all_custom("green");
        colors.set_global_color("pink");
        colors.toggle_global_color();
        let exported = colors.export_config();

        let target_dir = TempDir::new().unwrap();
        let mut other = ColorEngine::load(FileStorage::new(target_dir.path()), ThemeMode::Light);
        other.import_config(&exported).unwrap();
        assert_eq!(other.config(), colors.config());
        assert_eq!(other.custom_color("AF").as_deref(), Some("#AD1457"));
    }
}

/// Record loading, selection and clipboard export
mod selection_tests {
    use super::*;

    #[test]
    fn test_summary_clipboard_format() {
        let selection: SelectionState = [("VPIP", "24%"), ("Ganancias USD", "$-15.7")]
            .into_iter()
            .collect();
        assert_eq!(serialize_for_clipboard(&selection), "VPIP:24/Win$:-16");
    }

    #[tokio::test]
    async fn test_load_select_and_copy() {
        let temp = TempDir::new().unwrap();
        let mut hud = HudEngine::load(FileStorage::new(temp.path()));
        hud.toggle_auto_copy("Win$");

        let backend = FakeBackend::new();
        let mut dashboard = PlayerDashboard::new();
        dashboard
            .load_player(&backend, "villain", hud.auto_copy_stats())
            .await
            .unwrap();

        let selection = dashboard.selection_mut();
        selection.toggle("PFR", "18%");
        selection.toggle("AF", "2.5");

        let mut clipboard = MemoryClipboard::default();
        let text = copy_to_clipboard(dashboard.selection().state(), &mut clipboard).unwrap();
        assert_eq!(text, "VPIP:31/Win$:-16/AF:3");
        assert_eq!(clipboard.text.as_deref(), Some(text.as_str()));
    }

    #[tokio::test]
    async fn test_failed_load_clears_subject_and_reports() {
        let backend = FakeBackend::new();
        let auto_copy: BTreeSet<String> = ["VPIP".to_string()].into_iter().collect();
        let mut dashboard = PlayerDashboard::new();
        dashboard.load_player(&backend, "villain", &auto_copy).await.unwrap();

        let notice = dashboard
            .load_player(&backend, "offline", &auto_copy)
            .await
            .unwrap_err();
        assert_eq!(notice.kind, NoticeKind::FetchFailed);
        assert!(dashboard.record().is_none());

        let mut clipboard = MemoryClipboard::default();
        let notice = copy_to_clipboard(dashboard.selection().state(), &mut clipboard).unwrap_err();
        assert_eq!(notice.kind, NoticeKind::EmptySelection);
        assert!(clipboard.text.is_none());
    }
}

/// Debounced suggestions against a fake backend
mod search_tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_typing_burst_fetches_once() {
        let backend = Arc::new(FakeBackend::new());
        let mut search = SearchSuggestions::new(Arc::clone(&backend));

        for (i, text) in ["v", "vi", "vil", "vill", "villa"].into_iter().enumerate() {
            search.on_query_change(text);
            tokio::time::sleep(Duration::from_millis(50 + i as u64 * 10)).await;
        }
        tokio::time::sleep(Duration::from_millis(300)).await;

        assert_eq!(*backend.searches.lock(), vec!["villa"]);
        assert_eq!(search.results(), vec!["villain", "villager"]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_backspace_below_minimum_clears() {
        let backend = Arc::new(FakeBackend::new());
        let mut search = SearchSuggestions::new(Arc::clone(&backend));

        search.on_query_change("vill");
        search.settle().await;
        assert_eq!(search.results().len(), 2);

        search.on_query_change("vi");
        assert!(search.results().is_empty());
        tokio::time::sleep(Duration::from_secs(1)).await;
        assert_eq!(backend.searches.lock().len(), 1);
    }
}
