//! Stat selection and clipboard export.
//!
//! - `SelectionState` - ordered title → value map the user toggles
//! - `StatSelection` - a selection bound to a subject, reset on subject change
//! - `serialize_for_clipboard` - the compact `ABBR:val/ABBR:val` format

mod clipboard;

pub use clipboard::{Clipboard, copy_to_clipboard, serialize_for_clipboard};

use std::collections::BTreeSet;

use tracing::debug;

use crate::catalog;
use crate::network::PlayerRecord;

/// Ordered mapping of stat title to formatted value.
///
/// Titles are unique; insertion order is kept for serialization.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    entries: Vec<(String, String)>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove `title` if selected, otherwise append it with `value`.
    ///
    /// Returns whether the title is selected afterwards.
    pub fn toggle(&mut self, title: &str, value: &str) -> bool {
        if let Some(pos) = self.entries.iter().position(|(t, _)| t == title) {
            self.entries.remove(pos);
            false
        } else {
            self.entries.push((title.to_string(), value.to_string()));
            true
        }
    }

    pub fn contains(&self, title: &str) -> bool {
        self.entries.iter().any(|(t, _)| t == title)
    }

    pub fn get(&self, title: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(t, _)| t == title)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(t, v)| (t.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl<T: Into<String>, V: Into<String>> FromIterator<(T, V)> for SelectionState {
    fn from_iter<I: IntoIterator<Item = (T, V)>>(iter: I) -> Self {
        let mut state = Self::new();
        for (title, value) in iter {
            let title = title.into();
            if !state.contains(&title) {
                state.entries.push((title, value.into()));
            }
        }
        state
    }
}

/// Selection for the player currently on screen.
#[derive(Debug, Clone, Default)]
pub struct StatSelection {
    subject: Option<String>,
    state: SelectionState,
}

impl StatSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subject(&self) -> Option<&str> {
        self.subject.as_deref()
    }

    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    /// Switch to `subject`, rebuilding the selection from the auto-copy set.
    ///
    /// Each auto-copy stat whose field is defined in `record` is selected,
    /// in catalog order. Re-setting the same subject keeps manual toggles.
    pub fn set_subject(
        &mut self,
        subject: &str,
        record: &PlayerRecord,
        auto_copy: &BTreeSet<String>,
    ) -> bool {
        if self.subject.as_deref() == Some(subject) {
            return false;
        }
        self.subject = Some(subject.to_string());
        self.state = auto_copy_selection(record, auto_copy);
        debug!(
            "Selection reset for {} with {} stats",
            subject,
            self.state.len()
        );
        true
    }

    /// Drop the subject and its selection
    pub fn clear_subject(&mut self) {
        self.subject = None;
        self.state.clear();
    }

    pub fn toggle(&mut self, title: &str, value: &str) -> bool {
        self.state.toggle(title, value)
    }

    pub fn serialize(&self) -> String {
        serialize_for_clipboard(&self.state)
    }
}

/// Selection pre-filled from `auto_copy` for `record`
pub fn auto_copy_selection(record: &PlayerRecord, auto_copy: &BTreeSet<String>) -> SelectionState {
    catalog::all()
        .iter()
        .filter(|def| auto_copy.contains(def.id))
        .filter_map(|def| Some((def.id, record.formatted(def)?)))
        .collect()
}
