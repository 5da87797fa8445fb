//! User-facing notices.
//!
//! Failures the user can act on are reported as transient, dismissible
//! notices rather than errors. None of them block further interaction.

use crate::error::Error;

/// How prominently a notice is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeSeverity {
    Success,
    Normal,
    Critical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    /// Clipboard copy attempted with nothing selected
    EmptySelection,
    /// The platform refused the clipboard write
    ClipboardFailed,
    /// Color import text was malformed
    ImportRejected,
    /// A record or search request failed
    FetchFailed,
    /// An action completed
    Done,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub severity: NoticeSeverity,
    pub message: String,
}

impl Notice {
    pub fn new(kind: NoticeKind, severity: NoticeSeverity, message: impl Into<String>) -> Self {
        Self {
            kind,
            severity,
            message: message.into(),
        }
    }

    pub fn empty_selection() -> Self {
        Self::new(
            NoticeKind::EmptySelection,
            NoticeSeverity::Normal,
            "Select at least one stat to copy",
        )
    }

    pub fn clipboard_failed(error: &Error) -> Self {
        Self::new(
            NoticeKind::ClipboardFailed,
            NoticeSeverity::Critical,
            format!("Could not copy to the clipboard: {}", error),
        )
    }

    pub fn import_rejected(error: &Error) -> Self {
        let reason = match error {
            Error::ImportRejected(reason) => reason.clone(),
            other => other.to_string(),
        };
        Self::new(
            NoticeKind::ImportRejected,
            NoticeSeverity::Normal,
            format!("Import failed: {}", reason),
        )
    }

    pub fn fetch_failed(what: &str, error: &Error) -> Self {
        Self::new(
            NoticeKind::FetchFailed,
            NoticeSeverity::Normal,
            format!("Could not load {}: {}", what, error),
        )
    }

    pub fn done(message: impl Into<String>) -> Self {
        Self::new(NoticeKind::Done, NoticeSeverity::Success, message)
    }
}

impl std::fmt::Display for Notice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}
