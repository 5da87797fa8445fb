use std::collections::HashSet;

use tracing::{debug, info, warn};

use super::SelectionState;
use crate::catalog;
use crate::error::Result;
use crate::notice::Notice;

/// Platform clipboard write primitive.
pub trait Clipboard {
    fn write_text(&mut self, text: &str) -> Result<()>;
}

/// Render `selection` as `ABBR:val/ABBR:val`.
///
/// The abbreviation comes from the registry, else the title with whitespace
/// removed. Values are reduced to their first number rounded to an integer;
/// `%` is dropped and `$` is kept unless the abbreviation already ends in it.
/// Values without a number, or whose number does not fit an `i64`, are kept
/// with whitespace removed. Only the first entry per abbreviation is written.
pub fn serialize_for_clipboard(selection: &SelectionState) -> String {
    let mut seen = HashSet::new();
    selection
        .iter()
        .filter_map(|(title, value)| {
            let abbreviation = abbreviate(title);
            if !seen.insert(abbreviation.clone()) {
                debug!("Skipping {:?}: {} already serialized", title, abbreviation);
                return None;
            }
            Some(format!("{}:{}", abbreviation, compact_value(&abbreviation, value)))
        })
        .collect::<Vec<_>>()
        .join("/")
}

/// Serialize `selection` and hand it to `clipboard`.
///
/// Returns the copied text, or the notice to show the user.
pub fn copy_to_clipboard<C: Clipboard + ?Sized>(
    selection: &SelectionState,
    clipboard: &mut C,
) -> std::result::Result<String, Notice> {
    if selection.is_empty() {
        return Err(Notice::empty_selection());
    }

    let text = serialize_for_clipboard(selection);
    match clipboard.write_text(&text) {
        Ok(()) => {
            info!("Copied {} stats to clipboard", selection.len());
            Ok(text)
        }
        Err(e) => {
            warn!("Clipboard write failed: {}", e);
            Err(Notice::clipboard_failed(&e))
        }
    }
}

fn abbreviate(title: &str) -> String {
    match catalog::abbreviation_for(title) {
        Some(abbr) => abbr.to_string(),
        None => strip_whitespace(title),
    }
}

fn compact_value(abbreviation: &str, value: &str) -> String {
    let Some(rounded) = first_number(value).and_then(round_to_i64) else {
        return strip_whitespace(value);
    };
    if value.contains('$') && !abbreviation.ends_with('$') {
        format!("${}", rounded)
    } else {
        rounded.to_string()
    }
}

/// Nearest integer, or `None` when it does not fit an `i64`
fn round_to_i64(number: f64) -> Option<i64> {
    // 2^63 is exactly representable; i64::MAX is not
    const LIMIT: f64 = 9_223_372_036_854_775_808.0;
    let rounded = number.round();
    (rounded >= -LIMIT && rounded < LIMIT).then_some(rounded as i64)
}

/// First `-?digits(.digits)?` run in `text`
fn first_number(text: &str) -> Option<f64> {
    let bytes = text.as_bytes();
    let start = (0..bytes.len()).find(|&i| {
        bytes[i].is_ascii_digit()
            || (bytes[i] == b'-' && bytes.get(i + 1).is_some_and(u8::is_ascii_digit))
    })?;

    let mut end = start + 1;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    if end + 1 < bytes.len() && bytes[end] == b'.' && bytes[end + 1].is_ascii_digit() {
        end += 1;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
        }
    }

    text[start..end].parse().ok()
}

fn strip_whitespace(text: &str) -> String {
    text.chars().filter(|c| !c.is_whitespace()).collect()
}
