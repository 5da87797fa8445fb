use serde::{Deserialize, Serialize};
use strum::{EnumIter, EnumString, IntoEnumIterator, IntoStaticStr};

/// Street or phase a statistic belongs to.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    EnumString,
    EnumIter,
    IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Section {
    Preflop,
    Postflop,
    Flop,
    Turn,
    River,
    Showdown,
}

impl Section {
    /// Storage key of the section (e.g., "preflop")
    pub fn key(&self) -> &'static str {
        self.into()
    }

    /// Human-readable heading for display
    pub fn title(&self) -> &'static str {
        match self {
            Self::Preflop => "Preflop",
            Self::Postflop => "Postflop",
            Self::Flop => "Flop",
            Self::Turn => "Turn",
            Self::River => "River",
            Self::Showdown => "Showdown",
        }
    }

    /// All sections in display order
    pub fn all() -> impl Iterator<Item = Section> {
        Self::iter()
    }
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}
