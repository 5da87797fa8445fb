//! Debounced player-name suggestions.

mod debounce;
mod suggestions;

pub use debounce::Debouncer;
pub use suggestions::SearchSuggestions;
