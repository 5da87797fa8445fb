//! REST collaborators.
//!
//! - `PlayerRecord` - flat statistics record keyed by source field
//! - `RecordSource` / `SuggestionSource` - what the engines need from the backend
//! - `ApiClient` - the `reqwest` implementation of both

mod client;
mod record;

pub use client::ApiClient;
pub use record::PlayerRecord;

use std::future::Future;

use crate::error::Result;

/// Supplies the statistics record of one player.
pub trait RecordSource {
    fn fetch_record(&self, player: &str) -> impl Future<Output = Result<PlayerRecord>> + Send;
}

/// Supplies player-name completions for a partial query.
pub trait SuggestionSource: Send + Sync + 'static {
    fn suggest(&self, query: &str) -> impl Future<Output = Result<Vec<String>>> + Send;
}
