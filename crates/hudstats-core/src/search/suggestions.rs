use std::sync::Arc;

use parking_lot::Mutex;
use tracing::{debug, warn};

use super::Debouncer;
use crate::config::search::{DEBOUNCE, MIN_QUERY_LEN};
use crate::network::SuggestionSource;

#[derive(Debug, Default)]
struct SuggestionState {
    query: String,
    results: Vec<String>,
    /// Bumped on every query change; a fetch only lands if it still matches
    generation: u64,
    last_error: Option<String>,
}

/// Search-as-you-type player suggestions.
///
/// Query changes are debounced; short queries never reach the source.
/// A fetch started for an older query is dropped when it completes, so
/// responses arriving out of order cannot overwrite newer results.
pub struct SearchSuggestions<S: SuggestionSource> {
    source: Arc<S>,
    state: Arc<Mutex<SuggestionState>>,
    debouncer: Debouncer,
}

impl<S: SuggestionSource> SearchSuggestions<S> {
    pub fn new(source: Arc<S>) -> Self {
        Self {
            source,
            state: Arc::new(Mutex::new(SuggestionState::default())),
            debouncer: Debouncer::new(DEBOUNCE),
        }
    }

    /// Record `text` and schedule a fetch for it.
    ///
    /// Queries shorter than the minimum length clear the results at once and
    /// cancel any pending fetch. Must be called from within a tokio runtime.
    pub fn on_query_change(&mut self, text: &str) {
        let generation = {
            let mut state = self.state.lock();
            state.query = text.to_string();
            state.generation += 1;
            if text.chars().count() < MIN_QUERY_LEN {
                state.results.clear();
                state.last_error = None;
                None
            } else {
                Some(state.generation)
            }
        };

        let Some(generation) = generation else {
            self.debouncer.cancel();
            return;
        };

        let source = Arc::clone(&self.source);
        let state = Arc::clone(&self.state);
        let query = text.to_string();
        self.debouncer.schedule(async move {
            let outcome = source.suggest(&query).await;

            let mut state = state.lock();
            if state.generation != generation {
                debug!("Discarding stale suggestions for {:?}", query);
                return;
            }
            match outcome {
                Ok(results) => {
                    debug!("{} suggestions for {:?}", results.len(), query);
                    state.results = results;
                    state.last_error = None;
                }
                Err(e) => {
                    warn!("Suggestion fetch failed for {:?}: {}", query, e);
                    state.last_error = Some(e.to_string());
                }
            }
        });
    }

    pub fn query(&self) -> String {
        self.state.lock().query.clone()
    }

    pub fn results(&self) -> Vec<String> {
        self.state.lock().results.clone()
    }

    /// Error of the latest fetch, cleared by the next success or short query
    pub fn last_error(&self) -> Option<String> {
        self.state.lock().last_error.clone()
    }

    pub fn is_pending(&self) -> bool {
        self.debouncer.is_pending()
    }

    /// Wait until the pending fetch, if any, has landed
    pub async fn settle(&mut self) {
        self.debouncer.wait().await;
    }
}
