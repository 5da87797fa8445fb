use std::sync::Arc;

use reqwest::{Client, RequestBuilder, StatusCode};
use serde::Deserialize;
use tracing::debug;

use super::{PlayerRecord, RecordSource, SuggestionSource};
use crate::config::network::REQUEST_TIMEOUT;
use crate::error::{Error, Result};
use crate::session::SessionProvider;

#[derive(Debug, Deserialize)]
struct Suggestion {
    name: String,
}

/// Client for the statistics backend.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    room: String,
    session: Arc<dyn SessionProvider>,
}

impl ApiClient {
    pub fn new(
        base_url: impl Into<String>,
        room: impl Into<String>,
        session: Arc<dyn SessionProvider>,
    ) -> Result<Self> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| Error::Network(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            room: room.into(),
            session,
        })
    }

    pub fn room(&self) -> &str {
        &self.room
    }

    fn player_stats_url(&self, player: &str) -> String {
        format!(
            "{}/api/players/{}/stats",
            self.base_url,
            urlencoding::encode(player)
        )
    }

    fn search_url(&self) -> String {
        format!("{}/api/players/search", self.base_url)
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        match self.session.token() {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    /// Fetch the statistics record of `player` in the configured room
    pub async fn player_stats(&self, player: &str) -> Result<PlayerRecord> {
        let url = self.player_stats_url(player);
        debug!("GET {}", url);

        let response = self
            .authorized(self.client.get(&url))
            .query(&[("room", self.room.as_str())])
            .send()
            .await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(Error::PlayerNotFound(player.to_string()));
        }

        let record = response.error_for_status()?.json::<PlayerRecord>().await?;
        Ok(record)
    }

    /// Player names starting with `query`, in backend order
    pub async fn autocomplete(&self, query: &str) -> Result<Vec<String>> {
        let url = self.search_url();
        debug!("GET {} q={:?}", url, query);

        let suggestions: Vec<Suggestion> = self
            .authorized(self.client.get(&url))
            .query(&[("q", query), ("room", self.room.as_str())])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(suggestions.into_iter().map(|s| s.name).collect())
    }
}

impl RecordSource for ApiClient {
    async fn fetch_record(&self, player: &str) -> Result<PlayerRecord> {
        self.player_stats(player).await
    }
}

impl SuggestionSource for ApiClient {
    async fn suggest(&self, query: &str) -> Result<Vec<String>> {
        self.autocomplete(query).await
    }
}
