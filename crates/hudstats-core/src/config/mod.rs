//! Configuration.
//!
//! This module contains:
//! - `Settings` - user settings loaded from `hudstats.toml`
//! - Search, network and storage constants

mod settings;

pub use settings::*;

/// Player-name suggestion configuration.
pub mod search {
    use std::time::Duration;

    /// Queries shorter than this never reach the network.
    pub const MIN_QUERY_LEN: usize = 3;

    /// Quiet period before a suggestion fetch is issued.
    pub const DEBOUNCE: Duration = Duration::from_millis(300);
}

/// REST client configuration.
pub mod network {
    use std::time::Duration;

    /// Timeout applied to every request.
    pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

    pub const DEFAULT_ENDPOINT: &str = "http://localhost:8080";

    pub const DEFAULT_ROOM: &str = "all";
}

/// Durable storage keys, one per persisted value.
pub mod storage {
    pub const HUD_CONFIG_KEY: &str = "hudConfig";

    pub const CUSTOM_COLORS_KEY: &str = "customStatColors";

    pub const AUTH_TOKEN_KEY: &str = "authToken";
}
