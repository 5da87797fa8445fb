//! Settings and collaborators shared by every command.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context as _, Result};
use hudstats_core::config::{SETTINGS_FILE, default_data_dir};
use hudstats_core::{
    ApiClient, FileStorage, SessionProvider, Settings, StaticSession, StoredSession,
};
use tracing::debug;

use crate::cli::Args;

pub struct Context {
    pub settings: Settings,
    pub data_dir: PathBuf,
    api_token: Option<String>,
}

impl Context {
    /// Resolve settings: args > env > settings file > defaults
    pub fn load(args: &Args) -> Result<Self> {
        let settings_path = match (&args.config, &args.data_dir) {
            (Some(path), _) => path.clone(),
            (None, Some(dir)) => dir.join(SETTINGS_FILE),
            (None, None) => default_data_dir().join(SETTINGS_FILE),
        };
        let mut settings = Settings::load(&settings_path)
            .with_context(|| format!("Failed to load settings from {}", settings_path.display()))?;

        if let Some(endpoint) = &args.api_endpoint {
            settings.api_endpoint = endpoint.clone();
        }
        if let Some(room) = &args.room {
            settings.room = room.clone();
        }
        let data_dir = args
            .data_dir
            .clone()
            .unwrap_or_else(|| settings.resolved_data_dir());
        debug!("Using data directory {}", data_dir.display());

        Ok(Self {
            settings,
            data_dir,
            api_token: args.api_token.clone(),
        })
    }

    pub fn storage(&self) -> FileStorage {
        FileStorage::new(&self.data_dir)
    }

    /// Explicit token if given, otherwise the stored session
    pub fn session(&self) -> Arc<dyn SessionProvider> {
        match &self.api_token {
            Some(token) => Arc::new(StaticSession::new(Some(token.clone()))),
            None => Arc::new(StoredSession::load(self.storage())),
        }
    }

    pub fn api_client(&self) -> Result<ApiClient> {
        ApiClient::new(
            self.settings.api_endpoint.as_str(),
            self.settings.room.as_str(),
            self.session(),
        )
        .context("Failed to create API client")
    }
}
