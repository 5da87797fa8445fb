//! Session providers.
//!
//! The API client asks an injected provider for the current token instead of
//! reading process-wide state, so tests can substitute a fixed session.

use parking_lot::Mutex;
use tracing::{info, warn};

use crate::config::storage::AUTH_TOKEN_KEY;
use crate::error::Result;
use crate::storage::Storage;

/// Source of the bearer token attached to API requests.
pub trait SessionProvider: Send + Sync {
    /// Current token, or `None` when logged out
    fn token(&self) -> Option<String>;
}

/// A session with a fixed token (or none).
#[derive(Debug, Clone, Default)]
pub struct StaticSession {
    token: Option<String>,
}

impl StaticSession {
    pub fn new(token: Option<String>) -> Self {
        Self { token }
    }

    pub fn anonymous() -> Self {
        Self::default()
    }
}

impl SessionProvider for StaticSession {
    fn token(&self) -> Option<String> {
        self.token.clone()
    }
}

/// A session whose token lives in durable storage.
///
/// Initialized from storage on creation, cleared on logout.
pub struct StoredSession<S: Storage> {
    storage: Mutex<S>,
    token: Mutex<Option<String>>,
}

impl<S: Storage> StoredSession<S> {
    pub fn load(storage: S) -> Self {
        let token = match storage.get(AUTH_TOKEN_KEY) {
            Ok(token) => token.map(|t| t.trim().to_string()).filter(|t| !t.is_empty()),
            Err(e) => {
                warn!("Failed to read stored session: {}", e);
                None
            }
        };
        Self {
            storage: Mutex::new(storage),
            token: Mutex::new(token),
        }
    }

    pub fn is_logged_in(&self) -> bool {
        self.token.lock().is_some()
    }

    pub fn login(&self, token: &str) -> Result<()> {
        let token = token.trim();
        self.storage.lock().set(AUTH_TOKEN_KEY, token)?;
        *self.token.lock() = Some(token.to_string());
        info!("Session token stored");
        Ok(())
    }

    pub fn logout(&self) -> Result<()> {
        *self.token.lock() = None;
        self.storage.lock().remove(AUTH_TOKEN_KEY)?;
        info!("Session cleared");
        Ok(())
    }
}

impl<S: Storage + Send> SessionProvider for StoredSession<S> {
    fn token(&self) -> Option<String> {
        self.token.lock().clone()
    }
}
