//! Application state shared across handlers.

use std::sync::Arc;

use crate::config::ServerConfig;
use crate::db::Db;
use crate::services::TokenService;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to the
/// database handle, token service, and configuration.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: ServerConfig,
    db: Db,
    tokens: TokenService,
}

impl AppState {
    /// Create a new application state.
    ///
    /// # Arguments
    ///
    /// * `config` - Server configuration
    /// * `db` - Connected database handle
    #[must_use]
    pub fn new(config: ServerConfig, db: Db) -> Self {
        let tokens = TokenService::new(&config.jwt_secret);

        Self {
            inner: Arc::new(AppStateInner { config, db, tokens }),
        }
    }

    /// Get a reference to the server configuration.
    #[must_use]
    pub fn config(&self) -> &ServerConfig {
        &self.inner.config
    }

    /// Get a reference to the database handle.
    #[must_use]
    pub fn db(&self) -> &Db {
        &self.inner.db
    }

    /// Get a reference to the token service.
    #[must_use]
    pub fn tokens(&self) -> &TokenService {
        &self.inner.tokens
    }
}
