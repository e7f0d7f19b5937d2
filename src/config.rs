//! Console configuration.
//!
//! Two environment-level settings select the backend for every service in
//! the process: a mock switch and the remote API base URL. Anything but the
//! literal string `"false"` in `CONSOLE_USE_MOCK` keeps the console on the
//! in-process store, so the default is mock mode.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::{ApiClient, Backend, CatalogStore};

/// Environment variable selecting mock mode.
pub const USE_MOCK_VAR: &str = "CONSOLE_USE_MOCK";

/// Environment variable overriding the API base URL.
pub const API_URL_VAR: &str = "CONSOLE_API_URL";

/// Base URL used when none is configured.
pub const DEFAULT_API_URL: &str = "http://localhost:8080/api";

/// Process-wide console configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsoleConfig {
    /// Operate against the in-process store instead of a remote API.
    pub use_mock: bool,
    /// Base URL of the remote API (remote mode only).
    pub api_url: String,
}

impl ConsoleConfig {
    /// Creates a configuration.
    pub fn new(use_mock: bool, api_url: String) -> Self {
        Self { use_mock, api_url }
    }

    /// Reads the configuration from the environment.
    pub fn from_env() -> Self {
        Self::from_values(
            std::env::var(USE_MOCK_VAR).ok().as_deref(),
            std::env::var(API_URL_VAR).ok().as_deref(),
        )
    }

    fn from_values(use_mock: Option<&str>, api_url: Option<&str>) -> Self {
        Self {
            use_mock: use_mock != Some("false"),
            api_url: api_url.unwrap_or(DEFAULT_API_URL).to_string(),
        }
    }

    /// Builds the backend this configuration selects: a freshly seeded store
    /// in mock mode, an API client otherwise.
    pub fn backend(&self) -> Backend {
        if self.use_mock {
            Backend::Mock(Arc::new(CatalogStore::seeded()))
        } else {
            Backend::Remote(ApiClient::new(self.api_url.clone()))
        }
    }
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self::from_values(None, None)
    }
}
