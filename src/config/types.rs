//! Configuration model types.

use serde::Deserialize;

use super::defaults::{DEFAULT_API_TIMEOUT_SECS, DEFAULT_BACKEND_BASE_URL};

/// Resolved runtime configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub backend: BackendConfig,
    pub display: DisplayConfig,
}

/// Remote backend connection settings (`[backend]`).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BackendConfig {
    /// Base URL for `/prompt`, `/token`, and `/auth/url`.
    pub base_url: String,
    /// Request timeout for backend calls.
    pub timeout_secs: u64,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BACKEND_BASE_URL.to_string(),
            timeout_secs: DEFAULT_API_TIMEOUT_SECS,
        }
    }
}

/// Terminal output settings (`[display]`).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub color: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self { color: true }
    }
}
