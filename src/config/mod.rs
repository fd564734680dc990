//! Configuration loading from TOML and environment variables.
//!
//! Precedence (highest wins):
//! 1. `IDK_BACKEND_URL`, `IDK_API_TIMEOUT_SECS`, `NO_COLOR`
//! 2. File given via `--config`
//! 3. `~/.idk/config.toml`
//! 4. Built-in defaults

mod defaults;
mod env;
mod init;
mod loader;
mod sources;
mod types;

pub use init::{default_config_path, default_credentials_path, default_scripts_dir, idk_home_dir};
pub use loader::load_config;
pub use types::{BackendConfig, Config, DisplayConfig};
