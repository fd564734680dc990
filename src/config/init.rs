//! Per-user path helpers (`~/.idk/...`).

use std::path::PathBuf;

use super::defaults::{CONFIG_FILE_NAME, CREDENTIALS_FILE_NAME, IDK_DIR_NAME, SCRIPTS_DIR_NAME};

/// Root of per-user state (`~/.idk`).
pub fn idk_home_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(IDK_DIR_NAME))
}

/// Default config file path (`~/.idk/config.toml`).
pub fn default_config_path() -> Option<PathBuf> {
    idk_home_dir().map(|dir| dir.join(CONFIG_FILE_NAME))
}

/// Durable script directory (`~/.idk/scripts`).
pub fn default_scripts_dir() -> Option<PathBuf> {
    idk_home_dir().map(|dir| dir.join(SCRIPTS_DIR_NAME))
}

/// Credential store path (`~/.idk/credentials`).
pub fn default_credentials_path() -> Option<PathBuf> {
    idk_home_dir().map(|dir| dir.join(CREDENTIALS_FILE_NAME))
}
