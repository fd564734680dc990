//! Top-level config loading pipeline.

use std::path::{Path, PathBuf};

use crate::error::ConfigError;

use super::env::apply_runtime_env_overrides;
use super::init::default_config_path;
use super::sources::read_config_text_with_sources;
use super::Config;

/// Load configuration from disk and environment.
///
/// `path_override` is an explicit config file path (from `--config`).
pub fn load_config(path_override: Option<&str>) -> Result<Config, ConfigError> {
    load_config_from_sources(
        path_override,
        |path| std::fs::read_to_string(path),
        |name| std::env::var(name).ok(),
        default_config_path(),
    )
}

pub(super) fn load_config_from_sources<FRead, FEnv>(
    path_override: Option<&str>,
    read_file: FRead,
    env_lookup: FEnv,
    user_config_path: Option<PathBuf>,
) -> Result<Config, ConfigError>
where
    FRead: Fn(&Path) -> Result<String, std::io::Error>,
    FEnv: Fn(&str) -> Option<String>,
{
    let (config_text, source) =
        read_config_text_with_sources(path_override, &read_file, user_config_path)?;
    tracing::debug!(?source, "config source resolved");
    let mut config: Config = toml::from_str(&config_text)?;
    apply_runtime_env_overrides(&mut config, &env_lookup)?;
    config.backend.base_url = config.backend.base_url.trim().trim_end_matches('/').to_string();
    Ok(config)
}
