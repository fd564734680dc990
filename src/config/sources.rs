//! Config-file source discovery.
//!
//! Precedence: explicit `--config` path > `~/.idk/config.toml` > built-in defaults.

use std::path::{Path, PathBuf};

use crate::error::ConfigError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) enum ConfigSource {
    /// Config loaded from explicit `--config` path.
    Explicit(PathBuf),
    /// Config loaded from `~/.idk/config.toml`.
    UserFile(PathBuf),
    /// No file found; defaults were used.
    BuiltInDefaults,
}

/// Read config text from the highest-precedence available source.
pub(super) fn read_config_text_with_sources<FRead>(
    path_override: Option<&str>,
    read_file: &FRead,
    user_config_path: Option<PathBuf>,
) -> Result<(String, ConfigSource), ConfigError>
where
    FRead: Fn(&Path) -> Result<String, std::io::Error>,
{
    // An explicit path must exist; a missing user file silently falls back.
    if let Some(p) = path_override {
        let path = PathBuf::from(p);
        let text = read_file(&path)?;
        return Ok((text, ConfigSource::Explicit(path)));
    }

    if let Some(path) = user_config_path {
        match read_file(&path) {
            Ok(text) => return Ok((text, ConfigSource::UserFile(path))),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => return Err(ConfigError::Io(e)),
        }
    }

    Ok((String::new(), ConfigSource::BuiltInDefaults))
}
