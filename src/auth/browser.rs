//! Browser launching for the login flow.

use std::process::{Command, Stdio};

use super::error::AuthError;

/// Launcher programs keyed by `std::env::consts::OS`.
const BROWSER_LAUNCHERS: &[(&str, &str)] = &[("linux", "xdg-open"), ("macos", "open")];

/// Launcher program for `os`, or `UnsupportedPlatform`.
pub fn browser_launcher_for(os: &str) -> Result<&'static str, AuthError> {
    BROWSER_LAUNCHERS
        .iter()
        .find(|(name, _)| *name == os)
        .map(|(_, program)| *program)
        .ok_or_else(|| AuthError::UnsupportedPlatform(os.to_string()))
}

/// Open `url` in the default browser without waiting for it.
pub fn open_browser(url: &str) -> Result<(), AuthError> {
    let program = browser_launcher_for(std::env::consts::OS)?;
    Command::new(program)
        .arg(url)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()?;
    tracing::debug!(launcher = program, "browser launched");
    Ok(())
}
