//! Default configuration constants.

/// Backend base URL used when neither config nor env sets one.
///
/// Empty on purpose: startup rejects it with guidance.
pub(super) const DEFAULT_BACKEND_BASE_URL: &str = "";
/// Default timeout for backend requests.
pub(super) const DEFAULT_API_TIMEOUT_SECS: u64 = 60;
/// Per-user state directory name under `$HOME`.
pub(super) const IDK_DIR_NAME: &str = ".idk";
/// Config file name inside the state directory.
pub(super) const CONFIG_FILE_NAME: &str = "config.toml";
/// Durable script directory name inside the state directory.
pub(super) const SCRIPTS_DIR_NAME: &str = "scripts";
/// Credential file name inside the state directory.
pub(super) const CREDENTIALS_FILE_NAME: &str = "credentials";
