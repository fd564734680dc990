//! Error types for the local action pipeline.
//!
//! Auth errors live in `crate::auth::error`; everything the dispatcher
//! consumes directly is defined here.

use std::fmt;
use std::path::PathBuf;

// ---------------------------------------------------------------------------
// ConfigError
// ---------------------------------------------------------------------------

/// Errors when loading or parsing configuration.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Toml(toml::de::Error),
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "io: {e}"),
            Self::Toml(e) => write!(f, "toml: {e}"),
            Self::Invalid(msg) => write!(f, "invalid config: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        Self::Toml(e)
    }
}

// ---------------------------------------------------------------------------
// ApiError
// ---------------------------------------------------------------------------

/// Errors from the remote backend.
#[derive(Debug)]
pub enum ApiError {
    /// Network / reqwest-level error.
    Http(reqwest::Error),
    /// HTTP 401: the saved token was rejected.
    Unauthorized,
    /// HTTP 429: the daily quota is used up.
    QuotaExceeded,
    /// Any other non-2xx status.
    Status(u16, String),
    /// 2xx response whose body did not have the expected shape.
    Decode(String),
}

impl ApiError {
    /// Classify a non-success HTTP status.
    pub fn from_status(code: u16, body: String) -> Self {
        match code {
            401 => Self::Unauthorized,
            429 => Self::QuotaExceeded,
            _ => Self::Status(code, body),
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Http(e) => write!(f, "http: {e}"),
            Self::Unauthorized => write!(f, "unauthorized"),
            Self::QuotaExceeded => write!(f, "quota exceeded"),
            Self::Status(code, body) => write!(f, "status {code}: {body}"),
            Self::Decode(msg) => write!(f, "unexpected response: {msg}"),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        Self::Http(e)
    }
}

// ---------------------------------------------------------------------------
// ExecError
// ---------------------------------------------------------------------------

/// Errors from running commands against the OS.
#[derive(Debug)]
pub enum ExecError {
    /// No shell is known for this platform.
    UnsupportedPlatform(String),
    /// The process could not be spawned or waited on.
    Spawn { program: String, source: std::io::Error },
    /// The command ran and exited unsuccessfully.
    Failed { command: String, exit_code: Option<i32> },
    /// The system clipboard refused the write.
    Clipboard(String),
}

impl fmt::Display for ExecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedPlatform(os) => write!(f, "unsupported platform: {os}"),
            Self::Spawn { program, source } => write!(f, "{program}: {source}"),
            Self::Failed {
                command,
                exit_code: Some(code),
            } => write!(f, "`{command}` exited with {code}"),
            Self::Failed {
                command,
                exit_code: None,
            } => write!(f, "`{command}` was terminated by a signal"),
            Self::Clipboard(detail) => write!(f, "clipboard: {detail}"),
        }
    }
}

impl std::error::Error for ExecError {}

// ---------------------------------------------------------------------------
// AliasError
// ---------------------------------------------------------------------------

/// Errors from installing a shell alias.
#[derive(Debug)]
pub enum AliasError {
    /// `alias <name>=` is already defined in the config file.
    AlreadyExists { name: String, config_file: PathBuf },
    /// `$SHELL` is missing or not bash/zsh.
    UnsupportedShell(String),
    /// Home directory could not be resolved.
    NoHomeDir,
    Io(std::io::Error),
}

impl fmt::Display for AliasError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AlreadyExists { name, config_file } => write!(
                f,
                "alias `{name}` already exists in {}",
                config_file.display()
            ),
            Self::UnsupportedShell(shell) if shell.is_empty() => {
                write!(f, "unsupported shell: $SHELL is not set")
            }
            Self::UnsupportedShell(shell) => write!(f, "unsupported shell: {shell}"),
            Self::NoHomeDir => write!(f, "unable to resolve home directory"),
            Self::Io(e) => write!(f, "io: {e}"),
        }
    }
}

impl std::error::Error for AliasError {}

impl From<std::io::Error> for AliasError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

// ---------------------------------------------------------------------------
// ResolveError
// ---------------------------------------------------------------------------

/// Errors from directory resolution.
#[derive(Debug)]
pub enum ResolveError {
    /// No existing history candidate matched the target.
    NotFound(String),
    /// Neither bash nor zsh history could be read.
    Io(std::io::Error),
}

impl fmt::Display for ResolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound(target) => write!(f, "no directory in history matches `{target}`"),
            Self::Io(e) => write!(f, "history: {e}"),
        }
    }
}

impl std::error::Error for ResolveError {}

impl From<std::io::Error> for ResolveError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

// ---------------------------------------------------------------------------
// ScriptError
// ---------------------------------------------------------------------------

/// Errors from writing or running script artifacts.
#[derive(Debug)]
pub enum ScriptError {
    /// A file already exists where the script would be written.
    AlreadyExists(PathBuf),
    Io(std::io::Error),
    Exec(ExecError),
    Alias(AliasError),
}

impl fmt::Display for ScriptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AlreadyExists(path) => {
                write!(f, "{} already exists; choose another name", path.display())
            }
            Self::Io(e) => write!(f, "io: {e}"),
            Self::Exec(e) => write!(f, "exec: {e}"),
            Self::Alias(e) => write!(f, "alias: {e}"),
        }
    }
}

impl std::error::Error for ScriptError {}

impl From<std::io::Error> for ScriptError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<ExecError> for ScriptError {
    fn from(e: ExecError) -> Self {
        Self::Exec(e)
    }
}

impl From<AliasError> for ScriptError {
    fn from(e: AliasError) -> Self {
        Self::Alias(e)
    }
}
