//! Auth subsystem error definitions.

use std::fmt;
use std::net::SocketAddr;

use crate::error::ApiError;

/// Errors surfaced by the login/auth subsystem.
#[derive(Debug)]
pub enum AuthError {
    /// State mismatch or an empty code on the callback.
    AuthenticationFailed,
    UnsupportedPlatform(String),
    Bind {
        addr: SocketAddr,
        source: std::io::Error,
    },
    Io(std::io::Error),
    Api(ApiError),
    Invalid(String),
    NotLoggedIn,
    /// Interrupted by the user while waiting for the browser.
    Cancelled,
    /// The callback server stopped before delivering a result.
    ListenerClosed,
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AuthenticationFailed => write!(f, "authentication failed"),
            Self::UnsupportedPlatform(os) => {
                write!(f, "opening a browser is not supported on `{os}`")
            }
            Self::Bind { addr, source } => {
                write!(f, "failed to listen for the login callback on {addr}: {source}")
            }
            Self::Io(err) => write!(f, "io: {err}"),
            Self::Api(err) => write!(f, "{err}"),
            Self::Invalid(msg) => write!(f, "{msg}"),
            Self::NotLoggedIn => write!(f, "not logged in; run `idk --login`"),
            Self::Cancelled => write!(f, "login cancelled"),
            Self::ListenerClosed => write!(f, "login callback listener stopped unexpectedly"),
        }
    }
}

impl std::error::Error for AuthError {}

impl From<std::io::Error> for AuthError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<ApiError> for AuthError {
    fn from(value: ApiError) -> Self {
        Self::Api(value)
    }
}
