//! Persistent token storage.

use std::io::Write;
use std::path::{Path, PathBuf};

use super::crypto::{decrypt_token, encrypt_token, EncryptedCredentials};
use super::error::AuthError;

/// Opaque load/save/clear storage for the backend token.
pub trait CredentialStore: Send + Sync {
    /// The saved token, or `NotLoggedIn` when none is stored.
    fn load(&self) -> Result<String, AuthError>;
    fn save(&self, token: &str) -> Result<(), AuthError>;
    /// Remove the saved token; clearing an empty store succeeds.
    fn clear(&self) -> Result<(), AuthError>;
}

/// Token file encrypted at rest (`~/.idk/credentials`).
#[derive(Debug, Clone)]
pub struct FileCredentialStore {
    path: PathBuf,
}

impl FileCredentialStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CredentialStore for FileCredentialStore {
    fn load(&self) -> Result<String, AuthError> {
        let text = match std::fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Err(AuthError::NotLoggedIn)
            }
            Err(err) => return Err(AuthError::Io(err)),
        };
        let stored: EncryptedCredentials = serde_json::from_str(&text).map_err(|err| {
            AuthError::Invalid(format!(
                "failed to parse credentials `{}`: {err}",
                self.path.display()
            ))
        })?;
        let token = decrypt_token(&stored)?;
        if token.is_empty() {
            return Err(AuthError::NotLoggedIn);
        }
        Ok(token)
    }

    fn save(&self, token: &str) -> Result<(), AuthError> {
        write_credentials(&self.path, &encrypt_token(token)?)?;
        tracing::debug!(path = %self.path.display(), "credentials saved");
        Ok(())
    }

    fn clear(&self) -> Result<(), AuthError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => {
                tracing::debug!(path = %self.path.display(), "credentials cleared");
                Ok(())
            }
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(AuthError::Io(err)),
        }
    }
}

/// Persist the envelope with owner-only permissions on file and directory.
fn write_credentials(path: &Path, stored: &EncryptedCredentials) -> Result<(), AuthError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let _ = std::fs::set_permissions(parent, std::fs::Permissions::from_mode(0o700));
        }
    }

    let text = serde_json::to_string_pretty(stored)
        .map_err(|err| AuthError::Invalid(format!("failed to serialize credentials: {err}")))?;
    let mut options = std::fs::OpenOptions::new();
    options.create(true).truncate(true).write(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }
    let mut file = options.open(path)?;
    file.write_all(text.as_bytes())?;
    file.flush()?;
    #[cfg(unix)]
    {
        // Pre-existing files keep their old mode through `open`.
        use std::os::unix::fs::PermissionsExt;
        let _ = std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o600));
    }
    Ok(())
}
