//! Script artifacts: timestamped shell files, run once or kept.

use std::fs::OpenOptions;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};

use crate::error::ScriptError;
use crate::execution::{quote_if_needed, CommandRunner};

const EPHEMERAL_RAND_BYTES: usize = 8;

/// Script body plus the file name it is stored under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptArtifact {
    pub body: String,
    pub file_name: String,
}

impl ScriptArtifact {
    /// Name the script after the current local time.
    pub fn new(body: impl Into<String>) -> Self {
        Self::at(body, Local::now())
    }

    /// Name the script after `time` (`idk_script_YYYY-MM-DD_HH-MM-SS.sh`).
    pub fn at(body: impl Into<String>, time: DateTime<Local>) -> Self {
        Self {
            body: body.into(),
            file_name: timestamped_file_name(time),
        }
    }

    /// Replace the default name with a user choice; bare names only.
    ///
    /// Empty input or anything containing a path separator keeps the default.
    pub fn with_chosen_name(mut self, chosen: &str) -> Self {
        let chosen = chosen.trim();
        if !chosen.is_empty() && !chosen.contains(['/', '\\']) && chosen != ".." {
            self.file_name = chosen.to_string();
        }
        self
    }

    /// Write the script into `dir` (created if needed) with owner-only access.
    ///
    /// An existing file of the same name is never replaced.
    pub fn write_into(&self, dir: &Path) -> Result<PathBuf, ScriptError> {
        std::fs::create_dir_all(dir)?;
        let path = dir.join(&self.file_name);
        let mut options = OpenOptions::new();
        options.write(true).create_new(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(0o600);
        }
        let mut file = match options.open(&path) {
            Ok(file) => file,
            Err(err) if err.kind() == ErrorKind::AlreadyExists => {
                return Err(ScriptError::AlreadyExists(path));
            }
            Err(err) => return Err(err.into()),
        };
        file.write_all(self.body.as_bytes())?;
        file.flush()?;
        tracing::debug!(path = %path.display(), "script written");
        Ok(path)
    }

    /// Write into `temp_dir`, source it once, and delete it on success.
    ///
    /// The file gets a fresh random suffix after the timestamp. A failed run
    /// leaves the file in place for inspection.
    pub async fn run_ephemeral(
        &self,
        runner: &dyn CommandRunner,
        temp_dir: &Path,
    ) -> Result<PathBuf, ScriptError> {
        let path = self.write_ephemeral(temp_dir)?;
        if let Err(err) = runner.run(&source_command(&path)).await {
            tracing::debug!(path = %path.display(), "script failed; file kept");
            return Err(err.into());
        }
        std::fs::remove_file(&path)?;
        tracing::debug!(path = %path.display(), "ephemeral script removed");
        Ok(path)
    }

    fn write_ephemeral(&self, dir: &Path) -> Result<PathBuf, ScriptError> {
        std::fs::create_dir_all(dir)?;
        let stem = self.file_name.strip_suffix(".sh").unwrap_or(&self.file_name);
        let mut file = tempfile::Builder::new()
            .prefix(&format!("{stem}_"))
            .suffix(".sh")
            .rand_bytes(EPHEMERAL_RAND_BYTES)
            .tempfile_in(dir)?;
        file.write_all(self.body.as_bytes())?;
        file.flush()?;
        let (_, path) = file.keep().map_err(|err| ScriptError::Io(err.error))?;
        tracing::debug!(path = %path.display(), "ephemeral script written");
        Ok(path)
    }
}

/// `idk_script_<YYYY-MM-DD_HH-MM-SS>.sh`
pub fn timestamped_file_name(time: DateTime<Local>) -> String {
    format!("idk_script_{}.sh", time.format("%Y-%m-%d_%H-%M-%S"))
}

/// Shell command that sources the script at `path`.
pub fn source_command(path: &Path) -> String {
    format!(". {}", quote_if_needed(&path.display().to_string()))
}
