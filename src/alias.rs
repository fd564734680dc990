//! Durable shell aliases.
//!
//! An alias is defined once in the running shell context and appended to the
//! user's shell startup file so future shells pick it up. The startup file is
//! copied to `<file>.idk.backup` before every append.

use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Read, Write};
use std::path::{Path, PathBuf};

use crate::error::AliasError;
use crate::execution::{single_quote, CommandRunner};

/// Suffix appended to the startup file path for its pre-append backup.
pub const BACKUP_SUFFIX: &str = ".idk.backup";

/// One alias written to a shell startup file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AliasRecord {
    pub name: String,
    pub command_text: String,
    pub config_file: PathBuf,
}

impl AliasRecord {
    /// The `alias name='command'` line as written to the startup file.
    pub fn line(&self) -> String {
        alias_line(&self.name, &self.command_text)
    }
}

/// Shells with a known startup file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellKind {
    Bash,
    Zsh,
}

impl ShellKind {
    /// Detect from a `$SHELL` value such as `/usr/bin/zsh`.
    pub fn from_shell_path(shell: Option<&str>) -> Result<Self, AliasError> {
        let shell = shell.unwrap_or_default().trim();
        let name = Path::new(shell)
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_default();
        match name.as_str() {
            "bash" => Ok(Self::Bash),
            "zsh" => Ok(Self::Zsh),
            _ => Err(AliasError::UnsupportedShell(name)),
        }
    }

    /// Resolve the startup file, creating an empty `~/.zshrc` if missing.
    ///
    /// bash prefers `~/.bashrc` and falls back to `~/.bash_profile`.
    pub fn config_file(self, home: &Path) -> Result<PathBuf, AliasError> {
        match self {
            Self::Bash => {
                let bashrc = home.join(".bashrc");
                if bashrc.exists() {
                    Ok(bashrc)
                } else {
                    Ok(home.join(".bash_profile"))
                }
            }
            Self::Zsh => {
                let zshrc = home.join(".zshrc");
                if !zshrc.exists() {
                    File::create(&zshrc)?;
                }
                Ok(zshrc)
            }
        }
    }
}

/// Installs aliases into the current user's shell startup file.
pub struct AliasInstaller<'a> {
    runner: &'a dyn CommandRunner,
    home: PathBuf,
    shell: Option<String>,
}

impl<'a> AliasInstaller<'a> {
    /// `shell` is the raw `$SHELL` value; `home` the user's home directory.
    pub fn new(runner: &'a dyn CommandRunner, home: PathBuf, shell: Option<String>) -> Self {
        Self {
            runner,
            home,
            shell,
        }
    }

    /// Define `alias_name` for `command_text` now and persist it.
    ///
    /// Fails with `AlreadyExists` without touching the file when the startup
    /// file already defines the alias.
    pub async fn install(
        &self,
        command_text: &str,
        alias_name: &str,
    ) -> Result<AliasRecord, AliasError> {
        let shell = ShellKind::from_shell_path(self.shell.as_deref())?;
        let config_file = shell.config_file(&self.home)?;
        let record = AliasRecord {
            name: alias_name.to_string(),
            command_text: command_text.to_string(),
            config_file,
        };
        let line = record.line();

        // Only affects the command context; open interactive shells need the file.
        if let Err(err) = self.runner.run(line.trim_end()).await {
            tracing::warn!(alias = alias_name, "defining alias in current context failed: {err}");
        }

        if alias_exists(&record.config_file, alias_name)? {
            return Err(AliasError::AlreadyExists {
                name: record.name,
                config_file: record.config_file,
            });
        }

        append_with_backup(&record.config_file, &line)?;
        tracing::info!(
            alias = alias_name,
            file = %record.config_file.display(),
            "alias appended"
        );
        Ok(record)
    }
}

/// Format the alias definition line, including the trailing newline.
///
/// The command is single-quoted so the shell stores it verbatim.
pub fn alias_line(name: &str, command_text: &str) -> String {
    format!("alias {name}={}\n", single_quote(command_text))
}

/// Path of the backup copy for a startup file.
pub fn backup_path(config_file: &Path) -> PathBuf {
    let mut raw = config_file.as_os_str().to_os_string();
    raw.push(BACKUP_SUFFIX);
    PathBuf::from(raw)
}

/// True when any line of `config_file` starts with `alias <name>=`.
///
/// A missing file has no aliases.
pub fn alias_exists(config_file: &Path, alias_name: &str) -> Result<bool, AliasError> {
    let file = match File::open(config_file) {
        Ok(file) => file,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(false),
        Err(e) => return Err(AliasError::Io(e)),
    };
    let prefix = format!("alias {alias_name}=");
    for line in BufReader::new(file).lines() {
        if line?.starts_with(&prefix) {
            return Ok(true);
        }
    }
    Ok(false)
}

fn append_with_backup(config_file: &Path, line: &str) -> Result<(), AliasError> {
    let mut original = Vec::new();
    File::open(config_file)?.read_to_end(&mut original)?;

    let backup = backup_path(config_file);
    let mut backup_file = File::create(&backup)?;
    backup_file.write_all(&original)?;
    backup_file.sync_all()?;
    tracing::debug!(backup = %backup.display(), "startup file backed up");

    // Keep the alias on its own line even if the file lacks a final newline.
    let mut payload = String::new();
    if original.last().is_some_and(|byte| *byte != b'\n') {
        payload.push('\n');
    }
    payload.push_str(line);

    let mut file = OpenOptions::new().append(true).open(config_file)?;
    file.write_all(payload.as_bytes())?;
    file.flush()?;
    Ok(())
}
