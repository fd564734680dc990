//! Shell history loading and `cd` cursor replay.

use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

/// One resolved `cd` target from history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryCandidate {
    pub resolved_absolute_path: String,
    pub exists_on_disk: bool,
    /// Index of the latest `cd` line that landed here.
    pub last_visit: usize,
}

/// History files in lookup order, relative to `$HOME`.
const HISTORY_FILES: &[&str] = &[".bash_history", ".zsh_history"];

/// Read the first available history file (bash, then zsh).
///
/// zsh extended-history metadata (`: 1700000000:0;`) is stripped.
pub fn load_history(home: &Path) -> std::io::Result<Vec<String>> {
    let mut last_err = None;
    for name in HISTORY_FILES {
        let path = home.join(name);
        match read_history_file(&path) {
            Ok(lines) => {
                tracing::debug!(file = %path.display(), lines = lines.len(), "history loaded");
                return Ok(lines);
            }
            Err(err) => last_err = Some(err),
        }
    }
    Err(last_err.unwrap_or_else(|| std::io::Error::from(std::io::ErrorKind::NotFound)))
}

fn read_history_file(path: &Path) -> std::io::Result<Vec<String>> {
    let file = std::fs::File::open(path)?;
    let mut lines = Vec::new();
    // History files may hold non-UTF-8 bytes (zsh metafied text); keep going.
    for raw in BufReader::new(file).split(b'\n') {
        let raw = raw?;
        let line = String::from_utf8_lossy(&raw);
        lines.push(strip_zsh_metadata(line.trim_end_matches('\r')).to_string());
    }
    Ok(lines)
}

/// Drop a leading `: <timestamp>:<elapsed>;` zsh marker.
pub fn strip_zsh_metadata(line: &str) -> &str {
    if !line.starts_with(':') {
        return line;
    }
    match line.split_once(';') {
        Some((_, command)) => command,
        None => line,
    }
}

/// Keep only `cd <arg>` lines, in original order.
pub fn cd_lines(history: &[String]) -> Vec<&str> {
    history
        .iter()
        .map(String::as_str)
        .filter(|line| line.starts_with("cd "))
        .collect()
}

/// Synthetic working directory used while replaying history.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct Cursor {
    segments: Vec<String>,
}

impl Cursor {
    fn set_absolute(&mut self, path: &str) {
        self.segments.clear();
        self.push_relative(path);
    }

    fn push_relative(&mut self, path: &str) {
        for part in path.split('/') {
            match part {
                "" | "." => {}
                ".." => {
                    self.segments.pop();
                }
                other => self.segments.push(other.to_string()),
            }
        }
    }

    fn render(&self) -> String {
        format!("/{}", self.segments.join("/"))
    }
}

/// A replayed directory with the position of its most recent visit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplayedPath {
    pub path: String,
    pub last_visit: usize,
}

/// Replay `cd` lines against a synthetic cursor and return each resulting path.
///
/// Absolute arguments (and `~`-prefixed ones, expanded against `home`) reset
/// the cursor, `..` pops a segment without going above `/`, anything else is
/// appended. Lines whose argument count is not exactly one and `cd -` are
/// skipped. Paths are returned in first-visit order with duplicates removed.
pub fn replay_cd_lines(lines: &[&str], home: &Path) -> Vec<String> {
    replay_cd_history(lines, home)
        .into_iter()
        .map(|replayed| replayed.path)
        .collect()
}

/// Like [`replay_cd_lines`], also recording where each path was last visited.
pub fn replay_cd_history(lines: &[&str], home: &Path) -> Vec<ReplayedPath> {
    let home = home.display().to_string();
    let mut cursor = Cursor::default();
    let mut resolved: Vec<ReplayedPath> = Vec::new();

    for (visit, line) in lines.iter().enumerate() {
        let parts: Vec<&str> = line.split_whitespace().collect();
        let [_, arg] = parts.as_slice() else {
            continue;
        };
        if *arg == "-" {
            continue;
        }

        if arg.starts_with('/') {
            cursor.set_absolute(arg);
        } else if *arg == "~" {
            cursor.set_absolute(&home);
        } else if let Some(rest) = arg.strip_prefix("~/") {
            cursor.set_absolute(&home);
            cursor.push_relative(rest);
        } else {
            cursor.push_relative(arg);
        }

        let path = cursor.render();
        match resolved.iter_mut().find(|seen| seen.path == path) {
            Some(seen) => seen.last_visit = visit,
            None => resolved.push(ReplayedPath {
                path,
                last_visit: visit,
            }),
        }
    }
    resolved
}

/// Build candidates from raw history, checking each path against `exists`.
pub fn history_candidates<F>(history: &[String], home: &Path, exists: F) -> Vec<HistoryCandidate>
where
    F: Fn(&Path) -> bool,
{
    replay_cd_history(&cd_lines(history), home)
        .into_iter()
        .map(|replayed| HistoryCandidate {
            exists_on_disk: exists(&PathBuf::from(&replayed.path)),
            resolved_absolute_path: replayed.path,
            last_visit: replayed.last_visit,
        })
        .collect()
}
