//! Directory resolution from shell history.
//!
//! The target name from the backend is matched against every directory the
//! user has `cd`'d into, reconstructed as absolute paths and filtered to
//! those that still exist.

mod fuzzy;
mod history;

pub use fuzzy::{best_match, is_subsequence, levenshtein};
pub use history::{
    cd_lines, history_candidates, load_history, replay_cd_history, replay_cd_lines,
    strip_zsh_metadata, HistoryCandidate, ReplayedPath,
};

use std::path::{Path, PathBuf};

use crate::error::ResolveError;

/// Resolves fuzzy directory names against one user's shell history.
#[derive(Debug, Clone)]
pub struct DirectoryResolver {
    home: PathBuf,
}

impl DirectoryResolver {
    pub fn new(home: PathBuf) -> Self {
        Self { home }
    }

    /// Existing directories from history, in first-visit order.
    pub fn existing_candidates(&self) -> Result<Vec<HistoryCandidate>, ResolveError> {
        let history = load_history(&self.home)?;
        let candidates: Vec<HistoryCandidate> =
            history_candidates(&history, &self.home, Path::exists)
                .into_iter()
                .filter(|candidate| candidate.exists_on_disk)
                .collect();
        tracing::debug!(count = candidates.len(), "existing cd candidates");
        Ok(candidates)
    }

    /// Best existing history directory for `target_name`.
    ///
    /// Equal scores go to the directory visited most recently.
    pub fn resolve_best_match(&self, target_name: &str) -> Result<String, ResolveError> {
        let mut candidates = self.existing_candidates()?;
        candidates.sort_by_key(|candidate| candidate.last_visit);
        best_match(
            target_name.trim(),
            candidates
                .iter()
                .map(|candidate| candidate.resolved_absolute_path.as_str()),
        )
        .map(str::to_string)
        .ok_or_else(|| ResolveError::NotFound(target_name.to_string()))
    }
}
