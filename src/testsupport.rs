//! Shared test fixtures and in-memory doubles for the trait seams.
//!
//! Every double records what it was asked to do so tests can assert on side
//! effects without a terminal, a shell, a clipboard, or a network.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::api::{ActionResponse, PromptRequest, PromptService};
use crate::auth::{AuthError, CredentialStore};
use crate::error::{ApiError, ExecError};
use crate::execution::{ClipboardWriter, CommandRunner};
use crate::tui::progress::ProgressHandle;
use crate::tui::Console;

static TEST_DIR_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Temporary directory fixture with best-effort cleanup.
#[derive(Debug)]
pub struct TestTempDir {
    path: PathBuf,
}

impl TestTempDir {
    /// Create a unique temporary directory with a readable prefix.
    pub fn new(prefix: &str) -> Self {
        let suffix = TEST_DIR_COUNTER.fetch_add(1, Ordering::Relaxed);
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis();
        let dir = std::env::temp_dir().join(format!("idk-{prefix}-{millis}-{suffix}"));
        fs::create_dir_all(&dir).expect("failed to create temporary fixture directory");
        Self { path: dir }
    }

    /// Root directory path for this fixture.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Build a child path under the fixture root.
    pub fn child(&self, relative: &str) -> PathBuf {
        self.path.join(relative)
    }

    /// Write UTF-8 text to a child path, creating parent directories as needed.
    pub fn write_text(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.child(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("failed to create parent directories for fixture");
        }
        fs::write(&path, content).expect("failed to write fixture file");
        path
    }
}

impl Drop for TestTempDir {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.path);
    }
}

/// Command runner that records commands instead of spawning a shell.
#[derive(Debug, Default)]
pub struct RecordingRunner {
    commands: Mutex<Vec<String>>,
    fail_with: Option<i32>,
}

impl RecordingRunner {
    /// Runner whose every command "exits" with `code`.
    pub fn failing(code: i32) -> Self {
        Self {
            commands: Mutex::default(),
            fail_with: Some(code),
        }
    }

    pub fn commands(&self) -> Vec<String> {
        self.commands.lock().expect("runner lock").clone()
    }
}

#[async_trait]
impl CommandRunner for RecordingRunner {
    async fn run(&self, command: &str) -> Result<(), ExecError> {
        self.commands
            .lock()
            .expect("runner lock")
            .push(command.to_string());
        match self.fail_with {
            Some(code) => Err(ExecError::Failed {
                command: command.to_string(),
                exit_code: Some(code),
            }),
            None => Ok(()),
        }
    }
}

/// Credential store held in memory.
#[derive(Debug, Default)]
pub struct MemoryCredentialStore {
    token: Mutex<Option<String>>,
    clears: AtomicU64,
}

impl MemoryCredentialStore {
    pub fn with_token(token: &str) -> Self {
        Self {
            token: Mutex::new(Some(token.to_string())),
            clears: AtomicU64::new(0),
        }
    }

    pub fn token(&self) -> Option<String> {
        self.token.lock().expect("store lock").clone()
    }

    pub fn clear_count(&self) -> u64 {
        self.clears.load(Ordering::Relaxed)
    }
}

impl CredentialStore for MemoryCredentialStore {
    fn load(&self) -> Result<String, AuthError> {
        self.token().ok_or(AuthError::NotLoggedIn)
    }

    fn save(&self, token: &str) -> Result<(), AuthError> {
        *self.token.lock().expect("store lock") = Some(token.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<(), AuthError> {
        self.clears.fetch_add(1, Ordering::Relaxed);
        *self.token.lock().expect("store lock") = None;
        Ok(())
    }
}

/// Console fed with canned answers; `None` entries behave like EOF.
#[derive(Debug, Default)]
pub struct ScriptedConsole {
    answers: Mutex<VecDeque<Option<String>>>,
    questions: Mutex<Vec<String>>,
    scripts: Mutex<Vec<String>>,
}

impl ScriptedConsole {
    pub fn answering(answers: &[&str]) -> Self {
        let console = Self::default();
        {
            let mut queue = console.answers.lock().expect("console lock");
            queue.extend(answers.iter().map(|answer| Some(answer.to_string())));
        }
        console
    }

    pub fn questions(&self) -> Vec<String> {
        self.questions.lock().expect("console lock").clone()
    }

    pub fn scripts_shown(&self) -> Vec<String> {
        self.scripts.lock().expect("console lock").clone()
    }
}

impl Console for ScriptedConsole {
    fn ask(&self, question: &str) -> Option<String> {
        self.questions
            .lock()
            .expect("console lock")
            .push(question.to_string());
        self.answers
            .lock()
            .expect("console lock")
            .pop_front()
            .flatten()
    }

    fn show_script(&self, body: &str) {
        self.scripts
            .lock()
            .expect("console lock")
            .push(body.to_string());
    }

    fn start_progress(&self, _label: &str) -> ProgressHandle {
        ProgressHandle::disabled()
    }
}

/// Prompt service replaying queued results and recording each request.
#[derive(Debug, Default)]
pub struct ScriptedPromptService {
    responses: Mutex<VecDeque<Result<ActionResponse, ApiError>>>,
    requests: Mutex<Vec<(PromptRequest, String)>>,
}

impl ScriptedPromptService {
    pub fn replying(responses: Vec<Result<ActionResponse, ApiError>>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
            requests: Mutex::default(),
        }
    }

    /// Requests seen so far, paired with the token they carried.
    pub fn requests(&self) -> Vec<(PromptRequest, String)> {
        self.requests.lock().expect("service lock").clone()
    }
}

#[async_trait]
impl PromptService for ScriptedPromptService {
    async fn submit(
        &self,
        request: &PromptRequest,
        token: &str,
    ) -> Result<ActionResponse, ApiError> {
        self.requests
            .lock()
            .expect("service lock")
            .push((request.clone(), token.to_string()));
        self.responses
            .lock()
            .expect("service lock")
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::Decode("no scripted response left".into())))
    }
}

/// Clipboard that keeps everything written to it.
#[derive(Debug, Default)]
pub struct RecordingClipboard {
    writes: Mutex<Vec<String>>,
    broken: bool,
}

impl RecordingClipboard {
    pub fn broken() -> Self {
        Self {
            writes: Mutex::default(),
            broken: true,
        }
    }

    pub fn writes(&self) -> Vec<String> {
        self.writes.lock().expect("clipboard lock").clone()
    }
}

impl ClipboardWriter for RecordingClipboard {
    fn write_text(&self, text: &str) -> Result<(), ExecError> {
        if self.broken {
            return Err(ExecError::UnsupportedPlatform("test".into()));
        }
        self.writes
            .lock()
            .expect("clipboard lock")
            .push(text.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn temp_dir_fixture_writes_and_resolves_paths() {
        let fixture = TestTempDir::new("fixture");
        let file = fixture.write_text("nested/file.txt", "hello");
        assert_eq!(fs::read_to_string(file).unwrap(), "hello");
    }

    #[test]
    fn scripted_console_reports_eof_after_answers_run_out() {
        let console = ScriptedConsole::answering(&["y"]);
        assert_eq!(console.ask("first?").as_deref(), Some("y"));
        assert_eq!(console.ask("second?"), None);
        assert_eq!(console.questions(), vec!["first?", "second?"]);
    }

    #[test]
    fn memory_store_round_trips_and_counts_clears() {
        let store = MemoryCredentialStore::default();
        assert!(matches!(store.load(), Err(AuthError::NotLoggedIn)));
        store.save("jwt").unwrap();
        assert_eq!(store.load().unwrap(), "jwt");
        store.clear().unwrap();
        assert_eq!(store.clear_count(), 1);
        assert!(store.token().is_none());
    }
}
