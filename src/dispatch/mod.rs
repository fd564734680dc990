//! Action dispatcher: turns a backend action into a confirmed local effect.
//!
//! | kind            | with alias                    | without alias                    |
//! |-----------------|-------------------------------|----------------------------------|
//! | command / doc   | y/n, then install alias       | y/n/copy                         |
//! | cd              | alias ignored                 | resolve, then y/n/copy `cd path` |
//! | script          | y/n/update, alias sources it  | y/n/update/save                  |
//! | unknown         | printed verbatim              | printed verbatim                 |
//!
//! "update" asks for revision instructions and resubmits with the current
//! script as context. Revisions run as a loop, one active response at a time.

mod choice;
mod outcome;

pub use choice::Choice;
pub use outcome::{DispatchOutcome, Outcome};

use std::path::{Path, PathBuf};

use crate::alias::{AliasInstaller, AliasRecord};
use crate::api::{ActionKind, ActionResponse, PromptRequest, PromptService};
use crate::auth::{AuthError, CredentialStore};
use crate::error::{AliasError, ApiError, ResolveError, ScriptError};
use crate::execution::{quote_if_needed, ClipboardWriter, CommandRunner};
use crate::resolve::DirectoryResolver;
use crate::script::{source_command, ScriptArtifact};
use crate::tui::settings::LABEL_PROGRESS;
use crate::tui::Console;
use outcome::*;

/// Per-user locations the dispatcher writes to.
#[derive(Debug, Clone)]
pub struct LocalEnv {
    pub home: PathBuf,
    /// Raw `$SHELL`.
    pub shell: Option<String>,
    /// Durable scripts (`~/.idk/scripts`).
    pub scripts_dir: PathBuf,
    /// Ephemeral scripts.
    pub temp_dir: PathBuf,
}

impl LocalEnv {
    /// Environment of the current user; fails without a home directory.
    pub fn detect() -> Result<Self, AliasError> {
        let home = dirs::home_dir().ok_or(AliasError::NoHomeDir)?;
        let scripts_dir = crate::config::default_scripts_dir().ok_or(AliasError::NoHomeDir)?;
        Ok(Self {
            home,
            shell: std::env::var("SHELL").ok(),
            scripts_dir,
            temp_dir: std::env::temp_dir(),
        })
    }
}

/// Result of dispatching one response: finished, or revise and resubmit.
enum Step {
    Done(DispatchOutcome),
    Revise {
        instructions: String,
        existing_script: String,
    },
}

/// Drives one prompt from submission to a confirmed local effect.
pub struct Dispatcher<'a> {
    prompts: &'a dyn PromptService,
    runner: &'a dyn CommandRunner,
    console: &'a dyn Console,
    clipboard: &'a dyn ClipboardWriter,
    credentials: &'a dyn CredentialStore,
    env: LocalEnv,
}

impl<'a> Dispatcher<'a> {
    pub fn new(
        prompts: &'a dyn PromptService,
        runner: &'a dyn CommandRunner,
        console: &'a dyn Console,
        clipboard: &'a dyn ClipboardWriter,
        credentials: &'a dyn CredentialStore,
        env: LocalEnv,
    ) -> Self {
        Self {
            prompts,
            runner,
            console,
            clipboard,
            credentials,
            env,
        }
    }

    /// Submit `prompt` and act on the response, revising until the user settles.
    ///
    /// `readme` is only sent with the first submission; whitespace inside
    /// `alias` is dropped and an empty alias means none.
    pub async fn handle_prompt(
        &self,
        prompt: &str,
        readme: Option<&Path>,
        alias: Option<&str>,
    ) -> DispatchOutcome {
        let alias = alias.map(normalize_alias).filter(|name| !name.is_empty());
        let mut request = PromptRequest::new(prompt);
        let mut readme = readme;

        loop {
            let response = match self.submit(request, readme.take()).await {
                Ok(response) => response,
                Err(outcome) => return outcome,
            };
            tracing::debug!(kind = ?response.kind, "action received");
            match self.dispatch(&response, alias.as_deref()).await {
                Step::Done(outcome) => return outcome,
                Step::Revise {
                    instructions,
                    existing_script,
                } => {
                    request = PromptRequest::new(instructions).with_existing_script(existing_script);
                }
            }
        }
    }

    async fn submit(
        &self,
        request: PromptRequest,
        readme: Option<&Path>,
    ) -> Result<ActionResponse, DispatchOutcome> {
        if request.prompt.trim().is_empty() {
            return Err(DispatchOutcome::failed(MSG_EMPTY_PROMPT).hint(HINT_HELP));
        }

        let token = self.credentials.load().map_err(|err| match err {
            AuthError::NotLoggedIn => DispatchOutcome::failed(MSG_NOT_LOGGED_IN).hint(HINT_LOGIN),
            other => DispatchOutcome::failed(other.to_string()).hint(HINT_LOGIN),
        })?;

        let request = match readme {
            Some(path) => {
                let data = std::fs::read_to_string(path).map_err(|err| {
                    tracing::warn!(path = %path.display(), "reading document failed: {err}");
                    DispatchOutcome::failed(MSG_README)
                })?;
                request.with_readme_data(data)
            }
            None => request,
        };

        let result = {
            let _progress = self.console.start_progress(LABEL_PROGRESS);
            self.prompts.submit(&request, &token).await
        };

        result.map_err(|err| match err {
            ApiError::Unauthorized => {
                if let Err(clear_err) = self.credentials.clear() {
                    tracing::warn!("failed to clear expired credentials: {clear_err}");
                }
                DispatchOutcome::failed(MSG_TOKEN_EXPIRED).hint(HINT_LOGIN)
            }
            ApiError::QuotaExceeded => DispatchOutcome::failed(MSG_QUOTA),
            other => {
                tracing::warn!("prompt submission failed: {other}");
                DispatchOutcome::failed(MSG_GENERIC)
            }
        })
    }

    async fn dispatch(&self, response: &ActionResponse, alias: Option<&str>) -> Step {
        let text = response.text.trim();
        match (response.kind, alias) {
            (ActionKind::Command | ActionKind::CommandFromDoc, Some(alias)) => {
                Step::Done(self.confirm_alias(text, alias).await)
            }
            (ActionKind::Command | ActionKind::CommandFromDoc, None) => {
                Step::Done(self.confirm_command(text, Outcome::Executed).await)
            }
            (ActionKind::Cd, _) => Step::Done(self.navigate(text).await),
            (ActionKind::Script, Some(alias)) => self.script_with_alias(&response.text, alias).await,
            (ActionKind::Script, None) => self.script(&response.text).await,
            (ActionKind::Unknown, _) => Step::Done(DispatchOutcome::with_message(
                Outcome::Printed,
                response.text.clone(),
            )),
        }
    }

    async fn confirm_command(&self, command: &str, success: Outcome) -> DispatchOutcome {
        let question = format!("Do you want me to execute `{command}`? (y/n/copy): ");
        let answer = self.console.ask(&question);
        match Choice::parse(answer.as_deref(), &[Choice::Yes, Choice::Copy]) {
            Choice::Yes => match self.runner.run(command).await {
                Ok(()) => DispatchOutcome::new(success),
                Err(err) => DispatchOutcome::failed(err.to_string()),
            },
            Choice::Copy => match self.clipboard.write_text(command) {
                Ok(()) => DispatchOutcome::with_message(Outcome::Copied, MSG_COPIED),
                Err(err) => {
                    tracing::warn!("clipboard write failed: {err}");
                    DispatchOutcome::failed(MSG_COPY_FAILED)
                }
            },
            _ => DispatchOutcome::with_message(Outcome::Cancelled, MSG_COMMAND_CANCELLED),
        }
    }

    async fn confirm_alias(&self, command: &str, alias: &str) -> DispatchOutcome {
        let question = format!("Do you want me to alias `{command}` as `{alias}`? (y/n): ");
        let answer = self.console.ask(&question);
        match Choice::parse(answer.as_deref(), &[Choice::Yes]) {
            Choice::Yes => aliased(self.installer().install(command, alias).await),
            _ => DispatchOutcome::with_message(Outcome::Cancelled, MSG_ALIAS_CANCELLED),
        }
    }

    async fn navigate(&self, target: &str) -> DispatchOutcome {
        let resolver = DirectoryResolver::new(self.env.home.clone());
        match resolver.resolve_best_match(target) {
            Ok(path) => {
                let command = format!("cd {}", quote_if_needed(&path));
                self.confirm_command(&command, Outcome::Navigated)
                    .await
            }
            Err(ResolveError::NotFound(_)) => DispatchOutcome::failed(MSG_DIR_NOT_FOUND),
            Err(err) => {
                tracing::warn!("directory resolution failed: {err}");
                DispatchOutcome::failed(MSG_GENERIC)
            }
        }
    }

    async fn script(&self, body: &str) -> Step {
        self.console.show_script(body);
        let answer = self
            .console
            .ask("Do you want me to execute the script? (y/n/update/save): ");
        let offered = [Choice::Yes, Choice::Update, Choice::Save];
        match Choice::parse(answer.as_deref(), &offered) {
            Choice::Yes => {
                let artifact = ScriptArtifact::new(body);
                Step::Done(
                    match artifact.run_ephemeral(self.runner, &self.env.temp_dir).await {
                        Ok(_) => DispatchOutcome::with_message(Outcome::Executed, MSG_SCRIPT_DONE),
                        Err(err) => DispatchOutcome::failed(err.to_string()),
                    },
                )
            }
            Choice::Update => self.revision(body),
            Choice::Save => Step::Done(self.save_script(body)),
            _ => Step::Done(DispatchOutcome::with_message(
                Outcome::Cancelled,
                MSG_SCRIPT_CANCELLED,
            )),
        }
    }

    async fn script_with_alias(&self, body: &str, alias: &str) -> Step {
        self.console.show_script(body);
        let answer = self
            .console
            .ask("Do you want me to alias the script? (y/n/update): ");
        match Choice::parse(answer.as_deref(), &[Choice::Yes, Choice::Update]) {
            Choice::Yes => Step::Done(match self.alias_script(body, alias).await {
                Ok(record) => aliased(Ok(record)),
                Err(ScriptError::Alias(err)) => aliased(Err(err)),
                Err(err) => DispatchOutcome::failed(err.to_string()),
            }),
            Choice::Update => self.revision(body),
            _ => Step::Done(DispatchOutcome::with_message(
                Outcome::Cancelled,
                MSG_SCRIPT_CANCELLED,
            )),
        }
    }

    /// Durable copy under its timestamped name, aliased as `. <path>`.
    async fn alias_script(&self, body: &str, alias: &str) -> Result<AliasRecord, ScriptError> {
        let path = ScriptArtifact::new(body).write_into(&self.env.scripts_dir)?;
        Ok(self.installer().install(&source_command(&path), alias).await?)
    }

    fn save_script(&self, body: &str) -> DispatchOutcome {
        let artifact = ScriptArtifact::new(body);
        let question = format!("Save script as [{}]: ", artifact.file_name);
        let Some(name) = self.console.ask(&question) else {
            return DispatchOutcome::with_message(Outcome::Cancelled, MSG_SCRIPT_CANCELLED);
        };
        match artifact
            .with_chosen_name(&name)
            .write_into(&self.env.scripts_dir)
        {
            Ok(path) => DispatchOutcome::with_message(
                Outcome::Saved,
                format!("Script saved as {}", path.display()),
            ),
            Err(err) => DispatchOutcome::failed(err.to_string()),
        }
    }

    fn revision(&self, current: &str) -> Step {
        match self.console.ask("What do you want to change? ") {
            Some(instructions) => Step::Revise {
                instructions,
                existing_script: current.to_string(),
            },
            None => Step::Done(DispatchOutcome::with_message(
                Outcome::Cancelled,
                MSG_SCRIPT_CANCELLED,
            )),
        }
    }

    fn installer(&self) -> AliasInstaller<'a> {
        AliasInstaller::new(self.runner, self.env.home.clone(), self.env.shell.clone())
    }
}

fn aliased(result: Result<AliasRecord, AliasError>) -> DispatchOutcome {
    match result {
        Ok(record) => DispatchOutcome::with_message(
            Outcome::Aliased,
            format!(
                "Added alias '{}' to {}",
                record.name,
                record.config_file.display()
            ),
        ),
        Err(err) => DispatchOutcome::failed(err.to_string()),
    }
}

/// Strip every whitespace character from a user-supplied alias name.
pub fn normalize_alias(alias: &str) -> String {
    alias.chars().filter(|c| !c.is_whitespace()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testsupport::{
        MemoryCredentialStore, RecordingClipboard, RecordingRunner, ScriptedConsole,
        ScriptedPromptService, TestTempDir,
    };

    struct Harness {
        root: TestTempDir,
        service: ScriptedPromptService,
        runner: RecordingRunner,
        console: ScriptedConsole,
        clipboard: RecordingClipboard,
        store: MemoryCredentialStore,
    }

    impl Harness {
        fn new(responses: Vec<Result<ActionResponse, ApiError>>, answers: &[&str]) -> Self {
            Self {
                root: TestTempDir::new("dispatch"),
                service: ScriptedPromptService::replying(responses),
                runner: RecordingRunner::default(),
                console: ScriptedConsole::answering(answers),
                clipboard: RecordingClipboard::default(),
                store: MemoryCredentialStore::with_token("jwt"),
            }
        }

        fn env(&self) -> LocalEnv {
            LocalEnv {
                home: self.root.child("home"),
                shell: Some("/bin/zsh".into()),
                scripts_dir: self.root.child("home/.idk/scripts"),
                temp_dir: self.root.child("tmp"),
            }
        }

        async fn run(&self, prompt: &str, readme: Option<&Path>, alias: Option<&str>) -> DispatchOutcome {
            std::fs::create_dir_all(self.root.child("home")).expect("home");
            Dispatcher::new(
                &self.service,
                &self.runner,
                &self.console,
                &self.clipboard,
                &self.store,
                self.env(),
            )
            .handle_prompt(prompt, readme, alias)
            .await
        }
    }

    fn action(kind: ActionKind, text: &str) -> Result<ActionResponse, ApiError> {
        Ok(ActionResponse {
            text: text.to_string(),
            kind,
        })
    }

    #[tokio::test]
    async fn confirmed_command_runs_with_token() {
        let h = Harness::new(vec![action(ActionKind::Command, "ls -la")], &["y"]);
        let outcome = h.run("list files", None, None).await;

        assert_eq!(outcome.outcome, Outcome::Executed);
        assert_eq!(h.runner.commands(), vec!["ls -la"]);
        let requests = h.service.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].0.prompt, "list files");
        assert_eq!(requests[0].1, "jwt");
        assert_eq!(
            h.console.questions(),
            vec!["Do you want me to execute `ls -la`? (y/n/copy): "]
        );
    }

    #[tokio::test]
    async fn copy_puts_command_on_clipboard_without_running() {
        let h = Harness::new(vec![action(ActionKind::Command, "git log")], &["copy"]);
        let outcome = h.run("history", None, None).await;

        assert_eq!(outcome.outcome, Outcome::Copied);
        assert_eq!(h.clipboard.writes(), vec!["git log"]);
        assert!(h.runner.commands().is_empty());
    }

    #[tokio::test]
    async fn clipboard_failure_is_reported() {
        let mut h = Harness::new(vec![action(ActionKind::Command, "git log")], &["copy"]);
        h.clipboard = RecordingClipboard::broken();
        let outcome = h.run("history", None, None).await;
        assert_eq!(outcome, DispatchOutcome::failed(MSG_COPY_FAILED));
    }

    #[tokio::test]
    async fn eof_and_unoffered_answers_cancel_commands() {
        let h = Harness::new(vec![action(ActionKind::Command, "rm -rf build")], &[]);
        let outcome = h.run("clean", None, None).await;
        assert_eq!(outcome.outcome, Outcome::Cancelled);

        let h = Harness::new(vec![action(ActionKind::Command, "rm -rf build")], &["save"]);
        let outcome = h.run("clean", None, None).await;
        assert_eq!(outcome.outcome, Outcome::Cancelled);
        assert!(h.runner.commands().is_empty());
    }

    #[tokio::test]
    async fn failing_command_is_a_failure_outcome() {
        let mut h = Harness::new(vec![action(ActionKind::Command, "false")], &["y"]);
        h.runner = RecordingRunner::failing(1);
        let outcome = h.run("fail", None, None).await;
        assert!(outcome.is_failure());
        assert_eq!(outcome.message.as_deref(), Some("`false` exited with 1"));
    }

    #[tokio::test]
    async fn command_with_alias_is_installed_and_defined() {
        let h = Harness::new(vec![action(ActionKind::Command, "git status")], &["y"]);
        let outcome = h.run("status", None, Some(" g s ")).await;

        assert_eq!(outcome.outcome, Outcome::Aliased);
        assert_eq!(h.runner.commands(), vec!["alias gs='git status'"]);
        let zshrc = std::fs::read_to_string(h.root.child("home/.zshrc")).unwrap();
        assert_eq!(zshrc, "alias gs='git status'\n");
    }

    #[tokio::test]
    async fn doc_command_sends_readme_and_honours_alias() {
        let h = Harness::new(vec![action(ActionKind::CommandFromDoc, "make dev")], &["y"]);
        let readme = h.root.write_text("README.md", "run `make dev` to start");
        let outcome = h.run("start it", Some(&readme), Some("dev")).await;

        assert_eq!(outcome.outcome, Outcome::Aliased);
        assert_eq!(h.service.requests()[0].0.readme_data, "run `make dev` to start");
    }

    #[tokio::test]
    async fn unreadable_readme_stops_before_submission() {
        let h = Harness::new(vec![action(ActionKind::Command, "x")], &["y"]);
        let missing = h.root.child("nope.md");
        let outcome = h.run("start it", Some(&missing), None).await;

        assert_eq!(outcome, DispatchOutcome::failed(MSG_README));
        assert!(h.service.requests().is_empty());
    }

    #[tokio::test]
    async fn empty_prompt_and_missing_login_short_circuit() {
        let h = Harness::new(vec![action(ActionKind::Command, "x")], &["y"]);
        let outcome = h.run("   ", None, None).await;
        assert_eq!(outcome.message.as_deref(), Some(MSG_EMPTY_PROMPT));

        let mut h = Harness::new(vec![action(ActionKind::Command, "x")], &["y"]);
        h.store = MemoryCredentialStore::default();
        let outcome = h.run("hello", None, None).await;
        assert_eq!(outcome.message.as_deref(), Some(MSG_NOT_LOGGED_IN));
        assert_eq!(outcome.hint, Some(HINT_LOGIN));
        assert!(h.service.requests().is_empty());
    }

    #[tokio::test]
    async fn unauthorized_clears_credentials() {
        let h = Harness::new(vec![Err(ApiError::Unauthorized)], &[]);
        let outcome = h.run("hello", None, None).await;

        assert_eq!(outcome.message.as_deref(), Some(MSG_TOKEN_EXPIRED));
        assert_eq!(h.store.clear_count(), 1);
        assert!(h.store.token().is_none());
        assert!(h.console.questions().is_empty());
    }

    #[tokio::test]
    async fn quota_and_other_errors_keep_credentials() {
        let h = Harness::new(vec![Err(ApiError::QuotaExceeded)], &[]);
        assert_eq!(
            h.run("hello", None, None).await,
            DispatchOutcome::failed(MSG_QUOTA)
        );
        assert_eq!(h.store.token().as_deref(), Some("jwt"));

        let h = Harness::new(vec![Err(ApiError::Status(500, "boom".into()))], &[]);
        assert_eq!(
            h.run("hello", None, None).await,
            DispatchOutcome::failed(MSG_GENERIC)
        );
        assert!(h.runner.commands().is_empty());
    }

    #[tokio::test]
    async fn unknown_kind_prints_raw_text() {
        let h = Harness::new(vec![action(ActionKind::Unknown, "I can't do that")], &[]);
        let outcome = h.run("fly", None, None).await;
        assert_eq!(
            outcome,
            DispatchOutcome::with_message(Outcome::Printed, "I can't do that")
        );
    }

    #[tokio::test]
    async fn script_update_resubmits_with_existing_script() {
        let h = Harness::new(
            vec![
                action(ActionKind::Script, "echo a\n"),
                action(ActionKind::Script, "echo b\n"),
            ],
            &["update", "print b instead", "y"],
        );
        let outcome = h.run("print a", None, None).await;

        assert_eq!(outcome.outcome, Outcome::Executed);
        let requests = h.service.requests();
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[1].0.prompt, "print b instead");
        assert_eq!(requests[1].0.existing_script, "echo a\n");
        assert_eq!(h.console.scripts_shown(), vec!["echo a\n", "echo b\n"]);

        let commands = h.runner.commands();
        assert_eq!(commands.len(), 1);
        let prefix = format!(". {}", h.root.child("tmp/idk_script_").display());
        assert!(commands[0].starts_with(&prefix), "{}", commands[0]);
        let leftovers = std::fs::read_dir(h.root.child("tmp")).unwrap().count();
        assert_eq!(leftovers, 0);
    }

    #[tokio::test]
    async fn failed_ephemeral_script_leaves_file_behind() {
        let mut h = Harness::new(vec![action(ActionKind::Script, "exit 3")], &["y"]);
        h.runner = RecordingRunner::failing(3);
        let outcome = h.run("fail", None, None).await;

        assert!(outcome.is_failure());
        let leftovers = std::fs::read_dir(h.root.child("tmp")).unwrap().count();
        assert_eq!(leftovers, 1);
    }

    #[tokio::test]
    async fn save_uses_chosen_name() {
        let h = Harness::new(vec![action(ActionKind::Script, "echo deploy")], &["save", "deploy.sh"]);
        let outcome = h.run("deploy", None, None).await;

        let saved = h.root.child("home/.idk/scripts/deploy.sh");
        assert_eq!(outcome.outcome, Outcome::Saved);
        assert_eq!(std::fs::read_to_string(saved).unwrap(), "echo deploy");
        assert!(h.runner.commands().is_empty());
    }

    #[tokio::test]
    async fn save_refuses_to_overwrite_existing_script() {
        let h = Harness::new(vec![action(ActionKind::Script, "echo new")], &["save", "deploy.sh"]);
        let existing = h.root.write_text("home/.idk/scripts/deploy.sh", "echo old");
        let outcome = h.run("deploy", None, None).await;

        assert!(outcome.is_failure());
        let message = outcome.message.unwrap_or_default();
        assert!(message.contains("already exists"), "{message}");
        assert_eq!(std::fs::read_to_string(existing).unwrap(), "echo old");
    }

    #[tokio::test]
    async fn save_with_blank_name_keeps_timestamped_default() {
        let h = Harness::new(vec![action(ActionKind::Script, "echo x")], &["save", ""]);
        let outcome = h.run("x", None, None).await;

        assert_eq!(outcome.outcome, Outcome::Saved);
        let names: Vec<String> = std::fs::read_dir(h.root.child("home/.idk/scripts"))
            .unwrap()
            .map(|entry| entry.unwrap().file_name().to_string_lossy().to_string())
            .collect();
        assert_eq!(names.len(), 1);
        assert!(names[0].starts_with("idk_script_") && names[0].ends_with(".sh"));
    }

    #[tokio::test]
    async fn aliased_script_is_sourced_from_durable_copy() {
        let h = Harness::new(vec![action(ActionKind::Script, "echo hi")], &["y"]);
        let outcome = h.run("greet", None, Some("hi")).await;

        assert_eq!(outcome.outcome, Outcome::Aliased);
        let scripts: Vec<PathBuf> = std::fs::read_dir(h.root.child("home/.idk/scripts"))
            .unwrap()
            .map(|entry| entry.unwrap().path())
            .collect();
        assert_eq!(scripts.len(), 1);
        let zshrc = std::fs::read_to_string(h.root.child("home/.zshrc")).unwrap();
        assert_eq!(zshrc, format!("alias hi='. {}'\n", scripts[0].display()));
    }

    #[tokio::test]
    async fn cd_resolves_history_then_confirms() {
        let h = Harness::new(vec![action(ActionKind::Cd, "b")], &["y"]);
        let base = h.root.child("home/work");
        for dir in ["b", "c"] {
            std::fs::create_dir_all(base.join(dir)).unwrap();
        }
        h.root.write_text(
            "home/.bash_history",
            &format!("cd {}\ncd b\ncd ..\ncd c\n", base.display()),
        );
        let outcome = h.run("go to b", None, Some("ignored")).await;

        assert_eq!(outcome.outcome, Outcome::Navigated);
        assert_eq!(
            h.runner.commands(),
            vec![format!("cd {}/b", base.display())]
        );
    }

    #[tokio::test]
    async fn cd_quotes_paths_with_shell_metacharacters() {
        let h = Harness::new(vec![action(ActionKind::Cd, "odd")], &["y"]);
        let odd = h.root.child("home/it's;odd");
        std::fs::create_dir_all(&odd).unwrap();
        h.root.write_text(
            "home/.bash_history",
            &format!("cd {}\ncd it's;odd\n", h.root.child("home").display()),
        );
        let outcome = h.run("go odd", None, None).await;

        assert_eq!(outcome.outcome, Outcome::Navigated);
        let quoted = odd.display().to_string().replace('\'', r"'\''");
        assert_eq!(h.runner.commands(), vec![format!("cd '{quoted}'")]);
    }

    #[tokio::test]
    async fn cd_without_match_fails_without_asking() {
        let h = Harness::new(vec![action(ActionKind::Cd, "qqzz")], &["y"]);
        h.root.write_text("home/.bash_history", "cd /\n");
        let outcome = h.run("go", None, None).await;

        assert_eq!(outcome, DispatchOutcome::failed(MSG_DIR_NOT_FOUND));
        assert!(h.console.questions().is_empty());
    }

    #[test]
    fn alias_whitespace_is_stripped() {
        assert_eq!(normalize_alias(" g s\t"), "gs");
        assert_eq!(normalize_alias("   "), "");
    }
}
