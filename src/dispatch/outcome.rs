//! What a dispatched action ended up doing.

pub(super) const MSG_EMPTY_PROMPT: &str = "Your prompt can not be empty";
pub(super) const MSG_NOT_LOGGED_IN: &str = "You are not logged in. Please login first";
pub(super) const MSG_TOKEN_EXPIRED: &str = "Token expired. Please login again";
pub(super) const MSG_QUOTA: &str =
    "Daily quota limit reached. Please try again tomorrow or upgrade on https://idk-cli.github.io/";
pub(super) const MSG_GENERIC: &str = "Something went wrong. Please try again!";
pub(super) const MSG_README: &str = "Error fetching README file. Please try again!";
pub(super) const MSG_DIR_NOT_FOUND: &str = "Could not find the directory. Please try again!";
pub(super) const MSG_COMMAND_CANCELLED: &str = "Command execution canceled";
pub(super) const MSG_SCRIPT_CANCELLED: &str = "Script execution canceled";
pub(super) const MSG_ALIAS_CANCELLED: &str = "Alias creation canceled";
pub(super) const MSG_COPIED: &str = "Command copied to clipboard";
pub(super) const MSG_COPY_FAILED: &str = "Failed to copy command to clipboard";
pub(super) const MSG_SCRIPT_DONE: &str = "Script execution completed";

pub(super) const HINT_LOGIN: &str = "Command: `idk --login`";
pub(super) const HINT_HELP: &str = "Learn more: `idk -h`";

/// Terminal state of one dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Executed,
    Aliased,
    Saved,
    Navigated,
    Copied,
    /// Backend text shown verbatim (unknown action kind).
    Printed,
    Cancelled,
    Failed,
}

/// Outcome plus the text the caller should show for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchOutcome {
    pub outcome: Outcome,
    pub message: Option<String>,
    /// Follow-up guidance, e.g. which command to run next.
    pub hint: Option<&'static str>,
}

impl DispatchOutcome {
    pub fn new(outcome: Outcome) -> Self {
        Self {
            outcome,
            message: None,
            hint: None,
        }
    }

    pub fn with_message(outcome: Outcome, message: impl Into<String>) -> Self {
        Self {
            outcome,
            message: Some(message.into()),
            hint: None,
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self::with_message(Outcome::Failed, message)
    }

    pub fn hint(mut self, hint: &'static str) -> Self {
        self.hint = Some(hint);
        self
    }

    pub fn is_failure(&self) -> bool {
        self.outcome == Outcome::Failed
    }
}
