//! Wire types exchanged with the idk backend.

use serde::{Deserialize, Serialize};

/// How the backend decided to satisfy a prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum ActionKind {
    #[serde(rename = "COMMAND")]
    Command,
    /// Command derived from a user-supplied document (`--readme`).
    #[serde(rename = "COMMANDFROMREADME")]
    CommandFromDoc,
    #[serde(rename = "CD")]
    Cd,
    #[serde(rename = "SCRIPT")]
    Script,
    #[serde(other)]
    Unknown,
}

/// One interpreted prompt: the text plus how to act on it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ActionResponse {
    #[serde(rename = "response")]
    pub text: String,
    #[serde(rename = "actionType")]
    pub kind: ActionKind,
}

/// Body of `POST /prompt`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptRequest {
    pub prompt: String,
    pub os: String,
    /// Script/command being revised; empty for a fresh prompt.
    pub existing_script: String,
    pub readme_data: String,
    pub pwd: String,
}

impl PromptRequest {
    /// Build a request for this machine's OS and working directory.
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            os: std::env::consts::OS.to_string(),
            existing_script: String::new(),
            readme_data: String::new(),
            pwd: std::env::current_dir()
                .map(|dir| dir.display().to_string())
                .unwrap_or_default(),
        }
    }

    pub fn with_existing_script(mut self, script: impl Into<String>) -> Self {
        self.existing_script = script.into();
        self
    }

    pub fn with_readme_data(mut self, data: impl Into<String>) -> Self {
        self.readme_data = data.into();
        self
    }
}

#[derive(Debug, Deserialize)]
pub(super) struct AuthUrlResponse {
    #[serde(default)]
    pub(super) url: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct TokenRequest<'a> {
    pub(super) code: &'a str,
    pub(super) redirect_url: &'a str,
}

#[derive(Debug, Deserialize)]
pub(super) struct TokenResponse {
    #[serde(rename = "jwtToken", default)]
    pub(super) jwt_token: String,
}
