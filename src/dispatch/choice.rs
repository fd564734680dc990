//! User answers to confirmation prompts.

/// One answer to a confirmation question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    Yes,
    Copy,
    Update,
    Save,
    /// "n", EOF, or anything not offered by the question.
    Cancel,
}

impl Choice {
    /// Parse `answer` (case-insensitive), accepting only choices in `offered`.
    pub fn parse(answer: Option<&str>, offered: &[Choice]) -> Self {
        let Some(answer) = answer else {
            return Self::Cancel;
        };
        let choice = match answer.trim().to_ascii_lowercase().as_str() {
            "y" | "yes" => Self::Yes,
            "copy" => Self::Copy,
            "update" => Self::Update,
            "save" => Self::Save,
            _ => Self::Cancel,
        };
        if offered.contains(&choice) {
            choice
        } else {
            Self::Cancel
        }
    }
}
