//! Terminal output renderer for status lines, questions, and script blocks.
//!
//! Status output goes to stderr; only raw backend text that the user asked
//! for lands on stdout, so `idk ... > file` captures nothing but that text.

use crate::tui::progress::{set_progress_enabled, start_progress, ProgressHandle};
use crate::tui::settings;
use crossterm::style::{Color, Stylize};

/// Handles all terminal output formatting.
#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    /// Whether ANSI color/style output is enabled.
    color: bool,
}

impl Renderer {
    /// Create a renderer with optional color output.
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    pub fn color(&self) -> bool {
        self.color
    }

    /// Globally enable/disable live progress spinners.
    pub fn set_progress_enabled(enabled: bool) {
        set_progress_enabled(enabled);
    }

    /// Start the in-flight spinner on stderr.
    pub fn progress(&self, label: &str) -> ProgressHandle {
        start_progress(label, self.color)
    }

    pub fn success(&self, msg: &str) {
        eprintln!("{}", status_line(None, msg, settings::COLOR_SUCCESS, self.color));
    }

    pub fn notice(&self, msg: &str) {
        eprintln!("{}", status_line(None, msg, settings::COLOR_NOTICE, self.color));
    }

    /// Secondary guidance such as a follow-up command to run.
    pub fn hint(&self, msg: &str) {
        eprintln!("{}", status_line(None, msg, settings::COLOR_HINT, self.color));
    }

    pub fn warn(&self, msg: &str) {
        eprintln!(
            "{}",
            status_line(
                Some(settings::LABEL_WARNING),
                msg,
                settings::COLOR_WARNING,
                self.color
            )
        );
    }

    pub fn error(&self, msg: &str) {
        eprintln!(
            "{}",
            status_line(
                Some(settings::LABEL_ERROR),
                msg,
                settings::COLOR_ERROR,
                self.color
            )
        );
    }

    /// Print a confirmation question without a trailing newline.
    pub fn question(&self, question: &str) {
        if self.color {
            eprint!("{}", question.with(settings::COLOR_QUESTION).bold());
        } else {
            eprint!("{question}");
        }
    }

    /// Print a proposed script between horizontal rules.
    pub fn script_block(&self, body: &str) {
        eprintln!("{}", script_block_text(body, self.color));
    }

    /// Print backend text verbatim on stdout.
    pub fn raw(&self, text: &str) {
        println!("{text}");
    }
}

fn status_line(label: Option<&str>, msg: &str, tone: Color, color: bool) -> String {
    match (label, color) {
        (Some(label), true) => format!("{} {msg}", label.with(tone).bold()),
        (Some(label), false) => format!("{label} {msg}"),
        (None, true) => msg.with(tone).to_string(),
        (None, false) => msg.to_string(),
    }
}

fn script_block_text(body: &str, color: bool) -> String {
    let body = body.trim_end_matches('\n');
    if color {
        let rule = settings::SCRIPT_RULE.with(settings::COLOR_SCRIPT_RULE);
        format!(
            "{}\n{rule}\n{}\n{rule}",
            settings::SCRIPT_HEADER.bold(),
            body.with(settings::COLOR_SCRIPT_TEXT)
        )
    } else {
        format!(
            "{}\n{rule}\n{body}\n{rule}",
            settings::SCRIPT_HEADER,
            rule = settings::SCRIPT_RULE
        )
    }
}
