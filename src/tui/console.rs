//! Interactive confirmation seam between the dispatcher and the terminal.

use std::io::{self, BufRead};

use crate::tui::progress::ProgressHandle;
use crate::tui::renderer::Renderer;

/// Everything the dispatcher needs from the user's terminal.
pub trait Console: Send + Sync {
    /// Ask a question and read one trimmed line; `None` on EOF or read error.
    fn ask(&self, question: &str) -> Option<String>;
    /// Show a proposed script before asking about it.
    fn show_script(&self, body: &str);
    /// Spinner kept alive while the returned handle lives.
    fn start_progress(&self, label: &str) -> ProgressHandle;
}

/// Console backed by stdin and the stderr renderer.
#[derive(Debug, Clone, Copy)]
pub struct TerminalConsole {
    renderer: Renderer,
}

impl TerminalConsole {
    pub fn new(renderer: Renderer) -> Self {
        Self { renderer }
    }
}

impl Console for TerminalConsole {
    fn ask(&self, question: &str) -> Option<String> {
        self.renderer.question(question);
        read_answer(&mut io::stdin().lock())
    }

    fn show_script(&self, body: &str) {
        self.renderer.script_block(body);
    }

    fn start_progress(&self, label: &str) -> ProgressHandle {
        self.renderer.progress(label)
    }
}

/// Read one line and trim it; EOF and read errors both yield `None`.
fn read_answer(input: &mut impl BufRead) -> Option<String> {
    let mut line = String::new();
    match input.read_line(&mut line) {
        Ok(0) => None,
        Ok(_) => Some(line.trim().to_string()),
        Err(err) => {
            tracing::warn!("failed to read answer: {err}");
            None
        }
    }
}
