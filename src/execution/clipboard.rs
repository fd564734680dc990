//! Clipboard writes through the system clipboard API.

use crate::error::ExecError;

/// Places text on the system clipboard.
pub trait ClipboardWriter: Send + Sync {
    fn write_text(&self, text: &str) -> Result<(), ExecError>;
}

/// `arboard`-backed clipboard (X11/Wayland, macOS, Windows).
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClipboard;

impl ClipboardWriter for SystemClipboard {
    fn write_text(&self, text: &str) -> Result<(), ExecError> {
        arboard::Clipboard::new()
            .and_then(|mut clipboard| clipboard.set_text(text.to_string()))
            .map_err(clipboard_error)?;
        tracing::debug!(bytes = text.len(), "copied to clipboard");
        Ok(())
    }
}

fn clipboard_error(err: arboard::Error) -> ExecError {
    ExecError::Clipboard(err.to_string())
}
