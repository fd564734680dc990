//! Centralized, hardcoded UI settings for the terminal interface.
//!
//! This is the single place to tweak prompt strings, glyphs, colors,
//! and spinner behavior.

use crossterm::style::Color;

// ---------------------------------------------------------------------------
// Script block framing
// ---------------------------------------------------------------------------

pub const SCRIPT_HEADER: &str = "Script:";
pub const SCRIPT_RULE: &str = "----------------";

// ---------------------------------------------------------------------------
// Labels
// ---------------------------------------------------------------------------

pub const LABEL_WARNING: &str = "warning:";
pub const LABEL_ERROR: &str = "error:";
pub const LABEL_PROGRESS: &str = "thinking";

// ---------------------------------------------------------------------------
// Spinner / progress
// ---------------------------------------------------------------------------

pub const PROGRESS_CLEAR_LINE: &str = "\r\x1b[2K";
pub const PROGRESS_FRAMES: [char; 10] = ['-', '\\', '|', '/', '-', '.', 'o', 'O', '0', '@'];
pub const PROGRESS_TICK_MS: u64 = 100;

// ---------------------------------------------------------------------------
// Colors
// ---------------------------------------------------------------------------

pub const COLOR_QUESTION: Color = Color::Yellow;
pub const COLOR_SUCCESS: Color = Color::Green;
pub const COLOR_NOTICE: Color = Color::Cyan;
pub const COLOR_WARNING: Color = Color::Yellow;
pub const COLOR_ERROR: Color = Color::Red;
pub const COLOR_HINT: Color = Color::DarkGrey;
pub const COLOR_SCRIPT_RULE: Color = Color::DarkGrey;
pub const COLOR_SCRIPT_TEXT: Color = Color::White;

pub const COLOR_PROGRESS_FRAME: Color = Color::Cyan;
pub const COLOR_PROGRESS_LABEL: Color = Color::DarkGrey;
pub const COLOR_PROGRESS_ELAPSED: Color = Color::DarkGrey;
