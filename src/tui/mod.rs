//! Terminal user-interface building blocks.
//!
//! `renderer` owns output styling, `console` the question/answer seam used by
//! the dispatcher, and `progress` the spinner shown during backend calls.

pub mod console;
pub mod progress;
pub mod renderer;
pub mod settings;

pub use console::{Console, TerminalConsole};
pub use renderer::Renderer;
