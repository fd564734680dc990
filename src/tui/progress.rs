//! "thinking" spinner drawn on stderr while the backend works.

use crate::tui::settings;
use crossterm::style::Stylize;
use std::io::{self, IsTerminal, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, RecvTimeoutError};
use std::thread;
use std::time::{Duration, Instant};

static PROGRESS_ENABLED: AtomicBool = AtomicBool::new(true);

/// Running spinner; stops on [`ProgressHandle::finish`] or drop.
pub struct ProgressHandle {
    stop: Option<mpsc::Sender<()>>,
    ticker: Option<thread::JoinHandle<()>>,
}

impl ProgressHandle {
    pub(crate) fn disabled() -> Self {
        Self {
            stop: None,
            ticker: None,
        }
    }

    /// Stop the spinner and erase its line. Safe to call more than once.
    pub fn finish(&mut self) {
        // Dropping the sender wakes the ticker with `Disconnected`.
        self.stop.take();
        if let Some(ticker) = self.ticker.take() {
            let _ = ticker.join();
        }
    }

    fn is_active(&self) -> bool {
        self.ticker.is_some()
    }
}

impl Drop for ProgressHandle {
    fn drop(&mut self) {
        self.finish();
    }
}

/// Turn spinners off process-wide (e.g. while a prompt waits for input).
pub fn set_progress_enabled(enabled: bool) {
    PROGRESS_ENABLED.store(enabled, Ordering::Relaxed);
}

/// Start a spinner unless disabled or stderr is not a terminal.
pub fn start_progress(label: impl Into<String>, color: bool) -> ProgressHandle {
    if !PROGRESS_ENABLED.load(Ordering::Relaxed) || !io::stderr().is_terminal() {
        return ProgressHandle::disabled();
    }

    let label = label.into();
    let (stop, stopped) = mpsc::channel::<()>();
    let tick = Duration::from_millis(settings::PROGRESS_TICK_MS);

    let ticker = thread::spawn(move || {
        let started = Instant::now();
        for frame in settings::PROGRESS_FRAMES.iter().cycle() {
            draw(&frame_text(*frame, &label, started.elapsed(), color));
            match stopped.recv_timeout(tick) {
                Err(RecvTimeoutError::Timeout) => continue,
                Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
            }
        }
        draw(settings::PROGRESS_CLEAR_LINE);
    });

    ProgressHandle {
        stop: Some(stop),
        ticker: Some(ticker),
    }
}

fn draw(text: &str) {
    let mut stderr = io::stderr().lock();
    let _ = stderr.write_all(text.as_bytes());
    let _ = stderr.flush();
}

fn frame_text(frame: char, label: &str, elapsed: Duration, color: bool) -> String {
    let seconds = format!("({:.1}s)", elapsed.as_secs_f64());
    let clear = settings::PROGRESS_CLEAR_LINE;
    if !color {
        return format!("{clear}{frame} {label} {seconds}");
    }
    format!(
        "{clear}{} {} {}",
        frame.with(settings::COLOR_PROGRESS_FRAME),
        label.with(settings::COLOR_PROGRESS_LABEL),
        seconds.with(settings::COLOR_PROGRESS_ELAPSED),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_frame_shows_label_and_elapsed() {
        let out = frame_text('@', "thinking", Duration::from_millis(1500), false);
        assert!(out.starts_with(settings::PROGRESS_CLEAR_LINE));
        assert!(out.ends_with("@ thinking (1.5s)"));
    }

    #[test]
    fn disabled_handle_is_inert() {
        let mut handle = ProgressHandle::disabled();
        assert!(!handle.is_active());
        handle.finish();
        handle.finish();
    }
}
