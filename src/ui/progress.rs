//! Spinner shown while blocking git subprocesses run

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

/// A steady-tick spinner, cleared when finished or dropped.
///
/// Disabled spinners are no-ops, used when stderr is not a terminal.
pub struct Spinner {
    pb: Option<ProgressBar>,
}

impl Spinner {
    pub fn start(message: &str, enabled: bool) -> Self {
        if !enabled {
            return Self { pb: None };
        }
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template(&format!("{{spinner}} {message}..."))
                .unwrap_or_else(|_| ProgressStyle::default_spinner())
                .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"]),
        );
        pb.enable_steady_tick(Duration::from_millis(80));
        Self { pb: Some(pb) }
    }

    /// Whether stderr is an interactive terminal
    pub fn terminal_attached() -> bool {
        console::Term::stderr().is_term()
    }

    pub fn is_active(&self) -> bool {
        self.pb.is_some()
    }

    pub fn finish(mut self) {
        if let Some(pb) = self.pb.take() {
            pb.finish_and_clear();
        }
    }
}

impl Drop for Spinner {
    fn drop(&mut self) {
        if let Some(pb) = self.pb.take() {
            pb.finish_and_clear();
        }
    }
}
