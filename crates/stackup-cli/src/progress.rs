//! Spinner shown while an external generator runs.

use std::sync::Mutex;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use stackup_core::application::ProgressReporter;

const TICKS: [&str; 4] = ["|", "/", "-", "\\"];
const TICK_INTERVAL: Duration = Duration::from_millis(300);

/// [`ProgressReporter`] backed by an indicatif spinner on stderr.
///
/// One spinner is live at a time; `begin` replaces any spinner that was
/// left running.
pub struct SpinnerReporter {
    current: Mutex<Option<ProgressBar>>,
    hidden: bool,
}

impl SpinnerReporter {
    pub fn new() -> Self {
        Self {
            current: Mutex::new(None),
            hidden: false,
        }
    }

    /// A reporter that draws nothing, for `--quiet`.
    pub fn hidden() -> Self {
        Self {
            current: Mutex::new(None),
            hidden: true,
        }
    }

    fn spinner(&self, message: &str) -> ProgressBar {
        if self.hidden {
            let spinner = ProgressBar::hidden();
            spinner.set_message(message.to_string());
            return spinner;
        }

        let spinner = ProgressBar::new_spinner();
        let style = ProgressStyle::default_spinner()
            .tick_strings(&spinner_ticks())
            .template("{spinner} {msg}")
            .unwrap_or_else(|e| {
                tracing::debug!("Failed to create spinner template: {e}");
                ProgressStyle::default_spinner()
            });
        spinner.set_style(style);
        spinner.set_message(message.to_string());
        spinner.enable_steady_tick(TICK_INTERVAL);
        spinner
    }

    fn take(&self) -> Option<ProgressBar> {
        self.current.lock().ok().and_then(|mut slot| slot.take())
    }
}

impl Default for SpinnerReporter {
    fn default() -> Self {
        Self::new()
    }
}

/// Tick frames; indicatif shows the last one once the spinner is done.
fn spinner_ticks() -> Vec<&'static str> {
    let mut ticks = TICKS.to_vec();
    ticks.push("\u{2713}"); // ✓
    ticks
}

impl ProgressReporter for SpinnerReporter {
    fn begin(&self, message: &str) {
        let spinner = self.spinner(message);
        if let Ok(mut slot) = self.current.lock() {
            if let Some(previous) = slot.replace(spinner) {
                previous.finish_and_clear();
            }
        }
    }

    fn finish(&self, message: &str) {
        if let Some(spinner) = self.take() {
            spinner.finish_with_message(message.to_string());
        }
    }

    fn abandon(&self, message: &str) {
        if let Some(spinner) = self.take() {
            spinner.abandon_with_message(message.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ticks_cycle_through_four_frames_then_done_mark() {
        let ticks = spinner_ticks();
        assert_eq!(&ticks[..4], &["|", "/", "-", "\\"]);
        assert_eq!(ticks.len(), 5);
    }

    #[test]
    fn finish_clears_the_live_spinner() {
        let reporter = SpinnerReporter::hidden();
        reporter.begin("Installing create-react-app my-react-app");
        assert!(reporter.current.lock().unwrap().is_some());

        reporter.finish("Installation of create-react-app my-react-app is done");
        assert!(reporter.current.lock().unwrap().is_none());
    }

    #[test]
    fn finish_without_begin_is_a_no_op() {
        let reporter = SpinnerReporter::hidden();
        reporter.finish("nothing running");
        reporter.abandon("nothing running");
        assert!(reporter.current.lock().unwrap().is_none());
    }

    #[test]
    fn begin_replaces_a_dangling_spinner() {
        let reporter = SpinnerReporter::hidden();
        reporter.begin("first");
        reporter.begin("second");
        let slot = reporter.current.lock().unwrap();
        assert_eq!(slot.as_ref().map(|s| s.message()), Some("second".to_string()));
    }
}
