//! Progress reporting while a model call is in flight

use colored::Colorize;
use desk_application::TurnProgressNotifier;
use desk_domain::Model;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Mutex;
use std::time::Duration;

/// Shows a spinner from request start until the reply (or failure) arrives
pub struct ProgressReporter {
    spinner: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            spinner: Mutex::new(None),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg} {elapsed:.dim}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl TurnProgressNotifier for ProgressReporter {
    fn on_call_start(&self, model: &Model) {
        let pb = ProgressBar::new_spinner();
        pb.set_style(Self::spinner_style());
        pb.set_message(format!("Asking {}...", model.to_string().cyan()));
        pb.enable_steady_tick(Duration::from_millis(100));

        if let Ok(mut slot) = self.spinner.lock()
            && let Some(previous) = slot.replace(pb)
        {
            previous.finish_and_clear();
        }
    }

    fn on_call_end(&self, _success: bool) {
        if let Ok(mut slot) = self.spinner.lock()
            && let Some(pb) = slot.take()
        {
            pb.finish_and_clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spinner_cleared_after_call() {
        let reporter = ProgressReporter::new();
        reporter.on_call_start(&Model::default());
        assert!(reporter.spinner.lock().unwrap().is_some());

        reporter.on_call_end(true);
        assert!(reporter.spinner.lock().unwrap().is_none());

        reporter.on_call_end(false);
        assert!(reporter.spinner.lock().unwrap().is_none());
    }
}
