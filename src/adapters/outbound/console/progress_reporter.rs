use crate::ports::outbound::ProgressReporter;
use indicatif::{ProgressBar, ProgressStyle};
use std::cell::RefCell;
use std::time::Duration;

/// StderrProgressReporter adapter for reporting progress to stderr
///
/// This adapter implements the ProgressReporter port, writing status to
/// stderr so it doesn't interfere with the map on stdout. In-flight
/// activities are shown as an indicatif spinner.
pub struct StderrProgressReporter {
    spinner: RefCell<Option<ProgressBar>>,
}

impl StderrProgressReporter {
    pub fn new() -> Self {
        Self {
            spinner: RefCell::new(None),
        }
    }

    fn start_spinner(&self, message: &str) {
        let mut slot = self.spinner.borrow_mut();
        let spinner = slot.get_or_insert_with(|| {
            let spinner = ProgressBar::new_spinner();
            if let Ok(style) = ProgressStyle::default_spinner().template("   {spinner:.green} {msg}")
            {
                spinner.set_style(style);
            }
            spinner.enable_steady_tick(Duration::from_millis(120));
            spinner
        });
        spinner.set_message(message.to_string());
    }

    fn stop_spinner(&self) {
        if let Some(spinner) = self.spinner.borrow_mut().take() {
            spinner.finish_and_clear();
        }
    }
}

impl Default for StderrProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter for StderrProgressReporter {
    fn report(&self, message: &str) {
        match self.spinner.borrow().as_ref() {
            Some(spinner) => spinner.println(message),
            None => eprintln!("{}", message),
        }
    }

    fn report_activity(&self, message: &str) {
        self.start_spinner(message);
    }

    fn report_error(&self, message: &str) {
        self.stop_spinner();
        eprintln!("{}", message);
    }

    fn report_completion(&self, message: &str) {
        self.stop_spinner();
        eprintln!("{}", message);
    }
}
