//! Progress reporting module

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Progress reporter for splitting several inputs
///
/// Stays silent when quiet or when there is only one input.
pub struct ProgressReporter {
    progress_bar: Option<ProgressBar>,
    quiet: bool,
}

impl ProgressReporter {
    /// Create a new progress reporter
    pub fn new(quiet: bool) -> Self {
        Self {
            progress_bar: None,
            quiet,
        }
    }

    /// Initialize progress bar for `total_inputs` inputs
    pub fn init_inputs(&mut self, total_inputs: u64) {
        if self.quiet || total_inputs < 2 {
            return;
        }

        let pb = ProgressBar::new(total_inputs);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} inputs {msg}")
        {
            pb.set_style(style.progress_chars("##-"));
        }
        pb.enable_steady_tick(Duration::from_millis(100));

        self.progress_bar = Some(pb);
    }

    /// Update progress for a completed input
    pub fn input_completed(&self, name: &str) {
        if let Some(pb) = &self.progress_bar {
            pb.set_message(format!("Split: {}", name));
            pb.inc(1);
        }
    }

    /// Finish progress reporting
    pub fn finish(&self) {
        if let Some(pb) = &self.progress_bar {
            pb.finish_and_clear();
        }
    }

    /// Check if a progress bar is shown
    pub fn is_active(&self) -> bool {
        self.progress_bar.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quiet_reporter_has_no_bar() {
        let mut reporter = ProgressReporter::new(true);
        reporter.init_inputs(10);
        assert!(!reporter.is_active());
        reporter.input_completed("a.txt");
        reporter.finish();
    }

    #[test]
    fn test_single_input_has_no_bar() {
        let mut reporter = ProgressReporter::new(false);
        reporter.init_inputs(1);
        assert!(!reporter.is_active());
    }

    #[test]
    fn test_bar_counts_inputs() {
        let mut reporter = ProgressReporter::new(false);
        reporter.init_inputs(3);
        assert!(reporter.is_active());

        reporter.input_completed("a.txt");
        reporter.input_completed("b.txt");
        assert_eq!(reporter.progress_bar.as_ref().map(|pb| pb.position()), Some(2));
        reporter.finish();
    }
}
