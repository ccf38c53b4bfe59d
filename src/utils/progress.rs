//! Progress bar utilities using indicatif
//!
//! Wraps indicatif's `ProgressBar` so the loader can tick once per archive
//! from any worker thread.

use indicatif::{ProgressBar as IndicatifBar, ProgressStyle};

/// Progress bar wrapper for displaying archive parsing status
pub struct ProgressBar {
    bar: IndicatifBar,
}

impl ProgressBar {
    /// Create a new progress bar with known total
    pub fn new(total: usize, label: &str) -> Self {
        let bar = IndicatifBar::new(total as u64);
        bar.set_style(
            ProgressStyle::default_bar()
                .template("{msg} [{bar:20.cyan/blue}] ({pos}/{len}) {elapsed}")
                .expect("Invalid progress bar template")
                .progress_chars("█░"),
        );
        bar.set_message(label.to_string());

        Self { bar }
    }

    /// A bar that never draws, for quiet runs
    pub fn hidden() -> Self {
        Self {
            bar: IndicatifBar::hidden(),
        }
    }

    /// Increment progress by 1
    pub fn inc(&self) {
        self.bar.inc(1);
    }

    #[cfg(test)]
    pub fn position(&self) -> usize {
        self.bar.position() as usize
    }

    /// Remove the bar from the terminal once loading is over
    pub fn finish_and_clear(&self) {
        self.bar.finish_and_clear();
    }
}
