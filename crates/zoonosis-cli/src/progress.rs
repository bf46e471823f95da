//! Terminal progress bar for case loading.

use std::io::{self, IsTerminal};

use indicatif::{ProgressBar, ProgressStyle};

use zoonosis_load::{BatchProgress, ProgressSink};

const TEMPLATE: &str =
    "{spinner:.green} [{elapsed_precise}] [{wide_bar:.cyan/blue}] {pos}/{len} rows ({per_sec}) {msg}";

/// Drives an `indicatif` bar from batch progress.
///
/// The bar is hidden when stderr is not a terminal so redirected output
/// stays clean.
pub struct BarProgress {
    bar: ProgressBar,
}

impl BarProgress {
    pub fn new() -> Self {
        let bar = if io::stderr().is_terminal() {
            ProgressBar::new(0)
        } else {
            ProgressBar::hidden()
        };
        Self::with_bar(bar)
    }

    pub fn with_bar(bar: ProgressBar) -> Self {
        if let Ok(style) = ProgressStyle::with_template(TEMPLATE) {
            bar.set_style(style.progress_chars("#>-"));
        }
        Self { bar }
    }

    pub fn position(&self) -> u64 {
        self.bar.position()
    }
}

impl Default for BarProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressSink for BarProgress {
    fn start(&mut self, total: usize) {
        self.bar.set_length(total as u64);
        self.bar.set_message("loading cases");
    }

    fn batch_done(&mut self, progress: &BatchProgress) {
        self.bar.set_position(progress.processed as u64);
        self.bar
            .set_message(format!("{} created, {} errors", progress.created, progress.errors));
    }

    fn finish(&mut self, progress: &BatchProgress) {
        self.bar.finish_with_message(format!(
            "{} created, {} errors",
            progress.created, progress.errors
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tracks_processed_rows() {
        let mut sink = BarProgress::with_bar(ProgressBar::hidden());
        sink.start(10);
        sink.batch_done(&BatchProgress {
            processed: 4,
            total: 10,
            created: 3,
            errors: 1,
        });
        assert_eq!(sink.position(), 4);
    }
}
