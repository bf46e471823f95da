use serde::Serialize;

/// Running totals after a committed batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BatchProgress {
    pub processed: usize,
    pub total: usize,
    pub created: usize,
    pub errors: usize,
}

impl BatchProgress {
    pub fn percent(&self) -> f64 {
        if self.total == 0 {
            100.0
        } else {
            self.processed as f64 / self.total as f64 * 100.0
        }
    }
}

/// Receives case-loader progress. Implemented by the CLI progress bar.
pub trait ProgressSink {
    fn start(&mut self, _total: usize) {}
    fn batch_done(&mut self, progress: &BatchProgress);
    fn finish(&mut self, _progress: &BatchProgress) {}
}

/// Discards progress.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoProgress;

impl ProgressSink for NoProgress {
    fn batch_done(&mut self, _progress: &BatchProgress) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_of_empty_run_is_complete() {
        assert_eq!(BatchProgress::default().percent(), 100.0);
        let half = BatchProgress {
            processed: 250,
            total: 500,
            ..BatchProgress::default()
        };
        assert_eq!(half.percent(), 50.0);
    }
}
