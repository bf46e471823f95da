/// Rows per transaction.
pub const DEFAULT_BATCH_SIZE: usize = 500;
/// Row errors logged individually before the loader goes quiet.
pub const DEFAULT_ERROR_LOG_LIMIT: usize = 10;

/// Tuning knobs for a load run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadOptions {
    pub batch_size: usize,
    pub error_log_limit: usize,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            batch_size: DEFAULT_BATCH_SIZE,
            error_log_limit: DEFAULT_ERROR_LOG_LIMIT,
        }
    }
}

impl LoadOptions {
    #[must_use]
    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size;
        self
    }

    #[must_use]
    pub fn with_error_log_limit(mut self, limit: usize) -> Self {
        self.error_log_limit = limit;
        self
    }
}
