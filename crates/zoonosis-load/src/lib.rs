//! Loads a notification file into the case store.
//!
//! The run is staged: rows are read and cleaned once, then the
//! administrative hierarchy and disease types are created, and finally each
//! row becomes a patient and a case. Every stage is idempotent on names, so
//! re-running a file only adds the cases again.
//!
//! Row-level problems are counted and logged, never fatal. Only failures of
//! the file itself or of the database abort a run.

mod cases;
mod codes;
mod error;
mod hierarchy;
mod options;
mod pipeline;
mod progress;
mod reference;

pub use cases::{CaseSummary, RowOutcome, load_cases};
pub use codes::CodeAllocator;
pub use error::{LoadError, Result, SkipReason};
pub use hierarchy::{HierarchySummary, LevelSummary, build_hierarchy};
pub use options::{DEFAULT_BATCH_SIZE, DEFAULT_ERROR_LOG_LIMIT, LoadOptions};
pub use pipeline::{LoadSummary, load_file, load_records};
pub use progress::{BatchProgress, NoProgress, ProgressSink};
pub use reference::{DiseaseSummary, load_disease_types};
