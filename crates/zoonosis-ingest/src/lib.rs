//! Notification file ingestion.
//!
//! Reads the flat national notification export (one row per case, with the
//! administrative hierarchy, disease and patient denormalized into columns),
//! repairs known text damage and drops rows missing critical fields.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use zoonosis_ingest::{clean_records, read_records};
//!
//! let raw = read_records(Path::new("data/zoonosis.csv"))?;
//! let cleaned = clean_records(raw);
//! println!("{} of {} rows usable", cleaned.records.len(), cleaned.total);
//! ```

mod clean;
mod error;
mod parse;
mod reader;
mod record;

pub use clean::{
    CleanedRows, MOJIBAKE_ENYE, clean_records, normalize_place_name, normalize_region_name,
};
pub use error::{IngestError, Result};
pub use parse::{parse_i32, parse_integer};
pub use reader::{read_records, read_records_from};
pub use record::{CleanRecord, RawRecord, SourceColumn};
