//! SQLite-backed case store.
//!
//! Holds the administrative hierarchy, disease types, patients and cases,
//! and answers the filtered group-by-count queries the reports are built on.

pub mod aggregate;
pub mod error;
pub mod repository;
pub mod sqlite;

pub use aggregate::{
    CaseFilter, GroupCount, count_by_region, count_by_week, count_by_year, distinct_years,
};
pub use error::{Result, StoreError};
pub use repository::{EntityTotals, Fetched, entity_totals};
pub use sqlite::{Store, current_version, run_migrations};

// Re-exported so dependents can name connection and transaction types
// without their own rusqlite dependency.
pub use rusqlite::{Connection, Transaction};
