//! Disease type reference data.

use std::collections::HashSet;

use serde::Serialize;
use tracing::{info, warn};

use zoonosis_ingest::CleanRecord;
use zoonosis_store::Connection;
use zoonosis_store::repository::get_or_create_disease;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DiseaseSummary {
    pub created: usize,
    pub existing: usize,
    pub skipped: usize,
}

/// Get or create a disease type for every distinct name in `rows`.
///
/// The first diagnostic code seen for a name is the one stored; later rows
/// with a different code do not update it.
pub fn load_disease_types(conn: &Connection, rows: &[CleanRecord]) -> DiseaseSummary {
    let mut summary = DiseaseSummary::default();
    let mut seen = HashSet::new();
    for row in rows {
        if !seen.insert(row.disease.as_str()) {
            continue;
        }
        let code = row
            .diagnostic_code
            .as_deref()
            .map(str::trim)
            .filter(|code| !code.is_empty());
        match get_or_create_disease(conn, &row.disease, code) {
            Ok(fetched) if fetched.was_created() => summary.created += 1,
            Ok(_) => summary.existing += 1,
            Err(err) => {
                warn!(disease = %row.disease, error = %err, "skipping disease type");
                summary.skipped += 1;
            }
        }
    }
    info!(
        created = summary.created,
        existing = summary.existing,
        "disease types ready"
    );
    summary
}
