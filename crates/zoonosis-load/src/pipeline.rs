//! The full load: read, clean, hierarchy, reference data, cases, totals.

use std::path::Path;

use serde::Serialize;
use tracing::{info, info_span};

use zoonosis_ingest::{CleanRecord, RawRecord, clean_records, read_records};
use zoonosis_store::{EntityTotals, Store, entity_totals};

use crate::cases::{CaseSummary, load_cases};
use crate::codes::CodeAllocator;
use crate::error::Result;
use crate::hierarchy::{HierarchySummary, build_hierarchy};
use crate::options::LoadOptions;
use crate::progress::ProgressSink;
use crate::reference::{DiseaseSummary, load_disease_types};

/// Outcome of a complete load run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LoadSummary {
    /// Rows read from the source.
    pub total: usize,
    /// Rows that passed critical-field cleaning.
    pub valid: usize,
    pub dropped: usize,
    pub hierarchy: HierarchySummary,
    pub diseases: DiseaseSummary,
    pub cases: CaseSummary,
    /// Table sizes after the run.
    pub totals: EntityTotals,
}

/// Load the notification file at `path` into `store`.
pub fn load_file(
    path: &Path,
    store: &mut Store,
    options: &LoadOptions,
    sink: &mut dyn ProgressSink,
) -> Result<LoadSummary> {
    let raw = {
        let _span = info_span!("read", path = %path.display()).entered();
        read_records(path)?
    };
    info!(rows = raw.len(), "read notification file");
    load_records(raw, store, options, sink)
}

/// Load already-read rows into `store`.
pub fn load_records(
    raw: Vec<RawRecord>,
    store: &mut Store,
    options: &LoadOptions,
    sink: &mut dyn ProgressSink,
) -> Result<LoadSummary> {
    let cleaned = {
        let _span = info_span!("clean").entered();
        clean_records(raw)
    };

    let (hierarchy, diseases) = build_reference_data(store, &cleaned.records)?;

    let cases = {
        let _span = info_span!("cases", rows = cleaned.records.len()).entered();
        load_cases(store, &cleaned.records, options, sink)?
    };

    let totals = entity_totals(store.connection())?;
    info!(
        regions = totals.regions,
        provinces = totals.provinces,
        districts = totals.districts,
        diseases = totals.diseases,
        patients = totals.patients,
        cases = totals.cases,
        "load complete"
    );

    Ok(LoadSummary {
        total: cleaned.total,
        valid: cleaned.records.len(),
        dropped: cleaned.dropped,
        hierarchy,
        diseases,
        cases,
        totals,
    })
}

/// Hierarchy and disease types, committed together before any case is read.
fn build_reference_data(
    store: &mut Store,
    rows: &[CleanRecord],
) -> Result<(HierarchySummary, DiseaseSummary)> {
    let tx = store.transaction()?;
    let hierarchy = {
        let _span = info_span!("hierarchy").entered();
        build_hierarchy(&tx, rows, &mut CodeAllocator::new())
    };
    let diseases = {
        let _span = info_span!("reference").entered();
        load_disease_types(&tx, rows)
    };
    tx.commit()?;
    Ok((hierarchy, diseases))
}
