//! Case rows: patient and case creation in batched transactions.
//!
//! Every batch runs in one transaction. Each row gets its own savepoint, so a
//! row that fails halfway (patient written, case rejected) leaves nothing
//! behind while the rest of the batch still commits.

use std::collections::HashMap;

use chrono::NaiveDate;
use serde::Serialize;
use tracing::{info, warn};

use zoonosis_ingest::{CleanRecord, parse_i32, parse_integer};
use zoonosis_model::epiweek::{MIN_WEEK, SENTINEL_YEAR};
use zoonosis_model::{
    AgeUnit, CaseId, DiagnosisType, DiseaseType, District, Gender, NewCase, Patient, Province,
    ProvinceId, Region, RegionId, normalize_week, notification_date, sentinel_date,
};
use zoonosis_store::repository::{
    find_disease_by_name, find_district, find_province, find_region_by_name, insert_case,
    insert_patient,
};
use zoonosis_store::{Connection, Store};

use crate::error::{LoadError, Result, SkipReason};
use crate::options::LoadOptions;
use crate::progress::{BatchProgress, ProgressSink};

/// What happened to one case row.
#[derive(Debug)]
pub enum RowOutcome {
    Created(CaseId),
    Skipped(SkipReason),
}

/// Totals for the case stage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CaseSummary {
    pub processed: usize,
    pub created: usize,
    pub errors: usize,
}

/// Name lookups cached for the length of a run.
///
/// The case stage only reads the hierarchy and disease tables, so entries
/// never go stale while loading.
#[derive(Debug, Default)]
struct Resolver {
    diseases: HashMap<String, DiseaseType>,
    regions: HashMap<String, Region>,
    provinces: HashMap<(RegionId, String), Province>,
    districts: HashMap<(ProvinceId, String), District>,
}

impl Resolver {
    fn disease(&mut self, conn: &Connection, name: &str) -> std::result::Result<DiseaseType, SkipReason> {
        if let Some(disease) = self.diseases.get(name) {
            return Ok(disease.clone());
        }
        let disease = find_disease_by_name(conn, name)?
            .ok_or_else(|| SkipReason::UnknownDisease(name.to_string()))?;
        self.diseases.insert(name.to_string(), disease.clone());
        Ok(disease)
    }

    fn district(&mut self, conn: &Connection, row: &CleanRecord) -> std::result::Result<District, SkipReason> {
        let region = match self.regions.get(&row.region) {
            Some(region) => region.clone(),
            None => {
                let region = find_region_by_name(conn, &row.region)?
                    .ok_or_else(|| SkipReason::UnknownRegion(row.region.clone()))?;
                self.regions.insert(row.region.clone(), region.clone());
                region
            }
        };

        let province_key = (region.id, row.province.clone());
        let province = match self.provinces.get(&province_key) {
            Some(province) => province.clone(),
            None => {
                let province = find_province(conn, region.id, &row.province)?.ok_or_else(|| {
                    SkipReason::UnknownProvince {
                        region: row.region.clone(),
                        province: row.province.clone(),
                    }
                })?;
                self.provinces.insert(province_key, province.clone());
                province
            }
        };

        let district_key = (province.id, row.district.clone());
        if let Some(district) = self.districts.get(&district_key) {
            return Ok(district.clone());
        }
        let district = find_district(conn, province.id, &row.district)?.ok_or_else(|| {
            SkipReason::UnknownDistrict {
                region: row.region.clone(),
                province: row.province.clone(),
                district: row.district.clone(),
            }
        })?;
        self.districts.insert(district_key, district.clone());
        Ok(district)
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|text| !text.is_empty())
}

/// Patient fields of a row. Absent values are a quiet skip; present but
/// unreadable values are reported.
fn patient_from_row(row: &CleanRecord) -> std::result::Result<Patient, SkipReason> {
    let (Some(age), Some(unit), Some(sex)) = (
        non_blank(row.age.as_deref()),
        non_blank(row.age_unit.as_deref()),
        non_blank(row.sex.as_deref()),
    ) else {
        return Err(SkipReason::MissingPatientData);
    };
    let age = parse_i32(age).ok_or_else(|| SkipReason::InvalidAge(age.to_string()))?;
    let unit: AgeUnit = unit.parse()?;
    let gender: Gender = sex.parse()?;
    Ok(Patient::new(age, unit, gender))
}

/// `(date, year, week)` for a row. An unreadable week keeps the row's year
/// but takes the sentinel date and week 1; the sentinel year is only used
/// when the year itself is unreadable.
fn notification_period(row: &CleanRecord) -> (NaiveDate, i32, u32) {
    match (parse_i32(&row.year), parse_integer(&row.week)) {
        (Some(year), Some(week)) => (
            notification_date(Some(year), Some(week)),
            year,
            normalize_week(week),
        ),
        (Some(year), None) => (sentinel_date(), year, MIN_WEEK),
        (None, _) => (sentinel_date(), SENTINEL_YEAR, MIN_WEEK),
    }
}

fn load_row(
    conn: &Connection,
    resolver: &mut Resolver,
    row: &CleanRecord,
) -> std::result::Result<CaseId, SkipReason> {
    let disease = resolver.disease(conn, &row.disease)?;
    let district = resolver.district(conn, row)?;
    let patient = patient_from_row(row)?;
    let diagnosis_type = match non_blank(row.diagnosis_type.as_deref()) {
        Some(code) => code.parse::<DiagnosisType>()?,
        None => DiagnosisType::default(),
    };
    let (notification_date, year, epi_week) = notification_period(row);
    let diagnostic_code = non_blank(row.diagnostic_code.as_deref())
        .map(str::to_string)
        .or_else(|| disease.diagnostic_code.clone())
        .unwrap_or_default();

    let patient_id = insert_patient(conn, &patient)?;
    let case = NewCase {
        disease_id: disease.id,
        district_id: district.id,
        patient_id,
        notification_date,
        epi_week,
        year,
        diagnostic_code,
        diagnosis_type,
        health_office_code: non_blank(row.health_office.as_deref()).map(str::to_string),
    };
    insert_case(conn, &case).map_err(SkipReason::from)
}

/// Load every row as a patient plus case.
///
/// Row failures are counted and skipped; only the first
/// `options.error_log_limit` reported failures are logged. A failure to open
/// or commit a batch aborts the run.
pub fn load_cases(
    store: &mut Store,
    rows: &[CleanRecord],
    options: &LoadOptions,
    sink: &mut dyn ProgressSink,
) -> Result<CaseSummary> {
    if options.batch_size == 0 {
        return Err(LoadError::InvalidBatchSize);
    }
    let total = rows.len();
    let mut summary = CaseSummary::default();
    let mut resolver = Resolver::default();
    // Skips eligible for a warning; missing patient data is not among them.
    let mut reported = 0usize;
    sink.start(total);

    for batch in rows.chunks(options.batch_size) {
        let mut tx = store.transaction()?;
        for row in batch {
            let outcome = {
                let savepoint = tx.savepoint()?;
                match load_row(&savepoint, &mut resolver, row) {
                    Ok(id) => {
                        savepoint.commit()?;
                        RowOutcome::Created(id)
                    }
                    // Dropping the savepoint rolls the row back.
                    Err(err) => RowOutcome::Skipped(err),
                }
            };
            summary.processed += 1;
            match outcome {
                RowOutcome::Created(_) => summary.created += 1,
                RowOutcome::Skipped(err) => {
                    summary.errors += 1;
                    if err.is_reported() {
                        reported += 1;
                        if reported <= options.error_log_limit {
                            warn!(
                                row = summary.processed,
                                district = %row.district,
                                disease = %row.disease,
                                error = %err,
                                "skipping case row"
                            );
                        }
                    }
                }
            }
        }
        tx.commit()?;

        let progress = BatchProgress {
            processed: summary.processed,
            total,
            created: summary.created,
            errors: summary.errors,
        };
        info!(
            processed = progress.processed,
            total,
            created = progress.created,
            errors = progress.errors,
            "case batch committed ({:.1}%)",
            progress.percent()
        );
        sink.batch_done(&progress);
    }

    sink.finish(&BatchProgress {
        processed: summary.processed,
        total,
        created: summary.created,
        errors: summary.errors,
    });
    if reported > options.error_log_limit {
        info!(
            suppressed = reported - options.error_log_limit,
            "further row errors were not logged"
        );
    }
    Ok(summary)
}
