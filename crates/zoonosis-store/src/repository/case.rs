use std::str::FromStr;

use chrono::Utc;
use rusqlite::{Connection, OptionalExtension, Row, params};

use zoonosis_model::{
    Case, CaseId, CaseStatus, DiagnosisType, DiseaseId, DistrictId, NewCase, PatientId,
};

use crate::error::{Result, StoreError};

/// Insert a case with the default status and fresh timestamps.
pub fn insert_case(conn: &Connection, case: &NewCase) -> Result<CaseId> {
    let now = Utc::now();
    conn.execute(
        "INSERT INTO disease_case (
             disease_id, district_id, patient_id, notification_date, epi_week, year,
             diagnostic_code, diagnosis_type, status, health_office_code, created_at, updated_at
         ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?11)",
        params![
            case.disease_id.get(),
            case.district_id.get(),
            case.patient_id.get(),
            case.notification_date,
            case.epi_week,
            case.year,
            case.diagnostic_code,
            case.diagnosis_type.as_code(),
            CaseStatus::default().as_code(),
            case.health_office_code,
            now,
        ],
    )?;
    Ok(CaseId(conn.last_insert_rowid()))
}

struct CaseRow {
    case: Case,
    diagnosis_type: String,
    status: String,
}

fn case_from_row(row: &Row<'_>) -> rusqlite::Result<CaseRow> {
    Ok(CaseRow {
        case: Case {
            id: CaseId(row.get(0)?),
            disease_id: DiseaseId(row.get(1)?),
            district_id: DistrictId(row.get(2)?),
            patient_id: PatientId(row.get(3)?),
            notification_date: row.get(4)?,
            epi_week: row.get(5)?,
            year: row.get(6)?,
            diagnostic_code: row.get(7)?,
            diagnosis_type: DiagnosisType::default(),
            status: CaseStatus::default(),
            health_office_code: row.get(10)?,
            created_at: row.get(11)?,
            updated_at: row.get(12)?,
        },
        diagnosis_type: row.get(8)?,
        status: row.get(9)?,
    })
}

pub fn get_case(conn: &Connection, id: CaseId) -> Result<Case> {
    let row = conn
        .query_row(
            "SELECT id, disease_id, district_id, patient_id, notification_date, epi_week, year,
                    diagnostic_code, diagnosis_type, status, health_office_code,
                    created_at, updated_at
             FROM disease_case WHERE id = ?1",
            params![id.get()],
            case_from_row,
        )
        .optional()?
        .ok_or_else(|| StoreError::not_found("case", id))?;
    let mut case = row.case;
    case.diagnosis_type = DiagnosisType::from_str(&row.diagnosis_type)?;
    case.status = CaseStatus::from_str(&row.status)?;
    Ok(case)
}
