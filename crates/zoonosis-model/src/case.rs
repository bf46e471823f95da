use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::enums::{CaseStatus, DiagnosisType};
use crate::ids::{CaseId, DiseaseId, DistrictId, PatientId};

/// Fields supplied when notifying a new case. Status and timestamps are
/// assigned by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCase {
    pub disease_id: DiseaseId,
    pub district_id: DistrictId,
    pub patient_id: PatientId,
    pub notification_date: NaiveDate,
    pub epi_week: u32,
    pub year: i32,
    pub diagnostic_code: String,
    pub diagnosis_type: DiagnosisType,
    pub health_office_code: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Case {
    pub id: CaseId,
    pub disease_id: DiseaseId,
    pub district_id: DistrictId,
    pub patient_id: PatientId,
    pub notification_date: NaiveDate,
    pub epi_week: u32,
    pub year: i32,
    pub diagnostic_code: String,
    pub diagnosis_type: DiagnosisType,
    pub status: CaseStatus,
    pub health_office_code: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl fmt::Display for Case {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Case {} - {}/W{}", self.id, self.year, self.epi_week)
    }
}
