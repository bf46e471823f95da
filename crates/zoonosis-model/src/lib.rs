//! Data model for zoonosis case surveillance.
//!
//! Entities mirror the tables maintained by `zoonosis-store`: the three level
//! administrative hierarchy, disease types, patients and cases.

pub mod case;
pub mod disease;
pub mod enums;
pub mod epiweek;
pub mod error;
pub mod geography;
pub mod ids;
pub mod patient;

pub use case::{Case, NewCase};
pub use disease::DiseaseType;
pub use enums::{AgeGroup, AgeUnit, CaseStatus, DiagnosisType, Gender};
pub use epiweek::{
    MONTH_LABELS, normalize_week, notification_date, sentinel_date, week_to_month,
};
pub use error::{ModelError, Result};
pub use geography::{District, Province, Region, district_code, province_code, region_code};
pub use ids::{CaseId, DiseaseId, DistrictId, PatientId, ProvinceId, RegionId};
pub use patient::{Patient, StoredPatient};
