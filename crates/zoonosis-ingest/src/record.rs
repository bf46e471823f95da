use serde::{Deserialize, Serialize};

/// Source columns the loader understands, keyed by their header name.
///
/// Header matching ignores case and surrounding whitespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceColumn {
    Region,
    Province,
    District,
    DistrictCode,
    Disease,
    DiagnosticCode,
    DiagnosisType,
    Year,
    Week,
    Age,
    AgeUnit,
    Sex,
    HealthOffice,
}

impl SourceColumn {
    pub const ALL: [SourceColumn; 13] = [
        SourceColumn::Region,
        SourceColumn::Province,
        SourceColumn::District,
        SourceColumn::DistrictCode,
        SourceColumn::Disease,
        SourceColumn::DiagnosticCode,
        SourceColumn::DiagnosisType,
        SourceColumn::Year,
        SourceColumn::Week,
        SourceColumn::Age,
        SourceColumn::AgeUnit,
        SourceColumn::Sex,
        SourceColumn::HealthOffice,
    ];

    /// Canonical header name.
    pub fn header(self) -> &'static str {
        match self {
            SourceColumn::Region => "departamento",
            SourceColumn::Province => "provincia",
            SourceColumn::District => "distrito",
            SourceColumn::DistrictCode => "ubigeo",
            SourceColumn::Disease => "enfermedad",
            SourceColumn::DiagnosticCode => "diagnostic",
            SourceColumn::DiagnosisType => "tipo_dx",
            SourceColumn::Year => "ano",
            SourceColumn::Week => "semana",
            SourceColumn::Age => "edad",
            SourceColumn::AgeUnit => "tipo_edad",
            SourceColumn::Sex => "sexo",
            SourceColumn::HealthOffice => "diresa",
        }
    }

    /// Columns without which no row could ever be loaded.
    pub fn is_required(self) -> bool {
        matches!(
            self,
            SourceColumn::Region
                | SourceColumn::Province
                | SourceColumn::District
                | SourceColumn::DistrictCode
                | SourceColumn::Disease
                | SourceColumn::Year
                | SourceColumn::Week
        )
    }

    pub fn matches(self, header: &str) -> bool {
        let header = header.to_lowercase();
        header == self.header() || (self == SourceColumn::Year && header == "año")
    }
}

/// One notification row exactly as read, with blank cells as `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRecord {
    pub region: Option<String>,
    pub province: Option<String>,
    pub district: Option<String>,
    pub district_code: Option<String>,
    pub disease: Option<String>,
    pub diagnostic_code: Option<String>,
    pub diagnosis_type: Option<String>,
    pub year: Option<String>,
    pub week: Option<String>,
    pub age: Option<String>,
    pub age_unit: Option<String>,
    pub sex: Option<String>,
    pub health_office: Option<String>,
}

impl RawRecord {
    pub(crate) fn set(&mut self, column: SourceColumn, value: Option<String>) {
        let slot = match column {
            SourceColumn::Region => &mut self.region,
            SourceColumn::Province => &mut self.province,
            SourceColumn::District => &mut self.district,
            SourceColumn::DistrictCode => &mut self.district_code,
            SourceColumn::Disease => &mut self.disease,
            SourceColumn::DiagnosticCode => &mut self.diagnostic_code,
            SourceColumn::DiagnosisType => &mut self.diagnosis_type,
            SourceColumn::Year => &mut self.year,
            SourceColumn::Week => &mut self.week,
            SourceColumn::Age => &mut self.age,
            SourceColumn::AgeUnit => &mut self.age_unit,
            SourceColumn::Sex => &mut self.sex,
            SourceColumn::HealthOffice => &mut self.health_office,
        };
        *slot = value;
    }
}

/// A row that survived critical-field cleaning.
///
/// Hierarchy and disease names are normalized; the remaining fields keep
/// their raw text so each loader stage can decide how to interpret them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CleanRecord {
    pub region: String,
    pub province: String,
    pub district: String,
    pub district_code: Option<String>,
    pub disease: String,
    pub diagnostic_code: Option<String>,
    pub diagnosis_type: Option<String>,
    pub year: String,
    pub week: String,
    pub age: Option<String>,
    pub age_unit: Option<String>,
    pub sex: Option<String>,
    pub health_office: Option<String>,
}
