//! Coded enumerations used by patient and case records.
//!
//! Each enum carries the single-letter (or upper-case word) code found in the
//! notification source files and stored in the database.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;

/// Unit in which a patient's age is expressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AgeUnit {
    /// `A` (años).
    Years,
    /// `M` (meses).
    Months,
    /// `D` (días).
    Days,
}

impl AgeUnit {
    pub fn as_code(&self) -> &'static str {
        match self {
            AgeUnit::Years => "A",
            AgeUnit::Months => "M",
            AgeUnit::Days => "D",
        }
    }
}

impl FromStr for AgeUnit {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "A" => Ok(AgeUnit::Years),
            "M" => Ok(AgeUnit::Months),
            "D" => Ok(AgeUnit::Days),
            _ => Err(ModelError::InvalidEnum {
                field: "age unit",
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for AgeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_code())
    }
}

/// Age bracket derived from an age in years.
///
/// Thresholds: up to 5 is infancy, up to 17 adolescence, up to 64 adult,
/// anything older is elder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AgeGroup {
    Infancy,
    Adolescence,
    Adult,
    Elder,
}

impl AgeGroup {
    /// Derive the bracket for an age. Only ages expressed in years are
    /// bracketed; months and days yield `None`.
    pub fn derive(age: i32, unit: AgeUnit) -> Option<AgeGroup> {
        if unit != AgeUnit::Years {
            return None;
        }
        let group = if age <= 5 {
            AgeGroup::Infancy
        } else if age <= 17 {
            AgeGroup::Adolescence
        } else if age <= 64 {
            AgeGroup::Adult
        } else {
            AgeGroup::Elder
        };
        Some(group)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AgeGroup::Infancy => "Infancy",
            AgeGroup::Adolescence => "Adolescence",
            AgeGroup::Adult => "Adult",
            AgeGroup::Elder => "Elder",
        }
    }
}

impl FromStr for AgeGroup {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Infancy" => Ok(AgeGroup::Infancy),
            "Adolescence" => Ok(AgeGroup::Adolescence),
            "Adult" => Ok(AgeGroup::Adult),
            "Elder" => Ok(AgeGroup::Elder),
            _ => Err(ModelError::InvalidEnum {
                field: "age group",
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for AgeGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn as_code(&self) -> &'static str {
        match self {
            Gender::Male => "M",
            Gender::Female => "F",
        }
    }
}

impl FromStr for Gender {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "M" => Ok(Gender::Male),
            "F" => Ok(Gender::Female),
            _ => Err(ModelError::InvalidEnum {
                field: "gender",
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_code())
    }
}

/// Diagnostic certainty recorded on a notification.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DiagnosisType {
    /// `P`
    #[default]
    Presumptive,
    /// `C`
    Confirmed,
}

impl DiagnosisType {
    pub fn as_code(&self) -> &'static str {
        match self {
            DiagnosisType::Presumptive => "P",
            DiagnosisType::Confirmed => "C",
        }
    }
}

impl FromStr for DiagnosisType {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "P" => Ok(DiagnosisType::Presumptive),
            "C" => Ok(DiagnosisType::Confirmed),
            _ => Err(ModelError::InvalidEnum {
                field: "diagnosis type",
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for DiagnosisType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_code())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CaseStatus {
    #[default]
    Active,
    Recovered,
    Deceased,
}

impl CaseStatus {
    pub fn as_code(&self) -> &'static str {
        match self {
            CaseStatus::Active => "ACTIVO",
            CaseStatus::Recovered => "RECUPERADO",
            CaseStatus::Deceased => "FALLECIDO",
        }
    }
}

impl FromStr for CaseStatus {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "ACTIVO" => Ok(CaseStatus::Active),
            "RECUPERADO" => Ok(CaseStatus::Recovered),
            "FALLECIDO" => Ok(CaseStatus::Deceased),
            _ => Err(ModelError::InvalidEnum {
                field: "case status",
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for CaseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_code())
    }
}
