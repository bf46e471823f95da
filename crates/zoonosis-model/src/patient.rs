use std::fmt;

use serde::Serialize;

use crate::enums::{AgeGroup, AgeUnit, Gender};
use crate::ids::PatientId;

/// A notified patient.
///
/// The age group is derived from `(age, age_unit)` and cannot be set
/// directly; [`Patient::set_age`] re-derives it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Patient {
    age: i32,
    age_unit: AgeUnit,
    age_group: Option<AgeGroup>,
    pub gender: Gender,
    pub occupation: Option<String>,
    pub residence_zone: Option<String>,
}

impl Patient {
    pub fn new(age: i32, age_unit: AgeUnit, gender: Gender) -> Self {
        Self {
            age,
            age_unit,
            age_group: AgeGroup::derive(age, age_unit),
            gender,
            occupation: None,
            residence_zone: None,
        }
    }

    pub fn set_age(&mut self, age: i32, age_unit: AgeUnit) {
        self.age = age;
        self.age_unit = age_unit;
        self.age_group = AgeGroup::derive(age, age_unit);
    }

    pub fn age(&self) -> i32 {
        self.age
    }

    pub fn age_unit(&self) -> AgeUnit {
        self.age_unit
    }

    pub fn age_group(&self) -> Option<AgeGroup> {
        self.age_group
    }
}

/// A patient as read back from the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StoredPatient {
    pub id: PatientId,
    pub patient: Patient,
}

impl fmt::Display for StoredPatient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Patient {} - {}{} - {}",
            self.id,
            self.patient.age(),
            self.patient.age_unit(),
            self.patient.gender
        )
    }
}
