use std::str::FromStr;

use rusqlite::{Connection, OptionalExtension, params};

use zoonosis_model::{AgeUnit, Gender, Patient, PatientId, StoredPatient};

use crate::error::{Result, StoreError};

/// Insert a patient; the derived age group is stored alongside for reporting.
pub fn insert_patient(conn: &Connection, patient: &Patient) -> Result<PatientId> {
    conn.execute(
        "INSERT INTO patient (age, age_unit, age_group, gender, occupation, residence_zone)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            patient.age(),
            patient.age_unit().as_code(),
            patient.age_group().map(|group| group.as_str()),
            patient.gender.as_code(),
            patient.occupation,
            patient.residence_zone,
        ],
    )?;
    Ok(PatientId(conn.last_insert_rowid()))
}

type PatientRow = (i32, String, String, Option<String>, Option<String>);

pub fn get_patient(conn: &Connection, id: PatientId) -> Result<StoredPatient> {
    let row: Option<PatientRow> = conn
        .query_row(
            "SELECT age, age_unit, gender, occupation, residence_zone FROM patient WHERE id = ?1",
            params![id.get()],
            |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?, row.get(3)?, row.get(4)?)),
        )
        .optional()?;
    let (age, unit, gender, occupation, residence_zone) =
        row.ok_or_else(|| StoreError::not_found("patient", id))?;
    let mut patient = Patient::new(age, AgeUnit::from_str(&unit)?, Gender::from_str(&gender)?);
    patient.occupation = occupation;
    patient.residence_zone = residence_zone;
    Ok(StoredPatient { id, patient })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Store;
    use zoonosis_model::AgeGroup;

    #[test]
    fn patient_round_trips_with_group() {
        let store = Store::open_in_memory().unwrap();
        let conn = store.connection();
        let id = insert_patient(conn, &Patient::new(12, AgeUnit::Years, Gender::Female)).unwrap();
        let stored = get_patient(conn, id).unwrap();
        assert_eq!(stored.patient.age_group(), Some(AgeGroup::Adolescence));

        let group: Option<String> = conn
            .query_row("SELECT age_group FROM patient WHERE id = ?1", [id.get()], |row| {
                row.get(0)
            })
            .unwrap();
        assert_eq!(group.as_deref(), Some("Adolescence"));
    }

    #[test]
    fn months_have_no_stored_group() {
        let store = Store::open_in_memory().unwrap();
        let conn = store.connection();
        let id = insert_patient(conn, &Patient::new(7, AgeUnit::Months, Gender::Male)).unwrap();
        let group: Option<String> = conn
            .query_row("SELECT age_group FROM patient WHERE id = ?1", [id.get()], |row| {
                row.get(0)
            })
            .unwrap();
        assert_eq!(group, None);
    }
}
