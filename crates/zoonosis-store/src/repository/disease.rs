use rusqlite::{Connection, OptionalExtension, Row, params};

use zoonosis_model::{DiseaseId, DiseaseType};

use super::Fetched;
use crate::error::{Result, StoreError};

const DISEASE_COLUMNS: &str =
    "id, name, diagnostic_code, description, causative_agent, vector, incubation_period";

fn disease_from_row(row: &Row<'_>) -> rusqlite::Result<DiseaseType> {
    Ok(DiseaseType {
        id: DiseaseId(row.get(0)?),
        name: row.get(1)?,
        diagnostic_code: row.get(2)?,
        description: row.get(3)?,
        causative_agent: row.get(4)?,
        vector: row.get(5)?,
        incubation_period: row.get(6)?,
    })
}

pub fn find_disease_by_name(conn: &Connection, name: &str) -> Result<Option<DiseaseType>> {
    let disease = conn
        .query_row(
            &format!("SELECT {DISEASE_COLUMNS} FROM disease_type WHERE name = ?1"),
            params![name],
            disease_from_row,
        )
        .optional()?;
    Ok(disease)
}

pub fn get_disease(conn: &Connection, id: DiseaseId) -> Result<DiseaseType> {
    conn.query_row(
        &format!("SELECT {DISEASE_COLUMNS} FROM disease_type WHERE id = ?1"),
        params![id.get()],
        disease_from_row,
    )
    .optional()?
    .ok_or_else(|| StoreError::not_found("disease type", id))
}

/// Diseases ordered by name.
pub fn list_diseases(conn: &Connection) -> Result<Vec<DiseaseType>> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {DISEASE_COLUMNS} FROM disease_type ORDER BY name"
    ))?;
    let diseases = stmt
        .query_map([], disease_from_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(diseases)
}

/// Get a disease by name, inserting it with `diagnostic_code` when absent.
/// An existing disease keeps the code it was created with.
pub fn get_or_create_disease(
    conn: &Connection,
    name: &str,
    diagnostic_code: Option<&str>,
) -> Result<Fetched<DiseaseType>> {
    if let Some(disease) = find_disease_by_name(conn, name)? {
        return Ok(Fetched::Existing(disease));
    }
    conn.execute(
        "INSERT INTO disease_type (name, diagnostic_code) VALUES (?1, ?2)",
        params![name, diagnostic_code],
    )?;
    Ok(Fetched::Created(DiseaseType {
        id: DiseaseId(conn.last_insert_rowid()),
        name: name.to_string(),
        diagnostic_code: diagnostic_code.map(str::to_string),
        description: None,
        causative_agent: None,
        vector: None,
        incubation_period: None,
    }))
}
