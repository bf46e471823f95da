use rusqlite::Connection;
use serde::Serialize;

use crate::error::Result;

/// Row counts per table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct EntityTotals {
    pub regions: u64,
    pub provinces: u64,
    pub districts: u64,
    pub diseases: u64,
    pub patients: u64,
    pub cases: u64,
}

pub fn entity_totals(conn: &Connection) -> Result<EntityTotals> {
    Ok(EntityTotals {
        regions: count_rows(conn, "region")?,
        provinces: count_rows(conn, "province")?,
        districts: count_rows(conn, "district")?,
        diseases: count_rows(conn, "disease_type")?,
        patients: count_rows(conn, "patient")?,
        cases: count_rows(conn, "disease_case")?,
    })
}

fn count_rows(conn: &Connection, table: &str) -> Result<u64> {
    let count: i64 = conn.query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |row| {
        row.get(0)
    })?;
    Ok(u64::try_from(count).unwrap_or(0))
}
