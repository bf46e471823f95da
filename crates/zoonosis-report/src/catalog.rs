use serde::Serialize;

use zoonosis_model::{DiseaseType, Region};
use zoonosis_store::repository::{list_diseases, list_regions};
use zoonosis_store::{Connection, EntityTotals, distinct_years, entity_totals};

use crate::error::Result;

/// Choices a dashboard offers before any report is requested.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Catalog {
    pub diseases: Vec<DiseaseType>,
    pub regions: Vec<Region>,
    pub years: Vec<i32>,
    pub totals: EntityTotals,
}

pub fn catalog(conn: &Connection) -> Result<Catalog> {
    Ok(Catalog {
        diseases: list_diseases(conn)?,
        regions: list_regions(conn)?,
        years: distinct_years(conn)?,
        totals: entity_totals(conn)?,
    })
}
