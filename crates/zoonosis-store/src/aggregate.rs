//! Grouped case counts for the reporting pipelines.
//!
//! Each query filters `disease_case` with a [`CaseFilter`] and groups by one
//! key. Results are ordered by key unless stated otherwise.

use std::ops::RangeInclusive;

use rusqlite::{Connection, params_from_iter};

use zoonosis_model::{DiseaseId, RegionId};

use crate::error::Result;

const CASE_JOINS: &str = "FROM disease_case c
     JOIN district d ON d.id = c.district_id
     JOIN province p ON p.id = d.province_id
     JOIN region r ON r.id = p.region_id";

/// Predicate over cases. Unset fields do not restrict.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CaseFilter {
    pub disease: Option<DiseaseId>,
    pub years: Option<RangeInclusive<i32>>,
    pub region: Option<RegionId>,
}

impl CaseFilter {
    pub fn for_disease(disease: DiseaseId) -> Self {
        Self {
            disease: Some(disease),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn years(mut self, years: RangeInclusive<i32>) -> Self {
        self.years = Some(years);
        self
    }

    #[must_use]
    pub fn year(self, year: i32) -> Self {
        self.years(year..=year)
    }

    #[must_use]
    pub fn region(mut self, region: Option<RegionId>) -> Self {
        self.region = region;
        self
    }

    fn where_clause(&self) -> (String, Vec<i64>) {
        let mut clauses = Vec::new();
        let mut values = Vec::new();
        if let Some(disease) = self.disease {
            values.push(disease.get());
            clauses.push(format!("c.disease_id = ?{}", values.len()));
        }
        if let Some(years) = &self.years {
            values.push(i64::from(*years.start()));
            clauses.push(format!("c.year >= ?{}", values.len()));
            values.push(i64::from(*years.end()));
            clauses.push(format!("c.year <= ?{}", values.len()));
        }
        if let Some(region) = self.region {
            values.push(region.get());
            clauses.push(format!("r.id = ?{}", values.len()));
        }
        if clauses.is_empty() {
            (String::new(), values)
        } else {
            (format!("WHERE {}", clauses.join(" AND ")), values)
        }
    }
}

/// A grouping key with its case count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupCount<K> {
    pub key: K,
    pub count: u64,
}

fn group_counts<K>(conn: &Connection, key_expr: &str, order_by: &str, filter: &CaseFilter) -> Result<Vec<GroupCount<K>>>
where
    K: rusqlite::types::FromSql,
{
    let (where_clause, values) = filter.where_clause();
    let sql = format!(
        "SELECT {key_expr} AS group_key, COUNT(c.id) AS total
         {CASE_JOINS}
         {where_clause}
         GROUP BY group_key
         ORDER BY {order_by}"
    );
    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt
        .query_map(params_from_iter(values.iter()), |row| {
            let count: i64 = row.get(1)?;
            Ok(GroupCount {
                key: row.get(0)?,
                count: u64::try_from(count).unwrap_or(0),
            })
        })?
        .collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(rows)
}

/// Cases per year, ascending.
pub fn count_by_year(conn: &Connection, filter: &CaseFilter) -> Result<Vec<GroupCount<i32>>> {
    group_counts(conn, "c.year", "group_key", filter)
}

/// Cases per epidemiological week, ascending.
pub fn count_by_week(conn: &Connection, filter: &CaseFilter) -> Result<Vec<GroupCount<u32>>> {
    group_counts(conn, "c.epi_week", "group_key", filter)
}

/// Cases per region name, most cases first (ties by name).
pub fn count_by_region(conn: &Connection, filter: &CaseFilter) -> Result<Vec<GroupCount<String>>> {
    group_counts(conn, "r.name", "total DESC, group_key ASC", filter)
}

/// Distinct notification years, ascending.
pub fn distinct_years(conn: &Connection) -> Result<Vec<i32>> {
    let mut stmt = conn.prepare("SELECT DISTINCT year FROM disease_case ORDER BY year")?;
    let years = stmt
        .query_map([], |row| row.get(0))?
        .collect::<rusqlite::Result<Vec<i32>>>()?;
    Ok(years)
}
