use serde::Serialize;
use tracing::debug;

use zoonosis_store::{CaseFilter, Connection, count_by_year};

use crate::error::Result;
use crate::request::TrendQuery;
use crate::stats::{average, peak, round1, trend_percent};

/// Yearly case counts for one disease.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendReport {
    pub years: Vec<i32>,
    pub counts: Vec<u64>,
    pub total: u64,
    pub average: f64,
    pub trend_percent: f64,
    pub peak_year: Option<i32>,
    pub peak_count: u64,
}

pub fn trend_report(conn: &Connection, query: &TrendQuery) -> Result<TrendReport> {
    let filter = CaseFilter::for_disease(query.disease).years(query.years.clone());
    let groups = count_by_year(conn, &filter)?;
    debug!(disease = %query.disease, years = groups.len(), "trend groups");

    let years: Vec<i32> = groups.iter().map(|group| group.key).collect();
    let counts: Vec<u64> = groups.iter().map(|group| group.count).collect();
    let total = counts.iter().sum();
    let peak = peak(years.iter().copied().zip(counts.iter().copied()));

    Ok(TrendReport {
        average: round1(average(total, counts.len())),
        trend_percent: round1(trend_percent(&counts)),
        peak_year: peak.map(|(year, _)| year),
        peak_count: peak.map_or(0, |(_, count)| count),
        years,
        counts,
        total,
    })
}
