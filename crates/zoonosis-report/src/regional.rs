use serde::Serialize;

use zoonosis_store::repository::{get_disease, get_region};
use zoonosis_store::{CaseFilter, Connection, count_by_year};

use crate::error::Result;
use crate::request::RegionalQuery;
use crate::stats::{average, round1, trend_percent};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct YearCount {
    pub year: i32,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegionSummary {
    pub name: String,
    pub total: u64,
    /// Total over every year in the requested period, including years
    /// without cases.
    pub average: f64,
    pub trend_percent: f64,
    pub yearly: Vec<YearCount>,
}

/// One disease compared across several regions.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegionalReport {
    pub regions: Vec<RegionSummary>,
    pub disease: String,
    pub period: String,
}

pub fn regional_report(conn: &Connection, query: &RegionalQuery) -> Result<RegionalReport> {
    let disease = get_disease(conn, query.disease)?;
    let (start, end) = (*query.years.start(), *query.years.end());
    let years_in_period = usize::try_from(i64::from(end) - i64::from(start) + 1).unwrap_or(0);

    let mut regions = Vec::with_capacity(query.regions.len());
    for region_id in &query.regions {
        let region = get_region(conn, *region_id)?;
        let filter = CaseFilter::for_disease(disease.id)
            .years(query.years.clone())
            .region(Some(region.id));
        let yearly: Vec<YearCount> = count_by_year(conn, &filter)?
            .into_iter()
            .map(|group| YearCount {
                year: group.key,
                count: group.count,
            })
            .collect();
        let counts: Vec<u64> = yearly.iter().map(|entry| entry.count).collect();
        let total = counts.iter().sum();

        regions.push(RegionSummary {
            name: region.name,
            total,
            average: round1(average(total, years_in_period)),
            trend_percent: round1(trend_percent(&counts)),
            yearly,
        });
    }

    Ok(RegionalReport {
        regions,
        disease: disease.name,
        period: format!("{start} - {end}"),
    })
}
