use serde::Serialize;

use zoonosis_store::{CaseFilter, Connection, count_by_region};

use crate::error::Result;
use crate::request::GeoQuery;
use crate::stats::{average, round1};

/// Number of regions listed in [`GeoReport::top5`].
pub const TOP_REGIONS: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegionCount {
    pub name: String,
    pub count: u64,
}

/// Cases per region for one disease and year, most affected first.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeoReport {
    pub regions: Vec<RegionCount>,
    pub national_total: u64,
    pub affected_regions: usize,
    pub average: f64,
    pub top5: Vec<RegionCount>,
}

pub fn geo_report(conn: &Connection, query: &GeoQuery) -> Result<GeoReport> {
    let filter = CaseFilter::for_disease(query.disease).year(query.year);
    let regions: Vec<RegionCount> = count_by_region(conn, &filter)?
        .into_iter()
        .map(|group| RegionCount {
            name: group.key,
            count: group.count,
        })
        .collect();

    let national_total = regions.iter().map(|region| region.count).sum();
    let affected_regions = regions.len();
    let top5 = regions.iter().take(TOP_REGIONS).cloned().collect();

    Ok(GeoReport {
        national_total,
        affected_regions,
        average: round1(average(national_total, affected_regions)),
        top5,
        regions,
    })
}
