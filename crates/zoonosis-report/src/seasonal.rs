//! Monthly case distribution for one or more diseases.
//!
//! Weeks are folded into months with [`week_to_month`], so the series are an
//! approximation of calendar months.

use serde::Serialize;
use tracing::debug;

use zoonosis_model::{MONTH_LABELS, week_to_month};
use zoonosis_store::repository::{get_disease, get_region};
use zoonosis_store::{CaseFilter, Connection, count_by_week};

use crate::error::Result;
use crate::request::{RegionScope, SeasonalQuery};
use crate::stats::{low, peak, round1};

/// Label used for the unrestricted scope.
pub const NATIONAL_LABEL: &str = "Nacional";

/// Series colours as `(border, background)`, assigned in request order and
/// reused after the fifth disease.
pub const PALETTE: [(&str, &str); 5] = [
    ("rgb(220, 53, 69)", "rgba(220, 53, 69, 0.2)"),
    ("rgb(13, 110, 253)", "rgba(13, 110, 253, 0.2)"),
    ("rgb(25, 135, 84)", "rgba(25, 135, 84, 0.2)"),
    ("rgb(255, 193, 7)", "rgba(255, 193, 7, 0.2)"),
    ("rgb(111, 66, 193)", "rgba(111, 66, 193, 0.2)"),
];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeasonalSeries {
    pub label: String,
    pub data: [u64; 12],
    pub border_color: &'static str,
    pub background_color: &'static str,
    pub total: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeasonalStats {
    pub disease: String,
    pub total: u64,
    pub monthly_average: f64,
    pub peak_month: &'static str,
    pub peak_count: u64,
    pub low_month: &'static str,
    pub low_count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeasonalReport {
    pub months: [&'static str; 12],
    pub series: Vec<SeasonalSeries>,
    pub stats: Vec<SeasonalStats>,
    pub grand_total: u64,
    pub scope: String,
}

/// Fold weekly counts into twelve monthly buckets.
pub fn monthly_counts<I>(weekly: I) -> [u64; 12]
where
    I: IntoIterator<Item = (u32, u64)>,
{
    let mut months = [0u64; 12];
    for (week, count) in weekly {
        let index = (week_to_month(week) - 1) as usize;
        months[index] += count;
    }
    months
}

pub fn seasonal_report(conn: &Connection, query: &SeasonalQuery) -> Result<SeasonalReport> {
    let (region, scope) = match query.scope {
        RegionScope::National => (None, NATIONAL_LABEL.to_string()),
        RegionScope::Region(id) => (Some(id), get_region(conn, id)?.name),
    };

    let mut series = Vec::with_capacity(query.diseases.len());
    let mut stats = Vec::with_capacity(query.diseases.len());
    let mut grand_total = 0;

    for (index, disease_id) in query.diseases.iter().enumerate() {
        let disease = get_disease(conn, *disease_id)?;
        let filter = CaseFilter::for_disease(disease.id)
            .years(query.years.clone())
            .region(region);
        let weekly = count_by_week(conn, &filter)?;
        let data = monthly_counts(weekly.into_iter().map(|group| (group.key, group.count)));
        let total: u64 = data.iter().sum();
        grand_total += total;
        debug!(disease = %disease.name, total, "seasonal series");

        let labelled = || MONTH_LABELS.iter().copied().zip(data.iter().copied());
        let (peak_month, peak_count) = peak(labelled()).unwrap_or((MONTH_LABELS[0], 0));
        let (low_month, low_count) = low(labelled()).unwrap_or((MONTH_LABELS[0], 0));
        let (border_color, background_color) = PALETTE[index % PALETTE.len()];

        stats.push(SeasonalStats {
            disease: disease.name.clone(),
            total,
            monthly_average: round1(total as f64 / 12.0),
            peak_month,
            peak_count,
            low_month,
            low_count,
        });
        series.push(SeasonalSeries {
            label: disease.name,
            data,
            border_color,
            background_color,
            total,
        });
    }

    Ok(SeasonalReport {
        months: MONTH_LABELS,
        series,
        stats,
        grand_total,
        scope,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weeks_fold_four_to_a_month() {
        let months = monthly_counts([(1, 2), (4, 3), (5, 1), (48, 7), (53, 1)]);
        assert_eq!(months[0], 5);
        assert_eq!(months[1], 1);
        assert_eq!(months[11], 8);
        assert_eq!(months.iter().sum::<u64>(), 14);
    }

    #[test]
    fn palette_cycles() {
        assert_eq!(PALETTE[6 % PALETTE.len()], PALETTE[1]);
    }
}
