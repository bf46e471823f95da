//! Tables for load summaries and report results.

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use zoonosis_load::{LevelSummary, LoadSummary};
use zoonosis_report::{Catalog, GeoReport, RegionalReport, SeasonalReport, TrendReport};
use zoonosis_store::EntityTotals;

pub fn load_summary_table(summary: &LoadSummary) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Stage"),
        header_cell("Created"),
        header_cell("Existing"),
        header_cell("Skipped"),
    ]);
    apply_summary_table_style(&mut table);
    for column in 1..=3 {
        align_column(&mut table, column, CellAlignment::Right);
    }
    table.add_row(vec![
        Cell::new(format!("Rows ({} read)", summary.total)),
        Cell::new(summary.valid),
        dim_cell("-"),
        count_cell(summary.dropped, Color::Yellow),
    ]);
    for (label, level) in [
        ("Regions", &summary.hierarchy.regions),
        ("Provinces", &summary.hierarchy.provinces),
        ("Districts", &summary.hierarchy.districts),
    ] {
        table.add_row(level_row(label, level));
    }
    table.add_row(vec![
        Cell::new("Disease types"),
        Cell::new(summary.diseases.created),
        Cell::new(summary.diseases.existing),
        count_cell(summary.diseases.skipped, Color::Yellow),
    ]);
    table.add_row(vec![
        Cell::new("Cases")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(summary.cases.created).add_attribute(Attribute::Bold),
        dim_cell("-"),
        count_cell(summary.cases.errors, Color::Red),
    ]);
    table
}

fn level_row(label: &str, level: &LevelSummary) -> Vec<Cell> {
    vec![
        Cell::new(label),
        Cell::new(level.created),
        Cell::new(level.existing),
        count_cell(level.skipped, Color::Yellow),
    ]
}

pub fn totals_table(totals: &EntityTotals) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Table"), header_cell("Rows")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for (label, count) in [
        ("region", totals.regions),
        ("province", totals.provinces),
        ("district", totals.districts),
        ("disease_type", totals.diseases),
        ("patient", totals.patients),
        ("disease_case", totals.cases),
    ] {
        table.add_row(vec![Cell::new(label), Cell::new(count)]);
    }
    table
}

pub fn trend_table(report: &TrendReport) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Year"), header_cell("Cases")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for (year, count) in report.years.iter().zip(&report.counts) {
        let cell = if report.peak_year == Some(*year) {
            Cell::new(count).fg(Color::Red).add_attribute(Attribute::Bold)
        } else {
            Cell::new(count)
        };
        table.add_row(vec![Cell::new(year), cell]);
    }
    table.add_row(vec![header_cell("Total"), Cell::new(report.total).add_attribute(Attribute::Bold)]);
    table.add_row(vec![dim_cell("Average"), Cell::new(decimal(report.average))]);
    table.add_row(vec![dim_cell("Trend %"), Cell::new(decimal(report.trend_percent))]);
    table
}

pub fn geo_table(report: &GeoReport) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("#"), header_cell("Region"), header_cell("Cases")]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    for (rank, region) in report.regions.iter().enumerate() {
        let rank_cell = if rank < report.top5.len() {
            Cell::new(rank + 1).add_attribute(Attribute::Bold)
        } else {
            dim_cell(rank + 1)
        };
        table.add_row(vec![rank_cell, Cell::new(&region.name), Cell::new(region.count)]);
    }
    table.add_row(vec![
        dim_cell("-"),
        header_cell("National total"),
        Cell::new(report.national_total).add_attribute(Attribute::Bold),
    ]);
    table.add_row(vec![
        dim_cell("-"),
        dim_cell(format!("Average over {} regions", report.affected_regions)),
        Cell::new(decimal(report.average)),
    ]);
    table
}

pub fn seasonal_table(report: &SeasonalReport) -> Table {
    let mut table = Table::new();
    let mut header = vec![header_cell("Month")];
    header.extend(report.series.iter().map(|series| header_cell(&series.label)));
    table.set_header(header);
    apply_summary_table_style(&mut table);
    for column in 1..=report.series.len() {
        align_column(&mut table, column, CellAlignment::Right);
    }
    for (index, month) in report.months.iter().enumerate() {
        let mut row = vec![Cell::new(month)];
        row.extend(report.series.iter().map(|series| Cell::new(series.data[index])));
        table.add_row(row);
    }
    let mut totals = vec![header_cell("Total")];
    totals.extend(
        report
            .series
            .iter()
            .map(|series| Cell::new(series.total).add_attribute(Attribute::Bold)),
    );
    table.add_row(totals);
    let mut averages = vec![dim_cell("Monthly average")];
    averages.extend(report.stats.iter().map(|stats| Cell::new(decimal(stats.monthly_average))));
    table.add_row(averages);
    let mut peaks = vec![dim_cell("Peak")];
    peaks.extend(
        report
            .stats
            .iter()
            .map(|stats| Cell::new(format!("{} ({})", stats.peak_month, stats.peak_count))),
    );
    table.add_row(peaks);
    let mut lows = vec![dim_cell("Low")];
    lows.extend(
        report
            .stats
            .iter()
            .map(|stats| Cell::new(format!("{} ({})", stats.low_month, stats.low_count))),
    );
    table.add_row(lows);
    table
}

pub fn regional_table(report: &RegionalReport) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Region"),
        header_cell("Total"),
        header_cell("Average"),
        header_cell("Trend %"),
        header_cell("By year"),
    ]);
    apply_summary_table_style(&mut table);
    for column in 1..=3 {
        align_column(&mut table, column, CellAlignment::Right);
    }
    for region in &report.regions {
        let yearly = region
            .yearly
            .iter()
            .map(|entry| format!("{}: {}", entry.year, entry.count))
            .collect::<Vec<_>>()
            .join(", ");
        table.add_row(vec![
            Cell::new(&region.name).add_attribute(Attribute::Bold),
            Cell::new(region.total),
            Cell::new(decimal(region.average)),
            trend_cell(region.trend_percent),
            if yearly.is_empty() { dim_cell("-") } else { Cell::new(yearly) },
        ]);
    }
    table
}

pub fn disease_table(catalog: &Catalog) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Id"), header_cell("Disease"), header_cell("Code")]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for disease in &catalog.diseases {
        table.add_row(vec![
            Cell::new(disease.id),
            Cell::new(&disease.name),
            optional_cell(disease.diagnostic_code.as_deref()),
        ]);
    }
    table
}

pub fn region_table(catalog: &Catalog) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Id"), header_cell("Code"), header_cell("Region")]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for region in &catalog.regions {
        table.add_row(vec![
            Cell::new(region.id),
            dim_cell(&region.code),
            Cell::new(&region.name),
        ]);
    }
    table
}

fn decimal(value: f64) -> String {
    format!("{value:.1}")
}

fn trend_cell(percent: f64) -> Cell {
    let cell = Cell::new(format!("{percent:+.1}"));
    if percent > 0.0 {
        cell.fg(Color::Red)
    } else if percent < 0.0 {
        cell.fg(Color::Green)
    } else {
        cell.fg(Color::DarkGrey)
    }
}

fn optional_cell(value: Option<&str>) -> Cell {
    match value {
        Some(text) => Cell::new(text),
        None => dim_cell("-"),
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(140);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}
