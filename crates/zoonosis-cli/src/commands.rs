use std::path::Path;

use anyhow::{Context, Result};
use comfy_table::Table;
use serde::Serialize;
use tracing::info;

use zoonosis_cli::cli::{
    HeatmapArgs, LoadArgs, OutputFormatArg, ReportArgs, SeasonalArgs, TrendArgs,
};
use zoonosis_cli::progress::BarProgress;
use zoonosis_cli::summary::{
    disease_table, geo_table, load_summary_table, region_table, regional_table, seasonal_table,
    totals_table, trend_table,
};
use zoonosis_load::{LoadOptions, load_file};
use zoonosis_report::{
    GeoRequest, RegionalRequest, SeasonalRequest, TrendRequest, catalog, geo_report,
    regional_report, seasonal_report, trend_report,
};
use zoonosis_store::Store;

fn open_store(db: &Path) -> Result<Store> {
    Store::open(db).with_context(|| format!("open case database {}", db.display()))
}

/// Print `value` as pretty JSON or as the given tables.
fn emit<T: Serialize>(format: OutputFormatArg, value: &T, tables: impl FnOnce(&T) -> Vec<Table>) -> Result<()> {
    match format {
        OutputFormatArg::Json => {
            let json = serde_json::to_string_pretty(value).context("serialize result")?;
            println!("{json}");
        }
        OutputFormatArg::Table => {
            for table in tables(value) {
                println!("{table}");
            }
        }
    }
    Ok(())
}

pub fn run_load(db: &Path, format: OutputFormatArg, args: &LoadArgs) -> Result<()> {
    let mut store = open_store(db)?;
    let options = LoadOptions::default()
        .with_batch_size(args.batch_size)
        .with_error_log_limit(args.error_log_limit);
    let mut progress = BarProgress::new();
    let summary = load_file(&args.file, &mut store, &options, &mut progress)
        .with_context(|| format!("load {}", args.file.display()))?;
    info!(
        created = summary.cases.created,
        errors = summary.cases.errors,
        "load finished"
    );
    if format == OutputFormatArg::Table {
        println!("File: {}", args.file.display());
        println!("Database: {}", db.display());
    }
    emit(format, &summary, |summary| {
        vec![load_summary_table(summary), totals_table(&summary.totals)]
    })
}

pub fn run_trend(db: &Path, format: OutputFormatArg, args: &TrendArgs) -> Result<()> {
    let query = TrendRequest {
        disease_id: args.disease,
        year_start: args.from,
        year_end: args.to,
    }
    .validate()?;
    let store = open_store(db)?;
    let report = trend_report(store.connection(), &query)?;
    emit(format, &report, |report| vec![trend_table(report)])
}

pub fn run_heatmap(db: &Path, format: OutputFormatArg, args: &HeatmapArgs) -> Result<()> {
    let query = GeoRequest {
        disease_id: args.disease,
        year: args.year,
    }
    .validate()?;
    let store = open_store(db)?;
    let report = geo_report(store.connection(), &query)?;
    emit(format, &report, |report| vec![geo_table(report)])
}

pub fn run_seasonal(db: &Path, format: OutputFormatArg, args: &SeasonalArgs) -> Result<()> {
    let query = SeasonalRequest {
        disease_ids: args.diseases.clone(),
        year_start: args.from,
        year_end: args.to,
        region: args.region,
    }
    .validate()?;
    let store = open_store(db)?;
    let report = seasonal_report(store.connection(), &query)?;
    if format == OutputFormatArg::Table {
        println!("Scope: {}", report.scope);
        println!("Cases: {}", report.grand_total);
    }
    emit(format, &report, |report| vec![seasonal_table(report)])
}

pub fn run_report(db: &Path, format: OutputFormatArg, args: &ReportArgs) -> Result<()> {
    let query = RegionalRequest {
        region_ids: args.regions.clone(),
        disease_id: args.disease,
        year_start: args.from,
        year_end: args.to,
    }
    .validate()?;
    let store = open_store(db)?;
    let report = regional_report(store.connection(), &query)?;
    if format == OutputFormatArg::Table {
        println!("Disease: {}", report.disease);
        println!("Period: {}", report.period);
    }
    emit(format, &report, |report| vec![regional_table(report)])
}

pub fn run_catalog(db: &Path, format: OutputFormatArg) -> Result<()> {
    let store = open_store(db)?;
    let catalog = catalog(store.connection())?;
    if format == OutputFormatArg::Table {
        let years = catalog
            .years
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        println!("Years: {}", if years.is_empty() { "-" } else { years.as_str() });
    }
    emit(format, &catalog, |catalog| {
        vec![
            disease_table(catalog),
            region_table(catalog),
            totals_table(&catalog.totals),
        ]
    })
}
