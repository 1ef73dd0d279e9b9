//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `kpitrack_core` linkage.
//! - Print a per-year summary of a given store file for quick local checks.

use kpitrack_core::{
    available_years, month_series, CsvRecordStore, DashboardService, MonthSeriesPoint,
};
use std::process::ExitCode;

fn main() -> ExitCode {
    println!("kpitrack_core version={}", kpitrack_core::core_version());

    let Some(path) = std::env::args().nth(1) else {
        println!("usage: kpitrack_cli <metrics.csv>");
        return ExitCode::SUCCESS;
    };

    match print_summary(&path) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn print_summary(path: &str) -> Result<(), Box<dyn std::error::Error>> {
    let service = DashboardService::new(CsvRecordStore::new(path));
    let records = service.records()?;
    println!("records={}", records.len());

    for year in available_years(&records) {
        println!("{year}");
        for MonthSeriesPoint { label, record } in month_series(&records, year)? {
            println!(
                "  {label:<9} revenue={} sales={} conversion={} inventory={}",
                record.revenue, record.sales, record.conversion_rate, record.inventory_value
            );
        }
    }
    Ok(())
}
