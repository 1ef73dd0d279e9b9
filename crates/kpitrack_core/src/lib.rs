//! Core domain logic for KpiTrack.
//! This crate is the single source of truth for record-store invariants.

pub mod logging;
pub mod model;
pub mod service;
pub mod store;
pub mod view;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::record::{MetricRecord, PeriodKey, RecordValidationError};
pub use service::dashboard_service::DashboardService;
pub use store::csv_store::CsvRecordStore;
pub use store::{RecordStore, StoreError, StoreResult};
pub use view::projector::{
    available_years, filter_by_period, filter_by_year, month_label, month_series, snapshot,
    sort_chronological, KpiSnapshot, MonthError, MonthSeriesPoint,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
