//! Stateless projection functions and the display-ready KPI snapshot.

use crate::model::record::MetricRecord;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Month display names, indexed by `month - 1`.
const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Month argument outside 1..=12 on a label lookup.
///
/// This is a programming error on the caller's side; validated records can
/// never carry an out-of-range month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthError(pub u8);

impl Display for MonthError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "month must be within 1..=12, got {}", self.0)
    }
}

impl Error for MonthError {}

/// Returns the display name for a month number.
pub fn month_label(month: u8) -> Result<&'static str, MonthError> {
    match month {
        1..=12 => Ok(MONTH_NAMES[usize::from(month) - 1]),
        other => Err(MonthError(other)),
    }
}

/// All records for the given year, preserving input order.
pub fn filter_by_year(records: &[MetricRecord], year: u16) -> Vec<MetricRecord> {
    records
        .iter()
        .filter(|record| record.year == year)
        .cloned()
        .collect()
}

/// The record matching both keys, if any.
pub fn filter_by_period(records: &[MetricRecord], year: u16, month: u8) -> Option<MetricRecord> {
    records
        .iter()
        .find(|record| record.year == year && record.month == month)
        .cloned()
}

/// Stable sort by `(year, month)` ascending.
///
/// Applied before chart/table rendering so month-ordered series are
/// monotonic.
pub fn sort_chronological(mut records: Vec<MetricRecord>) -> Vec<MetricRecord> {
    records.sort_by_key(MetricRecord::key);
    records
}

/// Distinct years present in the snapshot, newest first, for the year
/// filter widget.
///
/// An empty snapshot yields an empty list; the caller picks its own default
/// selection.
pub fn available_years(records: &[MetricRecord]) -> Vec<u16> {
    let mut years: Vec<u16> = records.iter().map(|record| record.year).collect();
    years.sort_unstable();
    years.dedup();
    years.reverse();
    years
}

/// One chart/table row: a record paired with its month display name.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthSeriesPoint {
    pub label: &'static str,
    pub record: MetricRecord,
}

/// The selected year's records in chronological order, each paired with its
/// month label, ready for charts and the data table.
pub fn month_series(
    records: &[MetricRecord],
    year: u16,
) -> Result<Vec<MonthSeriesPoint>, MonthError> {
    sort_chronological(filter_by_year(records, year))
        .into_iter()
        .map(|record| {
            Ok(MonthSeriesPoint {
                label: month_label(record.month)?,
                record,
            })
        })
        .collect()
}

/// Display-ready KPI set for one period, zero-defaulted when the period has
/// no record.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct KpiSnapshot {
    pub revenue: f64,
    pub sales: f64,
    pub conversion_rate: f64,
    pub inventory_value: f64,
}

impl KpiSnapshot {
    pub fn revenue_display(&self) -> String {
        format_currency(self.revenue)
    }

    pub fn sales_display(&self) -> String {
        format_currency(self.sales)
    }

    pub fn conversion_display(&self) -> String {
        format!("{:.2}%", self.conversion_rate)
    }

    pub fn inventory_display(&self) -> String {
        format_currency(self.inventory_value)
    }
}

impl From<&MetricRecord> for KpiSnapshot {
    fn from(record: &MetricRecord) -> Self {
        Self {
            revenue: record.revenue,
            sales: record.sales,
            conversion_rate: record.conversion_rate,
            inventory_value: record.inventory_value,
        }
    }
}

/// Builds the KPI snapshot for a period lookup result.
///
/// `None` yields the all-zero snapshot: a period with no data renders as
/// zeros, it does not fail.
pub fn snapshot(record: Option<&MetricRecord>) -> KpiSnapshot {
    record.map(KpiSnapshot::from).unwrap_or_default()
}

/// Two-decimal currency formatting with thousands separators, e.g.
/// `R$ 1,234.50`.
pub fn format_currency(value: f64) -> String {
    let sign = if value < 0.0 { "-" } else { "" };
    let cents = (value.abs() * 100.0).round() as u64;
    let units = cents / 100;
    let fraction = cents % 100;

    let digits = units.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (count, ch) in digits.chars().rev().enumerate() {
        if count > 0 && count % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    let grouped: String = grouped.chars().rev().collect();

    format!("R$ {sign}{grouped}.{fraction:02}")
}

#[cfg(test)]
mod tests {
    use super::format_currency;

    #[test]
    fn format_currency_groups_thousands() {
        assert_eq!(format_currency(1234.5), "R$ 1,234.50");
        assert_eq!(format_currency(1_000_000.0), "R$ 1,000,000.00");
    }

    #[test]
    fn format_currency_handles_small_and_negative_values() {
        assert_eq!(format_currency(0.0), "R$ 0.00");
        assert_eq!(format_currency(0.995), "R$ 1.00");
        assert_eq!(format_currency(-120.0), "R$ -120.00");
    }
}
