//! Metric record domain model.
//!
//! # Responsibility
//! - Define the single persisted entity: one period's full KPI tuple.
//! - Provide construction-time validation of all numeric ranges.
//!
//! # Invariants
//! - `(year, month)` is the record's identity; at most one record per key
//!   exists in any durable collection.
//! - All four KPI fields are finite; revenue and sales are non-negative;
//!   conversion rate stays within 0..=100.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Identity of a record: the `(year, month)` pair.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type PeriodKey = (u16, u8);

/// One period's full KPI tuple, keyed by `(year, month)`.
///
/// Field order matches the durable CSV column contract
/// `year,month,revenue,sales,conversion_rate,inventory_value`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricRecord {
    /// Calendar year, strictly positive.
    pub year: u16,
    /// Calendar month, 1 through 12.
    pub month: u8,
    /// Monthly revenue in currency units, non-negative.
    pub revenue: f64,
    /// Monthly sales in currency units, non-negative.
    pub sales: f64,
    /// Conversion rate as a percentage, 0 through 100.
    pub conversion_rate: f64,
    /// Inventory value in currency units.
    pub inventory_value: f64,
}

impl MetricRecord {
    /// Creates a validated record.
    ///
    /// # Errors
    /// - Returns the first range violation found, in field order.
    pub fn new(
        year: u16,
        month: u8,
        revenue: f64,
        sales: f64,
        conversion_rate: f64,
        inventory_value: f64,
    ) -> Result<Self, RecordValidationError> {
        let record = Self {
            year,
            month,
            revenue,
            sales,
            conversion_rate,
            inventory_value,
        };
        record.validate()?;
        Ok(record)
    }

    /// Returns this record's identity key.
    pub fn key(&self) -> PeriodKey {
        (self.year, self.month)
    }

    /// Checks all field range invariants.
    ///
    /// Write paths must call this before persistence; read paths call it on
    /// every persisted row so invalid durable state is rejected, not masked.
    pub fn validate(&self) -> Result<(), RecordValidationError> {
        if self.year == 0 {
            return Err(RecordValidationError::YearZero);
        }
        if !(1..=12).contains(&self.month) {
            return Err(RecordValidationError::MonthOutOfRange(self.month));
        }
        if !self.revenue.is_finite() || self.revenue < 0.0 {
            return Err(RecordValidationError::NegativeCurrency {
                field: "revenue",
                value: self.revenue,
            });
        }
        if !self.sales.is_finite() || self.sales < 0.0 {
            return Err(RecordValidationError::NegativeCurrency {
                field: "sales",
                value: self.sales,
            });
        }
        if !self.conversion_rate.is_finite()
            || !(0.0..=100.0).contains(&self.conversion_rate)
        {
            return Err(RecordValidationError::ConversionOutOfRange(
                self.conversion_rate,
            ));
        }
        if !self.inventory_value.is_finite() {
            return Err(RecordValidationError::NonFiniteCurrency {
                field: "inventory_value",
            });
        }
        Ok(())
    }
}

/// Field-level range violation detected at record construction or row read.
#[derive(Debug, Clone, PartialEq)]
pub enum RecordValidationError {
    YearZero,
    MonthOutOfRange(u8),
    NegativeCurrency { field: &'static str, value: f64 },
    ConversionOutOfRange(f64),
    NonFiniteCurrency { field: &'static str },
}

impl Display for RecordValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::YearZero => write!(f, "year must be a positive integer"),
            Self::MonthOutOfRange(month) => {
                write!(f, "month must be within 1..=12, got {month}")
            }
            Self::NegativeCurrency { field, value } => {
                write!(f, "{field} must be a non-negative finite number, got {value}")
            }
            Self::ConversionOutOfRange(value) => {
                write!(f, "conversion_rate must be within 0..=100, got {value}")
            }
            Self::NonFiniteCurrency { field } => {
                write!(f, "{field} must be a finite number")
            }
        }
    }
}

impl Error for RecordValidationError {}
