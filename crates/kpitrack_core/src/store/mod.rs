//! Record store contracts and durable-medium implementations.
//!
//! # Responsibility
//! - Define the load/upsert contract over the durable record collection.
//! - Keep tabular-file details inside the persistence boundary.
//!
//! # Invariants
//! - Write paths call `MetricRecord::validate()` before touching the medium.
//! - Read paths reject invalid persisted state instead of masking it.
//! - A failed upsert leaves the prior durable state fully intact.

use crate::model::record::{MetricRecord, RecordValidationError};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod csv_store;

pub use csv_store::CsvRecordStore;

pub type StoreResult<T> = Result<T, StoreError>;

/// Persistence error for record load and upsert operations.
#[derive(Debug)]
pub enum StoreError {
    /// The durable medium cannot be read, created or replaced.
    Unavailable(std::io::Error),
    /// The medium exists but its tabular content cannot be parsed.
    Malformed(csv::Error),
    /// The medium parsed but violates the record-collection contract.
    InvalidData(String),
    /// A candidate record failed range validation before any write.
    Validation(RecordValidationError),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unavailable(err) => write!(f, "record store unavailable: {err}"),
            Self::Malformed(err) => write!(f, "record store malformed: {err}"),
            Self::InvalidData(message) => {
                write!(f, "invalid persisted record data: {message}")
            }
            Self::Validation(err) => write!(f, "{err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Unavailable(err) => Some(err),
            Self::Malformed(err) => Some(err),
            Self::InvalidData(_) => None,
            Self::Validation(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for StoreError {
    fn from(value: std::io::Error) -> Self {
        Self::Unavailable(value)
    }
}

impl From<csv::Error> for StoreError {
    fn from(value: csv::Error) -> Self {
        Self::Malformed(value)
    }
}

impl From<RecordValidationError> for StoreError {
    fn from(value: RecordValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Store interface over the durable record collection.
///
/// Both operations return the full ordered collection as currently durable,
/// so callers never have to reconcile an in-memory view against the medium.
pub trait RecordStore {
    /// Returns all durable records; bootstraps an empty collection when no
    /// durable data exists yet.
    fn load(&self) -> StoreResult<Vec<MetricRecord>>;

    /// Inserts or replaces the record holding the candidate's `(year, month)`
    /// key, overwrites the full collection durably, then re-reads it.
    ///
    /// # Postcondition
    /// - The returned collection reflects exactly what is durable, not merely
    ///   what was mutated in memory.
    fn upsert(&self, record: &MetricRecord) -> StoreResult<Vec<MetricRecord>>;
}
