//! CSV-backed record store.
//!
//! # Responsibility
//! - Persist the record collection as a flat tabular file with a fixed
//!   column contract.
//! - Guarantee read-after-write consistency: every upsert returns the
//!   collection as re-read from the durable medium.
//!
//! # Invariants
//! - Column names and order are stable: `year,month,revenue,sales,
//!   conversion_rate,inventory_value`. No header-variant tolerance.
//! - Absence of the file is not an error; it is bootstrapped header-only.
//! - The medium is replaced atomically (temp file + rename), so a failed
//!   write never leaves a partially committed collection.

use super::{RecordStore, StoreError, StoreResult};
use crate::model::record::{MetricRecord, PeriodKey};
use log::{error, info};
use std::collections::HashSet;
use std::ffi::OsString;
use std::fs::File;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Fixed column contract of the durable medium.
const HEADER: [&str; 6] = [
    "year",
    "month",
    "revenue",
    "sales",
    "conversion_rate",
    "inventory_value",
];

/// Record store over a single CSV file.
///
/// The file path is explicit constructor configuration; there is no implicit
/// module-wide location.
pub struct CsvRecordStore {
    path: PathBuf,
}

impl CsvRecordStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the configured durable medium location.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn bootstrap_empty(&self) -> StoreResult<()> {
        let file = File::create(&self.path)?;
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);
        writer.write_record(HEADER)?;
        writer.flush()?;
        info!(
            "event=store_bootstrap module=store status=ok path={}",
            self.path.display()
        );
        Ok(())
    }

    fn read_all(&self) -> StoreResult<Vec<MetricRecord>> {
        let file = File::open(&self.path)?;
        let mut reader = csv::ReaderBuilder::new().has_headers(true).from_reader(file);

        let headers = reader.headers()?.clone();
        if headers.iter().ne(HEADER) {
            return Err(StoreError::InvalidData(format!(
                "unexpected header `{}`; the column contract is `{}`",
                headers.iter().collect::<Vec<_>>().join(","),
                HEADER.join(",")
            )));
        }

        let mut records = Vec::new();
        let mut seen: HashSet<PeriodKey> = HashSet::new();
        for row in reader.deserialize::<MetricRecord>() {
            let record = row?;
            record.validate().map_err(|err| {
                StoreError::InvalidData(format!(
                    "row for period {}-{:02}: {err}",
                    record.year, record.month
                ))
            })?;
            if !seen.insert(record.key()) {
                return Err(StoreError::InvalidData(format!(
                    "duplicate rows for period {}-{:02}",
                    record.year, record.month
                )));
            }
            records.push(record);
        }
        Ok(records)
    }

    /// Overwrites the durable collection atomically.
    ///
    /// Writes the full collection to a sibling temp file first and renames it
    /// over the medium, so the prior state survives any mid-write failure.
    fn replace_all(&self, records: &[MetricRecord]) -> StoreResult<()> {
        let tmp_path = sibling_tmp_path(&self.path);
        let result = self.write_records(&tmp_path, records);
        if result.is_err() {
            // Prior durable state is untouched; only the temp file is stale.
            let _ = std::fs::remove_file(&tmp_path);
            return result;
        }
        if let Err(err) = std::fs::rename(&tmp_path, &self.path) {
            let _ = std::fs::remove_file(&tmp_path);
            return Err(err.into());
        }
        Ok(())
    }

    fn write_records(&self, target: &Path, records: &[MetricRecord]) -> StoreResult<()> {
        let file = File::create(target)?;
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);
        writer.write_record(HEADER)?;
        for record in records {
            writer.serialize(record)?;
        }
        writer.flush()?;
        Ok(())
    }
}

impl RecordStore for CsvRecordStore {
    fn load(&self) -> StoreResult<Vec<MetricRecord>> {
        let started_at = Instant::now();

        if !self.path.exists() {
            self.bootstrap_empty()?;
            info!(
                "event=store_load module=store status=ok rows=0 duration_ms={}",
                started_at.elapsed().as_millis()
            );
            return Ok(Vec::new());
        }

        match self.read_all() {
            Ok(records) => {
                info!(
                    "event=store_load module=store status=ok rows={} duration_ms={}",
                    records.len(),
                    started_at.elapsed().as_millis()
                );
                Ok(records)
            }
            Err(err) => {
                error!(
                    "event=store_load module=store status=error duration_ms={} error={}",
                    started_at.elapsed().as_millis(),
                    err
                );
                Err(err)
            }
        }
    }

    fn upsert(&self, record: &MetricRecord) -> StoreResult<Vec<MetricRecord>> {
        let started_at = Instant::now();
        record.validate()?;

        let mut records = self.load()?;
        let action = match records.iter().position(|existing| existing.key() == record.key()) {
            Some(index) => {
                // Replace in place so the record keeps its relative position.
                records[index] = record.clone();
                "replace"
            }
            None => {
                records.push(record.clone());
                "insert"
            }
        };

        if let Err(err) = self.replace_all(&records) {
            error!(
                "event=store_upsert module=store status=error action={} key={}-{:02} duration_ms={} error={}",
                action,
                record.year,
                record.month,
                started_at.elapsed().as_millis(),
                err
            );
            return Err(err);
        }

        // Re-read from the medium: the caller must observe exactly what is
        // durable, not the in-memory mutation.
        let reloaded = self.read_all()?;
        info!(
            "event=store_upsert module=store status=ok action={} key={}-{:02} rows={} duration_ms={}",
            action,
            record.year,
            record.month,
            reloaded.len(),
            started_at.elapsed().as_millis()
        );
        Ok(reloaded)
    }
}

fn sibling_tmp_path(path: &Path) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(".tmp");
    PathBuf::from(name)
}
