//! Dashboard use-case service.
//!
//! # Responsibility
//! - Model the per-interaction cycle: fresh load, optional upsert with
//!   reload; projections are then derived from the returned snapshot.
//!
//! # Invariants
//! - No caching across cycles; the store is the single source of truth.
//! - Service APIs never bypass store validation/persistence contracts.

use crate::model::record::MetricRecord;
use crate::store::{RecordStore, StoreResult};

/// Use-case wrapper over a record store implementation.
pub struct DashboardService<S: RecordStore> {
    store: S,
}

impl<S: RecordStore> DashboardService<S> {
    /// Creates a service using the provided store implementation.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Loads the full durable collection for a fresh interaction cycle.
    pub fn records(&self) -> StoreResult<Vec<MetricRecord>> {
        self.store.load()
    }

    /// Persists a user submission and returns the reloaded durable
    /// collection.
    pub fn save(&self, record: &MetricRecord) -> StoreResult<Vec<MetricRecord>> {
        self.store.upsert(record)
    }
}
