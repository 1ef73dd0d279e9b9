//! Domain model for monthly business metrics.
//!
//! # Responsibility
//! - Define the canonical record shape shared by store and projections.
//! - Enforce numeric range invariants at construction, not at render time.
//!
//! # Invariants
//! - A record's identity is its `(year, month)` pair.
//! - Every record that reaches the store or a view has passed `validate()`.

pub mod record;
