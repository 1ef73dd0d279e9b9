//! View projections over loaded record snapshots.
//!
//! # Responsibility
//! - Derive filtered subsets and display-ready aggregates from a record
//!   snapshot supplied by the caller.
//!
//! # Invariants
//! - Projections never mutate or persist anything; all state lives in the
//!   store's durable medium.
//! - Absence of data for a period is a normal state, never an error.

pub mod projector;
