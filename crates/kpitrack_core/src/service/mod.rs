//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate store and projection calls into the per-interaction cycle
//!   the presentation layer consumes.
//! - Keep UI layers decoupled from the durable medium.

pub mod dashboard_service;
