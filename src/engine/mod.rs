//! Validation engine module.
//!
//! Provides state classification, worker pool execution, and verdict
//! aggregation.

pub mod classify;
pub mod summary;
pub mod worker;
