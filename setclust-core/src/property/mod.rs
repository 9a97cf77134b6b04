//! Property-based tests for the partitioning pipeline.
//!
//! Generates similarity tables with varied weight distributions and checks
//! the invariants every query must uphold: partitions cover each item once,
//! group counts match the request when enough items exist, centers minimise
//! eccentricity, and queries are free of hidden state.

mod oracle;
mod strategies;
mod types;
