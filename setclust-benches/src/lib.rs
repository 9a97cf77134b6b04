//! Benchmark support crate for setclust.
//!
//! Provides a synthetic word corpus, an edit-distance similarity, and the
//! parameter types used by the Criterion benchmarks for engine construction
//! and the query modes.

pub mod corpus;
pub mod error;
pub mod params;
