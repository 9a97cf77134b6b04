//! Benchmark setup error type.
//!
//! Lets setup functions propagate failures with `?` instead of panicking
//! inside Criterion closures.

use setclust_core::SetclustError;

use crate::corpus::CorpusError;

/// Errors that may occur during benchmark setup.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// Synthetic corpus generation failed.
    #[error("synthetic corpus generation failed: {0}")]
    Corpus(#[from] CorpusError),
    /// Engine construction or a query failed.
    #[error("engine operation failed: {0}")]
    Engine(#[from] SetclustError),
}
