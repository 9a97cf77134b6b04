//! Shared test utilities for `setclust-core`.

use setclust_test_support::ci::property_test_profile::ProptestRunProfile;
use proptest::test_runner::Config as ProptestConfig;

use crate::{graph::SimilarityGraph, similarity::Similarity};
use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

/// Builds a standard proptest configuration from the shared CI profile.
///
/// This keeps property suites aligned on the same `PROGTEST_CASES` and
/// `SETCLUST_PBT_FORK` interpretation.
#[must_use]
pub(crate) fn suite_proptest_config(default_cases: u32) -> ProptestConfig {
    let profile = ProptestRunProfile::load(default_cases, false);
    ProptestConfig {
        cases: profile.cases(),
        fork: profile.fork(),
        ..ProptestConfig::default()
    }
}

/// [`Similarity`] returning a fixed value and counting its invocations.
#[derive(Clone)]
pub(crate) struct CountingSimilarity {
    value: f64,
    calls: Arc<AtomicUsize>,
}

impl CountingSimilarity {
    /// Creates a similarity that always yields `value`.
    #[must_use]
    pub(crate) fn constant(value: f64, calls: Arc<AtomicUsize>) -> Self {
        Self { value, calls }
    }
}

impl<T> Similarity<T> for CountingSimilarity {
    fn similarity(&self, _left: &T, _right: &T) -> f64 {
        self.calls.fetch_add(1, Ordering::Relaxed);
        self.value
    }
}

/// Builds a graph over `0..n` whose weights come from a row-major `n × n`
/// table; the diagonal entries are ignored.
pub(crate) fn graph_from_table(table: &[Vec<f64>]) -> SimilarityGraph<usize> {
    let items: Vec<usize> = (0..table.len()).collect();
    SimilarityGraph::build(items, &|left: &usize, right: &usize| table[*left][*right])
        .expect("test tables hold valid similarities")
}

/// Builds a graph over `items` with the inverse-distance similarity
/// `1 / |x - y|` (and `0` for equal values).
pub(crate) fn inverse_distance_graph(items: &[i32]) -> SimilarityGraph<i32> {
    SimilarityGraph::build(items.to_vec(), &|left: &i32, right: &i32| {
        if left == right {
            0.0
        } else {
            1.0 / f64::from((left - right).abs())
        }
    })
    .expect("inverse distance is a valid similarity")
}
