//! Optional metrics emitted by the partitioning pipeline.
//!
//! With the `metrics` feature enabled the following names are recorded:
//!
//! - `setclust_similarity_evaluations` (counter)
//! - `setclust_divide_thresholds` (counter)
//! - `setclust_orphans` (counter)
//! - `setclust_query_latency` (histogram, seconds, labelled by `query`)
//!
//! Without the feature every helper is a no-op.

use std::time::Duration;

#[cfg(feature = "metrics")]
fn to_u64(value: usize) -> u64 {
    u64::try_from(value).unwrap_or(u64::MAX)
}

#[cfg(feature = "metrics")]
pub(crate) fn record_similarity_evaluations(count: usize) {
    metrics::counter!("setclust_similarity_evaluations").increment(to_u64(count));
}

#[cfg(not(feature = "metrics"))]
pub(crate) fn record_similarity_evaluations(_count: usize) {}

#[cfg(feature = "metrics")]
pub(crate) fn record_divide_thresholds(count: usize) {
    metrics::counter!("setclust_divide_thresholds").increment(to_u64(count));
}

#[cfg(not(feature = "metrics"))]
pub(crate) fn record_divide_thresholds(_count: usize) {}

#[cfg(feature = "metrics")]
pub(crate) fn record_orphans(count: usize) {
    metrics::counter!("setclust_orphans").increment(to_u64(count));
}

#[cfg(not(feature = "metrics"))]
pub(crate) fn record_orphans(_count: usize) {}

#[cfg(feature = "metrics")]
pub(crate) fn record_query_latency(query: &'static str, elapsed: Duration) {
    metrics::histogram!("setclust_query_latency", "query" => query).record(elapsed.as_secs_f64());
}

#[cfg(not(feature = "metrics"))]
pub(crate) fn record_query_latency(_query: &'static str, _elapsed: Duration) {}
