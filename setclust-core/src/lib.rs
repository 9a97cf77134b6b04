//! Setclust core library.
//!
//! Partitions a finite collection of opaque items into groups given only a
//! pairwise similarity. The pipeline builds a complete weighted
//! [`SimilarityGraph`], cuts it into components with a bisected similarity
//! threshold ([`divide`]), picks each component's [`find_center`] as a
//! representative, and grows balanced groups from those seeds
//! ([`grow_from_nuclei`]). [`ClusterEngine`] chains these stages into the
//! caller-facing queries.
//!
//! Costs are quadratic in the number of items for construction and cubic for
//! center finding; the crate targets small collections.
#![cfg_attr(docsrs, feature(doc_cfg))]

mod builder;
mod eccentricity;
mod engine;
mod error;
mod graph;
mod instrumentation;
mod nuclei;
mod similarity;
mod threshold;

#[cfg(test)]
mod property;
#[cfg(test)]
mod test_utils;

pub use crate::{
    builder::{ClusterEngineBuilder, DEFAULT_SEARCH_DEPTH},
    eccentricity::{DistanceMatrix, distance_matrix, find_center},
    engine::ClusterEngine,
    error::{GrowthError, GrowthErrorCode, Result, SetclustError, SetclustErrorCode},
    graph::{GraphView, NodeId, SimilarityGraph, SubGraph},
    nuclei::{Growth, grow_from_nuclei},
    similarity::Similarity,
    threshold::{Division, connected_components, divide},
};
