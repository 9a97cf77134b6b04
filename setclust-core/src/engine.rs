//! Query surface composing the partitioning stages.
//!
//! Provides the [`ClusterEngine`] entry point. Every query derives fresh
//! working state from the immutable [`SimilarityGraph`] built at
//! construction, so repeated queries never influence one another.

use std::{num::NonZeroUsize, time::Instant};

use tracing::{info, instrument};

use crate::{
    Result,
    builder::ClusterEngineBuilder,
    eccentricity::find_center,
    error::SetclustError,
    graph::{GraphView, NodeId, SimilarityGraph},
    instrumentation,
    nuclei::grow_from_nuclei,
    similarity::{Similarity, is_valid_similarity},
    threshold::{Division, connected_components, divide},
};

/// Partitions a fixed collection of items using a pairwise similarity.
///
/// The similarity is evaluated for every ordered pair once, at construction.
/// Queries return references to the engine's items, so results keep item
/// identity without requiring `T: Clone` or `T: Eq`.
///
/// # Examples
/// ```
/// use setclust_core::ClusterEngine;
///
/// let items = vec![1, 2, 3, 4, 5, 11, 12, 13, 14, 15];
/// let engine = ClusterEngine::new(items, |x: &i32, y: &i32| {
///     if x == y { 0.0 } else { 1.0 / f64::from((x - y).abs()) }
/// })?;
///
/// let mut representatives = engine.representatives(2)?;
/// representatives.sort();
/// assert_eq!(representatives, [&3, &13]);
///
/// let groups = engine.even_groups(2)?;
/// assert_eq!(groups.len(), 2);
/// assert_eq!(groups.iter().map(Vec::len).sum::<usize>(), 10);
/// # Ok::<(), setclust_core::SetclustError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ClusterEngine<T> {
    graph: SimilarityGraph<T>,
    search_depth: NonZeroUsize,
}

impl<T> ClusterEngine<T> {
    /// Builds an engine with default configuration.
    ///
    /// Shorthand for [`ClusterEngineBuilder::new`] followed by
    /// [`ClusterEngineBuilder::build`].
    ///
    /// # Errors
    /// Returns [`SetclustError::InvalidSimilarity`] when the similarity yields
    /// a negative, NaN, or infinite value for any ordered pair.
    pub fn new<I, S>(items: I, similarity: S) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        S: Similarity<T>,
    {
        ClusterEngineBuilder::new().build(items, similarity)
    }

    pub(crate) fn new_with_depth<S>(
        items: Vec<T>,
        similarity: &S,
        search_depth: NonZeroUsize,
    ) -> Result<Self>
    where
        S: Similarity<T> + ?Sized,
    {
        let graph = SimilarityGraph::build(items, similarity)?;
        Ok(Self {
            graph,
            search_depth,
        })
    }

    /// Returns the search depth used by queries that do not override it.
    #[must_use]
    pub fn search_depth(&self) -> NonZeroUsize {
        self.search_depth
    }

    /// Returns the similarity graph built at construction.
    #[must_use]
    pub fn graph(&self) -> &SimilarityGraph<T> {
        &self.graph
    }

    /// Returns the number of items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.graph.node_count()
    }

    /// Returns whether the engine holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.graph.is_empty()
    }

    /// Splits the items into roughly `count` groups by similarity threshold.
    ///
    /// The groups are the raw connected components found by
    /// [`crate::divide`]; their number and sizes are best effort.
    ///
    /// # Errors
    /// Returns [`SetclustError::InvalidGroupCount`] when `count` is zero.
    pub fn groups(&self, count: usize) -> Result<Vec<Vec<&T>>> {
        self.groups_with_depth(count, self.search_depth.get())
    }

    /// Like [`Self::groups`] with an explicit search depth.
    ///
    /// # Errors
    /// Returns [`SetclustError::InvalidGroupCount`] when `count` is zero and
    /// [`SetclustError::InvalidSearchDepth`] when `depth` is zero.
    #[instrument(name = "engine.groups", err, skip(self), fields(items = self.len()))]
    pub fn groups_with_depth(&self, count: usize, depth: usize) -> Result<Vec<Vec<&T>>> {
        let started = Instant::now();
        let division = self.divide_checked(count, depth)?;
        let groups = division
            .components()
            .iter()
            .map(|component| component.items())
            .collect();
        instrumentation::record_query_latency("groups", started.elapsed());
        Ok(groups)
    }

    /// Picks up to `count` representative items, one per component.
    ///
    /// Components are ranked by size, largest first, and the center of each
    /// of the `count` largest is returned. Fewer items come back only when the
    /// graph cannot be cut into `count` components.
    ///
    /// # Errors
    /// Returns [`SetclustError::InvalidGroupCount`] when `count` is zero.
    pub fn representatives(&self, count: usize) -> Result<Vec<&T>> {
        self.representatives_with_depth(count, self.search_depth.get())
    }

    /// Like [`Self::representatives`] with an explicit search depth.
    ///
    /// # Errors
    /// Returns [`SetclustError::InvalidGroupCount`] when `count` is zero and
    /// [`SetclustError::InvalidSearchDepth`] when `depth` is zero.
    #[instrument(name = "engine.representatives", err, skip(self), fields(items = self.len()))]
    pub fn representatives_with_depth(&self, count: usize, depth: usize) -> Result<Vec<&T>> {
        let started = Instant::now();
        let nodes = self.representative_nodes(count, depth)?;
        instrumentation::record_query_latency("representatives", started.elapsed());
        Ok(self.graph.resolve(&nodes))
    }

    /// Splits the items into `count` groups of similar size.
    ///
    /// Representatives are found as in [`Self::representatives`] and used as
    /// seeds for [`crate::grow_from_nuclei`] over the full graph; orphans are
    /// then placed into the smallest groups. Every item appears in exactly one
    /// group. Exactly `count` groups are returned when there are at least
    /// `count` items.
    ///
    /// # Errors
    /// Returns [`SetclustError::InvalidGroupCount`] when `count` is zero.
    pub fn even_groups(&self, count: usize) -> Result<Vec<Vec<&T>>> {
        self.even_groups_with_depth(count, self.search_depth.get())
    }

    /// Alias of [`Self::even_groups`].
    ///
    /// # Errors
    /// Returns [`SetclustError::InvalidGroupCount`] when `count` is zero.
    pub fn group(&self, count: usize) -> Result<Vec<Vec<&T>>> {
        self.even_groups(count)
    }

    /// Like [`Self::even_groups`] with an explicit search depth.
    ///
    /// # Errors
    /// Returns [`SetclustError::InvalidGroupCount`] when `count` is zero and
    /// [`SetclustError::InvalidSearchDepth`] when `depth` is zero.
    #[instrument(name = "engine.even_groups", err, skip(self), fields(items = self.len()))]
    pub fn even_groups_with_depth(&self, count: usize, depth: usize) -> Result<Vec<Vec<&T>>> {
        let started = Instant::now();
        let seeds = self.representative_nodes(count, depth)?;
        let growth = grow_from_nuclei(&self.graph, &seeds)?;
        let groups = growth
            .redistribute_orphans()
            .iter()
            .map(|group| self.graph.resolve(group))
            .collect();
        instrumentation::record_query_latency("even_groups", started.elapsed());
        Ok(groups)
    }

    /// Returns the components joined by similarities of at least `threshold`.
    ///
    /// No threshold search is performed; the caller picks the cut directly.
    ///
    /// # Errors
    /// Returns [`SetclustError::InvalidThreshold`] when `threshold` is
    /// negative, NaN, or infinite.
    #[instrument(name = "engine.similar_groups", err, skip(self), fields(items = self.len()))]
    pub fn similar_groups(&self, threshold: f64) -> Result<Vec<Vec<&T>>> {
        if !is_valid_similarity(threshold) {
            return Err(SetclustError::InvalidThreshold { value: threshold });
        }
        let started = Instant::now();
        let groups = connected_components(&self.graph, threshold)
            .iter()
            .map(|component| component.items())
            .collect();
        instrumentation::record_query_latency("similar_groups", started.elapsed());
        Ok(groups)
    }

    fn representative_nodes(&self, count: usize, depth: usize) -> Result<Vec<NodeId>> {
        let division = self.divide_checked(count, depth)?;
        let mut components = division.into_components();
        components.sort_by(|left, right| right.node_count().cmp(&left.node_count()));
        components.truncate(count);
        Ok(components
            .iter()
            .filter_map(|component| find_center(component))
            .collect())
    }

    fn divide_checked(&self, count: usize, depth: usize) -> Result<Division<'_, T>> {
        let target = NonZeroUsize::new(count).ok_or(SetclustError::InvalidGroupCount { got: count })?;
        let max_attempts =
            NonZeroUsize::new(depth).ok_or(SetclustError::InvalidSearchDepth { got: depth })?;

        let division = divide(&self.graph, target, max_attempts);
        if division.len() != count {
            info!(
                requested = count,
                produced = division.len(),
                threshold = division.threshold(),
                "threshold search did not produce the requested group count"
            );
        }
        Ok(division)
    }
}
