//! Complete weighted similarity graph over the caller's items.
//!
//! Items live in an arena indexed by [`NodeId`]; directed edge weights are
//! stored in a dense `n × n` table. A missing entry means "no edge"; the
//! diagonal is always empty. Weights for `(a, b)` and `(b, a)` come from
//! separate similarity evaluations and are never reconciled.

mod subgraph;

use std::fmt;

use tracing::{debug, instrument};

use crate::{
    Result,
    error::SetclustError,
    instrumentation,
    similarity::{Similarity, is_valid_similarity},
};

pub use self::subgraph::SubGraph;

/// Identifier of a node within one [`SimilarityGraph`].
///
/// Identifiers are assigned in input order starting at zero and are never
/// reused.
///
/// # Examples
/// ```
/// use setclust_core::NodeId;
///
/// let id = NodeId::new(3);
/// assert_eq!(id.get(), 3);
/// assert_eq!(id.to_string(), "#3");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    /// Creates a node identifier.
    #[rustfmt::skip]
    #[must_use]
    pub const fn new(id: usize) -> Self { Self(id) }

    /// Returns the arena index behind the identifier.
    #[rustfmt::skip]
    #[must_use]
    pub const fn get(self) -> usize { self.0 }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Read-only access to a weighted directed graph.
///
/// Implemented by the full [`SimilarityGraph`] and by the [`SubGraph`]
/// components cut from it, so center finding and growth can run on either.
pub trait GraphView {
    /// Returns the nodes in iteration order.
    fn nodes(&self) -> &[NodeId];

    /// Returns the weight of the edge from `from` to `to`, or `None` when no
    /// edge exists.
    ///
    /// An edge may be present with weight `0.0`; callers decide whether such
    /// an edge counts.
    fn weight(&self, from: NodeId, to: NodeId) -> Option<f64>;

    /// Returns the number of nodes.
    fn node_count(&self) -> usize {
        self.nodes().len()
    }

    /// Returns whether the graph has no nodes.
    fn is_empty(&self) -> bool {
        self.nodes().is_empty()
    }
}

/// Complete similarity graph built once from items and a [`Similarity`].
///
/// # Examples
/// ```
/// use setclust_core::{GraphView, NodeId, SimilarityGraph};
///
/// let graph = SimilarityGraph::build(vec![1, 2, 4], &|a: &i32, b: &i32| {
///     f64::from((a - b).abs())
/// })?;
/// assert_eq!(graph.node_count(), 3);
/// assert_eq!(graph.weight(NodeId::new(0), NodeId::new(2)), Some(3.0));
/// assert_eq!(graph.weight(NodeId::new(1), NodeId::new(1)), None);
/// assert_eq!(graph.item(NodeId::new(2)), Some(&4));
/// # Ok::<(), setclust_core::SetclustError>(())
/// ```
#[derive(Debug, Clone)]
pub struct SimilarityGraph<T> {
    items: Vec<T>,
    nodes: Vec<NodeId>,
    weights: Vec<Option<f64>>,
}

impl<T> SimilarityGraph<T> {
    /// Builds the graph by scoring every ordered pair of distinct items.
    ///
    /// The similarity is invoked `n * (n - 1)` times, once per direction.
    ///
    /// # Errors
    /// Returns [`SetclustError::InvalidSimilarity`] naming both item positions
    /// when any evaluation is negative, NaN, or infinite. No graph is produced
    /// in that case.
    #[instrument(name = "graph.build", err, skip_all, fields(items = items.len()))]
    pub fn build<S>(items: Vec<T>, similarity: &S) -> Result<Self>
    where
        S: Similarity<T> + ?Sized,
    {
        let node_count = items.len();
        let mut weights = vec![None; node_count * node_count];

        for (left, left_item) in items.iter().enumerate() {
            for (right, right_item) in items.iter().enumerate() {
                if left == right {
                    continue;
                }
                let value = similarity.similarity(left_item, right_item);
                if !is_valid_similarity(value) {
                    return Err(SetclustError::InvalidSimilarity { left, right, value });
                }
                if let Some(slot) = weights.get_mut(left * node_count + right) {
                    *slot = Some(value);
                }
            }
        }

        let evaluations = node_count * node_count.saturating_sub(1);
        instrumentation::record_similarity_evaluations(evaluations);
        debug!(edges = evaluations, "similarity graph built");

        Ok(Self {
            items,
            nodes: (0..node_count).map(NodeId::new).collect(),
            weights,
        })
    }

    /// Returns the item stored at `id`.
    #[must_use]
    pub fn item(&self, id: NodeId) -> Option<&T> {
        self.items.get(id.get())
    }

    /// Returns every item in node order.
    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Returns whether `id` names a node of this graph.
    #[must_use]
    pub fn contains(&self, id: NodeId) -> bool {
        id.get() < self.items.len()
    }

    /// Returns the largest edge weight, or `0.0` for a graph without edges.
    #[must_use]
    pub fn max_weight(&self) -> f64 {
        self.weights.iter().flatten().copied().fold(0.0, f64::max)
    }

    /// Resolves a group of node identifiers into item references.
    pub(crate) fn resolve<'a>(&'a self, ids: &[NodeId]) -> Vec<&'a T> {
        ids.iter().filter_map(|&id| self.item(id)).collect()
    }
}

impl<T> GraphView for SimilarityGraph<T> {
    fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    fn weight(&self, from: NodeId, to: NodeId) -> Option<f64> {
        let node_count = self.items.len();
        if from.get() >= node_count || to.get() >= node_count {
            return None;
        }
        self.weights
            .get(from.get() * node_count + to.get())
            .copied()
            .flatten()
    }
}
