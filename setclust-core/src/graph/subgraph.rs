//! Components cut from a [`SimilarityGraph`] at a similarity threshold.

use super::{GraphView, NodeId, SimilarityGraph};

/// A subset of a [`SimilarityGraph`] together with the links that joined it.
///
/// The nodes are borrowed from the base graph, never copied. Each link is a
/// pair the cut followed to absorb a node; a link exposes the base weight in
/// both directions, even when the reverse weight is below the threshold. Any
/// other member pair has no edge.
#[derive(Debug, Clone)]
pub struct SubGraph<'g, T> {
    graph: &'g SimilarityGraph<T>,
    nodes: Vec<NodeId>,
    sorted: Vec<NodeId>,
    links: Vec<(NodeId, NodeId)>,
    linked: Vec<(NodeId, NodeId)>,
    threshold: f64,
}

impl<'g, T> SubGraph<'g, T> {
    /// `nodes` must be distinct members of `graph`, listed in iteration order.
    /// `links` holds `(from, to)` pairs between members in the order they
    /// were followed.
    pub(crate) fn new(
        graph: &'g SimilarityGraph<T>,
        nodes: Vec<NodeId>,
        links: Vec<(NodeId, NodeId)>,
        threshold: f64,
    ) -> Self {
        let mut sorted = nodes.clone();
        sorted.sort_unstable();
        let mut linked: Vec<(NodeId, NodeId)> = links
            .iter()
            .map(|&(from, to)| (from.min(to), from.max(to)))
            .collect();
        linked.sort_unstable();
        linked.dedup();
        Self {
            graph,
            nodes,
            sorted,
            links,
            linked,
            threshold,
        }
    }

    /// Returns the graph this component was cut from.
    #[must_use]
    pub fn graph(&self) -> &'g SimilarityGraph<T> {
        self.graph
    }

    /// Returns the similarity threshold every link met when it was followed.
    #[must_use]
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Returns the followed `(from, to)` pairs in discovery order.
    #[must_use]
    pub fn links(&self) -> &[(NodeId, NodeId)] {
        &self.links
    }

    /// Returns whether `id` is a member of this component.
    #[must_use]
    pub fn contains(&self, id: NodeId) -> bool {
        self.sorted.binary_search(&id).is_ok()
    }

    /// Returns the member items in node iteration order.
    #[must_use]
    pub fn items(&self) -> Vec<&'g T> {
        self.graph.resolve(&self.nodes)
    }

    /// Consumes the component, keeping only its member identifiers.
    #[must_use]
    pub fn into_nodes(self) -> Vec<NodeId> {
        self.nodes
    }

    fn is_linked(&self, from: NodeId, to: NodeId) -> bool {
        self.linked
            .binary_search(&(from.min(to), from.max(to)))
            .is_ok()
    }
}

impl<T> GraphView for SubGraph<'_, T> {
    fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    fn weight(&self, from: NodeId, to: NodeId) -> Option<f64> {
        if !self.is_linked(from, to) {
            return None;
        }
        self.graph.weight(from, to)
    }
}
