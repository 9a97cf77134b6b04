//! All-pairs shortest paths and center selection.
//!
//! Edge weights are used directly as path costs: similarity is accumulated
//! along a path and minimised, not inverted into a dissimilarity. A missing
//! edge costs `+inf` and an edge of weight `0.0` is a free hop, so the result
//! is not a metric.

use std::collections::HashMap;

use crate::graph::{GraphView, NodeId};

/// Dense shortest-path table over the nodes of one [`GraphView`].
///
/// Rows and columns follow the view's node iteration order.
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMatrix {
    nodes: Vec<NodeId>,
    positions: HashMap<NodeId, usize>,
    rows: Vec<Vec<f64>>,
}

impl DistanceMatrix {
    /// Returns the nodes indexing the table, in iteration order.
    #[must_use]
    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    /// Returns the shortest-path cost from `from` to `to`.
    ///
    /// Unreachable pairs yield `f64::INFINITY`; nodes outside the table yield
    /// `None`.
    #[must_use]
    pub fn distance(&self, from: NodeId, to: NodeId) -> Option<f64> {
        let column = *self.positions.get(&to)?;
        self.row(from)?.get(column).copied()
    }

    /// Returns the largest shortest-path cost from `node` to any node in the
    /// table, including itself (`0.0`).
    #[must_use]
    pub fn eccentricity(&self, node: NodeId) -> Option<f64> {
        self.row(node).map(row_eccentricity)
    }

    fn row(&self, node: NodeId) -> Option<&[f64]> {
        let position = *self.positions.get(&node)?;
        self.rows.get(position).map(Vec::as_slice)
    }
}

fn row_eccentricity(row: &[f64]) -> f64 {
    row.iter().copied().fold(0.0, f64::max)
}

/// Computes all-pairs shortest paths with the Floyd–Warshall relaxation.
///
/// Every triple `(k, i, j)` is relaxed once with `k` outermost, which reaches
/// the fixed point for non-negative weights. Runs in `O(n³)` time and
/// `O(n²)` space.
///
/// # Examples
/// ```
/// use setclust_core::{NodeId, SimilarityGraph, distance_matrix};
///
/// // Costs: 0 -> 1 is 1.0, 1 -> 2 is 1.0, but 0 -> 2 directly is 5.0.
/// let graph = SimilarityGraph::build(vec![0_usize, 1, 2], &|a: &usize, b: &usize| {
///     if a.abs_diff(*b) == 1 { 1.0 } else { 5.0 }
/// })?;
/// let matrix = distance_matrix(&graph);
/// assert_eq!(matrix.distance(NodeId::new(0), NodeId::new(2)), Some(2.0));
/// # Ok::<(), setclust_core::SetclustError>(())
/// ```
#[must_use]
pub fn distance_matrix<G: GraphView + ?Sized>(graph: &G) -> DistanceMatrix {
    let nodes = graph.nodes().to_vec();
    let positions = nodes
        .iter()
        .enumerate()
        .map(|(position, &node)| (node, position))
        .collect();
    let mut rows: Vec<Vec<f64>> = nodes
        .iter()
        .map(|&from| {
            nodes
                .iter()
                .map(|&to| {
                    if from == to {
                        0.0
                    } else {
                        graph.weight(from, to).unwrap_or(f64::INFINITY)
                    }
                })
                .collect()
        })
        .collect();

    for via in 0..nodes.len() {
        // Row `via` cannot improve while relaxing through `via` itself.
        let Some(onward) = rows.get(via).cloned() else {
            continue;
        };
        for row in &mut rows {
            let Some(&to_via) = row.get(via) else {
                continue;
            };
            if to_via.is_infinite() {
                continue;
            }
            for (current, &rest) in row.iter_mut().zip(&onward) {
                let through = to_via + rest;
                if through < *current {
                    *current = through;
                }
            }
        }
    }

    DistanceMatrix {
        nodes,
        positions,
        rows,
    }
}

/// Returns the node with the smallest eccentricity.
///
/// Ties go to the node that comes first in the view's iteration order; when
/// every eccentricity is infinite that is the first node. An empty graph has
/// no center.
///
/// # Examples
/// ```
/// use setclust_core::{NodeId, SimilarityGraph, find_center};
///
/// // Neighbours cost 1.0, the long hop costs 10.0: node 1 sits in the middle.
/// let graph = SimilarityGraph::build(vec![0_usize, 1, 2], &|a: &usize, b: &usize| {
///     if a.abs_diff(*b) == 1 { 1.0 } else { 10.0 }
/// })?;
/// assert_eq!(find_center(&graph), Some(NodeId::new(1)));
/// # Ok::<(), setclust_core::SetclustError>(())
/// ```
#[must_use]
pub fn find_center<G: GraphView + ?Sized>(graph: &G) -> Option<NodeId> {
    let matrix = distance_matrix(graph);
    let mut best: Option<(NodeId, f64)> = None;
    for (&node, row) in matrix.nodes.iter().zip(&matrix.rows) {
        let eccentricity = row_eccentricity(row);
        match best {
            Some((_, lowest)) if lowest <= eccentricity => {}
            _ => best = Some((node, eccentricity)),
        }
    }
    best.map(|(node, _)| node)
}
