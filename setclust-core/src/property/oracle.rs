//! Brute-force reference computations for the property suite.

use crate::graph::{GraphView, NodeId};

/// Computes every node's eccentricity by relaxing each source's distances
/// until nothing changes.
///
/// Returns `(node, eccentricity)` pairs in the view's iteration order.
pub(super) fn eccentricities<G: GraphView + ?Sized>(graph: &G) -> Vec<(NodeId, f64)> {
    let nodes = graph.nodes();
    nodes
        .iter()
        .enumerate()
        .map(|(source, &node)| {
            let mut distance = vec![f64::INFINITY; nodes.len()];
            distance[source] = 0.0;
            let mut changed = true;
            while changed {
                changed = false;
                for (from_index, &from) in nodes.iter().enumerate() {
                    if distance[from_index].is_infinite() {
                        continue;
                    }
                    for (to_index, &to) in nodes.iter().enumerate() {
                        let Some(cost) = graph.weight(from, to) else {
                            continue;
                        };
                        let candidate = distance[from_index] + cost;
                        if candidate < distance[to_index] {
                            distance[to_index] = candidate;
                            changed = true;
                        }
                    }
                }
            }
            let eccentricity = distance.into_iter().fold(0.0, f64::max);
            (node, eccentricity)
        })
        .collect()
}

/// Returns the first node whose eccentricity is minimal.
pub(super) fn first_minimum(eccentricities: &[(NodeId, f64)]) -> Option<NodeId> {
    let mut best: Option<(NodeId, f64)> = None;
    for &(node, eccentricity) in eccentricities {
        if best.is_none_or(|(_, lowest)| eccentricity < lowest) {
            best = Some((node, eccentricity));
        }
    }
    best.map(|(node, _)| node)
}
