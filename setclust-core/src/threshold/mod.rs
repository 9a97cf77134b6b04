//! Threshold-based partitioning of a [`SimilarityGraph`].
//!
//! [`connected_components`] cuts the graph at a fixed similarity threshold;
//! [`divide`] bisects thresholds until the cut yields a requested number of
//! components, or the closest count it can find.
//!
//! Component count grows with the threshold, but it can jump by more than one
//! at a single weight, so an exact hit is not guaranteed. The fallback order
//! when no exact hit exists is:
//!
//! 1. the smallest count that still reaches the target;
//! 2. otherwise the largest count seen.
//!
//! The first candidate evaluated wins among equal counts.

use std::num::NonZeroUsize;

use tracing::{debug, instrument, trace};

use crate::{
    graph::{GraphView, NodeId, SimilarityGraph, SubGraph},
    instrumentation,
};

/// Splits `graph` into components joined by edges of weight `>= threshold`.
///
/// Each component starts from the last still-unclaimed node and absorbs, via
/// a last-in-first-out frontier, every unclaimed node reachable along a
/// qualifying edge leaving a member. Edges are followed in their stored
/// direction. Members are listed in discovery order, and each component
/// keeps only the links it followed (see [`SubGraph`]).
///
/// An empty graph yields no components. At threshold `0.0` every stored edge
/// qualifies, including edges of weight `0.0`.
///
/// # Examples
/// ```
/// use setclust_core::{SimilarityGraph, connected_components};
///
/// let graph = SimilarityGraph::build(vec!['a', 'b', 'c'], &|_: &char, _: &char| 0.0)?;
/// assert_eq!(connected_components(&graph, 0.0).len(), 1);
/// assert_eq!(connected_components(&graph, 0.5).len(), 3);
/// # Ok::<(), setclust_core::SetclustError>(())
/// ```
#[must_use]
pub fn connected_components<T>(graph: &SimilarityGraph<T>, threshold: f64) -> Vec<SubGraph<'_, T>> {
    flood_fill(graph, threshold)
        .into_iter()
        .map(|flooded| flooded.into_subgraph(graph, threshold))
        .collect()
}

/// Members and followed links of one flooded component.
#[derive(Debug)]
struct Flooded {
    members: Vec<NodeId>,
    links: Vec<(NodeId, NodeId)>,
}

impl Flooded {
    fn into_subgraph<T>(self, graph: &SimilarityGraph<T>, threshold: f64) -> SubGraph<'_, T> {
        SubGraph::new(graph, self.members, self.links, threshold)
    }
}

fn flood_fill<G: GraphView + ?Sized>(graph: &G, threshold: f64) -> Vec<Flooded> {
    let mut unclaimed = graph.nodes().to_vec();
    let mut components = Vec::new();

    while let Some(start) = unclaimed.pop() {
        let mut flooded = Flooded {
            members: vec![start],
            links: Vec::new(),
        };
        let mut frontier = vec![start];

        while let Some(node) = frontier.pop() {
            for position in (0..unclaimed.len()).rev() {
                let Some(&candidate) = unclaimed.get(position) else {
                    continue;
                };
                let qualifies = graph
                    .weight(node, candidate)
                    .is_some_and(|weight| weight >= threshold);
                if qualifies {
                    unclaimed.remove(position);
                    frontier.push(candidate);
                    flooded.members.push(candidate);
                    flooded.links.push((node, candidate));
                }
            }
        }

        components.push(flooded);
    }

    components
}

/// Outcome of [`divide`].
#[derive(Debug, Clone)]
pub struct Division<'g, T> {
    threshold: f64,
    components: Vec<SubGraph<'g, T>>,
    evaluated: usize,
}

impl<'g, T> Division<'g, T> {
    /// Returns the threshold that produced the retained components.
    #[must_use]
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Returns the retained components.
    #[must_use]
    pub fn components(&self) -> &[SubGraph<'g, T>] {
        &self.components
    }

    /// Returns how many components were retained.
    #[must_use]
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Returns whether no components were retained (empty graph).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Returns how many thresholds were evaluated, bounds included.
    #[must_use]
    pub fn evaluated(&self) -> usize {
        self.evaluated
    }

    /// Consumes the division, yielding its components.
    #[must_use]
    pub fn into_components(self) -> Vec<SubGraph<'g, T>> {
        self.components
    }
}

/// Candidate ranking used while bisecting.
fn improves(candidate: usize, incumbent: Option<usize>, target: usize) -> bool {
    let Some(incumbent) = incumbent else {
        return true;
    };
    match (candidate >= target, incumbent >= target) {
        (true, true) => candidate < incumbent,
        (true, false) => true,
        (false, true) => false,
        (false, false) => candidate > incumbent,
    }
}

/// Searches for a threshold that cuts `graph` into exactly `target`
/// components.
///
/// The lower bound `0.0` and the upper bound `max_weight + 1.0` are evaluated
/// first, then up to `max_attempts` midpoints. The search stops early on an
/// exact hit or when the bounds meet. When no exact hit exists the retained
/// cut follows the fallback order described in the module docs; a count
/// different from `target` is an expected outcome, not an error.
///
/// # Examples
/// ```
/// use std::num::NonZeroUsize;
///
/// use setclust_core::{SimilarityGraph, divide};
///
/// let graph = SimilarityGraph::build(vec![1, 2, 3], &|_: &i32, _: &i32| 0.0)?;
/// let target = NonZeroUsize::new(3).expect("non-zero");
/// let depth = NonZeroUsize::new(10).expect("non-zero");
/// let division = divide(&graph, target, depth);
/// assert_eq!(division.len(), 3);
/// assert!(division.threshold() > 0.0);
/// # Ok::<(), setclust_core::SetclustError>(())
/// ```
#[instrument(
    name = "threshold.divide",
    skip_all,
    fields(nodes = graph.node_count(), requested = target.get(), max_attempts = max_attempts.get()),
)]
pub fn divide<T>(
    graph: &SimilarityGraph<T>,
    target: NonZeroUsize,
    max_attempts: NonZeroUsize,
) -> Division<'_, T> {
    let target = target.get();
    let mut lower = 0.0_f64;
    let mut upper = graph.max_weight() + 1.0;
    let mut best: Option<(f64, Vec<Flooded>)> = None;
    let mut evaluated = 0_usize;

    let bounds = [lower, upper];
    let midpoints = (0..max_attempts.get()).map(|_| None);
    for step in bounds.into_iter().map(Some).chain(midpoints) {
        let threshold = match step {
            Some(bound) => bound,
            None => {
                let midpoint = (lower + upper) / 2.0;
                if midpoint <= lower || midpoint >= upper {
                    break;
                }
                midpoint
            }
        };

        let components = flood_fill(graph, threshold);
        let count = components.len();
        evaluated += 1;
        trace!(threshold, count, "evaluated threshold");

        if improves(count, best.as_ref().map(|(_, kept)| kept.len()), target) {
            best = Some((threshold, components));
        }

        if count > target {
            upper = threshold;
        }
        if count < target {
            lower = threshold;
        }
        if count == target || lower == upper {
            break;
        }
    }

    instrumentation::record_divide_thresholds(evaluated);
    let (threshold, flooded) = best.unwrap_or_default();
    debug!(
        threshold,
        components = flooded.len(),
        evaluated,
        "threshold division complete"
    );

    Division {
        threshold,
        components: flooded
            .into_iter()
            .map(|component| component.into_subgraph(graph, threshold))
            .collect(),
        evaluated,
    }
}
