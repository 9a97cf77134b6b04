//! Greedy growth of groups from seed nodes.
//!
//! Groups take turns in round-robin order. On its turn a group claims the
//! single unclaimed node joined to any of its members by the heaviest edge of
//! positive weight. Growth stops once every node is claimed or once a full
//! round of turns passes without a claim; the nodes left over are orphans.

use std::collections::HashSet;

use tracing::debug;

use crate::{
    error::GrowthError,
    graph::{GraphView, NodeId},
    instrumentation,
};

/// Outcome of [`grow_from_nuclei`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Growth {
    groups: Vec<Vec<NodeId>>,
    orphans: Vec<NodeId>,
}

impl Growth {
    /// Returns the grown groups, in seed order. Each starts with its seed.
    #[must_use]
    pub fn groups(&self) -> &[Vec<NodeId>] {
        &self.groups
    }

    /// Returns the nodes no group could reach, in node iteration order.
    #[must_use]
    pub fn orphans(&self) -> &[NodeId] {
        &self.orphans
    }

    /// Places every orphan into a group and returns the groups.
    ///
    /// Orphans are handled one at a time, each appended to the group that is
    /// smallest at that moment; ties go to the earlier group. When there are
    /// no groups the orphans cannot be placed and are returned as a single
    /// group so no node is lost.
    #[must_use]
    pub fn redistribute_orphans(self) -> Vec<Vec<NodeId>> {
        let Self {
            mut groups,
            orphans,
        } = self;
        if groups.is_empty() {
            return if orphans.is_empty() {
                groups
            } else {
                vec![orphans]
            };
        }
        for orphan in orphans {
            if let Some(smallest) = groups.iter_mut().min_by_key(|group| group.len()) {
                smallest.push(orphan);
            }
        }
        groups
    }
}

/// Grows one group per seed across every node of `graph`.
///
/// A node joins a group through an edge *from* one of the group's members;
/// edges of weight `0.0` and missing edges never count. When several
/// candidates share the heaviest weight, the first one met wins, scanning
/// members in join order and unclaimed nodes in node iteration order.
///
/// # Errors
/// Returns [`GrowthError::UnknownSeed`] when a seed is not a node of `graph`,
/// [`GrowthError::DuplicateSeed`] when a seed repeats, and
/// [`GrowthError::NoSeeds`] when `seeds` is empty but `graph` is not.
///
/// # Examples
/// ```
/// use setclust_core::{NodeId, SimilarityGraph, grow_from_nuclei};
///
/// // Items close in value are similar; 0 and 10 seed two groups.
/// let graph = SimilarityGraph::build(vec![0, 1, 10, 11], &|a: &i32, b: &i32| {
///     1.0 / f64::from((a - b).abs())
/// })?;
/// let growth = grow_from_nuclei(&graph, &[NodeId::new(0), NodeId::new(2)])?;
/// assert_eq!(
///     growth.groups(),
///     [
///         vec![NodeId::new(0), NodeId::new(1)],
///         vec![NodeId::new(2), NodeId::new(3)],
///     ]
/// );
/// assert!(growth.orphans().is_empty());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn grow_from_nuclei<G: GraphView + ?Sized>(
    graph: &G,
    seeds: &[NodeId],
) -> Result<Growth, GrowthError> {
    let nodes = graph.nodes();
    let known: HashSet<NodeId> = nodes.iter().copied().collect();
    let mut seen = HashSet::with_capacity(seeds.len());
    for &seed in seeds {
        if !known.contains(&seed) {
            return Err(GrowthError::UnknownSeed {
                node: seed,
                node_count: nodes.len(),
            });
        }
        if !seen.insert(seed) {
            return Err(GrowthError::DuplicateSeed { node: seed });
        }
    }
    if seeds.is_empty() && !nodes.is_empty() {
        return Err(GrowthError::NoSeeds { nodes: nodes.len() });
    }

    let mut groups: Vec<Vec<NodeId>> = seeds.iter().map(|&seed| vec![seed]).collect();
    let mut unclaimed: Vec<NodeId> = nodes
        .iter()
        .copied()
        .filter(|node| !seen.contains(node))
        .collect();

    let mut order = (0..groups.len()).cycle();
    let mut turns = 0_usize;
    let mut idle_turns = 0_usize;
    while !unclaimed.is_empty() && idle_turns < groups.len() {
        let Some(group) = order.next().and_then(|index| groups.get_mut(index)) else {
            break;
        };
        turns += 1;
        match strongest_link(graph, group, &unclaimed) {
            Some(position) => {
                group.push(unclaimed.remove(position));
                idle_turns = 0;
            }
            None => idle_turns += 1,
        }
    }

    instrumentation::record_orphans(unclaimed.len());
    debug!(
        groups = groups.len(),
        orphans = unclaimed.len(),
        turns,
        "nuclei growth halted"
    );

    Ok(Growth {
        groups,
        orphans: unclaimed,
    })
}

/// Returns the position in `unclaimed` of the node most strongly linked from
/// `members`.
fn strongest_link<G: GraphView + ?Sized>(
    graph: &G,
    members: &[NodeId],
    unclaimed: &[NodeId],
) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for &member in members {
        for (position, &candidate) in unclaimed.iter().enumerate() {
            let Some(weight) = graph.weight(member, candidate) else {
                continue;
            };
            if weight <= 0.0 {
                continue;
            }
            if best.is_none_or(|(_, strongest)| weight > strongest) {
                best = Some((position, weight));
            }
        }
    }
    best.map(|(position, _)| position)
}
