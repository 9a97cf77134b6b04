//! Type definitions for partitioning property tests.

use test_strategy::Arbitrary;

/// Shape of the similarity table produced for a fixture.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Arbitrary)]
pub(super) enum WeightDistribution {
    /// Independent symmetric weights drawn from a small integer range.
    #[weight(3)]
    Uniform,
    /// Blocks of mutually similar items with weak links between blocks.
    #[weight(3)]
    Clustered,
    /// Mostly zero similarities with a few positive links.
    #[weight(2)]
    Sparse,
    /// Every pair shares one weight, stressing tie-breaking.
    #[weight(1)]
    Identical,
    /// Each direction of a pair is drawn independently.
    #[weight(1)]
    Asymmetric,
}

impl WeightDistribution {
    /// Returns whether generated tables satisfy `w(a, b) == w(b, a)`.
    pub(super) fn is_symmetric(self) -> bool {
        !matches!(self, Self::Asymmetric)
    }
}

/// Fixture for partitioning property tests.
///
/// Weights are whole numbers so path sums are exact regardless of the order
/// in which they are added.
#[derive(Clone, Debug)]
pub(super) struct PartitionFixture {
    /// Row-major similarity table; `weights[a][b]` scores `a` against `b`.
    pub weights: Vec<Vec<f64>>,
    /// Number of groups requested from the engine.
    pub requested: usize,
    /// Weight distribution used during generation.
    pub distribution: WeightDistribution,
}

impl PartitionFixture {
    /// Returns the number of items described by the table.
    pub(super) fn item_count(&self) -> usize {
        self.weights.len()
    }
}
