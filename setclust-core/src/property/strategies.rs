//! Strategy builders for partitioning property tests.
//!
//! Each generator fills a square similarity table from a seeded
//! [`SmallRng`], so failing cases shrink to a `(distribution, seed)` pair.

use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use super::types::{PartitionFixture, WeightDistribution};

/// Minimum number of items in a generated table.
const MIN_ITEMS: usize = 1;
/// Maximum number of items in a generated table.
const MAX_ITEMS: usize = 14;
/// Largest whole-number weight a generator emits.
const MAX_WEIGHT: u32 = 9;

/// Generates fixtures covering every weight distribution.
pub(super) fn partition_fixture_strategy() -> impl Strategy<Value = PartitionFixture> {
    (any::<WeightDistribution>(), any::<u64>()).prop_map(|(distribution, seed)| {
        let mut rng = SmallRng::seed_from_u64(seed);
        generate_fixture(distribution, &mut rng)
    })
}

/// Generates a fixture for a specific weight distribution.
pub(super) fn generate_fixture(
    distribution: WeightDistribution,
    rng: &mut SmallRng,
) -> PartitionFixture {
    let items = rng.gen_range(MIN_ITEMS..=MAX_ITEMS);
    let weights = match distribution {
        WeightDistribution::Uniform => symmetric_table(items, |_, _| whole(rng, 0, MAX_WEIGHT)),
        WeightDistribution::Clustered => clustered_table(items, rng),
        WeightDistribution::Sparse => symmetric_table(items, |_, _| {
            if rng.gen_bool(0.2) {
                whole(rng, 1, MAX_WEIGHT)
            } else {
                0.0
            }
        }),
        WeightDistribution::Identical => {
            let shared = whole(rng, 0, MAX_WEIGHT);
            symmetric_table(items, |_, _| shared)
        }
        WeightDistribution::Asymmetric => (0..items)
            .map(|row| {
                (0..items)
                    .map(|column| {
                        if row == column {
                            0.0
                        } else {
                            whole(rng, 0, MAX_WEIGHT)
                        }
                    })
                    .collect()
            })
            .collect(),
    };
    let requested = rng.gen_range(1..=items + 2);
    PartitionFixture {
        weights,
        requested,
        distribution,
    }
}

fn whole(rng: &mut SmallRng, low: u32, high: u32) -> f64 {
    f64::from(rng.gen_range(low..=high))
}

/// Fills the upper triangle with `weight(row, column)` and mirrors it.
fn symmetric_table(items: usize, mut weight: impl FnMut(usize, usize) -> f64) -> Vec<Vec<f64>> {
    let mut table = vec![vec![0.0; items]; items];
    for row in 0..items {
        for column in (row + 1)..items {
            let value = weight(row, column);
            table[row][column] = value;
            table[column][row] = value;
        }
    }
    table
}

/// Assigns items to a few blocks; pairs inside a block score high, pairs
/// across blocks score low.
fn clustered_table(items: usize, rng: &mut SmallRng) -> Vec<Vec<f64>> {
    let blocks = rng.gen_range(1..=items.min(4));
    let block_of: Vec<usize> = (0..items).map(|_| rng.gen_range(0..blocks)).collect();
    symmetric_table(items, |row, column| {
        if block_of[row] == block_of[column] {
            whole(rng, 6, MAX_WEIGHT)
        } else {
            whole(rng, 0, 2)
        }
    })
}
