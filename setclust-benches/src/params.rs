//! Benchmark parameter types.

use std::fmt;

/// Parameters for a query benchmark run.
#[derive(Clone, Debug)]
pub struct QueryBenchParams {
    /// Number of words in the corpus.
    pub item_count: usize,
    /// Number of groups requested from the engine.
    pub groups: usize,
}

impl fmt::Display for QueryBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={},k={}", self.item_count, self.groups)
    }
}

/// Parameters for an engine construction benchmark run.
#[derive(Clone, Debug)]
pub struct BuildBenchParams {
    /// Number of words in the corpus.
    pub item_count: usize,
}

impl fmt::Display for BuildBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={}", self.item_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_are_compact() {
        let query = QueryBenchParams {
            item_count: 120,
            groups: 4,
        };
        let build = BuildBenchParams { item_count: 60 };

        assert_eq!(query.to_string(), "n=120,k=4");
        assert_eq!(build.to_string(), "n=60");
    }
}
