//! Builder utilities for configuring cluster engines.
//!
//! Exposes the search-depth configuration surface and the validation run
//! before any similarity is evaluated.

use std::num::NonZeroUsize;

use crate::{Result, engine::ClusterEngine, error::SetclustError, similarity::Similarity};

/// Number of bisection steps a query may spend searching for a threshold
/// when the caller does not override it.
pub const DEFAULT_SEARCH_DEPTH: usize = 1000;

/// Configures and constructs [`ClusterEngine`] instances.
///
/// # Examples
/// ```
/// use setclust_core::ClusterEngineBuilder;
///
/// let engine = ClusterEngineBuilder::new()
///     .with_search_depth(64)
///     .build(vec![1, 2, 3], |_: &i32, _: &i32| 0.0)
///     .expect("builder configuration is valid");
/// assert_eq!(engine.search_depth().get(), 64);
/// assert_eq!(engine.len(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct ClusterEngineBuilder {
    search_depth: usize,
}

impl Default for ClusterEngineBuilder {
    fn default() -> Self {
        Self {
            search_depth: DEFAULT_SEARCH_DEPTH,
        }
    }
}

impl ClusterEngineBuilder {
    /// Creates a builder populated with default parameters.
    ///
    /// # Examples
    /// ```
    /// use setclust_core::{ClusterEngineBuilder, DEFAULT_SEARCH_DEPTH};
    ///
    /// let builder = ClusterEngineBuilder::new();
    /// assert_eq!(builder.search_depth(), DEFAULT_SEARCH_DEPTH);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides how many bisection steps queries may take by default.
    ///
    /// # Examples
    /// ```
    /// use setclust_core::ClusterEngineBuilder;
    ///
    /// let builder = ClusterEngineBuilder::new().with_search_depth(25);
    /// assert_eq!(builder.search_depth(), 25);
    /// ```
    #[must_use]
    pub fn with_search_depth(mut self, depth: usize) -> Self {
        self.search_depth = depth;
        self
    }

    /// Returns the configured search depth.
    #[must_use]
    pub fn search_depth(&self) -> usize {
        self.search_depth
    }

    /// Validates the configuration, scores every ordered pair of items, and
    /// constructs a [`ClusterEngine`].
    ///
    /// # Errors
    /// Returns [`SetclustError::InvalidSearchDepth`] when the search depth is
    /// zero (before any similarity is evaluated), and
    /// [`SetclustError::InvalidSimilarity`] when the similarity yields a
    /// negative, NaN, or infinite value for any pair.
    ///
    /// # Examples
    /// ```
    /// use setclust_core::{ClusterEngineBuilder, SetclustError};
    ///
    /// let err = ClusterEngineBuilder::new()
    ///     .build(vec!["a", "b"], |_: &&str, _: &&str| -1.0)
    ///     .expect_err("negative similarity must be rejected");
    /// assert!(matches!(err, SetclustError::InvalidSimilarity { left: 0, right: 1, .. }));
    /// ```
    pub fn build<T, I, S>(self, items: I, similarity: S) -> Result<ClusterEngine<T>>
    where
        I: IntoIterator<Item = T>,
        S: Similarity<T>,
    {
        let search_depth =
            NonZeroUsize::new(self.search_depth).ok_or(SetclustError::InvalidSearchDepth {
                got: self.search_depth,
            })?;

        ClusterEngine::new_with_depth(items.into_iter().collect(), &similarity, search_depth)
    }
}
