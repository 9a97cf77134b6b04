//! Error types for the setclust core library.
//!
//! Defines error enums exposed by the public API and a convenient result alias.

use std::fmt;

use thiserror::Error;

use crate::graph::NodeId;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// An error produced when growing groups from seed nodes.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum GrowthError {
    /// No seeds were supplied for a graph that has nodes to distribute.
    #[error("cannot grow groups over {nodes} nodes without at least one seed")]
    NoSeeds {
        /// Number of nodes in the graph that would have no group to join.
        nodes: usize,
    },
    /// A seed referenced a node outside the graph.
    #[error("seed {node} is not a node of this graph ({node_count} nodes)")]
    UnknownSeed {
        /// The seed that could not be resolved.
        node: NodeId,
        /// Number of nodes in the graph.
        node_count: usize,
    },
    /// The same node was supplied as a seed more than once.
    #[error("seed {node} was supplied more than once")]
    DuplicateSeed {
        /// The repeated seed.
        node: NodeId,
    },
}

define_error_codes! {
    /// Stable codes describing [`GrowthError`] variants.
    enum GrowthErrorCode for GrowthError {
        /// No seeds were supplied for a non-empty graph.
        NoSeeds => NoSeeds { .. } => "GROWTH_NO_SEEDS",
        /// A seed referenced a node outside the graph.
        UnknownSeed => UnknownSeed { .. } => "GROWTH_UNKNOWN_SEED",
        /// The same node was supplied as a seed more than once.
        DuplicateSeed => DuplicateSeed { .. } => "GROWTH_DUPLICATE_SEED",
    }
}

/// Error type produced when constructing or querying [`crate::ClusterEngine`].
#[non_exhaustive]
#[derive(Clone, Debug, Error, PartialEq)]
pub enum SetclustError {
    /// The similarity callback returned NaN, an infinite value, or a negative
    /// value.
    #[error(
        "similarity of item {left} to item {right} must be a finite number in [0, +inf) (got {value})"
    )]
    InvalidSimilarity {
        /// Position of the left-hand item in the input collection.
        left: usize,
        /// Position of the right-hand item in the input collection.
        right: usize,
        /// The value returned by the callback.
        value: f64,
    },
    /// Requested group count must be greater than zero.
    #[error("group count must be at least 1 (got {got})")]
    InvalidGroupCount {
        /// The invalid group count supplied by the caller.
        got: usize,
    },
    /// Search depth must be greater than zero.
    #[error("search depth must be at least 1 (got {got})")]
    InvalidSearchDepth {
        /// The invalid search depth supplied by the caller.
        got: usize,
    },
    /// A similarity threshold was negative or not finite.
    #[error("similarity threshold must be a finite number in [0, +inf) (got {value})")]
    InvalidThreshold {
        /// The rejected threshold.
        value: f64,
    },
    /// Growing groups from seed nodes failed.
    #[error("group growth failed: {0}")]
    Growth(#[from] GrowthError),
}

define_error_codes! {
    /// Stable codes describing [`SetclustError`] variants.
    enum SetclustErrorCode for SetclustError {
        /// The similarity callback returned an invalid value.
        InvalidSimilarity => InvalidSimilarity { .. } => "SETCLUST_INVALID_SIMILARITY",
        /// Requested group count must be greater than zero.
        InvalidGroupCount => InvalidGroupCount { .. } => "SETCLUST_INVALID_GROUP_COUNT",
        /// Search depth must be greater than zero.
        InvalidSearchDepth => InvalidSearchDepth { .. } => "SETCLUST_INVALID_SEARCH_DEPTH",
        /// A similarity threshold was negative or not finite.
        InvalidThreshold => InvalidThreshold { .. } => "SETCLUST_INVALID_THRESHOLD",
        /// Growing groups from seed nodes failed.
        GrowthFailure => Growth { .. } => "SETCLUST_GROWTH_FAILURE",
    }
}

impl SetclustError {
    /// Retrieve the inner [`GrowthErrorCode`] when the error originated in the
    /// nuclei grower.
    pub const fn growth_code(&self) -> Option<GrowthErrorCode> {
        match self {
            Self::Growth(error) => Some(error.code()),
            _ => None,
        }
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, SetclustError>;
