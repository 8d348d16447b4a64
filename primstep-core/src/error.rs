//! Error types for the primstep core library.
//!
//! Graph validation failures and stepper failures are kept apart: the first
//! concerns the graph collaborator, the second the Prim state machine.

use std::{fmt, sync::Arc};

use thiserror::Error;

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
            #[must_use]
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
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// An error produced while assembling a [`crate::Graph`].
#[non_exhaustive]
#[derive(Clone, Debug, Error, PartialEq)]
pub enum GraphError {
    /// The node list named the same node twice.
    #[error("node `{node}` appears more than once in the node list")]
    DuplicateNode {
        /// The repeated node, rendered through `Display`.
        node: Arc<str>,
    },
    /// An edge referenced a node missing from the node list.
    #[error("edge {index} references unknown node `{node}`")]
    UnknownEndpoint {
        /// Position of the offending edge in the edge list.
        index: usize,
        /// The unknown endpoint.
        node: Arc<str>,
    },
    /// An edge carried a NaN or infinite weight.
    #[error("edge {index} has non-finite weight")]
    NonFiniteWeight {
        /// Position of the offending edge in the edge list.
        index: usize,
    },
    /// An edge carried a weight below zero.
    #[error("edge {index} has negative weight {weight}")]
    NegativeWeight {
        /// Position of the offending edge in the edge list.
        index: usize,
        /// The rejected weight.
        weight: f64,
    },
}

define_error_codes! {
    /// Stable codes describing [`GraphError`] variants.
    enum GraphErrorCode for GraphError {
        /// The node list named the same node twice.
        DuplicateNode => DuplicateNode { .. } => "GRAPH_DUPLICATE_NODE",
        /// An edge referenced a node missing from the node list.
        UnknownEndpoint => UnknownEndpoint { .. } => "GRAPH_UNKNOWN_ENDPOINT",
        /// An edge carried a NaN or infinite weight.
        NonFiniteWeight => NonFiniteWeight { .. } => "GRAPH_NON_FINITE_WEIGHT",
        /// An edge carried a weight below zero.
        NegativeWeight => NegativeWeight { .. } => "GRAPH_NEGATIVE_WEIGHT",
    }
}

/// Error type produced when constructing or advancing a [`crate::PrimStepper`].
#[non_exhaustive]
#[derive(Clone, Debug, Error, PartialEq)]
pub enum PrimError {
    /// Some edge has no reverse edge of identical weight.
    #[error(
        "Prim's algorithm requires an undirected graph: edge {index} ({start} -> {end}, {weight}) has no reverse edge"
    )]
    UndirectedGraphViolation {
        /// Position of the unpaired edge in the graph's edge list.
        index: usize,
        /// Start endpoint of the unpaired edge.
        start: Arc<str>,
        /// End endpoint of the unpaired edge.
        end: Arc<str>,
        /// Weight the reverse edge was required to carry.
        weight: f64,
    },
    /// The designated start node is not part of the graph.
    #[error("start node `{node}` is not in the graph")]
    UnknownStartNode {
        /// The rejected start node.
        node: Arc<str>,
    },
    /// The graph named the same node more than once.
    #[error("node `{node}` appears more than once in the graph")]
    DuplicateNode {
        /// The repeated node.
        node: Arc<str>,
    },
    /// `step` was called after the run had already ended.
    #[error("step called after the run ended ({steps} edges committed)")]
    AlreadyOver {
        /// Number of edges committed before the run ended.
        steps: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`PrimError`] variants.
    enum PrimErrorCode for PrimError {
        /// Some edge has no reverse edge of identical weight.
        UndirectedGraphViolation => UndirectedGraphViolation { .. } => "PRIM_UNDIRECTED_GRAPH_VIOLATION",
        /// The designated start node is not part of the graph.
        UnknownStartNode => UnknownStartNode { .. } => "PRIM_UNKNOWN_START_NODE",
        /// The graph named the same node more than once.
        DuplicateNode => DuplicateNode { .. } => "PRIM_DUPLICATE_NODE",
        /// `step` was called after the run had already ended.
        AlreadyOver => AlreadyOver { .. } => "PRIM_ALREADY_OVER",
    }
}

/// Renders a node label for inclusion in an error value.
pub(crate) fn render_node<N: fmt::Display>(node: &N) -> Arc<str> {
    Arc::from(node.to_string())
}
