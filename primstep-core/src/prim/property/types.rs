//! Fixture types for Prim property tests.

use test_strategy::Arbitrary;

use crate::Graph;

/// Shape of a generated graph.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Arbitrary)]
pub(super) enum GraphShape {
    /// Connected graph with distinct continuous weights.
    #[weight(3)]
    Unique,
    /// Connected graph with weights drawn from a tiny set, stressing ties.
    #[weight(3)]
    ManyIdentical,
    /// Connected graph close to a tree.
    #[weight(2)]
    Sparse,
    /// Connected graph close to complete.
    #[weight(1)]
    Dense,
    /// Several components with no edges between them.
    #[weight(2)]
    Disconnected,
}

impl GraphShape {
    /// Returns `true` when every generated node is reachable from the start.
    pub(super) const fn is_connected(self) -> bool {
        !matches!(self, Self::Disconnected)
    }
}

/// Generated graph plus the context needed to diagnose failures.
#[derive(Clone, Debug)]
pub(super) struct PrimFixture {
    /// Graph with nodes `0..node_count` and paired edges.
    pub graph: Graph<usize>,
    /// Start node handed to the stepper.
    pub start: usize,
    /// Unordered `(a, b, weight)` pairs the graph was built from.
    pub pairs: Vec<(usize, usize, f64)>,
    /// Shape used during generation.
    pub shape: GraphShape,
}
