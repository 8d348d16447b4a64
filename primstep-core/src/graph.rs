//! Graph collaborator types consumed by the stepper.
//!
//! A graph is an ordered node list plus an ordered list of directed, weighted
//! edges. Undirectedness is modelled by storing each edge alongside its
//! reverse; [`Graph::undirected`] produces that layout from unordered pairs.
//! Both orders are significant: every tie-break in the stepper follows them.

use std::{collections::HashSet, fmt, hash::Hash};

use crate::error::{GraphError, render_node};

/// A directed, weighted edge between two nodes.
///
/// # Examples
/// ```
/// use primstep_core::Edge;
///
/// let edge = Edge::new("A", "B", 2.5);
/// assert_eq!(edge.reversed(), Edge::new("B", "A", 2.5));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Edge<N> {
    start: N,
    end: N,
    weight: f64,
}

impl<N> Edge<N> {
    /// Creates an edge from `start` to `end` carrying `weight`.
    #[must_use]
    pub const fn new(start: N, end: N, weight: f64) -> Self {
        Self { start, end, weight }
    }

    /// Returns the node the edge leaves.
    #[must_use]
    #[rustfmt::skip]
    pub const fn start(&self) -> &N { &self.start }

    /// Returns the node the edge enters.
    #[must_use]
    #[rustfmt::skip]
    pub const fn end(&self) -> &N { &self.end }

    /// Returns the edge weight.
    #[must_use]
    #[rustfmt::skip]
    pub const fn weight(&self) -> f64 { self.weight }
}

impl<N: Clone> Edge<N> {
    /// Returns the edge with its endpoints swapped and the same weight.
    #[must_use]
    pub fn reversed(&self) -> Self {
        Self::new(self.end.clone(), self.start.clone(), self.weight)
    }
}

impl<N: fmt::Display> fmt::Display for Edge<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {} ({})", self.start, self.end, self.weight)
    }
}

/// Maps a weight to a hashable key so that exact weight matches can be
/// looked up. Both zeroes share a key.
pub(crate) fn weight_key(weight: f64) -> u64 {
    if weight == 0.0 { 0 } else { weight.to_bits() }
}

/// Read-only view over a weighted graph.
///
/// # Examples
/// ```
/// use primstep_core::{Edge, WeightedGraph};
///
/// struct Pair {
///     nodes: [u8; 2],
///     edges: [Edge<u8>; 2],
/// }
///
/// impl WeightedGraph for Pair {
///     type Node = u8;
///     fn nodes(&self) -> &[u8] { &self.nodes }
///     fn edges(&self) -> &[Edge<u8>] { &self.edges }
/// }
///
/// let pair = Pair {
///     nodes: [0, 1],
///     edges: [Edge::new(0, 1, 1.0), Edge::new(1, 0, 1.0)],
/// };
/// assert_eq!(pair.node_count(), 2);
/// assert_eq!(pair.edges().len(), 2);
/// ```
pub trait WeightedGraph {
    /// Node identity type.
    type Node;

    /// Returns the nodes in their iteration order.
    fn nodes(&self) -> &[Self::Node];

    /// Returns the directed edges in their iteration order.
    fn edges(&self) -> &[Edge<Self::Node>];

    /// Returns the number of nodes.
    #[must_use]
    fn node_count(&self) -> usize {
        self.nodes().len()
    }
}

/// An in-memory, validated [`WeightedGraph`].
///
/// # Examples
/// ```
/// use primstep_core::{Graph, WeightedGraph};
///
/// let graph = Graph::undirected(["A", "B", "C"], [("A", "B", 1.0), ("B", "C", 2.0)])
///     .expect("graph is valid");
/// assert_eq!(graph.nodes(), &["A", "B", "C"]);
/// assert_eq!(graph.edges().len(), 4);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Graph<N> {
    nodes: Vec<N>,
    edges: Vec<Edge<N>>,
}

impl<N> Graph<N>
where
    N: Clone + Eq + Hash + fmt::Display,
{
    /// Builds a graph from explicit node and edge lists.
    ///
    /// Edges are kept exactly as given; no reverse edges are added.
    ///
    /// # Errors
    /// Returns [`GraphError`] when a node is listed twice, an edge names a
    /// node outside the node list, or a weight is negative or non-finite.
    pub fn new(
        nodes: impl IntoIterator<Item = N>,
        edges: impl IntoIterator<Item = Edge<N>>,
    ) -> Result<Self, GraphError> {
        let nodes: Vec<N> = nodes.into_iter().collect();
        let mut known = HashSet::with_capacity(nodes.len());
        for node in &nodes {
            if !known.insert(node) {
                return Err(GraphError::DuplicateNode {
                    node: render_node(node),
                });
            }
        }

        let edges: Vec<Edge<N>> = edges.into_iter().collect();
        for (index, edge) in edges.iter().enumerate() {
            for endpoint in [edge.start(), edge.end()] {
                if !known.contains(endpoint) {
                    return Err(GraphError::UnknownEndpoint {
                        index,
                        node: render_node(endpoint),
                    });
                }
            }
            let weight = edge.weight();
            if !weight.is_finite() {
                return Err(GraphError::NonFiniteWeight { index });
            }
            if weight < 0.0 {
                return Err(GraphError::NegativeWeight { index, weight });
            }
        }

        Ok(Self { nodes, edges })
    }

    /// Builds a graph from unordered `(a, b, weight)` pairs.
    ///
    /// Each pair contributes `a -> b` immediately followed by `b -> a`.
    ///
    /// # Errors
    /// Returns [`GraphError`] under the same conditions as [`Graph::new`].
    pub fn undirected(
        nodes: impl IntoIterator<Item = N>,
        pairs: impl IntoIterator<Item = (N, N, f64)>,
    ) -> Result<Self, GraphError> {
        let edges = pairs.into_iter().flat_map(|(a, b, weight)| {
            let forward = Edge::new(a, b, weight);
            let reverse = forward.reversed();
            [forward, reverse]
        });
        Self::new(nodes, edges)
    }
}

impl<N> WeightedGraph for Graph<N> {
    type Node = N;

    fn nodes(&self) -> &[N] {
        &self.nodes
    }

    fn edges(&self) -> &[Edge<N>] {
        &self.edges
    }
}
