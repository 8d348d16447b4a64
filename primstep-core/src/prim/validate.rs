//! Reverse-edge validation performed before a stepper is created.

use std::{collections::HashSet, fmt, hash::Hash};

use crate::{Edge, PrimError, error::render_node, graph::weight_key};

/// Ensures every edge `(a, b, w)` has a matching `(b, a, w)`.
///
/// Lookups go through a set keyed on `(start, end, weight)`, so an edge
/// with the right endpoints but a different weight does not count.
pub(super) fn ensure_undirected<N>(edges: &[Edge<N>]) -> Result<(), PrimError>
where
    N: Eq + Hash + fmt::Display,
{
    let lookup: HashSet<(&N, &N, u64)> = edges
        .iter()
        .map(|edge| (edge.start(), edge.end(), weight_key(edge.weight())))
        .collect();

    let unpaired = edges.iter().enumerate().find(|(_, edge)| {
        !lookup.contains(&(edge.end(), edge.start(), weight_key(edge.weight())))
    });

    match unpaired {
        Some((index, edge)) => Err(PrimError::UndirectedGraphViolation {
            index,
            start: render_node(edge.start()),
            end: render_node(edge.end()),
            weight: edge.weight(),
        }),
        None => Ok(()),
    }
}
