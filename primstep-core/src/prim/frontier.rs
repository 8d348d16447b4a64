//! Greedy frontier scan used to pick the next tree edge.

use std::{collections::HashMap, hash::Hash};

use crate::Edge;

/// Returns the position in `edges` of the cheapest edge leaving the tree and
/// entering `node`, keeping the first of equal minima.
///
/// Only weights strictly below `+inf` qualify, so NaN and infinite weights
/// from an unvalidated provider are never chosen.
pub(super) fn min_edge_into<N: Eq + Hash>(
    node: &N,
    edges: &[Edge<N>],
    in_tree: &HashMap<N, bool>,
) -> Option<(usize, f64)> {
    edges
        .iter()
        .enumerate()
        .filter(|(_, edge)| {
            edge.end() == node && in_tree.get(edge.start()).copied().unwrap_or(false)
        })
        .fold(None, |best, (index, edge)| keep_lighter(best, (index, edge.weight())))
}

/// Returns the position in `edges` of the cheapest frontier edge over all
/// `remaining` nodes, keeping the first of equal per-node minima.
pub(super) fn next_edge<N: Eq + Hash>(
    remaining: &[N],
    edges: &[Edge<N>],
    in_tree: &HashMap<N, bool>,
) -> Option<usize> {
    remaining
        .iter()
        .filter_map(|node| min_edge_into(node, edges, in_tree))
        .fold(None, keep_lighter)
        .map(|(index, _)| index)
}

// Numeric `<` keeps `-0.0` and `0.0` equal, so the earlier one stays.
fn keep_lighter(best: Option<(usize, f64)>, candidate: (usize, f64)) -> Option<(usize, f64)> {
    let bound = best.map_or(f64::INFINITY, |(_, weight)| weight);
    if candidate.1 < bound { Some(candidate) } else { best }
}
