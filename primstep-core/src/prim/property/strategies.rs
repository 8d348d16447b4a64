//! Graph generators for Prim property tests.
//!
//! Connected shapes start from a random spanning tree so every node is
//! reachable from the start node; extra edges are then sprinkled between
//! random pairs. The disconnected shape builds the same structure inside
//! each of several node groups.

use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::Graph;

use super::types::{GraphShape, PrimFixture};

const MIN_NODES: usize = 2;
const MAX_NODES: usize = 24;

/// Generates fixtures covering all graph shapes.
pub(super) fn prim_fixture_strategy() -> impl Strategy<Value = PrimFixture> {
    (any::<GraphShape>(), any::<u64>()).prop_map(|(shape, seed)| {
        let mut rng = SmallRng::seed_from_u64(seed);
        generate_fixture(shape, &mut rng)
    })
}

/// Generates a fixture for an explicitly chosen shape.
pub(super) fn generate_fixture(shape: GraphShape, rng: &mut SmallRng) -> PrimFixture {
    let node_count = rng.gen_range(MIN_NODES..=MAX_NODES);
    let pairs = match shape {
        GraphShape::Unique => connected_pairs(rng, 0..node_count, 0.3, unique_weight),
        GraphShape::ManyIdentical => connected_pairs(rng, 0..node_count, 0.4, tied_weight),
        GraphShape::Sparse => connected_pairs(rng, 0..node_count, 0.05, unique_weight),
        GraphShape::Dense => connected_pairs(rng, 0..node_count, 0.85, tied_weight),
        GraphShape::Disconnected => disconnected_pairs(rng, node_count),
    };
    let start = rng.gen_range(0..node_count);
    let graph = Graph::undirected(0..node_count, pairs.iter().copied())
        .unwrap_or_else(|err| panic!("generated graph must be valid: {err}"));
    PrimFixture {
        graph,
        start,
        pairs,
        shape,
    }
}

fn unique_weight(rng: &mut SmallRng) -> f64 {
    rng.gen_range(0.1..100.0)
}

fn tied_weight(rng: &mut SmallRng) -> f64 {
    f64::from(rng.gen_range(0_u8..=3))
}

/// Builds pairs that connect every node in `nodes`, plus extra pairs added
/// with probability `extra` each.
fn connected_pairs(
    rng: &mut SmallRng,
    nodes: std::ops::Range<usize>,
    extra: f64,
    mut weight: impl FnMut(&mut SmallRng) -> f64,
) -> Vec<(usize, usize, f64)> {
    let base = nodes.start;
    let mut pairs = Vec::new();
    for node in nodes.clone().skip(1) {
        let parent = rng.gen_range(base..node);
        // Randomise orientation so the reverse edge is sometimes listed first.
        let pair = if rng.gen_bool(0.5) {
            (parent, node, weight(rng))
        } else {
            (node, parent, weight(rng))
        };
        pairs.push(pair);
    }
    for a in nodes.clone() {
        for b in (a + 1)..nodes.end {
            if rng.gen_bool(extra) {
                pairs.push((a, b, weight(rng)));
            }
        }
    }
    pairs
}

fn disconnected_pairs(rng: &mut SmallRng, node_count: usize) -> Vec<(usize, usize, f64)> {
    let groups = rng.gen_range(2..=node_count.min(4));
    let bounds = group_bounds(rng, node_count, groups);
    bounds
        .windows(2)
        .flat_map(|window| match window {
            [start, end] => connected_pairs(rng, *start..*end, 0.3, unique_weight),
            _ => Vec::new(),
        })
        .collect()
}

/// Splits `0..node_count` into `groups` non-empty ranges, returned as the
/// list of boundaries including `0` and `node_count`.
fn group_bounds(rng: &mut SmallRng, node_count: usize, groups: usize) -> Vec<usize> {
    let mut cuts: Vec<usize> = (1..node_count).collect();
    let mut bounds = Vec::with_capacity(groups + 1);
    bounds.push(0);
    for _ in 1..groups {
        let pick = rng.gen_range(0..cuts.len());
        bounds.push(cuts.swap_remove(pick));
    }
    bounds.push(node_count);
    bounds.sort_unstable();
    bounds
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn group_bounds_yields_non_empty_groups() {
        let mut rng = SmallRng::seed_from_u64(7);
        for _ in 0..64 {
            let bounds = group_bounds(&mut rng, 10, 4);
            assert_eq!(bounds.len(), 5);
            assert!(bounds.windows(2).all(|window| window[0] < window[1]));
        }
    }

    #[test]
    fn connected_pairs_reach_every_node() {
        let mut rng = SmallRng::seed_from_u64(11);
        let pairs = connected_pairs(&mut rng, 3..9, 0.0, unique_weight);
        assert_eq!(pairs.len(), 5);
        for node in 4..9 {
            assert!(pairs.iter().any(|(a, b, _)| *a == node || *b == node));
        }
    }
}
