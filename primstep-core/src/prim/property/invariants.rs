//! Property runners for the stepwise Prim implementation.

use proptest::{
    prop_assert, prop_assert_eq,
    test_runner::{TestCaseError, TestCaseResult},
};

use crate::{Edge, Phase, PrimStepper, StepOutcome, Stepper, WeightedGraph};

use super::oracle::{kruskal_component, weights_match};
use super::types::PrimFixture;

fn build(fixture: &PrimFixture) -> Result<PrimStepper<usize>, TestCaseError> {
    PrimStepper::new(&fixture.graph, fixture.start).map_err(|err| {
        TestCaseError::fail(format!(
            "construction failed: {err} (shape={:?}, nodes={}, pairs={})",
            fixture.shape,
            fixture.graph.node_count(),
            fixture.pairs.len(),
        ))
    })
}

/// The finished tree weighs the same as Kruskal's tree over the start
/// node's component and spans exactly that component.
pub(super) fn run_oracle_equivalence_property(fixture: &PrimFixture) -> TestCaseResult {
    let mut stepper = build(fixture)?;
    stepper
        .run_to_end()
        .map_err(|err| TestCaseError::fail(format!("run failed: {err}")))?;

    let oracle = kruskal_component(fixture.graph.node_count(), &fixture.pairs, fixture.start);
    if !weights_match(stepper.tree_weight(), oracle.total_weight) {
        return Err(TestCaseError::fail(format!(
            "tree weight mismatch: prim={}, oracle={} (shape={:?}, start={})",
            stepper.tree_weight(),
            oracle.total_weight,
            fixture.shape,
            fixture.start,
        )));
    }
    let expected_steps = oracle.component_size.saturating_sub(1);
    if stepper.steps_taken() != expected_steps {
        return Err(TestCaseError::fail(format!(
            "step count mismatch: prim={}, expected={expected_steps} (shape={:?})",
            stepper.steps_taken(),
            fixture.shape,
        )));
    }
    Ok(())
}

/// Every step grows the tree by one symmetric edge pair chosen greedily
/// across the cut, and membership mirrors the remaining-node list.
pub(super) fn run_step_invariants_property(fixture: &PrimFixture) -> TestCaseResult {
    let mut stepper = build(fixture)?;
    check_membership(&stepper, fixture)?;

    while !stepper.is_over() {
        let tree_before = stepper.tree().len();
        let nodes_before = stepper.remaining_nodes().len();
        let edges_before = stepper.remaining_edges().len();
        let lightest_crossing = lightest_crossing_weight(&stepper, fixture.graph.edges());

        let outcome = stepper
            .step()
            .map_err(|err| TestCaseError::fail(format!("step failed: {err}")))?;

        match outcome {
            StepOutcome::Added(edge) => {
                prop_assert_eq!(stepper.tree().len(), tree_before + 2);
                prop_assert_eq!(stepper.remaining_nodes().len(), nodes_before - 1);
                prop_assert_eq!(stepper.remaining_edges().len(), edges_before - 1);
                prop_assert_eq!(stepper.current(), edge.end());
                prop_assert!(stepper.is_in_tree(edge.start()));
                if let Some(lightest) = lightest_crossing {
                    prop_assert!(
                        edge.weight() <= lightest,
                        "chose {} while a crossing edge weighs {}",
                        edge.weight(),
                        lightest
                    );
                }
            }
            StepOutcome::Stuck => {
                prop_assert!(lightest_crossing.is_none());
                prop_assert!(!stepper.can_continue());
                prop_assert!(!stepper.remaining_nodes().is_empty());
            }
            StepOutcome::Idle => {
                return Err(TestCaseError::fail("idle outcome before the run ended"));
            }
        }
        check_membership(&stepper, fixture)?;
        check_symmetry(stepper.tree())?;
    }
    Ok(())
}

/// Connected graphs complete after `V - 1` steps; disconnected graphs get
/// stuck with nodes left over.
pub(super) fn run_termination_property(fixture: &PrimFixture) -> TestCaseResult {
    let mut stepper = build(fixture)?;
    stepper
        .run_to_end()
        .map_err(|err| TestCaseError::fail(format!("run failed: {err}")))?;

    let node_count = fixture.graph.node_count();
    if fixture.shape.is_connected() {
        prop_assert_eq!(stepper.phase(), Phase::Complete);
        prop_assert_eq!(stepper.steps_taken(), node_count - 1);
        prop_assert_eq!(stepper.tree().len(), 2 * (node_count - 1));
    } else {
        prop_assert_eq!(stepper.phase(), Phase::Stuck);
        prop_assert!(!stepper.remaining_nodes().is_empty());
    }
    prop_assert!(stepper.is_over());
    Ok(())
}

fn lightest_crossing_weight(stepper: &PrimStepper<usize>, edges: &[Edge<usize>]) -> Option<f64> {
    edges
        .iter()
        .filter(|edge| stepper.is_in_tree(edge.start()) && !stepper.is_in_tree(edge.end()))
        .map(Edge::weight)
        .min_by(f64::total_cmp)
}

fn check_membership(stepper: &PrimStepper<usize>, fixture: &PrimFixture) -> TestCaseResult {
    for node in fixture.graph.nodes() {
        let remaining = stepper.remaining_nodes().contains(node);
        prop_assert_eq!(
            stepper.is_in_tree(node),
            !remaining,
            "membership out of sync for node {}",
            node
        );
    }
    Ok(())
}

fn check_symmetry(tree: &[Edge<usize>]) -> TestCaseResult {
    for pair in tree.chunks(2) {
        match pair {
            [forward, reverse] => prop_assert_eq!(&forward.reversed(), reverse),
            _ => return Err(TestCaseError::fail("tree holds an unpaired edge")),
        }
    }
    Ok(())
}
