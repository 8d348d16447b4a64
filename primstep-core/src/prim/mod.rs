//! Single-step Prim minimum spanning tree construction.
//!
//! The stepper partitions the graph into tree and remaining sets and commits
//! one frontier edge per [`PrimStepper::step`] call, so callers can observe
//! every intermediate tree. Each step rescans the remaining edges rather
//! than maintaining a priority queue, which costs O(V·E) per step.
//!
//! Ties are broken by input order: among edges into the same node the first
//! minimum in edge-list order wins, and among nodes the first minimum in
//! remaining-node order wins. Remaining nodes keep the graph's node order.

mod frontier;
mod validate;

use std::{collections::HashMap, fmt, hash::Hash};

use tracing::{debug, info, instrument};

use crate::{
    Edge, ExhaustedPolicy, PrimError, PrimStepperBuilder, Stepper, WeightedGraph,
    error::render_node,
};

/// What a single [`PrimStepper::step`] call did.
#[derive(Clone, Debug, PartialEq)]
pub enum StepOutcome<N> {
    /// The edge was committed to the tree; its end node joined the tree.
    Added(Edge<N>),
    /// No frontier edge exists; the run is over with nodes unreached.
    Stuck,
    /// The run had already ended and [`ExhaustedPolicy::Ignore`] is active.
    Idle,
}

/// Coarse position in the stepper's lifecycle.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Phase {
    /// Constructed, nothing committed yet, more steps possible.
    Initialized,
    /// At least one edge committed and more steps possible.
    Running,
    /// Every node joined the tree.
    Complete,
    /// The run ended with some nodes unreachable from the tree.
    Stuck,
}

/// Stepwise Prim's algorithm over an undirected weighted graph.
///
/// The designated end node other stepwise algorithms accept has no meaning
/// here; the stepper only grows a spanning tree from its start node.
///
/// # Examples
/// ```
/// use primstep_core::{Edge, Graph, Phase, PrimStepper, StepOutcome};
///
/// let graph = Graph::undirected(
///     ["A", "B", "C"],
///     [("A", "B", 1.0), ("B", "C", 2.0), ("A", "C", 3.0)],
/// )
/// .expect("graph is valid");
/// let mut stepper = PrimStepper::new(&graph, "A").expect("graph is undirected");
///
/// assert_eq!(stepper.step()?, StepOutcome::Added(Edge::new("A", "B", 1.0)));
/// assert_eq!(stepper.step()?, StepOutcome::Added(Edge::new("B", "C", 2.0)));
/// assert!(stepper.is_over());
/// assert_eq!(stepper.phase(), Phase::Complete);
/// assert_eq!(stepper.tree_weight(), 3.0);
/// # Ok::<(), primstep_core::PrimError>(())
/// ```
#[derive(Clone, Debug)]
pub struct PrimStepper<N> {
    start: N,
    current: N,
    tree: Vec<Edge<N>>,
    remaining_nodes: Vec<N>,
    remaining_edges: Vec<Edge<N>>,
    in_tree: HashMap<N, bool>,
    can_continue: bool,
    steps: usize,
    exhausted_policy: ExhaustedPolicy,
}

impl<N> PrimStepper<N>
where
    N: Clone + Eq + Hash + fmt::Display,
{
    /// Constructs a stepper with the default [`PrimStepperBuilder`].
    ///
    /// # Errors
    /// See [`PrimStepperBuilder::build`].
    pub fn new<G>(graph: &G, start: N) -> Result<Self, PrimError>
    where
        G: WeightedGraph<Node = N> + ?Sized,
    {
        PrimStepperBuilder::new().build(graph, start)
    }

    #[instrument(
        name = "prim.assemble",
        err,
        skip_all,
        fields(
            nodes = graph.node_count(),
            edges = graph.edges().len(),
            start = %start,
        ),
    )]
    pub(crate) fn assemble<G>(
        graph: &G,
        start: N,
        exhausted_policy: ExhaustedPolicy,
    ) -> Result<Self, PrimError>
    where
        G: WeightedGraph<Node = N> + ?Sized,
    {
        if !graph.nodes().contains(&start) {
            return Err(PrimError::UnknownStartNode {
                node: render_node(&start),
            });
        }
        validate::ensure_undirected(graph.edges())?;

        let mut in_tree = HashMap::with_capacity(graph.node_count());
        let mut remaining_nodes = Vec::with_capacity(graph.node_count().saturating_sub(1));
        for node in graph.nodes() {
            let is_start = *node == start;
            if in_tree.insert(node.clone(), is_start).is_some() {
                return Err(PrimError::DuplicateNode {
                    node: render_node(node),
                });
            }
            if !is_start {
                remaining_nodes.push(node.clone());
            }
        }

        Ok(Self {
            current: start.clone(),
            start,
            tree: Vec::with_capacity(remaining_nodes.len().saturating_mul(2)),
            remaining_nodes,
            remaining_edges: graph.edges().to_vec(),
            in_tree,
            can_continue: true,
            steps: 0,
            exhausted_policy,
        })
    }

    /// Returns `true` once no node remains, no edge remains, or the last
    /// step found no frontier edge.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.remaining_nodes.is_empty() || self.remaining_edges.is_empty() || !self.can_continue
    }

    /// Commits the cheapest frontier edge, or records that none exists.
    ///
    /// On success the chosen edge and its reverse are appended to the tree,
    /// the chosen edge leaves the remaining edges, and its end node becomes
    /// the current node.
    ///
    /// # Errors
    /// Returns [`PrimError::AlreadyOver`] when called after [`Self::is_over`]
    /// reports `true` under [`ExhaustedPolicy::Reject`].
    pub fn step(&mut self) -> Result<StepOutcome<N>, PrimError> {
        if self.is_over() {
            return match self.exhausted_policy {
                ExhaustedPolicy::Reject => Err(PrimError::AlreadyOver { steps: self.steps }),
                ExhaustedPolicy::Ignore => Ok(StepOutcome::Idle),
            };
        }

        let Some(index) =
            frontier::next_edge(&self.remaining_nodes, &self.remaining_edges, &self.in_tree)
        else {
            self.can_continue = false;
            record_stuck();
            info!(
                steps = self.steps,
                unreached = self.remaining_nodes.len(),
                "no frontier edge left; remaining nodes are unreachable"
            );
            return Ok(StepOutcome::Stuck);
        };

        let chosen = self.remaining_edges.remove(index);
        self.tree.push(chosen.clone());
        self.tree.push(chosen.reversed());

        let joined = chosen.end().clone();
        if let Some(position) = self.remaining_nodes.iter().position(|node| *node == joined) {
            self.remaining_nodes.remove(position);
        }
        self.in_tree.insert(joined.clone(), true);
        self.current = joined;
        self.steps = self.steps.saturating_add(1);
        record_step();

        debug!(step = self.steps, edge = %chosen, "committed frontier edge");
        if self.remaining_nodes.is_empty() {
            info!(
                steps = self.steps,
                weight = self.tree_weight(),
                "spanning tree complete"
            );
        }
        Ok(StepOutcome::Added(chosen))
    }

    /// Returns whether `node` has joined the tree.
    ///
    /// Nodes outside the graph report `false`.
    #[must_use]
    pub fn is_in_tree(&self, node: &N) -> bool {
        self.in_tree.get(node).copied().unwrap_or(false)
    }

    /// Reports the lifecycle phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        if self.remaining_nodes.is_empty() {
            Phase::Complete
        } else if self.is_over() {
            Phase::Stuck
        } else if self.steps == 0 {
            Phase::Initialized
        } else {
            Phase::Running
        }
    }
}

impl<N> PrimStepper<N> {
    /// Committed edges in commit order, each followed by its reverse.
    #[must_use]
    #[rustfmt::skip]
    pub fn tree(&self) -> &[Edge<N>] { &self.tree }

    /// Nodes not yet in the tree, in graph order.
    #[must_use]
    #[rustfmt::skip]
    pub fn remaining_nodes(&self) -> &[N] { &self.remaining_nodes }

    /// Edges not yet committed, in graph order.
    #[must_use]
    #[rustfmt::skip]
    pub fn remaining_edges(&self) -> &[Edge<N>] { &self.remaining_edges }

    /// The most recently added tree node; the start node before any step.
    #[must_use]
    #[rustfmt::skip]
    pub const fn current(&self) -> &N { &self.current }

    /// The root the tree grows from.
    #[must_use]
    #[rustfmt::skip]
    pub const fn start(&self) -> &N { &self.start }

    /// `false` once a step found no frontier edge.
    #[must_use]
    #[rustfmt::skip]
    pub const fn can_continue(&self) -> bool { self.can_continue }

    /// Number of edges committed so far.
    #[must_use]
    #[rustfmt::skip]
    pub const fn steps_taken(&self) -> usize { self.steps }

    /// Policy applied to steps requested after the run ended.
    #[must_use]
    #[rustfmt::skip]
    pub const fn exhausted_policy(&self) -> ExhaustedPolicy { self.exhausted_policy }

    /// Total weight of the committed tree, counting each undirected edge once.
    #[must_use]
    pub fn tree_weight(&self) -> f64 {
        self.tree.iter().step_by(2).map(Edge::weight).sum()
    }
}

impl<N> Stepper for PrimStepper<N>
where
    N: Clone + Eq + Hash + fmt::Display,
{
    type Step = StepOutcome<N>;
    type Error = PrimError;

    fn is_over(&self) -> bool {
        Self::is_over(self)
    }

    fn step(&mut self) -> Result<StepOutcome<N>, PrimError> {
        Self::step(self)
    }
}

#[cfg(feature = "metrics")]
fn record_step() {
    metrics::counter!("prim_steps_total").increment(1);
}

#[cfg(not(feature = "metrics"))]
const fn record_step() {}

#[cfg(feature = "metrics")]
fn record_stuck() {
    metrics::counter!("prim_stuck_total").increment(1);
}

#[cfg(not(feature = "metrics"))]
const fn record_stuck() {}
