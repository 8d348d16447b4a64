//! Command implementations and argument parsing for the primstep CLI.

use std::collections::HashSet;
use std::io::{self, Write};
use std::num::ParseFloatError;
use std::str::FromStr;

use clap::{Args, Parser, Subcommand};
use primstep_core::{
    Edge, Graph, GraphError, Phase, PrimError, PrimStepper, StepOutcome, WeightedGraph,
};
use thiserror::Error;
use tracing::{Span, field, info, instrument};

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "primstep",
    about = "Grow a minimum spanning tree with Prim's algorithm, one edge per step."
)]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Step through Prim's algorithm and print every decision.
    Run(RunCommand),
}

/// Options accepted by the `run` command.
#[derive(Debug, Args, Clone)]
pub struct RunCommand {
    /// Weighted edge formatted as `START:END:WEIGHT`; repeat for more edges.
    #[arg(long = "edge", value_name = "START:END:WEIGHT", required = true)]
    pub edges: Vec<EdgeArg>,

    /// Extra node with no edges; repeat for more nodes.
    #[arg(long = "node", value_name = "NODE")]
    pub nodes: Vec<String>,

    /// Node the tree grows from.
    #[arg(long)]
    pub start: String,

    /// Use the edges exactly as given instead of adding each reverse edge.
    #[arg(long)]
    pub directed: bool,

    /// Stop after this many steps, even if the run could continue.
    #[arg(long = "max-steps", value_parser = clap::value_parser!(usize))]
    pub max_steps: Option<usize>,
}

/// An edge parsed from the command line.
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeArg {
    /// Node the edge leaves.
    pub start: String,
    /// Node the edge enters.
    pub end: String,
    /// Edge weight.
    pub weight: f64,
}

/// Errors raised while parsing an `--edge` value.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum EdgeArgError {
    /// The value did not contain three `:`-separated fields.
    #[error("edge `{raw}` must look like START:END:WEIGHT")]
    MissingField {
        /// The rejected value.
        raw: String,
    },
    /// One of the node labels was empty.
    #[error("edge `{raw}` has an empty node label")]
    EmptyLabel {
        /// The rejected value.
        raw: String,
    },
    /// The weight did not parse as a number.
    #[error("edge `{raw}` has an invalid weight: {source}")]
    InvalidWeight {
        /// The rejected value.
        raw: String,
        /// Underlying parse failure.
        #[source]
        source: ParseFloatError,
    },
}

impl FromStr for EdgeArg {
    type Err = EdgeArgError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let missing = || EdgeArgError::MissingField {
            raw: raw.to_owned(),
        };
        let (endpoints, weight) = raw.rsplit_once(':').ok_or_else(missing)?;
        let (start, end) = endpoints.split_once(':').ok_or_else(missing)?;
        let (start, end) = (start.trim(), end.trim());
        if start.is_empty() || end.is_empty() {
            return Err(EdgeArgError::EmptyLabel {
                raw: raw.to_owned(),
            });
        }
        let weight = weight
            .trim()
            .parse::<f64>()
            .map_err(|source| EdgeArgError::InvalidWeight {
                raw: raw.to_owned(),
                source,
            })?;
        Ok(Self {
            start: start.to_owned(),
            end: end.to_owned(),
            weight,
        })
    }
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// The edges and nodes did not form a valid graph.
    #[error(transparent)]
    Graph(#[from] GraphError),
    /// The stepper rejected the graph or a step.
    #[error(transparent)]
    Prim(#[from] PrimError),
}

impl CliError {
    /// Returns the stable code of the underlying core error.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Graph(error) => error.code().as_str(),
            Self::Prim(error) => error.code().as_str(),
        }
    }
}

/// Summarises the outcome of executing a CLI command.
#[derive(Debug, Clone)]
pub struct ExecutionSummary {
    /// Node the tree grew from.
    pub start: String,
    /// Outcome of every step taken, in order.
    pub steps: Vec<StepOutcome<String>>,
    /// Phase the stepper ended in.
    pub phase: Phase,
    /// Most recently added tree node.
    pub current: String,
    /// Total weight of the committed tree.
    pub tree_weight: f64,
    /// Nodes that never joined the tree, in graph order.
    pub unreached: Vec<String>,
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when the graph is invalid or the stepper rejects it.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use primstep_cli::cli::{Cli, Command, RunCommand, run_cli};
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let cli = Cli {
///     command: Command::Run(RunCommand {
///         edges: vec!["A:B:1".parse()?, "B:C:2".parse()?],
///         nodes: Vec::new(),
///         start: "A".into(),
///         directed: false,
///         max_steps: None,
///     }),
/// };
/// let summary = run_cli(cli)?;
/// assert_eq!(summary.steps.len(), 2);
/// assert_eq!(summary.tree_weight, 3.0);
/// # Ok(())
/// # }
/// ```
#[instrument(
    name = "cli.run",
    err,
    skip(cli),
    fields(command = field::Empty),
)]
pub fn run_cli(cli: Cli) -> Result<ExecutionSummary, CliError> {
    match cli.command {
        Command::Run(run) => {
            Span::current().record("command", field::display("run"));
            run_command(run)
        }
    }
}

#[instrument(
    name = "cli.execute",
    err,
    skip(command),
    fields(edges = command.edges.len(), start = %command.start, directed = command.directed),
)]
pub(super) fn run_command(command: RunCommand) -> Result<ExecutionSummary, CliError> {
    let graph = build_graph(&command)?;
    let mut stepper = PrimStepper::new(&graph, command.start.clone())?;

    let limit = command.max_steps.unwrap_or(usize::MAX);
    let mut steps = Vec::new();
    while !stepper.is_over() && steps.len() < limit {
        steps.push(stepper.step()?);
    }

    let summary = ExecutionSummary {
        start: command.start,
        steps,
        phase: stepper.phase(),
        current: stepper.current().clone(),
        tree_weight: stepper.tree_weight(),
        unreached: stepper.remaining_nodes().to_vec(),
    };
    info!(
        steps = summary.steps.len(),
        phase = phase_label(summary.phase),
        unreached = summary.unreached.len(),
        "command completed"
    );
    Ok(summary)
}

/// Collects nodes in first-seen order: `--node` values, then edge endpoints.
pub(super) fn collect_nodes(command: &RunCommand) -> Vec<String> {
    let mut seen = HashSet::new();
    let endpoints = command
        .edges
        .iter()
        .flat_map(|edge| [&edge.start, &edge.end]);
    command
        .nodes
        .iter()
        .chain(endpoints)
        .filter(|node| seen.insert(node.as_str()))
        .cloned()
        .collect()
}

fn build_graph(command: &RunCommand) -> Result<Graph<String>, GraphError> {
    let nodes = collect_nodes(command);
    let pairs = command
        .edges
        .iter()
        .map(|edge| (edge.start.clone(), edge.end.clone(), edge.weight));
    let graph = if command.directed {
        Graph::new(
            nodes,
            pairs.map(|(start, end, weight)| Edge::new(start, end, weight)),
        )?
    } else {
        Graph::undirected(nodes, pairs)?
    };
    info!(
        nodes = graph.node_count(),
        edges = graph.edges().len(),
        "graph assembled"
    );
    Ok(graph)
}

/// Returns the lower-case label printed for `phase`.
#[must_use]
pub const fn phase_label(phase: Phase) -> &'static str {
    match phase {
        Phase::Initialized => "initialized",
        Phase::Running => "running",
        Phase::Complete => "complete",
        Phase::Stuck => "stuck",
    }
}

/// Renders `summary` to `writer` in a human-readable text format.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
pub fn render_summary(summary: &ExecutionSummary, mut writer: impl Write) -> io::Result<()> {
    writeln!(writer, "start: {}", summary.start)?;
    for (index, outcome) in summary.steps.iter().enumerate() {
        let number = index.saturating_add(1);
        match outcome {
            StepOutcome::Added(edge) => writeln!(writer, "step {number}: {edge}")?,
            StepOutcome::Stuck => writeln!(writer, "step {number}: stuck")?,
            StepOutcome::Idle => writeln!(writer, "step {number}: idle")?,
        }
    }
    writeln!(writer, "phase: {}", phase_label(summary.phase))?;
    writeln!(writer, "current: {}", summary.current)?;
    writeln!(writer, "tree weight: {}", summary.tree_weight)?;
    if !summary.unreached.is_empty() {
        writeln!(writer, "unreached: {}", summary.unreached.join(", "))?;
    }
    Ok(())
}
