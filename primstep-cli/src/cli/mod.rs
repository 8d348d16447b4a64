//! Command-line interface orchestration for primstep.
//!
//! The CLI offers a single `run` command that assembles a graph from
//! `--edge` arguments, steps Prim's algorithm until it is over (or a step
//! limit is hit) and reports every decision.

mod commands;

pub use commands::{
    Cli, CliError, Command, EdgeArg, EdgeArgError, ExecutionSummary, RunCommand, phase_label,
    render_summary, run_cli,
};
