//! Primstep core library.
//!
//! Grows a minimum spanning tree with Prim's algorithm one edge per call, so
//! a driver can inspect the tree, the remaining nodes and the remaining
//! edges after every decision.
//!
//! # Metrics
//!
//! When the `metrics` feature is enabled the stepper emits:
//!
//! - `prim_steps_total` (counter, one per committed edge)
//! - `prim_stuck_total` (counter, one per run ending on a disconnected graph)
#![cfg_attr(docsrs, feature(doc_cfg))]

mod builder;
mod error;
mod graph;
mod prim;
mod stepper;
#[cfg(test)]
mod test_utils;

pub use crate::{
    builder::{ExhaustedPolicy, PrimStepperBuilder},
    error::{GraphError, GraphErrorCode, PrimError, PrimErrorCode},
    graph::{Edge, Graph, WeightedGraph},
    prim::{Phase, PrimStepper, StepOutcome},
    stepper::Stepper,
};
