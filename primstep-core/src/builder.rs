//! Builder utilities for configuring [`PrimStepper`] instances.
//!
//! Exposes the misuse policy applied when a caller steps a finished run.

use std::{fmt, hash::Hash};

use crate::{PrimError, PrimStepper, WeightedGraph};

/// Governs what [`PrimStepper::step`] does once [`PrimStepper::is_over`]
/// already reports `true`.
///
/// Neither policy changes the stepper's state on such a call.
///
/// # Examples
/// ```
/// use primstep_core::ExhaustedPolicy;
///
/// assert_eq!(ExhaustedPolicy::default(), ExhaustedPolicy::Reject);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ExhaustedPolicy {
    /// Return [`PrimError::AlreadyOver`].
    #[default]
    Reject,
    /// Return [`crate::StepOutcome::Idle`] and do nothing.
    Ignore,
}

/// Configures and constructs [`PrimStepper`] instances.
///
/// # Examples
/// ```
/// use primstep_core::{ExhaustedPolicy, Graph, PrimStepperBuilder};
///
/// let graph = Graph::undirected(["A", "B"], [("A", "B", 1.0)]).expect("graph is valid");
/// let stepper = PrimStepperBuilder::new()
///     .with_exhausted_policy(ExhaustedPolicy::Ignore)
///     .build(&graph, "A")
///     .expect("graph is undirected");
/// assert_eq!(stepper.exhausted_policy(), ExhaustedPolicy::Ignore);
/// assert_eq!(stepper.current(), &"A");
/// ```
#[derive(Debug, Clone, Default)]
pub struct PrimStepperBuilder {
    exhausted_policy: ExhaustedPolicy,
}

impl PrimStepperBuilder {
    /// Creates a builder populated with default parameters.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the policy applied to steps requested after the run ended.
    #[must_use]
    pub const fn with_exhausted_policy(mut self, policy: ExhaustedPolicy) -> Self {
        self.exhausted_policy = policy;
        self
    }

    /// Returns the configured misuse policy.
    ///
    /// # Examples
    /// ```
    /// use primstep_core::{ExhaustedPolicy, PrimStepperBuilder};
    ///
    /// let builder = PrimStepperBuilder::new();
    /// assert_eq!(builder.exhausted_policy(), ExhaustedPolicy::Reject);
    /// ```
    #[must_use]
    pub const fn exhausted_policy(&self) -> ExhaustedPolicy {
        self.exhausted_policy
    }

    /// Validates `graph` and constructs a stepper rooted at `start`.
    ///
    /// # Errors
    /// Returns [`PrimError::UnknownStartNode`] when `start` is not one of the
    /// graph's nodes, [`PrimError::UndirectedGraphViolation`] when some edge
    /// lacks a reverse edge of identical weight, and
    /// [`PrimError::DuplicateNode`] when the graph lists a node twice.
    pub fn build<G, N>(&self, graph: &G, start: N) -> Result<PrimStepper<N>, PrimError>
    where
        G: WeightedGraph<Node = N> + ?Sized,
        N: Clone + Eq + Hash + fmt::Display,
    {
        PrimStepper::assemble(graph, start, self.exhausted_policy)
    }
}
