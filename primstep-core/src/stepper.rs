//! Incremental calling convention shared by stepwise graph algorithms.

/// An algorithm advanced one decision at a time.
///
/// Callers check [`Stepper::is_over`] before every [`Stepper::step`] so they
/// can inspect intermediate state between decisions.
///
/// # Examples
/// ```
/// use primstep_core::{Graph, PrimStepper, Stepper};
///
/// let graph = Graph::undirected(["A", "B"], [("A", "B", 1.0)]).expect("graph is valid");
/// let mut stepper = PrimStepper::new(&graph, "A").expect("graph is undirected");
/// assert_eq!(stepper.run_to_end().expect("run succeeds"), 1);
/// assert!(stepper.is_over());
/// ```
pub trait Stepper {
    /// Value describing what a single step did.
    type Step;
    /// Error raised by a step.
    type Error;

    /// Returns `true` once no further step is meaningful.
    fn is_over(&self) -> bool;

    /// Advances the algorithm by one decision.
    ///
    /// # Errors
    /// Implementations define their own failure modes.
    fn step(&mut self) -> Result<Self::Step, Self::Error>;

    /// Steps until [`Stepper::is_over`] reports `true`.
    ///
    /// Returns the number of [`Stepper::step`] calls made, including a final
    /// call that only discovered the run could not continue.
    ///
    /// # Errors
    /// Propagates the first error returned by [`Stepper::step`].
    fn run_to_end(&mut self) -> Result<usize, Self::Error> {
        let mut calls = 0_usize;
        while !self.is_over() {
            self.step()?;
            calls = calls.saturating_add(1);
        }
        Ok(calls)
    }
}
