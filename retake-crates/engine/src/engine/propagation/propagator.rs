use super::PropagationContextMut;
use super::PropagatorInitialisationContext;
use crate::basic_types::PropagationStatus;

/// All propagators implement the [`Propagator`] trait.
///
/// Propagation is done from scratch every time the propagator is called; a propagator does not
/// need to keep state between calls, and it does not need to reach a fixpoint on its own since the
/// solver calls it again whenever one of its watched domains changes (including changes it made
/// itself).
pub(crate) trait Propagator {
    /// Return the name of the propagator, used when printing.
    fn name(&self) -> &str;

    /// Registers the variables the propagator should be notified about. Called once, when the
    /// propagator is added to the solver.
    fn initialise_at_root(&mut self, context: &mut PropagatorInitialisationContext);

    /// Removes the values from the domains which cannot be part of a solution.
    ///
    /// Returns an [`Inconsistency`][crate::basic_types::Inconsistency] if a domain became empty
    /// or the propagator detected that the current domains admit no solution.
    fn propagate(&mut self, context: PropagationContextMut) -> PropagationStatus;
}
