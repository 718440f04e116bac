//! Provides the [`VariableSelector`] trait which determines which variable the solver branches on
//! next.
mod first_fail;
mod input_order;

pub use first_fail::FirstFail;
pub use input_order::InputOrder;

use crate::branching::SelectionContext;

/// Determines which variable to branch on next.
pub trait VariableSelector<Var> {
    /// Returns an unfixed variable, or [`None`] if all variables under consideration are fixed.
    fn select_variable(&mut self, context: &mut SelectionContext) -> Option<Var>;

    /// Called after a conflict has been found.
    fn on_conflict(&mut self) {}
}
