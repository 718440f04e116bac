//! Provides the [`ValueSelector`] trait which determines which value the solver branches on for a
//! selected variable.
mod in_domain_min;

pub use in_domain_min::InDomainMin;

use crate::branching::SelectionContext;
use crate::engine::predicates::Predicate;
use crate::results::Solution;

/// Determines which value in the domain of a selected variable to branch on.
pub trait ValueSelector<Var> {
    /// Returns the decision for `decision_variable`, whose domain contains at least two values.
    fn select_value(&mut self, context: &mut SelectionContext, decision_variable: Var)
        -> Predicate;

    /// Called when a solution is found.
    fn on_solution(&mut self, _solution: &Solution) {}
}
