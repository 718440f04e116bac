//! A [`Brancher`] which combines a single [`VariableSelector`] with a single [`ValueSelector`].

use std::marker::PhantomData;

use crate::branching::value_selection::ValueSelector;
use crate::branching::variable_selection::VariableSelector;
use crate::branching::Brancher;
use crate::branching::SelectionContext;
use crate::engine::predicates::Predicate;
use crate::results::Solution;

/// A [`Brancher`] which first selects a variable with its [`VariableSelector`] and then a value for
/// that variable with its [`ValueSelector`].
#[derive(Debug)]
pub struct IndependentVariableValueBrancher<Var, VariableSelect, ValueSelect> {
    /// Determines which (unfixed) variable to branch on next.
    pub(crate) variable_selector: VariableSelect,
    /// Determines which value in the domain of the selected variable to branch on.
    pub(crate) value_selector: ValueSelect,
    pub(crate) variable_type: PhantomData<Var>,
}

impl<Var, VariableSelect, ValueSelect>
    IndependentVariableValueBrancher<Var, VariableSelect, ValueSelect>
where
    VariableSelect: VariableSelector<Var>,
    ValueSelect: ValueSelector<Var>,
{
    pub fn new(variable_selector: VariableSelect, value_selector: ValueSelect) -> Self {
        IndependentVariableValueBrancher {
            variable_selector,
            value_selector,
            variable_type: PhantomData,
        }
    }
}

impl<Var, VariableSelect, ValueSelect> Brancher
    for IndependentVariableValueBrancher<Var, VariableSelect, ValueSelect>
where
    VariableSelect: VariableSelector<Var>,
    ValueSelect: ValueSelector<Var>,
{
    fn next_decision(&mut self, context: &mut SelectionContext) -> Option<Predicate> {
        self.variable_selector
            .select_variable(context)
            .map(|selected_variable| self.value_selector.select_value(context, selected_variable))
    }

    fn on_conflict(&mut self) {
        self.variable_selector.on_conflict()
    }

    fn on_solution(&mut self, solution: &Solution) {
        self.value_selector.on_solution(solution)
    }
}
