use log::warn;

use crate::branching::variable_selection::VariableSelector;
use crate::branching::SelectionContext;
use crate::engine::variables::DomainId;

/// A [`VariableSelector`] which selects the first variable which is not fixed, in the order of the
/// provided list.
#[derive(Debug, Clone)]
pub struct InputOrder {
    variables: Vec<DomainId>,
}

impl InputOrder {
    pub fn new(variables: &[DomainId]) -> Self {
        if variables.is_empty() {
            warn!("The InputOrder variable selector was not provided with any variables");
        }
        InputOrder {
            variables: variables.to_vec(),
        }
    }
}

impl VariableSelector<DomainId> for InputOrder {
    fn select_variable(&mut self, context: &mut SelectionContext) -> Option<DomainId> {
        self.variables
            .iter()
            .find(|&&variable| !context.is_integer_fixed(variable))
            .copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selects_the_first_unfixed_variable() {
        let assignments = SelectionContext::create_for_testing(vec![(2, 2), (0, 10), (5, 20)]);
        let mut context = SelectionContext::new(&assignments);
        let domains = context.get_domains().collect::<Vec<_>>();
        let mut strategy = InputOrder::new(&domains);

        assert_eq!(strategy.select_variable(&mut context), Some(domains[1]));
    }

    #[test]
    fn fixed_variables_are_never_selected() {
        let assignments = SelectionContext::create_for_testing(vec![(2, 2), (3, 3)]);
        let mut context = SelectionContext::new(&assignments);
        let domains = context.get_domains().collect::<Vec<_>>();
        let mut strategy = InputOrder::new(&domains);

        assert_eq!(strategy.select_variable(&mut context), None);
    }
}
