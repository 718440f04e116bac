use log::warn;

use crate::branching::variable_selection::VariableSelector;
use crate::branching::SelectionContext;
use crate::engine::variables::DomainId;

/// A [`VariableSelector`] which selects the unfixed variable with the fewest remaining values.
/// Ties are broken in favour of the variable which comes first in the provided list.
#[derive(Debug, Clone)]
pub struct FirstFail {
    variables: Vec<DomainId>,
}

impl FirstFail {
    pub fn new(variables: &[DomainId]) -> Self {
        if variables.is_empty() {
            warn!("The FirstFail variable selector was not provided with any variables");
        }
        FirstFail {
            variables: variables.to_vec(),
        }
    }
}

impl VariableSelector<DomainId> for FirstFail {
    fn select_variable(&mut self, context: &mut SelectionContext) -> Option<DomainId> {
        // `min_by_key` keeps the first of equal elements.
        self.variables
            .iter()
            .filter(|&&variable| !context.is_integer_fixed(variable))
            .min_by_key(|&&variable| context.get_size_of_domain(variable))
            .copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selects_the_smallest_domain() {
        let assignments = SelectionContext::create_for_testing(vec![(0, 10), (5, 7), (0, 2)]);
        let mut context = SelectionContext::new(&assignments);
        let domains = context.get_domains().collect::<Vec<_>>();
        let mut strategy = FirstFail::new(&domains);

        assert_eq!(strategy.select_variable(&mut context), Some(domains[1]));
    }

    #[test]
    fn ties_are_broken_by_input_order() {
        let assignments = SelectionContext::create_for_testing(vec![(0, 10), (0, 3), (4, 7)]);
        let mut context = SelectionContext::new(&assignments);
        let domains = context.get_domains().collect::<Vec<_>>();
        let mut strategy = FirstFail::new(&[domains[2], domains[0], domains[1]]);

        assert_eq!(strategy.select_variable(&mut context), Some(domains[2]));
    }
}
