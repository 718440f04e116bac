#![cfg(test)]
//! Helpers for testing propagators in isolation. The [`TestSolver`] sets up domains, runs a single
//! propagator to its fixpoint and exposes the resulting domains.
use crate::basic_types::HashSet;
use crate::basic_types::Inconsistency;
use crate::basic_types::PropagationStatus;
use crate::engine::predicates::Predicate;
use crate::engine::propagation::PropagationContextMut;
use crate::engine::propagation::Propagator;
use crate::engine::propagation::PropagatorId;
use crate::engine::propagation::PropagatorInitialisationContext;
use crate::engine::propagation::WatchList;
use crate::engine::variables::DomainId;
use crate::engine::variables::Literal;
use crate::engine::Assignments;

/// A container for variables, which can be used to test propagators.
#[derive(Debug, Default)]
pub(crate) struct TestSolver {
    assignments: Assignments,
    watch_list: WatchList,
    next_propagator_id: u32,
}

impl TestSolver {
    pub(crate) fn new_variable(&mut self, lower_bound: i32, upper_bound: i32) -> DomainId {
        self.watch_list.grow();
        self.assignments.grow(lower_bound, upper_bound)
    }

    pub(crate) fn new_sparse_variable(&mut self, values: &[i32]) -> DomainId {
        self.watch_list.grow();
        self.assignments
            .grow_sparse(&values.iter().copied().collect::<HashSet<_>>())
    }

    pub(crate) fn new_literal(&mut self) -> Literal {
        Literal::new(self.new_variable(0, 1))
    }

    /// Initialises the propagator and propagates it to a fixpoint.
    pub(crate) fn new_propagator<P: Propagator>(
        &mut self,
        mut propagator: P,
    ) -> Result<P, Inconsistency> {
        let propagator_id = PropagatorId(self.next_propagator_id);
        self.next_propagator_id += 1;

        propagator.initialise_at_root(&mut PropagatorInitialisationContext::new(
            &mut self.watch_list,
            propagator_id,
        ));
        self.propagate_until_fixed_point(&mut propagator)?;

        Ok(propagator)
    }

    /// Calls the propagator until it no longer changes any domain.
    pub(crate) fn propagate_until_fixed_point(
        &mut self,
        propagator: &mut impl Propagator,
    ) -> PropagationStatus {
        let _ = self.assignments.drain_modified_domains();
        loop {
            propagator.propagate(PropagationContextMut::new(&mut self.assignments))?;
            if self.assignments.drain_modified_domains().is_empty() {
                return Ok(());
            }
        }
    }

    pub(crate) fn post(&mut self, predicate: Predicate) {
        let result = self.assignments.post_predicate(predicate);
        assert!(
            result.is_ok(),
            "The provided predicate {predicate} empties a domain; the propagator should not be called in that case"
        );
    }

    pub(crate) fn set_literal(&mut self, literal: Literal, truth_value: bool) {
        if truth_value {
            self.post(literal.get_true_predicate())
        } else {
            self.post(literal.get_false_predicate())
        }
    }

    pub(crate) fn lower_bound(&self, var: DomainId) -> i32 {
        self.assignments.get_lower_bound(var)
    }

    pub(crate) fn upper_bound(&self, var: DomainId) -> i32 {
        self.assignments.get_upper_bound(var)
    }

    pub(crate) fn contains(&self, var: DomainId, value: i32) -> bool {
        self.assignments.is_value_in_domain(var, value)
    }

    pub(crate) fn values(&self, var: DomainId) -> Vec<i32> {
        self.assignments.get_domain_iter(var).collect()
    }

    pub(crate) fn is_literal_true(&self, literal: Literal) -> bool {
        self.assignments
            .is_predicate_satisfied(literal.get_true_predicate())
    }

    pub(crate) fn is_literal_false(&self, literal: Literal) -> bool {
        self.assignments
            .is_predicate_satisfied(literal.get_false_predicate())
    }

    pub(crate) fn is_literal_unassigned(&self, literal: Literal) -> bool {
        !self.is_literal_true(literal) && !self.is_literal_false(literal)
    }

    pub(crate) fn assert_bounds(&self, var: DomainId, lower_bound: i32, upper_bound: i32) {
        let actual_lower_bound = self.lower_bound(var);
        let actual_upper_bound = self.upper_bound(var);

        assert_eq!(
            (lower_bound, upper_bound),
            (actual_lower_bound, actual_upper_bound),
            "The expected bounds [{lower_bound}..{upper_bound}] did not match the actual bounds [{actual_lower_bound}..{actual_upper_bound}]"
        );
    }
}
