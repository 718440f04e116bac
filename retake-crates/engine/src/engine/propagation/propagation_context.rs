use super::PropagatorId;
use super::WatchList;
use crate::basic_types::Inconsistency;
use crate::basic_types::PropagationStatus;
use crate::engine::predicates::Predicate;
use crate::engine::variables::DomainId;
use crate::engine::variables::Literal;
use crate::engine::Assignments;

/// Handed to a propagator when it is added to the solver, so that it can subscribe to domain
/// changes of its variables.
#[derive(Debug)]
pub(crate) struct PropagatorInitialisationContext<'a> {
    watch_list: &'a mut WatchList,
    propagator_id: PropagatorId,
}

impl<'a> PropagatorInitialisationContext<'a> {
    pub(crate) fn new(watch_list: &'a mut WatchList, propagator_id: PropagatorId) -> Self {
        PropagatorInitialisationContext {
            watch_list,
            propagator_id,
        }
    }

    /// Subscribe the propagator to changes of the given variable.
    pub(crate) fn register(&mut self, domain_id: DomainId) {
        self.watch_list.watch(domain_id, self.propagator_id);
    }

    pub(crate) fn register_literal(&mut self, literal: Literal) {
        self.register(literal.get_integer_variable());
    }
}

/// Gives a propagator read and write access to the domains.
#[derive(Debug)]
pub(crate) struct PropagationContextMut<'a> {
    assignments: &'a mut Assignments,
}

impl<'a> PropagationContextMut<'a> {
    pub(crate) fn new(assignments: &'a mut Assignments) -> Self {
        PropagationContextMut { assignments }
    }

    pub(crate) fn lower_bound(&self, domain_id: DomainId) -> i32 {
        self.assignments.get_lower_bound(domain_id)
    }

    pub(crate) fn upper_bound(&self, domain_id: DomainId) -> i32 {
        self.assignments.get_upper_bound(domain_id)
    }

    pub(crate) fn contains(&self, domain_id: DomainId, value: i32) -> bool {
        self.assignments.is_value_in_domain(domain_id, value)
    }

    pub(crate) fn is_fixed(&self, domain_id: DomainId) -> bool {
        self.assignments.is_domain_fixed(domain_id)
    }

    /// The values in the domain in increasing order, collected so the domain can be modified
    /// while they are visited.
    pub(crate) fn domain_values(&self, domain_id: DomainId) -> Vec<i32> {
        self.assignments.get_domain_iter(domain_id).collect()
    }

    pub(crate) fn is_literal_true(&self, literal: Literal) -> bool {
        self.assignments
            .is_predicate_satisfied(literal.get_true_predicate())
    }

    pub(crate) fn is_literal_false(&self, literal: Literal) -> bool {
        self.assignments
            .is_predicate_satisfied(literal.get_false_predicate())
    }

    /// Tighten the domain of the predicate's variable such that the predicate holds.
    pub(crate) fn post(&mut self, predicate: Predicate) -> PropagationStatus {
        let _ = self.assignments.post_predicate(predicate)?;
        Ok(())
    }

    pub(crate) fn assign_literal(&mut self, literal: Literal, truth_value: bool) -> PropagationStatus {
        if truth_value {
            self.post(literal.get_true_predicate())
        } else {
            self.post(literal.get_false_predicate())
        }
    }

    /// Report that the current domains cannot be extended to a solution.
    pub(crate) fn conflict(&self) -> PropagationStatus {
        Err(Inconsistency::Conflict)
    }
}
