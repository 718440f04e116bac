use crate::basic_types::PropagationStatus;
use crate::engine::propagation::PropagationContextMut;
use crate::engine::propagation::Propagator;
use crate::engine::propagation::PropagatorInitialisationContext;
use crate::engine::variables::DomainId;
use crate::predicate;

/// Propagator for the constraint `a == b`. Both domains are restricted to their intersection.
#[derive(Clone, Debug)]
pub(crate) struct BinaryEqualsPropagator {
    a: DomainId,
    b: DomainId,
}

impl BinaryEqualsPropagator {
    pub(crate) fn new(a: DomainId, b: DomainId) -> Self {
        BinaryEqualsPropagator { a, b }
    }

    fn remove_unsupported(
        context: &mut PropagationContextMut,
        from: DomainId,
        support: DomainId,
    ) -> PropagationStatus {
        for value in context.domain_values(from) {
            if !context.contains(support, value) {
                context.post(predicate!(from != value))?;
            }
        }

        Ok(())
    }
}

impl Propagator for BinaryEqualsPropagator {
    fn name(&self) -> &str {
        "BinaryEq"
    }

    fn initialise_at_root(&mut self, context: &mut PropagatorInitialisationContext) {
        context.register(self.a);
        context.register(self.b);
    }

    fn propagate(&mut self, mut context: PropagationContextMut) -> PropagationStatus {
        Self::remove_unsupported(&mut context, self.a, self.b)?;
        Self::remove_unsupported(&mut context, self.b, self.a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::basic_types::Inconsistency;
    use crate::engine::test_solver::TestSolver;

    #[test]
    fn domains_are_restricted_to_their_intersection() {
        let mut solver = TestSolver::default();
        let a = solver.new_sparse_variable(&[0, 2, 4, 6]);
        let b = solver.new_sparse_variable(&[1, 2, 3, 6]);

        let _ = solver
            .new_propagator(BinaryEqualsPropagator::new(a, b))
            .expect("no empty domain");

        assert_eq!(solver.values(a), vec![2, 6]);
        assert_eq!(solver.values(b), vec![2, 6]);
    }

    #[test]
    fn disjoint_domains_are_a_conflict() {
        let mut solver = TestSolver::default();
        let a = solver.new_sparse_variable(&[0, 1]);
        let b = solver.new_sparse_variable(&[2, 3]);

        let result = solver.new_propagator(BinaryEqualsPropagator::new(a, b));

        assert!(matches!(result, Err(Inconsistency::EmptyDomain(_))));
    }

    #[test]
    fn removing_a_value_on_one_side_removes_it_on_the_other() {
        let mut solver = TestSolver::default();
        let a = solver.new_variable(0, 3);
        let b = solver.new_variable(0, 3);

        let mut propagator = solver
            .new_propagator(BinaryEqualsPropagator::new(a, b))
            .expect("no empty domain");

        solver.post(predicate!(a != 1));
        solver
            .propagate_until_fixed_point(&mut propagator)
            .expect("no empty domain");

        assert!(!solver.contains(b, 1));
    }
}
