use crate::basic_types::PropagationStatus;
use crate::engine::propagation::PropagationContextMut;
use crate::engine::propagation::Propagator;
use crate::engine::propagation::PropagatorInitialisationContext;
use crate::engine::variables::DomainId;
use crate::predicate;

/// Propagator for the constraint `a != b`. Once one side is fixed, its value is removed from the
/// domain of the other side.
#[derive(Clone, Debug)]
pub(crate) struct BinaryNotEqualsPropagator {
    a: DomainId,
    b: DomainId,
}

impl BinaryNotEqualsPropagator {
    pub(crate) fn new(a: DomainId, b: DomainId) -> Self {
        BinaryNotEqualsPropagator { a, b }
    }
}

impl Propagator for BinaryNotEqualsPropagator {
    fn name(&self) -> &str {
        "BinaryNotEq"
    }

    fn initialise_at_root(&mut self, context: &mut PropagatorInitialisationContext) {
        context.register(self.a);
        context.register(self.b);
    }

    fn propagate(&mut self, mut context: PropagationContextMut) -> PropagationStatus {
        if context.is_fixed(self.a) {
            let value = context.lower_bound(self.a);
            context.post(predicate!(self.b != value))?;
        }

        if context.is_fixed(self.b) {
            let value = context.lower_bound(self.b);
            context.post(predicate!(self.a != value))?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::basic_types::Inconsistency;
    use crate::engine::test_solver::TestSolver;

    #[test]
    fn fixed_value_is_removed_from_the_other_side() {
        let mut solver = TestSolver::default();
        let a = solver.new_variable(2, 2);
        let b = solver.new_variable(0, 4);

        let _ = solver
            .new_propagator(BinaryNotEqualsPropagator::new(a, b))
            .expect("no empty domain");

        assert_eq!(solver.values(b), vec![0, 1, 3, 4]);
    }

    #[test]
    fn nothing_happens_while_both_sides_are_unfixed() {
        let mut solver = TestSolver::default();
        let a = solver.new_variable(0, 1);
        let b = solver.new_variable(0, 1);

        let _ = solver
            .new_propagator(BinaryNotEqualsPropagator::new(a, b))
            .expect("no empty domain");

        solver.assert_bounds(a, 0, 1);
        solver.assert_bounds(b, 0, 1);
    }

    #[test]
    fn two_equal_fixed_sides_are_a_conflict() {
        let mut solver = TestSolver::default();
        let a = solver.new_sparse_variable(&[3]);
        let b = solver.new_sparse_variable(&[3]);

        let result = solver.new_propagator(BinaryNotEqualsPropagator::new(a, b));

        assert!(matches!(result, Err(Inconsistency::EmptyDomain(_))));
    }

    #[test]
    fn fixing_one_side_later_propagates_to_the_other() {
        let mut solver = TestSolver::default();
        let a = solver.new_sparse_variable(&[1, 5]);
        let b = solver.new_sparse_variable(&[1, 5]);

        let mut propagator = solver
            .new_propagator(BinaryNotEqualsPropagator::new(a, b))
            .expect("no empty domain");

        solver.post(predicate!(a == 5));
        solver
            .propagate_until_fixed_point(&mut propagator)
            .expect("no empty domain");

        assert_eq!(solver.values(b), vec![1]);
    }
}
