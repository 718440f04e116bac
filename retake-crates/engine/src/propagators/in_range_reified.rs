use crate::basic_types::PropagationStatus;
use crate::engine::propagation::PropagationContextMut;
use crate::engine::propagation::Propagator;
use crate::engine::propagation::PropagatorInitialisationContext;
use crate::engine::variables::DomainId;
use crate::engine::variables::Literal;
use crate::predicate;

/// Propagator for the constraint `reif <-> (lower <= var <= upper)`.
#[derive(Clone, Debug)]
pub(crate) struct InRangeReifiedPropagator {
    var: DomainId,
    lower: i32,
    upper: i32,
    reification_literal: Literal,
}

impl InRangeReifiedPropagator {
    pub(crate) fn new(var: DomainId, lower: i32, upper: i32, reification_literal: Literal) -> Self {
        InRangeReifiedPropagator {
            var,
            lower,
            upper,
            reification_literal,
        }
    }
}

impl Propagator for InRangeReifiedPropagator {
    fn name(&self) -> &str {
        "InRangeReified"
    }

    fn initialise_at_root(&mut self, context: &mut PropagatorInitialisationContext) {
        context.register(self.var);
        context.register_literal(self.reification_literal);
    }

    fn propagate(&mut self, mut context: PropagationContextMut) -> PropagationStatus {
        if context.is_literal_true(self.reification_literal) {
            context.post(predicate!(self.var >= self.lower))?;
            return context.post(predicate!(self.var <= self.upper));
        }

        if context.is_literal_false(self.reification_literal) {
            for value in context.domain_values(self.var) {
                if (self.lower..=self.upper).contains(&value) {
                    context.post(predicate!(self.var != value))?;
                }
            }
            return Ok(());
        }

        let lower_bound = context.lower_bound(self.var);
        let upper_bound = context.upper_bound(self.var);
        if lower_bound >= self.lower && upper_bound <= self.upper {
            return context.assign_literal(self.reification_literal, true);
        }

        let intersects = context
            .domain_values(self.var)
            .into_iter()
            .any(|value| (self.lower..=self.upper).contains(&value));
        if !intersects {
            return context.assign_literal(self.reification_literal, false);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::test_solver::TestSolver;

    #[test]
    fn true_literal_restricts_the_variable_to_the_range() {
        let mut solver = TestSolver::default();
        let var = solver.new_variable(0, 11);
        let literal = solver.new_literal();
        solver.set_literal(literal, true);

        let _ = solver
            .new_propagator(InRangeReifiedPropagator::new(var, 4, 7, literal))
            .expect("no empty domain");

        solver.assert_bounds(var, 4, 7);
    }

    #[test]
    fn false_literal_removes_the_range_from_the_domain() {
        let mut solver = TestSolver::default();
        let var = solver.new_sparse_variable(&[1, 4, 6, 9]);
        let literal = solver.new_literal();
        solver.set_literal(literal, false);

        let _ = solver
            .new_propagator(InRangeReifiedPropagator::new(var, 4, 7, literal))
            .expect("no empty domain");

        assert_eq!(solver.values(var), vec![1, 9]);
    }

    #[test]
    fn domain_inside_the_range_sets_the_literal() {
        let mut solver = TestSolver::default();
        let var = solver.new_sparse_variable(&[4, 5]);
        let literal = solver.new_literal();

        let _ = solver
            .new_propagator(InRangeReifiedPropagator::new(var, 4, 7, literal))
            .expect("no empty domain");

        assert!(solver.is_literal_true(literal));
    }

    #[test]
    fn domain_outside_the_range_clears_the_literal() {
        let mut solver = TestSolver::default();
        let var = solver.new_sparse_variable(&[0, 3, 8]);
        let literal = solver.new_literal();

        let _ = solver
            .new_propagator(InRangeReifiedPropagator::new(var, 4, 7, literal))
            .expect("no empty domain");

        assert!(solver.is_literal_false(literal));
    }

    #[test]
    fn partially_overlapping_domain_leaves_the_literal_unassigned() {
        let mut solver = TestSolver::default();
        let var = solver.new_sparse_variable(&[2, 5]);
        let literal = solver.new_literal();

        let _ = solver
            .new_propagator(InRangeReifiedPropagator::new(var, 4, 7, literal))
            .expect("no empty domain");

        assert!(solver.is_literal_unassigned(literal));
    }
}
