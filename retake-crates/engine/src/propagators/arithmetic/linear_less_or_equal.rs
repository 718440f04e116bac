use crate::basic_types::PropagationStatus;
use crate::engine::propagation::PropagationContextMut;
use crate::engine::propagation::Propagator;
use crate::engine::propagation::PropagatorInitialisationContext;
use crate::engine::variables::DomainId;
use crate::predicate;

/// Propagator for the constraint `\sum x_i <= c`.
#[derive(Clone, Debug)]
pub(crate) struct LinearLessOrEqualPropagator {
    x: Box<[DomainId]>,
    c: i32,
}

impl LinearLessOrEqualPropagator {
    pub(crate) fn new(x: Box<[DomainId]>, c: i32) -> Self {
        LinearLessOrEqualPropagator { x, c }
    }
}

impl Propagator for LinearLessOrEqualPropagator {
    fn name(&self) -> &str {
        "LinearLeq"
    }

    fn initialise_at_root(&mut self, context: &mut PropagatorInitialisationContext) {
        self.x.iter().for_each(|&x_i| context.register(x_i));
    }

    fn propagate(&mut self, mut context: PropagationContextMut) -> PropagationStatus {
        let lower_bound_left_hand_side = self
            .x
            .iter()
            .map(|&x_i| context.lower_bound(x_i) as i64)
            .sum::<i64>();

        if (self.c as i64) < lower_bound_left_hand_side {
            return context.conflict();
        }

        for &x_i in self.x.iter() {
            let bound = self.c as i64 - (lower_bound_left_hand_side - context.lower_bound(x_i) as i64);

            if (context.upper_bound(x_i) as i64) > bound {
                // The bound lies between the lower and upper bound of x_i, so it fits in an i32.
                context.post(predicate!(x_i <= bound as i32))?;
            }
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
    fn bounds_are_propagated() {
        let mut solver = TestSolver::default();
        let x = solver.new_variable(1, 5);
        let y = solver.new_variable(0, 10);

        let _ = solver
            .new_propagator(LinearLessOrEqualPropagator::new([x, y].into(), 7))
            .expect("no empty domains");

        solver.assert_bounds(x, 1, 5);
        solver.assert_bounds(y, 0, 6);
    }

    #[test]
    fn remaining_literals_are_set_to_false_when_the_cap_is_reached() {
        let mut solver = TestSolver::default();
        let literals = (0..4).map(|_| solver.new_literal()).collect::<Vec<_>>();
        let variables = literals
            .iter()
            .map(|literal| literal.get_integer_variable())
            .collect::<Box<[_]>>();

        let mut propagator = solver
            .new_propagator(LinearLessOrEqualPropagator::new(variables, 2))
            .expect("no empty domains");

        solver.set_literal(literals[0], true);
        solver.set_literal(literals[2], true);
        solver
            .propagate_until_fixed_point(&mut propagator)
            .expect("no empty domains");

        assert!(solver.is_literal_false(literals[1]));
        assert!(solver.is_literal_false(literals[3]));
    }

    #[test]
    fn exceeding_the_right_hand_side_is_a_conflict() {
        let mut solver = TestSolver::default();
        let x = solver.new_variable(3, 5);
        let y = solver.new_variable(3, 5);

        let result = solver.new_propagator(LinearLessOrEqualPropagator::new([x, y].into(), 5));

        assert_eq!(result.err(), Some(Inconsistency::Conflict));
    }
}
