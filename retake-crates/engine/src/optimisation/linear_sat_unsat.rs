use log::debug;

use super::solution_callback::SolutionCallback;
use super::OptimisationProcedure;
use crate::branching::Brancher;
use crate::optimisation::OptimisationDirection;
use crate::predicate;
use crate::results::OptimisationResult;
use crate::results::ProblemSolution;
use crate::results::SatisfactionResult;
use crate::results::Solution;
use crate::termination::TerminationCondition;
use crate::variables::DomainId;
use crate::Solver;

/// Implements the linear SAT-UNSAT (LSU) optimisation procedure.
///
/// After every solution the objective is bounded at the root to be strictly better than that
/// solution, after which the search is restarted. When the search proves that no better solution
/// exists, the last solution is optimal. When the termination condition triggers first, the best
/// solution found so far is returned as [`OptimisationResult::Satisfiable`].
#[derive(Debug, Clone, Copy)]
pub struct LinearSatUnsat<Callback> {
    direction: OptimisationDirection,
    objective: DomainId,
    solution_callback: Callback,
}

impl<Callback> LinearSatUnsat<Callback> {
    /// Create a new instance of [`LinearSatUnsat`].
    pub fn new(
        direction: OptimisationDirection,
        objective: DomainId,
        solution_callback: Callback,
    ) -> Self {
        Self {
            direction,
            objective,
            solution_callback,
        }
    }
}

impl<Callback: SolutionCallback> OptimisationProcedure for LinearSatUnsat<Callback> {
    fn optimise<B: Brancher, T: TerminationCondition>(
        &mut self,
        brancher: &mut B,
        termination: &mut T,
        solver: &mut Solver,
    ) -> OptimisationResult {
        // First we solve the satisfaction problem without constraining the objective.
        let mut best_solution: Solution = match solver.satisfy(brancher, termination) {
            SatisfactionResult::Satisfiable(solution) => solution,
            SatisfactionResult::Unsatisfiable => return OptimisationResult::Unsatisfiable,
            SatisfactionResult::Unknown => return OptimisationResult::Unknown,
        };

        loop {
            self.solution_callback
                .on_solution_callback(solver, &best_solution);

            let best_objective_value = best_solution.get_integer_value(self.objective);
            debug!("Found a solution with objective value {best_objective_value}");

            let improvement = match self.direction {
                OptimisationDirection::Minimise => {
                    predicate!(self.objective <= best_objective_value - 1)
                }
                OptimisationDirection::Maximise => {
                    predicate!(self.objective >= best_objective_value + 1)
                }
            };

            if solver.add_root_predicate(improvement).is_err() {
                return OptimisationResult::Optimal(best_solution);
            }

            match solver.satisfy(brancher, termination) {
                SatisfactionResult::Satisfiable(solution) => best_solution = solution,
                SatisfactionResult::Unsatisfiable => {
                    return OptimisationResult::Optimal(best_solution)
                }
                SatisfactionResult::Unknown => {
                    return OptimisationResult::Satisfiable(best_solution)
                }
            }
        }
    }
}
