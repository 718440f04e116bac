use crate::results::Solution;
use crate::Solver;

/// Called by an optimisation procedure for every improving solution it finds.
pub trait SolutionCallback {
    fn on_solution_callback(&self, solver: &Solver, solution: &Solution);
}

impl<T: Fn(&Solver, &Solution)> SolutionCallback for T {
    fn on_solution_callback(&self, solver: &Solver, solution: &Solution) {
        (self)(solver, solution)
    }
}
