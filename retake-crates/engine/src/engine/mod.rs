pub(crate) mod assignments;
pub(crate) mod constraint_satisfaction_solver;
mod domain;
pub(crate) mod predicates;
pub(crate) mod propagation;
mod solver_statistics;
pub(crate) mod termination;
#[cfg(test)]
pub(crate) mod test_solver;
pub(crate) mod variables;

pub(crate) use assignments::Assignments;
pub(crate) use constraint_satisfaction_solver::ConstraintSatisfactionSolver;
pub(crate) use constraint_satisfaction_solver::CSPSolverExecutionFlag;
pub(crate) use solver_statistics::SolverStatistics;
