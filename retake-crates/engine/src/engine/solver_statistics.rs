use crate::create_statistics_struct;

create_statistics_struct!(
    /// Statistics of the search performed by the
    /// [`ConstraintSatisfactionSolver`][crate::engine::ConstraintSatisfactionSolver].
    SolverStatistics {
        /// The number of decisions taken by the solver
        num_decisions: u64,
        /// The number of conflicts encountered by the solver
        num_conflicts: u64,
        /// The number of calls to propagators
        num_propagations: u64,
        /// The number of solutions found by the solver
        num_solutions: u64,
        /// The deepest decision level reached during search
        peak_depth: u64,
        /// The number of milliseconds spent in search
        time_spent_in_solver: u64,
});
