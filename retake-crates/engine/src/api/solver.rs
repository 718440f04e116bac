use log::debug;

use crate::basic_types::ConstraintOperationError;
use crate::branching::branchers::independent_variable_value_brancher::IndependentVariableValueBrancher;
use crate::branching::value_selection::InDomainMin;
use crate::branching::variable_selection::FirstFail;
use crate::branching::Brancher;
use crate::constraints::ConstraintPoster;
use crate::engine::propagation::Propagator;
use crate::engine::termination::TerminationCondition;
use crate::engine::variables::DomainId;
use crate::engine::variables::Literal;
use crate::engine::ConstraintSatisfactionSolver;
use crate::engine::CSPSolverExecutionFlag;
use crate::optimisation::OptimisationProcedure;
use crate::predicates::Predicate;
use crate::results::OptimisationResult;
use crate::results::SatisfactionResult;
use crate::results::Solution;
use crate::statistics::log_statistic;
use crate::statistics::log_statistic_postfix;
use crate::statistics::should_log_statistics;

/// The brancher returned by [`Solver::default_brancher`].
pub type DefaultBrancher = IndependentVariableValueBrancher<DomainId, FirstFail, InDomainMin>;

/// The main interaction point which allows the creation of variables, the addition of constraints,
/// and solving problems.
///
/// # Creating Variables
/// Integer variables are created with [`Solver::new_bounded_integer`] or
/// [`Solver::new_sparse_integer`]; propositional variables with [`Solver::new_literal`].
///
/// # Using the Solver
/// For examples on how to use the solver, see the [root-level crate documentation](crate).
#[derive(Debug, Default)]
pub struct Solver {
    /// The internal [`ConstraintSatisfactionSolver`] which is used to solve the problems.
    satisfaction_solver: ConstraintSatisfactionSolver,
}

// Variable creation.
impl Solver {
    /// Create a new integer variable with the domain `[lower_bound, upper_bound]`.
    pub fn new_bounded_integer(&mut self, lower_bound: i32, upper_bound: i32) -> DomainId {
        self.satisfaction_solver
            .create_new_integer_variable(lower_bound, upper_bound, None)
    }

    /// Create a new named integer variable with the domain `[lower_bound, upper_bound]`. The name
    /// is used in logging.
    pub fn new_named_bounded_integer(
        &mut self,
        lower_bound: i32,
        upper_bound: i32,
        name: impl Into<String>,
    ) -> DomainId {
        self.satisfaction_solver.create_new_integer_variable(
            lower_bound,
            upper_bound,
            Some(name.into()),
        )
    }

    /// Create a new integer variable whose domain consists of exactly the given values. Duplicates
    /// are ignored; an empty list creates a variable with an empty domain, which makes the
    /// problem unsatisfiable.
    pub fn new_sparse_integer(&mut self, values: impl Into<Vec<i32>>) -> DomainId {
        self.satisfaction_solver
            .create_new_integer_variable_sparse(values.into(), None)
    }

    /// Create a new named integer variable whose domain consists of exactly the given values.
    pub fn new_named_sparse_integer(
        &mut self,
        values: impl Into<Vec<i32>>,
        name: impl Into<String>,
    ) -> DomainId {
        self.satisfaction_solver
            .create_new_integer_variable_sparse(values.into(), Some(name.into()))
    }

    /// Create a fresh propositional variable.
    pub fn new_literal(&mut self) -> Literal {
        Literal::new(self.new_bounded_integer(0, 1))
    }

    /// Create a fresh named propositional variable.
    pub fn new_named_literal(&mut self, name: impl Into<String>) -> Literal {
        Literal::new(self.new_named_bounded_integer(0, 1, name))
    }
}

// Reading the root-level domains.
impl Solver {
    /// Returns the name given to the variable at creation, if any.
    pub fn variable_name(&self, domain_id: DomainId) -> Option<&str> {
        self.satisfaction_solver.get_variable_name(domain_id)
    }

    /// Get the lower-bound of the variable.
    pub fn lower_bound(&self, domain_id: DomainId) -> i32 {
        self.satisfaction_solver
            .get_assignments()
            .get_lower_bound(domain_id)
    }

    /// Get the upper-bound of the variable.
    pub fn upper_bound(&self, domain_id: DomainId) -> i32 {
        self.satisfaction_solver
            .get_assignments()
            .get_upper_bound(domain_id)
    }

    /// Returns whether the domain of the variable contains a single value.
    pub fn is_fixed(&self, domain_id: DomainId) -> bool {
        self.satisfaction_solver
            .get_assignments()
            .is_domain_fixed(domain_id)
    }

    /// Returns the number of values in the domain of the variable.
    pub fn domain_size(&self, domain_id: DomainId) -> usize {
        self.satisfaction_solver
            .get_assignments()
            .get_domain_size(domain_id)
    }

    /// Returns the number of variables created so far.
    pub fn num_variables(&self) -> u32 {
        self.satisfaction_solver.get_assignments().num_domains()
    }

    /// Returns whether the solver has established that the problem has no solution.
    pub fn is_infeasible(&self) -> bool {
        self.satisfaction_solver.is_infeasible()
    }
}

// Adding constraints.
impl Solver {
    /// Add a constraint to the solver. This returns a [`ConstraintPoster`]; the constraint is
    /// added once [`ConstraintPoster::post`] is called.
    ///
    /// If the poster is dropped without calling [`ConstraintPoster::post`], the constraint _is
    /// not_ added to the solver. In this case, a warning is emitted.
    ///
    /// # Example
    /// ```
    /// # use retake_engine::constraints;
    /// # use retake_engine::Solver;
    /// let mut solver = Solver::default();
    ///
    /// let a = solver.new_bounded_integer(0, 3);
    /// let b = solver.new_bounded_integer(0, 3);
    ///
    /// solver
    ///     .add_constraint(constraints::binary_not_equals(a, b))
    ///     .post()
    ///     .expect("the constraint is satisfiable");
    /// ```
    pub fn add_constraint<Constraint>(
        &mut self,
        constraint: Constraint,
    ) -> ConstraintPoster<'_, Constraint> {
        ConstraintPoster::new(self, constraint)
    }

    /// Permanently restricts the domain of the predicate's variable such that the predicate
    /// holds, and propagates the consequences at the root.
    pub fn add_root_predicate(&mut self, predicate: Predicate) -> Result<(), ConstraintOperationError> {
        self.satisfaction_solver.add_root_predicate(predicate)
    }

    pub(crate) fn add_propagator(
        &mut self,
        propagator: impl Propagator + 'static,
    ) -> Result<(), ConstraintOperationError> {
        self.satisfaction_solver.add_propagator(Box::new(propagator))
    }
}

// Solving.
impl Solver {
    /// Solves the current model in the [`Solver`] until it finds a solution (or is indicated to
    /// terminate by the provided [`TerminationCondition`]) and returns a [`SatisfactionResult`]
    /// which can be used to obtain the found solution or find other solutions.
    pub fn satisfy<B: Brancher, T: TerminationCondition>(
        &mut self,
        brancher: &mut B,
        termination: &mut T,
    ) -> SatisfactionResult {
        let result = match self.satisfaction_solver.solve(termination, brancher) {
            CSPSolverExecutionFlag::Feasible => {
                let solution = self.satisfaction_solver.extract_solution();
                brancher.on_solution(&solution);
                SatisfactionResult::Satisfiable(solution)
            }
            CSPSolverExecutionFlag::Infeasible => SatisfactionResult::Unsatisfiable,
            CSPSolverExecutionFlag::Timeout => SatisfactionResult::Unknown,
        };

        self.satisfaction_solver.restore_state_at_root();
        result
    }

    /// Optimises the model using the provided [`OptimisationProcedure`], e.g.
    /// [`LinearSatUnsat`][crate::optimisation::linear_sat_unsat::LinearSatUnsat].
    ///
    /// The procedure tightens the objective at the root, so after this call the solver only
    /// admits solutions at least as good as the last one found.
    pub fn optimise<B, T, O>(
        &mut self,
        brancher: &mut B,
        termination: &mut T,
        mut optimisation_procedure: O,
    ) -> OptimisationResult
    where
        B: Brancher,
        T: TerminationCondition,
        O: OptimisationProcedure,
    {
        debug!(
            "Optimising a model with {} variables and {} propagators",
            self.num_variables(),
            self.satisfaction_solver.num_propagators()
        );
        optimisation_procedure.optimise(brancher, termination, self)
    }

    /// Creates a [`Brancher`] over all variables created so far, in order of creation. It selects
    /// the variable with the smallest domain and assigns it its smallest value.
    pub fn default_brancher(&self) -> DefaultBrancher {
        let variables = self
            .satisfaction_solver
            .get_assignments()
            .get_domains()
            .collect::<Vec<_>>();

        IndependentVariableValueBrancher::new(FirstFail::new(&variables), InDomainMin)
    }

    /// Logs the statistics of the solver if statistic logging has been configured.
    pub fn log_statistics(&self) {
        if should_log_statistics() {
            self.satisfaction_solver.log_statistics();
            log_statistic("engine_num_variables", self.num_variables());
            log_statistic_postfix();
        }
    }

    /// Logs a [`Solution`] value per named variable, at debug level.
    pub fn log_solution(&self, solution: &Solution) {
        use crate::results::ProblemSolution;

        for domain_id in (0..solution.num_domains() as u32).map(DomainId::new) {
            if let Some(name) = self.variable_name(domain_id) {
                debug!("{name} = {}", solution.get_integer_value(domain_id));
            }
        }
    }
}
