//! Houses the solver which searches for assignments that satisfy all propagators.
use std::time::Instant;

use log::debug;
use log::trace;

use crate::basic_types::ConstraintOperationError;
use crate::basic_types::HashSet;
use crate::basic_types::PropagationStatus;
use crate::basic_types::Solution;
use crate::branching::Brancher;
use crate::branching::SelectionContext;
use crate::containers::KeyedVec;
use crate::engine::predicates::Predicate;
use crate::engine::propagation::PropagationContextMut;
use crate::engine::propagation::Propagator;
use crate::engine::propagation::PropagatorId;
use crate::engine::propagation::PropagatorInitialisationContext;
use crate::engine::propagation::PropagatorQueue;
use crate::engine::propagation::PropagatorStore;
use crate::engine::propagation::WatchList;
use crate::engine::termination::TerminationCondition;
use crate::engine::variables::DomainId;
use crate::engine::Assignments;
use crate::engine::SolverStatistics;
use crate::predicate;
use crate::retake_assert_eq_simple;
use crate::retake_assert_extreme;
use crate::retake_assert_simple;
use crate::statistics::Statistic;
use crate::statistics::StatisticLogger;

/// The outcome of a call to [`ConstraintSatisfactionSolver::solve`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CSPSolverExecutionFlag {
    /// All variables are fixed; the solution can be read from the solver.
    Feasible,
    /// The search space has been exhausted without finding a solution.
    Infeasible,
    /// The termination condition triggered before a conclusion was reached.
    Timeout,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum CSPSolverState {
    #[default]
    Ready,
    /// Every variable is fixed after a successful search; the solver is not at the root.
    ContainsSolution,
    /// The model has no solution; nothing can be added to it anymore.
    Infeasible,
}

/// A depth-first search with propagation to a fixpoint after every decision.
///
/// When a decision `d` leads to a conflict, the solver backtracks to the level before `d` and
/// applies `!d` there. If there is no decision left to undo the problem is infeasible. Between
/// calls to [`ConstraintSatisfactionSolver::solve`] the solver can be extended with new variables,
/// propagators and root-level predicates.
#[derive(Debug, Default)]
pub(crate) struct ConstraintSatisfactionSolver {
    state: CSPSolverState,
    assignments: Assignments,
    propagators: PropagatorStore,
    watch_list: WatchList,
    propagator_queue: PropagatorQueue,
    /// The decision taken at each decision level.
    decisions: Vec<Predicate>,
    variable_names: KeyedVec<DomainId, Option<String>>,
    statistics: SolverStatistics,
}

// Methods that create variables and read the state of the solver.
impl ConstraintSatisfactionSolver {
    pub(crate) fn create_new_integer_variable(
        &mut self,
        lower_bound: i32,
        upper_bound: i32,
        name: Option<String>,
    ) -> DomainId {
        retake_assert_simple!(
            self.assignments.get_decision_level() == 0,
            "Variables can only be created at the root"
        );

        self.watch_list.grow();
        let _ = self.variable_names.push(name);
        self.assignments.grow(lower_bound, upper_bound)
    }

    pub(crate) fn create_new_integer_variable_sparse(
        &mut self,
        values: Vec<i32>,
        name: Option<String>,
    ) -> DomainId {
        retake_assert_simple!(
            self.assignments.get_decision_level() == 0,
            "Variables can only be created at the root"
        );

        let values = values.into_iter().collect::<HashSet<i32>>();
        self.watch_list.grow();
        let _ = self.variable_names.push(name);
        self.assignments.grow_sparse(&values)
    }

    pub(crate) fn get_variable_name(&self, domain_id: DomainId) -> Option<&str> {
        self.variable_names
            .get(domain_id)
            .and_then(|name| name.as_deref())
    }

    pub(crate) fn get_assignments(&self) -> &Assignments {
        &self.assignments
    }

    pub(crate) fn is_infeasible(&self) -> bool {
        self.state == CSPSolverState::Infeasible
    }

    pub(crate) fn num_propagators(&self) -> usize {
        self.propagators.num_propagators()
    }

    pub(crate) fn log_statistics(&self) {
        self.statistics
            .log(StatisticLogger::default().attach_to_prefix("engine"));
    }
}

// Methods that extend the model.
impl ConstraintSatisfactionSolver {
    /// Adds the propagator and propagates at the root.
    ///
    /// If this leads to a conflict, the solver ends up in an infeasible state and every further
    /// addition fails with [`ConstraintOperationError::InfeasibleState`].
    pub(crate) fn add_propagator(
        &mut self,
        mut propagator: Box<dyn Propagator>,
    ) -> Result<(), ConstraintOperationError> {
        if self.is_infeasible() {
            return Err(ConstraintOperationError::InfeasibleState);
        }
        self.restore_state_at_root();

        let propagator_id = self.propagators.next_id();
        propagator.initialise_at_root(&mut PropagatorInitialisationContext::new(
            &mut self.watch_list,
            propagator_id,
        ));
        let allocated_id = self.propagators.alloc(propagator);
        retake_assert_eq_simple!(propagator_id, allocated_id);

        self.propagator_queue.enqueue_propagator(propagator_id);
        if self.propagate().is_err() {
            self.state = CSPSolverState::Infeasible;
            return Err(ConstraintOperationError::InfeasiblePropagator);
        }

        Ok(())
    }

    /// Permanently restricts the domain of a variable such that the predicate holds.
    pub(crate) fn add_root_predicate(
        &mut self,
        predicate: Predicate,
    ) -> Result<(), ConstraintOperationError> {
        if self.is_infeasible() {
            return Err(ConstraintOperationError::InfeasibleState);
        }
        self.restore_state_at_root();

        let status = self
            .assignments
            .post_predicate(predicate)
            .and_then(|_| self.propagate());
        if status.is_err() {
            debug!("Adding {predicate} at the root made the problem infeasible");
            self.state = CSPSolverState::Infeasible;
            return Err(ConstraintOperationError::InfeasibleRootPredicate);
        }

        Ok(())
    }
}

// Methods that perform the search.
impl ConstraintSatisfactionSolver {
    /// Searches for an assignment which satisfies all propagators.
    pub(crate) fn solve(
        &mut self,
        termination: &mut impl TerminationCondition,
        brancher: &mut impl Brancher,
    ) -> CSPSolverExecutionFlag {
        let start_time = Instant::now();
        let flag = self.solve_internal(termination, brancher);
        self.statistics.time_spent_in_solver += start_time.elapsed().as_millis() as u64;

        debug!(
            "Search finished with {flag:?} after {} decisions and {} conflicts",
            self.statistics.num_decisions, self.statistics.num_conflicts
        );
        flag
    }

    fn solve_internal(
        &mut self,
        termination: &mut impl TerminationCondition,
        brancher: &mut impl Brancher,
    ) -> CSPSolverExecutionFlag {
        if self.is_infeasible() {
            return CSPSolverExecutionFlag::Infeasible;
        }

        self.restore_state_at_root();
        if let Some(domain_id) = self.assignments.find_empty_domain() {
            debug!("The domain of {domain_id} is empty at the root");
            self.state = CSPSolverState::Infeasible;
            return CSPSolverExecutionFlag::Infeasible;
        }
        if self.propagate().is_err() {
            self.state = CSPSolverState::Infeasible;
            return CSPSolverExecutionFlag::Infeasible;
        }

        loop {
            if termination.should_stop() {
                self.restore_state_at_root();
                return CSPSolverExecutionFlag::Timeout;
            }

            let Some(decision) = self.next_decision(brancher) else {
                retake_assert_simple!(self.assignments.all_domains_fixed());

                self.statistics.num_solutions += 1;
                self.state = CSPSolverState::ContainsSolution;
                return CSPSolverExecutionFlag::Feasible;
            };

            self.statistics.num_decisions += 1;
            termination.decision_has_been_made();

            self.assignments.increase_decision_level();
            self.decisions.push(decision);
            self.statistics.peak_depth = self
                .statistics
                .peak_depth
                .max(self.assignments.get_decision_level() as u64);
            trace!("Decision {decision} at level {}", self.decisions.len());

            let mut status = self.apply_and_propagate(decision);
            while status.is_err() {
                self.statistics.num_conflicts += 1;
                brancher.on_conflict();

                let Some(failed_decision) = self.decisions.pop() else {
                    self.state = CSPSolverState::Infeasible;
                    return CSPSolverExecutionFlag::Infeasible;
                };

                self.backtrack(self.decisions.len(), brancher);
                status = self.apply_and_propagate(!failed_decision);
            }
        }
    }

    /// Reads the values of all variables; only valid right after a feasible search.
    pub(crate) fn extract_solution(&self) -> Solution {
        retake_assert_eq_simple!(self.state, CSPSolverState::ContainsSolution);
        Solution::new(self.assignments.lower_bounds())
    }

    /// Undo all decisions and the changes which followed from them.
    pub(crate) fn restore_state_at_root(&mut self) {
        if self.assignments.get_decision_level() > 0 {
            self.decisions.clear();
            self.assignments.synchronise(0);
        }
        self.propagator_queue.clear();

        if self.state == CSPSolverState::ContainsSolution {
            self.state = CSPSolverState::Ready;
        }
    }

    /// The decision of the brancher, or a decision on a variable it does not consider if the
    /// brancher has none left while some variable is still unfixed.
    fn next_decision(&mut self, brancher: &mut impl Brancher) -> Option<Predicate> {
        let decision = brancher.next_decision(&mut SelectionContext::new(&self.assignments));
        if decision.is_some() {
            return decision;
        }

        let unfixed = self
            .assignments
            .get_domains()
            .find(|&domain_id| !self.assignments.is_domain_fixed(domain_id))?;
        let value = self.assignments.get_lower_bound(unfixed);
        Some(predicate!(unfixed == value))
    }

    fn backtrack(&mut self, decision_level: usize, brancher: &mut impl Brancher) {
        self.assignments.synchronise(decision_level);
        self.propagator_queue.clear();
        brancher.on_backtrack();
    }

    fn apply_and_propagate(&mut self, predicate: Predicate) -> PropagationStatus {
        let _ = self.assignments.post_predicate(predicate)?;
        retake_assert_extreme!(self.assignments.is_predicate_satisfied(predicate));
        self.propagate()
    }

    /// Calls propagators until no domain changes anymore or an inconsistency is found.
    fn propagate(&mut self) -> PropagationStatus {
        loop {
            for domain_id in self.assignments.drain_modified_domains() {
                for &propagator_id in self.watch_list.get_affected_propagators(domain_id) {
                    self.propagator_queue.enqueue_propagator(propagator_id);
                }
            }

            let Some(propagator_id) = self.propagator_queue.pop() else {
                return Ok(());
            };

            self.statistics.num_propagations += 1;
            if let Err(inconsistency) = self.call_propagator(propagator_id) {
                trace!("Propagator {propagator_id} failed with {inconsistency:?}");
                self.propagator_queue.clear();
                let _ = self.assignments.drain_modified_domains();
                return Err(inconsistency);
            }
        }
    }

    fn call_propagator(&mut self, propagator_id: PropagatorId) -> PropagationStatus {
        self.propagators
            .get_mut(propagator_id)
            .propagate(PropagationContextMut::new(&mut self.assignments))
    }
}
