use super::SelectionContext;
use crate::engine::predicates::Predicate;
use crate::results::Solution;
use crate::statistics::StatisticLogger;

/// A branching strategy; it determines which part of the search space the solver explores next.
///
/// Every decision must remove at least one value from the domain of its variable; a brancher which
/// returns a decision that already holds leads to undefined behaviour of the search.
pub trait Brancher {
    /// Logs statistics of the brancher using the provided [`StatisticLogger`].
    fn log_statistics(&self, _statistic_logger: StatisticLogger) {}

    /// Returns the next decision, or [`None`] if all variables under consideration are fixed.
    ///
    /// The decision is not applied by the brancher; the solver does so.
    fn next_decision(&mut self, context: &mut SelectionContext) -> Option<Predicate>;

    /// Called after a conflict has been found, before backtracking.
    fn on_conflict(&mut self) {}

    /// Called whenever the solver backtracks.
    fn on_backtrack(&mut self) {}

    /// Called when a solution is found.
    fn on_solution(&mut self, _solution: &Solution) {}
}

impl<B: Brancher + ?Sized> Brancher for Box<B> {
    fn log_statistics(&self, statistic_logger: StatisticLogger) {
        (**self).log_statistics(statistic_logger)
    }

    fn next_decision(&mut self, context: &mut SelectionContext) -> Option<Predicate> {
        (**self).next_decision(context)
    }

    fn on_conflict(&mut self) {
        (**self).on_conflict()
    }

    fn on_backtrack(&mut self) {
        (**self).on_backtrack()
    }

    fn on_solution(&mut self, solution: &Solution) {
        (**self).on_solution(solution)
    }
}
