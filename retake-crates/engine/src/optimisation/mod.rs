//! Contains structures related to optimisation.
use std::fmt::Display;

use crate::branching::Brancher;
use crate::results::OptimisationResult;
use crate::termination::TerminationCondition;
use crate::Solver;

pub mod linear_sat_unsat;
pub mod solution_callback;

/// A procedure which optimises an objective by repeatedly solving the model in the [`Solver`].
pub trait OptimisationProcedure {
    fn optimise<B: Brancher, T: TerminationCondition>(
        &mut self,
        brancher: &mut B,
        termination: &mut T,
        solver: &mut Solver,
    ) -> OptimisationResult;
}

/// The direction of the optimisation, either maximising or minimising.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptimisationDirection {
    Maximise,
    Minimise,
}

impl Display for OptimisationDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OptimisationDirection::Maximise => write!(f, "maximise"),
            OptimisationDirection::Minimise => write!(f, "minimise"),
        }
    }
}
