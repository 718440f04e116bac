mod outputs;
pub(crate) mod solver;

pub mod results {
    //! Contains the outputs of solving using the [`Solver`].
    //!
    //! We differentiate between 2 different types of results:
    //! - For a **satisfaction** problem ([`SatisfactionResult`])
    //! - For an **optimisation** problem ([`OptimisationResult`])
    pub use crate::api::outputs::OptimisationResult;
    pub use crate::api::outputs::SatisfactionResult;
    pub use crate::basic_types::ProblemSolution;
    pub use crate::basic_types::Solution;
    #[cfg(doc)]
    use crate::Solver;
}

pub mod variables {
    //! Contains the variables which are used by the [`Solver`].
    //!
    //! - Integer variables are represented by [`DomainId`]s. They are created using
    //!   [`Solver::new_bounded_integer`] for a domain between a lower-bound and an upper-bound, or
    //!   using [`Solver::new_sparse_integer`] for a domain with holes.
    //! - Propositional variables are represented by [`Literal`]s, created using
    //!   [`Solver::new_literal`]. A literal is an integer variable with the domain `{0, 1}`.
    pub use crate::engine::variables::DomainId;
    pub use crate::engine::variables::Literal;
    #[cfg(doc)]
    use crate::Solver;
}

pub mod termination {
    //! Contains the conditions which are used to determine when the [`Solver`] should terminate
    //! even when the state of the satisfaction/optimisation problem is unknown.
    //!
    //! The most common example is [`TimeBudget`], which terminates the [`Solver`] whenever the
    //! time budget is exceeded.
    pub use crate::engine::termination::combinator::*;
    pub use crate::engine::termination::decision_budget::*;
    pub use crate::engine::termination::indefinite::*;
    pub use crate::engine::termination::time_budget::*;
    pub use crate::engine::termination::TerminationCondition;
    #[cfg(doc)]
    use crate::Solver;
}

pub mod predicates {
    //! Contains the [`Predicate`]s which are used as decisions and to tighten domains; a
    //! predicate is an atomic constraint `[x >= v]`, `[x <= v]`, `[x == v]` or `[x != v]` over a
    //! single variable. Predicates are most conveniently created with the
    //! [`predicate!`][crate::predicate] macro.
    pub use crate::engine::predicates::Predicate;
    pub use crate::engine::predicates::PredicateConstructor;
    pub use crate::engine::predicates::PredicateType;
}
