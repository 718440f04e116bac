//! # Retake engine
//! A small finite-domain constraint programming engine. It supports integer variables with
//! arbitrary (sparse) domains, propositional variables represented as 0-1 integers, and a handful
//! of constraints:
//! * [Binary (dis)equality][crate::constraints::binary_equals].
//! * [Reified range membership][crate::constraints::in_range_reified].
//! * [Linear sums bounded from above][crate::constraints::less_than_or_equals].
//! * [Maximum][crate::constraints::maximum].
//!
//! The search is a depth-first search which propagates every constraint to a fixpoint after each
//! decision. The engine contains no source of randomness; solving the same model twice yields the
//! same solution.
//!
//! # Using the engine
//! The first step is **adding variables** and **adding constraints** to the [`Solver`]:
//! ```rust
//! # use retake_engine::Solver;
//! # use retake_engine::constraints;
//! let mut solver = Solver::default();
//!
//! let x = solver.new_bounded_integer(0, 2);
//! let y = solver.new_sparse_integer(vec![0, 2, 4]);
//! let objective = solver.new_bounded_integer(0, 10);
//!
//! solver
//!     .add_constraint(constraints::binary_not_equals(x, y))
//!     .post()
//!     .expect("not infeasible at the root");
//! solver
//!     .add_constraint(constraints::maximum([x, y], objective))
//!     .post()
//!     .expect("not infeasible at the root");
//! ```
//!
//! Then the model can be **optimised** under a [`termination::TerminationCondition`] with a
//! [`branching::Brancher`]:
//! ```rust
//! # use retake_engine::Solver;
//! # use retake_engine::constraints;
//! # use retake_engine::optimisation::linear_sat_unsat::LinearSatUnsat;
//! # use retake_engine::optimisation::OptimisationDirection;
//! # use retake_engine::results::OptimisationResult;
//! # use retake_engine::results::ProblemSolution;
//! # use retake_engine::results::Solution;
//! # use retake_engine::termination::Indefinite;
//! # let mut solver = Solver::default();
//! # let x = solver.new_bounded_integer(0, 2);
//! # let y = solver.new_sparse_integer(vec![0, 2, 4]);
//! # let objective = solver.new_bounded_integer(0, 10);
//! # solver.add_constraint(constraints::binary_not_equals(x, y)).post().unwrap();
//! # solver.add_constraint(constraints::maximum([x, y], objective)).post().unwrap();
//! let mut brancher = solver.default_brancher();
//! let callback = |_: &Solver, _: &Solution| {};
//!
//! let result = solver.optimise(
//!     &mut brancher,
//!     &mut Indefinite,
//!     LinearSatUnsat::new(OptimisationDirection::Minimise, objective, callback),
//! );
//!
//! if let OptimisationResult::Optimal(solution) = result {
//!     assert_eq!(solution.get_integer_value(objective), 1);
//! } else {
//!     panic!("the problem has an optimal solution");
//! }
//! ```
//!
//! ## Feature Flags
//! - `debug-checks`: Enable expensive assertions in the engine.
pub(crate) mod basic_types;
pub mod containers;
pub(crate) mod engine;
pub(crate) mod propagators;
pub mod asserts;

pub mod branching;
pub mod constraints;
pub mod optimisation;
pub mod statistics;

// We declare a private module with public use, so that all exports from API are exports directly
// from the crate.
mod api;

pub use api::*;

pub use crate::api::solver::Solver;
pub use crate::basic_types::ConstraintOperationError;
