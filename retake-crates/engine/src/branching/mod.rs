//! Contains structures and traits to define the decision making procedure of the [`Solver`].
//!
//! A [`Brancher`] returns the next decision as a [`Predicate`][crate::predicates::Predicate]. The
//! solver first explores the branch in which the decision holds; if that branch contains no
//! solution it continues in the branch where the negation of the decision holds.
//!
//! Most branchers are composed of a [`VariableSelector`] and a [`ValueSelector`] through the
//! [`IndependentVariableValueBrancher`][branchers::independent_variable_value_brancher::IndependentVariableValueBrancher]:
//! ```rust
//! # use retake_engine::Solver;
//! # use retake_engine::branching::branchers::independent_variable_value_brancher::IndependentVariableValueBrancher;
//! # use retake_engine::branching::value_selection::InDomainMin;
//! # use retake_engine::branching::variable_selection::InputOrder;
//! # use retake_engine::results::SatisfactionResult;
//! # use retake_engine::results::ProblemSolution;
//! # use retake_engine::termination::Indefinite;
//! let mut solver = Solver::default();
//! let x = solver.new_bounded_integer(2, 5);
//! let y = solver.new_bounded_integer(0, 5);
//!
//! let mut brancher =
//!     IndependentVariableValueBrancher::new(InputOrder::new(&[y, x]), InDomainMin);
//!
//! let result = solver.satisfy(&mut brancher, &mut Indefinite);
//! if let SatisfactionResult::Satisfiable(solution) = result {
//!     assert_eq!(solution.get_integer_value(x), 2);
//!     assert_eq!(solution.get_integer_value(y), 0);
//! } else {
//!     panic!("the problem has no constraints");
//! }
//! ```
mod brancher;
pub mod branchers;
mod selection_context;
pub mod value_selection;
pub mod variable_selection;

pub use brancher::Brancher;
pub use selection_context::SelectionContext;

#[cfg(doc)]
use crate::Solver;
#[cfg(doc)]
use value_selection::ValueSelector;
#[cfg(doc)]
use variable_selection::VariableSelector;
