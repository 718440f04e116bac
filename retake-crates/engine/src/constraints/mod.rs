//! Defines the constraints which can be added to the [`Solver`].
//!
//! A constraint is a relation over variables. In the solver, constraints are enforced through
//! propagators, so a constraint can be viewed as a collection of propagators.
//!
//! # Example
//! ```
//! # use retake_engine::constraints;
//! # use retake_engine::Solver;
//! let mut solver = Solver::default();
//!
//! let a = solver.new_bounded_integer(0, 3);
//! let b = solver.new_bounded_integer(0, 3);
//!
//! solver
//!     .add_constraint(constraints::binary_equals(a, b))
//!     .post()
//!     .expect("the constraint is satisfiable");
//! ```
mod arithmetic;
mod constraint_poster;
mod reified;

pub use arithmetic::*;
pub use constraint_poster::*;
pub use reified::*;

use std::ops::RangeInclusive;

use crate::engine::propagation::Propagator;
use crate::propagators::AllDifferentWithCapacityPropagator;
use crate::propagators::BinaryEqualsPropagator;
use crate::propagators::BinaryNotEqualsPropagator;
use crate::variables::DomainId;
use crate::ConstraintOperationError;
use crate::Solver;

/// A [`Constraint`] is a relation over variables; it rules out the assignments which violate it.
pub trait Constraint {
    /// Add the [`Constraint`] to the [`Solver`].
    ///
    /// This method returns a [`ConstraintOperationError`] if the addition of the [`Constraint`] led
    /// to a root-level conflict.
    fn post(self, solver: &mut Solver) -> Result<(), ConstraintOperationError>;
}

impl<ConcretePropagator> Constraint for ConcretePropagator
where
    ConcretePropagator: Propagator + 'static,
{
    fn post(self, solver: &mut Solver) -> Result<(), ConstraintOperationError> {
        solver.add_propagator(self)
    }
}

/// Creates the [`Constraint`] `a != b`.
pub fn binary_not_equals(a: DomainId, b: DomainId) -> impl Constraint {
    BinaryNotEqualsPropagator::new(a, b)
}

/// Creates the [`Constraint`] `a == b`.
pub fn binary_equals(a: DomainId, b: DomainId) -> impl Constraint {
    BinaryEqualsPropagator::new(a, b)
}

/// Creates the [`Constraint`] that all `variables` take distinct values, of which at most
/// `capacity` lie in any one of the `groups`.
///
/// The groups must be disjoint. Values outside every group are only required to be distinct, so
/// without groups this is the classic all-different constraint. Propagation removes every value
/// which cannot be part of a solution of this constraint on its own.
pub fn all_different_with_capacity(
    variables: impl IntoIterator<Item = DomainId>,
    groups: impl IntoIterator<Item = RangeInclusive<i32>>,
    capacity: usize,
) -> impl Constraint {
    AllDifferentWithCapacityPropagator::new(variables.into_iter().collect(), groups, capacity)
}
