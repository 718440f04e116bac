use super::Constraint;
use crate::propagators::LinearLessOrEqualPropagator;
use crate::propagators::MaximumPropagator;
use crate::variables::DomainId;

/// Creates the [`Constraint`] `\sum terms_i <= rhs`.
///
/// [`Literal`][crate::variables::Literal]s can be used as terms, in which case the constraint
/// bounds the number of true literals.
pub fn less_than_or_equals(
    terms: impl IntoIterator<Item = impl Into<DomainId>>,
    rhs: i32,
) -> impl Constraint {
    LinearLessOrEqualPropagator::new(terms.into_iter().map(Into::into).collect(), rhs)
}

/// Creates the [`Constraint`] `max(array) = rhs`.
pub fn maximum(array: impl IntoIterator<Item = DomainId>, rhs: DomainId) -> impl Constraint {
    MaximumPropagator::new(array.into_iter().collect(), rhs)
}
