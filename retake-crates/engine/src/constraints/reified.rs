use std::ops::RangeInclusive;

use super::Constraint;
use crate::propagators::InRangeReifiedPropagator;
use crate::variables::DomainId;
use crate::variables::Literal;

/// Creates the [`Constraint`] `literal <-> (var in range)`.
pub fn in_range_reified(
    var: DomainId,
    range: RangeInclusive<i32>,
    literal: Literal,
) -> impl Constraint {
    InRangeReifiedPropagator::new(var, *range.start(), *range.end(), literal)
}
