mod linear_less_or_equal;
mod maximum;

pub(crate) use linear_less_or_equal::LinearLessOrEqualPropagator;
pub(crate) use maximum::MaximumPropagator;
