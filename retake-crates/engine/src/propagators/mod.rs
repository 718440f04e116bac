//! Contains the propagator implementations of the engine.
//!
//! See [`crate::engine::propagation`] for info on propagators.

mod all_different_with_capacity;
pub(crate) mod arithmetic;
pub(crate) mod binary;
mod in_range_reified;

pub(crate) use all_different_with_capacity::AllDifferentWithCapacityPropagator;
pub(crate) use arithmetic::*;
pub(crate) use binary::*;
pub(crate) use in_range_reified::InRangeReifiedPropagator;
