//! Implementations of [`Brancher`][crate::branching::Brancher].
pub mod independent_variable_value_brancher;
