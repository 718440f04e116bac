use std::fmt::Display;

use super::DomainId;
use crate::engine::predicates::Predicate;
use crate::engine::predicates::PredicateConstructor;

/// A propositional variable. It is backed by an integer variable with the domain `{0, 1}`, where
/// `1` means true.
#[derive(Clone, PartialEq, Eq, Copy, Hash, Debug, PartialOrd, Ord)]
pub struct Literal {
    integer_variable: DomainId,
}

impl Literal {
    pub(crate) fn new(integer_variable: DomainId) -> Literal {
        Literal { integer_variable }
    }

    pub fn get_integer_variable(&self) -> DomainId {
        self.integer_variable
    }

    pub fn get_true_predicate(&self) -> Predicate {
        self.integer_variable.equality_predicate(1)
    }

    pub fn get_false_predicate(&self) -> Predicate {
        self.integer_variable.equality_predicate(0)
    }
}

impl Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{} == 1]", self.integer_variable)
    }
}
