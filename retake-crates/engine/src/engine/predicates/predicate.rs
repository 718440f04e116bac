use std::fmt::Display;

use crate::engine::variables::DomainId;

/// The kind of atomic constraint a [`Predicate`] expresses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PredicateType {
    LowerBound,
    UpperBound,
    NotEqual,
    Equal,
}

/// An atomic constraint over a single variable: `[x >= v]`, `[x <= v]`, `[x == v]` or
/// `[x != v]`. Predicates are used as decisions by the search and to tighten domains at the root.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Predicate {
    domain: DomainId,
    predicate_type: PredicateType,
    value: i32,
}

impl Predicate {
    pub(crate) fn new(domain: DomainId, predicate_type: PredicateType, value: i32) -> Self {
        Predicate {
            domain,
            predicate_type,
            value,
        }
    }

    pub fn get_domain(&self) -> DomainId {
        self.domain
    }

    pub fn get_right_hand_side(&self) -> i32 {
        self.value
    }

    pub fn get_predicate_type(&self) -> PredicateType {
        self.predicate_type
    }

    pub fn is_equality_predicate(&self) -> bool {
        self.predicate_type == PredicateType::Equal
    }

    pub fn is_not_equal_predicate(&self) -> bool {
        self.predicate_type == PredicateType::NotEqual
    }

    pub fn is_lower_bound_predicate(&self) -> bool {
        self.predicate_type == PredicateType::LowerBound
    }

    pub fn is_upper_bound_predicate(&self) -> bool {
        self.predicate_type == PredicateType::UpperBound
    }
}

impl std::ops::Not for Predicate {
    type Output = Predicate;

    fn not(self) -> Self::Output {
        let (predicate_type, value) = match self.predicate_type {
            PredicateType::LowerBound => (PredicateType::UpperBound, self.value - 1),
            PredicateType::UpperBound => (PredicateType::LowerBound, self.value + 1),
            PredicateType::NotEqual => (PredicateType::Equal, self.value),
            PredicateType::Equal => (PredicateType::NotEqual, self.value),
        };

        Predicate::new(self.domain, predicate_type, value)
    }
}

impl Display for Predicate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self.predicate_type {
            PredicateType::LowerBound => ">=",
            PredicateType::UpperBound => "<=",
            PredicateType::NotEqual => "!=",
            PredicateType::Equal => "==",
        };

        write!(f, "[{} {operator} {}]", self.domain, self.value)
    }
}
