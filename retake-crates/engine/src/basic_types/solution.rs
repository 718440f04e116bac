use crate::containers::KeyedVec;
use crate::engine::variables::DomainId;
use crate::engine::variables::Literal;

/// A trait which specifies the common behaviour of solutions.
pub trait ProblemSolution {
    /// Returns the number of variables in the solution.
    fn num_domains(&self) -> usize;

    /// Returns the value assigned to the given variable.
    ///
    /// # Panics
    /// If the variable was created after the solution was found.
    fn get_integer_value(&self, domain: DomainId) -> i32;

    /// Returns the truth value assigned to the given literal.
    fn get_literal_value(&self, literal: Literal) -> bool {
        self.get_integer_value(literal.get_integer_variable()) == 1
    }
}

/// An assignment of a value to every variable that existed when it was found.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Solution {
    values: KeyedVec<DomainId, i32>,
}

impl Solution {
    pub(crate) fn new(values: KeyedVec<DomainId, i32>) -> Self {
        Self { values }
    }

    pub fn contains_domain_id(&self, domain_id: DomainId) -> bool {
        (domain_id.id() as usize) < self.values.len()
    }
}

impl ProblemSolution for Solution {
    fn num_domains(&self) -> usize {
        self.values.len()
    }

    fn get_integer_value(&self, domain: DomainId) -> i32 {
        self.values[domain]
    }
}
