#[cfg(doc)]
use crate::branching::Brancher;
use crate::engine::variables::DomainId;
use crate::engine::Assignments;

/// The context provided to a [`Brancher`]; it gives read access to the current domains.
#[derive(Debug, Clone, Copy)]
pub struct SelectionContext<'a> {
    assignments: &'a Assignments,
}

impl<'a> SelectionContext<'a> {
    pub(crate) fn new(assignments: &'a Assignments) -> Self {
        SelectionContext { assignments }
    }

    /// Returns the number of values in the domain of the variable.
    pub fn get_size_of_domain(&self, var: DomainId) -> usize {
        self.assignments.get_domain_size(var)
    }

    pub fn lower_bound(&self, var: DomainId) -> i32 {
        self.assignments.get_lower_bound(var)
    }

    pub fn upper_bound(&self, var: DomainId) -> i32 {
        self.assignments.get_upper_bound(var)
    }

    /// Determines whether the provided value is in the domain of the variable.
    pub fn contains(&self, var: DomainId, value: i32) -> bool {
        self.assignments.is_value_in_domain(var, value)
    }

    /// Determines whether the domain of the variable contains a single value.
    pub fn is_integer_fixed(&self, var: DomainId) -> bool {
        self.assignments.is_domain_fixed(var)
    }

    /// Returns all variables of the solver, in order of creation.
    pub fn get_domains(&self) -> impl Iterator<Item = DomainId> + '_ {
        self.assignments.get_domains()
    }
}

#[cfg(test)]
impl SelectionContext<'_> {
    /// Creates assignments with one interval domain per provided `(lower_bound, upper_bound)`.
    pub(crate) fn create_for_testing(domains: Vec<(i32, i32)>) -> Assignments {
        let mut assignments = Assignments::default();

        for (lower_bound, upper_bound) in domains {
            let _ = assignments.grow(lower_bound, upper_bound);
        }

        assignments
    }
}
