use crate::basic_types::HashSet;
use crate::engine::predicates::Predicate;
use crate::engine::predicates::PredicateType;

/// The set of values an integer variable can still take.
///
/// Values are stored as a membership vector offset by the initial lower-bound, together with the
/// current bounds and the number of remaining values. An empty domain is represented by a size
/// of zero; its bounds are then meaningless.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct IntegerDomain {
    offset: i32,
    is_present: Vec<bool>,
    lower_bound: i32,
    upper_bound: i32,
    size: usize,
}

impl IntegerDomain {
    /// Create the domain `[lower_bound, upper_bound]`.
    pub(crate) fn interval(lower_bound: i32, upper_bound: i32) -> IntegerDomain {
        if lower_bound > upper_bound {
            return IntegerDomain::sparse(&HashSet::default());
        }

        let size = (upper_bound - lower_bound) as usize + 1;
        IntegerDomain {
            offset: lower_bound,
            is_present: vec![true; size],
            lower_bound,
            upper_bound,
            size,
        }
    }

    /// Create a domain containing exactly the given values.
    pub(crate) fn sparse(values: &HashSet<i32>) -> IntegerDomain {
        let Some(&lower_bound) = values.iter().min() else {
            return IntegerDomain {
                offset: 0,
                is_present: vec![],
                lower_bound: 0,
                upper_bound: -1,
                size: 0,
            };
        };
        let upper_bound = values.iter().copied().max().unwrap_or(lower_bound);

        let mut is_present = vec![false; (upper_bound - lower_bound) as usize + 1];
        for &value in values {
            is_present[(value - lower_bound) as usize] = true;
        }

        IntegerDomain {
            offset: lower_bound,
            is_present,
            lower_bound,
            upper_bound,
            size: values.len(),
        }
    }

    pub(crate) fn lower_bound(&self) -> i32 {
        self.lower_bound
    }

    pub(crate) fn upper_bound(&self) -> i32 {
        self.upper_bound
    }

    pub(crate) fn size(&self) -> usize {
        self.size
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.size == 0
    }

    pub(crate) fn is_fixed(&self) -> bool {
        self.size == 1
    }

    pub(crate) fn contains(&self, value: i32) -> bool {
        if self.is_empty() || value < self.lower_bound || value > self.upper_bound {
            return false;
        }

        self.is_present[(value - self.offset) as usize]
    }

    /// The values in the domain, in increasing order.
    pub(crate) fn iter(&self) -> impl Iterator<Item = i32> + '_ {
        let values = if self.is_empty() {
            0..=-1
        } else {
            self.lower_bound..=self.upper_bound
        };

        values.filter(move |&value| self.is_present[(value - self.offset) as usize])
    }

    /// Whether the predicate holds for every value in the domain.
    pub(crate) fn entails(&self, predicate: Predicate) -> bool {
        let value = predicate.get_right_hand_side();
        match predicate.get_predicate_type() {
            PredicateType::LowerBound => self.lower_bound >= value,
            PredicateType::UpperBound => self.upper_bound <= value,
            PredicateType::NotEqual => !self.contains(value),
            PredicateType::Equal => self.is_fixed() && self.lower_bound == value,
        }
    }

    /// Restrict the domain to the values satisfying the predicate. Returns whether the domain
    /// changed.
    pub(crate) fn apply(&mut self, predicate: Predicate) -> bool {
        let value = predicate.get_right_hand_side();
        match predicate.get_predicate_type() {
            PredicateType::LowerBound => self.remove_below(value),
            PredicateType::UpperBound => self.remove_above(value),
            PredicateType::NotEqual => self.remove(value),
            PredicateType::Equal => self.fix(value),
        }
    }

    fn remove(&mut self, value: i32) -> bool {
        if !self.contains(value) {
            return false;
        }

        self.is_present[(value - self.offset) as usize] = false;
        self.size -= 1;
        self.update_bounds();
        true
    }

    fn remove_below(&mut self, bound: i32) -> bool {
        if self.is_empty() || bound <= self.lower_bound {
            return false;
        }

        for value in self.lower_bound..bound.min(self.upper_bound + 1) {
            let index = (value - self.offset) as usize;
            if self.is_present[index] {
                self.is_present[index] = false;
                self.size -= 1;
            }
        }
        self.update_bounds();
        true
    }

    fn remove_above(&mut self, bound: i32) -> bool {
        if self.is_empty() || bound >= self.upper_bound {
            return false;
        }

        for value in bound.max(self.lower_bound - 1) + 1..=self.upper_bound {
            let index = (value - self.offset) as usize;
            if self.is_present[index] {
                self.is_present[index] = false;
                self.size -= 1;
            }
        }
        self.update_bounds();
        true
    }

    fn fix(&mut self, value: i32) -> bool {
        if self.is_empty() {
            return false;
        }

        if !self.contains(value) {
            self.is_present.iter_mut().for_each(|present| *present = false);
            self.size = 0;
            return true;
        }

        if self.is_fixed() {
            return false;
        }

        let lower = self.lower_bound;
        let upper = self.upper_bound;
        let _ = self.remove_below(value);
        let _ = self.remove_above(value);
        lower != value || upper != value
    }

    fn update_bounds(&mut self) {
        if self.is_empty() {
            return;
        }

        while !self.is_present[(self.lower_bound - self.offset) as usize] {
            self.lower_bound += 1;
        }
        while !self.is_present[(self.upper_bound - self.offset) as usize] {
            self.upper_bound -= 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::variables::DomainId;
    use crate::predicate;

    fn sparse(values: &[i32]) -> IntegerDomain {
        IntegerDomain::sparse(&values.iter().copied().collect())
    }

    #[test]
    fn sparse_domain_keeps_holes() {
        let domain = sparse(&[0, 3, 5]);

        assert_eq!(domain.lower_bound(), 0);
        assert_eq!(domain.upper_bound(), 5);
        assert_eq!(domain.size(), 3);
        assert!(!domain.contains(1));
        assert_eq!(domain.iter().collect::<Vec<_>>(), vec![0, 3, 5]);
    }

    #[test]
    fn removing_the_lower_bound_moves_it_to_the_next_present_value() {
        let x = DomainId::new(0);
        let mut domain = sparse(&[0, 3, 5]);

        assert!(domain.apply(predicate![x != 0]));

        assert_eq!(domain.lower_bound(), 3);
        assert_eq!(domain.size(), 2);
    }

    #[test]
    fn bounds_skip_holes() {
        let x = DomainId::new(0);
        let mut domain = sparse(&[0, 3, 5, 8]);

        assert!(domain.apply(predicate![x >= 1]));
        assert!(domain.apply(predicate![x <= 7]));

        assert_eq!(domain.iter().collect::<Vec<_>>(), vec![3, 5]);
    }

    #[test]
    fn fixing_to_an_absent_value_empties_the_domain() {
        let x = DomainId::new(0);
        let mut domain = IntegerDomain::interval(0, 3);

        assert!(domain.apply(predicate![x == 7]));

        assert!(domain.is_empty());
        assert_eq!(domain.iter().count(), 0);
    }

    #[test]
    fn fixing_to_a_present_value_fixes_the_domain() {
        let x = DomainId::new(0);
        let mut domain = IntegerDomain::interval(0, 3);

        assert!(domain.apply(predicate![x == 2]));

        assert!(domain.is_fixed());
        assert!(domain.entails(predicate![x == 2]));
        assert!(!domain.apply(predicate![x == 2]));
    }

    #[test]
    fn bounds_beyond_the_domain_empty_it() {
        let x = DomainId::new(0);
        let mut domain = IntegerDomain::interval(2, 4);

        assert!(domain.apply(predicate![x >= 10]));

        assert!(domain.is_empty());
    }
}
