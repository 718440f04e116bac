use super::domain::IntegerDomain;
use crate::basic_types::HashSet;
use crate::basic_types::Inconsistency;
use crate::containers::KeyedVec;
use crate::containers::StorageKey;
use crate::engine::predicates::Predicate;
use crate::engine::variables::DomainId;
use crate::retake_assert_moderate;
use crate::retake_assert_simple;

/// A change to a domain which can be undone when backtracking.
#[derive(Clone, Debug)]
struct TrailEntry {
    domain_id: DomainId,
    old_domain: IntegerDomain,
}

/// The domains of all integer variables, together with the trail which allows restoring them to
/// an earlier decision level.
#[derive(Clone, Debug, Default)]
pub(crate) struct Assignments {
    domains: KeyedVec<DomainId, IntegerDomain>,
    trail: Vec<TrailEntry>,
    /// The length of the trail at the start of each decision level above the root.
    level_starts: Vec<usize>,
    /// Domains which changed since the last call to [`Assignments::drain_modified_domains`].
    modified_domains: Vec<DomainId>,
    is_modified: HashSet<DomainId>,
}

impl Assignments {
    pub(crate) fn grow(&mut self, lower_bound: i32, upper_bound: i32) -> DomainId {
        self.domains
            .push(IntegerDomain::interval(lower_bound, upper_bound))
    }

    pub(crate) fn grow_sparse(&mut self, values: &HashSet<i32>) -> DomainId {
        self.domains.push(IntegerDomain::sparse(values))
    }

    pub(crate) fn num_domains(&self) -> u32 {
        self.domains.len() as u32
    }

    pub(crate) fn get_domains(&self) -> impl Iterator<Item = DomainId> {
        self.domains.keys()
    }

    pub(crate) fn get_lower_bound(&self, domain_id: DomainId) -> i32 {
        self.domains[domain_id].lower_bound()
    }

    pub(crate) fn get_upper_bound(&self, domain_id: DomainId) -> i32 {
        self.domains[domain_id].upper_bound()
    }

    pub(crate) fn get_domain_size(&self, domain_id: DomainId) -> usize {
        self.domains[domain_id].size()
    }

    pub(crate) fn get_domain_iter(&self, domain_id: DomainId) -> impl Iterator<Item = i32> + '_ {
        self.domains[domain_id].iter()
    }

    pub(crate) fn is_value_in_domain(&self, domain_id: DomainId, value: i32) -> bool {
        self.domains[domain_id].contains(value)
    }

    pub(crate) fn is_domain_fixed(&self, domain_id: DomainId) -> bool {
        self.domains[domain_id].is_fixed()
    }

    /// Returns a variable whose domain is empty, if there is one. Only variables created with an
    /// empty set of values can have an empty domain outside of propagation.
    pub(crate) fn find_empty_domain(&self) -> Option<DomainId> {
        self.domains
            .keys()
            .find(|&domain_id| self.domains[domain_id].is_empty())
    }

    pub(crate) fn all_domains_fixed(&self) -> bool {
        self.domains.iter().all(IntegerDomain::is_fixed)
    }

    pub(crate) fn is_predicate_satisfied(&self, predicate: Predicate) -> bool {
        self.domains[predicate.get_domain()].entails(predicate)
    }

    pub(crate) fn is_predicate_falsified(&self, predicate: Predicate) -> bool {
        self.domains[predicate.get_domain()].entails(!predicate)
    }

    pub(crate) fn get_decision_level(&self) -> usize {
        self.level_starts.len()
    }

    pub(crate) fn increase_decision_level(&mut self) {
        self.level_starts.push(self.trail.len());
    }

    /// Apply the predicate to the domain of its variable.
    ///
    /// Returns `Ok(true)` if the domain changed, `Ok(false)` if the predicate already held, and an
    /// [`Inconsistency::EmptyDomain`] if no value remains. An emptied domain stays on the trail so
    /// that backtracking restores it.
    pub(crate) fn post_predicate(&mut self, predicate: Predicate) -> Result<bool, Inconsistency> {
        let domain_id = predicate.get_domain();
        retake_assert_simple!(
            domain_id.index() < self.domains.len(),
            "The predicate {predicate} refers to an unknown variable"
        );

        if self.domains[domain_id].is_empty() {
            return Err(Inconsistency::EmptyDomain(domain_id));
        }

        if self.domains[domain_id].entails(predicate) {
            return Ok(false);
        }

        let old_domain = self.domains[domain_id].clone();
        let _ = self.domains[domain_id].apply(predicate);
        self.trail.push(TrailEntry {
            domain_id,
            old_domain,
        });

        if self.is_modified.insert(domain_id) {
            self.modified_domains.push(domain_id);
        }

        if self.domains[domain_id].is_empty() {
            return Err(Inconsistency::EmptyDomain(domain_id));
        }

        Ok(true)
    }

    /// Returns the domains which changed since the previous call.
    pub(crate) fn drain_modified_domains(&mut self) -> Vec<DomainId> {
        self.is_modified.clear();
        std::mem::take(&mut self.modified_domains)
    }

    /// Undo every change made above the given decision level.
    pub(crate) fn synchronise(&mut self, new_decision_level: usize) {
        retake_assert_simple!(
            new_decision_level <= self.get_decision_level(),
            "Cannot backtrack to a level which is higher than the current level"
        );

        if new_decision_level == self.get_decision_level() {
            return;
        }

        let trail_length = self.level_starts[new_decision_level];
        self.level_starts.truncate(new_decision_level);

        while self.trail.len() > trail_length {
            let Some(entry) = self.trail.pop() else {
                break;
            };
            self.domains[entry.domain_id] = entry.old_domain;
        }
        retake_assert_moderate!(self.trail.len() == trail_length);

        self.modified_domains.clear();
        self.is_modified.clear();
    }

    /// The current value of every variable; only meaningful when all domains are fixed.
    pub(crate) fn lower_bounds(&self) -> KeyedVec<DomainId, i32> {
        self.domains.iter().map(IntegerDomain::lower_bound).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predicate;

    #[test]
    fn synchronise_restores_domains_of_higher_levels() {
        let mut assignments = Assignments::default();
        let x = assignments.grow(0, 10);

        let _ = assignments.post_predicate(predicate![x >= 2]).unwrap();
        assignments.increase_decision_level();
        let _ = assignments.post_predicate(predicate![x <= 5]).unwrap();
        let _ = assignments.post_predicate(predicate![x != 3]).unwrap();

        assignments.synchronise(0);

        assert_eq!(assignments.get_lower_bound(x), 2);
        assert_eq!(assignments.get_upper_bound(x), 10);
        assert!(assignments.is_value_in_domain(x, 3));
    }

    #[test]
    fn emptied_domains_are_restored_on_backtrack() {
        let mut assignments = Assignments::default();
        let x = assignments.grow(0, 3);

        assignments.increase_decision_level();
        let result = assignments.post_predicate(predicate![x >= 4]);
        assert_eq!(result, Err(Inconsistency::EmptyDomain(x)));

        assignments.synchronise(0);

        assert_eq!(assignments.get_domain_size(x), 4);
    }

    #[test]
    fn entailed_predicates_do_not_modify_the_domain() {
        let mut assignments = Assignments::default();
        let x = assignments.grow(2, 4);

        assert_eq!(assignments.post_predicate(predicate![x >= 1]), Ok(false));
        assert!(assignments.drain_modified_domains().is_empty());
    }

    #[test]
    fn posting_to_an_empty_domain_fails() {
        let mut assignments = Assignments::default();
        let x = assignments.grow_sparse(&HashSet::default());

        assert_eq!(assignments.find_empty_domain(), Some(x));
        assert_eq!(
            assignments.post_predicate(predicate![x == 0]),
            Err(Inconsistency::EmptyDomain(x))
        );
    }

    #[test]
    fn modified_domains_are_reported_once() {
        let mut assignments = Assignments::default();
        let x = assignments.grow(0, 10);

        let _ = assignments.post_predicate(predicate![x >= 1]).unwrap();
        let _ = assignments.post_predicate(predicate![x >= 2]).unwrap();

        assert_eq!(assignments.drain_modified_domains(), vec![x]);
    }
}
