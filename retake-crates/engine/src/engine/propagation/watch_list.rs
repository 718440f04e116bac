use super::PropagatorId;
use crate::containers::KeyedVec;
use crate::engine::variables::DomainId;

/// For every variable, the propagators which are enqueued when its domain changes.
#[derive(Clone, Debug, Default)]
pub(crate) struct WatchList {
    watchers: KeyedVec<DomainId, Vec<PropagatorId>>,
}

impl WatchList {
    /// Make room for a newly created variable.
    pub(crate) fn grow(&mut self) {
        let _ = self.watchers.push(vec![]);
    }

    pub(crate) fn watch(&mut self, domain_id: DomainId, propagator_id: PropagatorId) {
        let watchers = &mut self.watchers[domain_id];
        if !watchers.contains(&propagator_id) {
            watchers.push(propagator_id);
        }
    }

    pub(crate) fn get_affected_propagators(&self, domain_id: DomainId) -> &[PropagatorId] {
        &self.watchers[domain_id]
    }
}
