use std::fmt::Debug;
use std::fmt::Formatter;

use super::Propagator;
use super::PropagatorId;
use crate::containers::KeyedVec;

/// Owns the propagators which have been added to the solver.
#[derive(Default)]
pub(crate) struct PropagatorStore {
    propagators: KeyedVec<PropagatorId, Box<dyn Propagator>>,
}

impl PropagatorStore {
    /// The identifier the next added propagator will receive.
    pub(crate) fn next_id(&self) -> PropagatorId {
        PropagatorId(self.propagators.len() as u32)
    }

    pub(crate) fn alloc(&mut self, propagator: Box<dyn Propagator>) -> PropagatorId {
        self.propagators.push(propagator)
    }

    pub(crate) fn num_propagators(&self) -> usize {
        self.propagators.len()
    }

    pub(crate) fn get_mut(&mut self, propagator_id: PropagatorId) -> &mut dyn Propagator {
        self.propagators[propagator_id].as_mut()
    }
}

impl Debug for PropagatorStore {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let names = self
            .propagators
            .iter()
            .map(|propagator| propagator.name())
            .collect::<Vec<_>>();

        f.debug_list().entries(names).finish()
    }
}
