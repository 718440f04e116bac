use std::collections::VecDeque;

use super::PropagatorId;
use crate::basic_types::HashSet;

/// A first-in first-out queue of propagators waiting to be called. A propagator is in the queue at
/// most once.
#[derive(Clone, Debug, Default)]
pub(crate) struct PropagatorQueue {
    queue: VecDeque<PropagatorId>,
    present_propagators: HashSet<PropagatorId>,
}

impl PropagatorQueue {
    pub(crate) fn enqueue_propagator(&mut self, propagator_id: PropagatorId) {
        if self.present_propagators.insert(propagator_id) {
            self.queue.push_back(propagator_id);
        }
    }

    pub(crate) fn pop(&mut self) -> Option<PropagatorId> {
        let propagator_id = self.queue.pop_front()?;
        let _ = self.present_propagators.remove(&propagator_id);
        Some(propagator_id)
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub(crate) fn clear(&mut self) {
        self.queue.clear();
        self.present_propagators.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn propagators_are_queued_once_in_insertion_order() {
        let mut queue = PropagatorQueue::default();

        queue.enqueue_propagator(PropagatorId(2));
        queue.enqueue_propagator(PropagatorId(0));
        queue.enqueue_propagator(PropagatorId(2));

        assert_eq!(queue.pop(), Some(PropagatorId(2)));
        assert_eq!(queue.pop(), Some(PropagatorId(0)));
        assert_eq!(queue.pop(), None);
        assert!(queue.is_empty());
    }
}
