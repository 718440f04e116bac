//! Contains the structures needed to implement propagators.
//!
//! A [`Propagator`] removes values from the domains of its variables which cannot be part of a
//! solution given the current domains. Propagators register the variables they watch when they are
//! added to the solver ([`Propagator::initialise_at_root`]); whenever one of those domains changes
//! the propagator is put in the [`PropagatorQueue`]. The solver keeps calling queued propagators
//! until the queue is empty (a fixpoint) or a propagator reports an inconsistency.
//!
//! Propagators access and modify the domains through a [`PropagationContextMut`]. They only
//! tighten domains; restoring them on backtrack is done by the solver.

mod propagation_context;
mod propagator;
mod propagator_id;
mod propagator_queue;
mod store;
mod watch_list;

pub(crate) use propagation_context::PropagationContextMut;
pub(crate) use propagation_context::PropagatorInitialisationContext;
pub(crate) use propagator::Propagator;
pub(crate) use propagator_id::PropagatorId;
pub(crate) use propagator_queue::PropagatorQueue;
pub(crate) use store::PropagatorStore;
pub(crate) use watch_list::WatchList;
