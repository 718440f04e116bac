use crate::engine::variables::DomainId;

/// The reason a propagation round failed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Inconsistency {
    /// A domain was emptied by a propagation.
    EmptyDomain(DomainId),
    /// A propagator detected that the current domains cannot be extended to a solution.
    Conflict,
}

pub(crate) type PropagationStatus = Result<(), Inconsistency>;
