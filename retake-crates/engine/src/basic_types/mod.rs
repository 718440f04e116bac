mod constraint_operation_error;
mod inconsistency;
mod solution;

pub use constraint_operation_error::ConstraintOperationError;
pub(crate) use inconsistency::Inconsistency;
pub(crate) use inconsistency::PropagationStatus;
pub use solution::ProblemSolution;
pub use solution::Solution;

pub(crate) type HashSet<K> = fnv::FnvHashSet<K>;
