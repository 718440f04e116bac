use crate::basic_types::PropagationStatus;
use crate::engine::propagation::PropagationContextMut;
use crate::engine::propagation::Propagator;
use crate::engine::propagation::PropagatorInitialisationContext;
use crate::engine::variables::DomainId;
use crate::predicate;

/// Bounds-consistent propagator which enforces `max(array) = rhs`.
#[derive(Clone, Debug)]
pub(crate) struct MaximumPropagator {
    array: Box<[DomainId]>,
    rhs: DomainId,
}

impl MaximumPropagator {
    pub(crate) fn new(array: Box<[DomainId]>, rhs: DomainId) -> Self {
        MaximumPropagator { array, rhs }
    }
}

impl Propagator for MaximumPropagator {
    fn name(&self) -> &str {
        "Maximum"
    }

    fn initialise_at_root(&mut self, context: &mut PropagatorInitialisationContext) {
        self.array.iter().for_each(|&var| context.register(var));
        context.register(self.rhs);
    }

    fn propagate(&mut self, mut context: PropagationContextMut) -> PropagationStatus {
        if self.array.is_empty() {
            return context.conflict();
        }

        let rhs_ub = context.upper_bound(self.rhs);
        let mut max_ub = i32::MIN;
        let mut max_lb = i32::MIN;

        for &var in self.array.iter() {
            context.post(predicate!(var <= rhs_ub))?;

            max_ub = i32::max(context.upper_bound(var), max_ub);
            max_lb = i32::max(context.lower_bound(var), max_lb);
        }

        context.post(predicate!(self.rhs <= max_ub))?;
        context.post(predicate!(self.rhs >= max_lb))?;

        // If only one element can reach the lower bound of the rhs, it has to.
        let rhs_lb = context.lower_bound(self.rhs);
        let mut supports = self
            .array
            .iter()
            .filter(|&&var| context.upper_bound(var) >= rhs_lb);
        if let (Some(&support), None) = (supports.next(), supports.next()) {
            context.post(predicate!(support >= rhs_lb))?;
        }

        Ok(())
    }
}
