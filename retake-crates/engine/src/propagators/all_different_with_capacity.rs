use std::collections::VecDeque;
use std::ops::RangeInclusive;

use crate::basic_types::PropagationStatus;
use crate::engine::propagation::PropagationContextMut;
use crate::engine::propagation::Propagator;
use crate::engine::propagation::PropagatorInitialisationContext;
use crate::engine::variables::DomainId;
use crate::predicate;
use crate::retake_assert_simple;

/// Propagator for the constraint that all `variables` take distinct values, and that at most
/// `capacity` of them take a value inside any one of the `groups`. Values outside every group are
/// only required to be distinct.
///
/// The constraint is modelled as a flow network `variable -> value -> group -> sink` in which
/// every value carries at most one unit and every group at most `capacity` units. The domains are
/// consistent iff there is a flow which saturates every variable. A value is removed from a
/// domain when no such flow uses it, which is the case when the variable and the value end up in
/// different strongly connected components of the residual network.
#[derive(Clone, Debug)]
pub(crate) struct AllDifferentWithCapacityPropagator {
    variables: Box<[DomainId]>,
    /// Sorted by their first value, pairwise disjoint.
    groups: Box<[RangeInclusive<i32>]>,
    capacity: usize,
}

impl AllDifferentWithCapacityPropagator {
    pub(crate) fn new(
        variables: Box<[DomainId]>,
        groups: impl IntoIterator<Item = RangeInclusive<i32>>,
        capacity: usize,
    ) -> Self {
        let mut groups = groups
            .into_iter()
            .filter(|group| !group.is_empty())
            .collect::<Vec<_>>();
        groups.sort_by_key(|group| *group.start());
        retake_assert_simple!(
            groups
                .windows(2)
                .all(|pair| pair[0].end() < pair[1].start()),
            "The groups of values overlap"
        );

        AllDifferentWithCapacityPropagator {
            variables,
            groups: groups.into(),
            capacity,
        }
    }

    /// The group containing `value`, or `self.groups.len()` for values outside every group.
    fn group_of(&self, value: i32) -> usize {
        let candidate = self
            .groups
            .partition_point(|group| *group.start() <= value);
        if candidate > 0 && self.groups[candidate - 1].contains(&value) {
            candidate - 1
        } else {
            self.groups.len()
        }
    }
}

impl Propagator for AllDifferentWithCapacityPropagator {
    fn name(&self) -> &str {
        "AllDifferentWithCapacity"
    }

    fn initialise_at_root(&mut self, context: &mut PropagatorInitialisationContext) {
        self.variables
            .iter()
            .for_each(|&variable| context.register(variable));
    }

    fn propagate(&mut self, mut context: PropagationContextMut) -> PropagationStatus {
        let domains = self
            .variables
            .iter()
            .map(|&variable| context.domain_values(variable))
            .collect::<Vec<_>>();

        let mut values = domains.iter().flatten().copied().collect::<Vec<_>>();
        values.sort_unstable();
        values.dedup();

        // Values which fall outside every group share one group which never limits the flow.
        let mut group_capacity = vec![self.capacity; self.groups.len()];
        group_capacity.push(self.variables.len());

        let mut network = FlowNetwork {
            domains: domains
                .iter()
                .map(|domain| {
                    domain
                        .iter()
                        .filter_map(|value| values.binary_search(value).ok())
                        .collect()
                })
                .collect(),
            value_group: values.iter().map(|&value| self.group_of(value)).collect(),
            group_capacity,
            assigned: vec![None; self.variables.len()],
            owner: vec![None; values.len()],
            load: vec![0; self.groups.len() + 1],
        };

        if !network.saturate() {
            return context.conflict();
        }

        let component = network.residual_components();
        for (variable_index, &variable) in self.variables.iter().enumerate() {
            for &value_index in &network.domains[variable_index] {
                if network.assigned[variable_index] == Some(value_index) {
                    continue;
                }

                if component[variable_index] != component[network.value_node(value_index)] {
                    let value = values[value_index];
                    context.post(predicate!(variable != value))?;
                }
            }
        }

        Ok(())
    }
}

/// The step which brought a breadth-first search to a variable.
#[derive(Clone, Copy, Debug)]
enum Reached {
    Start,
    /// The variable gives up its value to whoever reached that value.
    Displaced { value: usize },
    /// The variable gives up its value to make room in a full group.
    Evicted { group: usize },
}

/// A flow through the network, with variables and values referred to by their index.
#[derive(Debug)]
struct FlowNetwork {
    domains: Vec<Vec<usize>>,
    value_group: Vec<usize>,
    group_capacity: Vec<usize>,
    assigned: Vec<Option<usize>>,
    owner: Vec<Option<usize>>,
    load: Vec<usize>,
}

impl FlowNetwork {
    /// Augments the flow until every variable carries a unit; returns false if that is
    /// impossible.
    fn saturate(&mut self) -> bool {
        loop {
            let unassigned = (0..self.assigned.len())
                .filter(|&variable| self.assigned[variable].is_none())
                .collect::<Vec<_>>();
            if unassigned.is_empty() {
                return true;
            }

            let num_augmented = unassigned
                .into_iter()
                .filter(|&variable| self.augment(variable))
                .count();
            if num_augmented == 0 {
                return false;
            }
        }
    }

    /// Searches for an augmenting path which starts at `start` and applies it.
    fn augment(&mut self, start: usize) -> bool {
        let mut reached = vec![None; self.assigned.len()];
        let mut value_reached_from = vec![None; self.owner.len()];
        let mut group_reached_from = vec![None; self.load.len()];

        reached[start] = Some(Reached::Start);
        let mut queue = VecDeque::from([start]);
        let mut free_value = None;

        'search: while let Some(variable) = queue.pop_front() {
            for &value in &self.domains[variable] {
                if self.assigned[variable] == Some(value) || value_reached_from[value].is_some() {
                    continue;
                }
                value_reached_from[value] = Some(variable);

                if let Some(owner) = self.owner[value] {
                    if reached[owner].is_none() {
                        reached[owner] = Some(Reached::Displaced { value });
                        queue.push_back(owner);
                    }
                    continue;
                }

                let group = self.value_group[value];
                if self.load[group] < self.group_capacity[group] {
                    free_value = Some(value);
                    break 'search;
                }

                if group_reached_from[group].is_none() {
                    group_reached_from[group] = Some(value);
                    for other in 0..self.assigned.len() {
                        let in_group = self.assigned[other]
                            .is_some_and(|assigned| self.value_group[assigned] == group);
                        if in_group && reached[other].is_none() {
                            reached[other] = Some(Reached::Evicted { group });
                            queue.push_back(other);
                        }
                    }
                }
            }
        }

        let Some(free_value) = free_value else {
            return false;
        };
        self.apply_path(free_value, &reached, &value_reached_from, &group_reached_from);
        true
    }

    fn apply_path(
        &mut self,
        last_value: usize,
        reached: &[Option<Reached>],
        value_reached_from: &[Option<usize>],
        group_reached_from: &[Option<usize>],
    ) {
        let mut moves = vec![];
        let mut value = Some(last_value);

        while let Some(current) = value {
            let Some(variable) = value_reached_from[current] else {
                break;
            };
            moves.push((variable, current));

            value = match reached[variable] {
                Some(Reached::Displaced { value }) => Some(value),
                Some(Reached::Evicted { group }) => group_reached_from[group],
                Some(Reached::Start) | None => None,
            };
        }

        for &(variable, _) in &moves {
            if let Some(previous) = self.assigned[variable].take() {
                self.owner[previous] = None;
                self.load[self.value_group[previous]] -= 1;
            }
        }
        for &(variable, value) in &moves {
            self.assigned[variable] = Some(value);
            self.owner[value] = Some(variable);
            self.load[self.value_group[value]] += 1;
        }
    }

    fn value_node(&self, value: usize) -> usize {
        self.assigned.len() + value
    }

    fn group_node(&self, group: usize) -> usize {
        self.assigned.len() + self.owner.len() + group
    }

    fn sink_node(&self) -> usize {
        self.assigned.len() + self.owner.len() + self.load.len()
    }

    /// The strongly connected component of every node of the residual network.
    fn residual_components(&self) -> Vec<usize> {
        let mut successors = vec![vec![]; self.sink_node() + 1];

        for (variable, domain) in self.domains.iter().enumerate() {
            for &value in domain {
                if self.assigned[variable] == Some(value) {
                    successors[self.value_node(value)].push(variable);
                } else {
                    successors[variable].push(self.value_node(value));
                }
            }
        }

        for (value, &group) in self.value_group.iter().enumerate() {
            if self.owner[value].is_some() {
                successors[self.group_node(group)].push(self.value_node(value));
            } else {
                successors[self.value_node(value)].push(self.group_node(group));
            }
        }

        for group in 0..self.load.len() {
            if self.load[group] < self.group_capacity[group] {
                successors[self.group_node(group)].push(self.sink_node());
            }
            if self.load[group] > 0 {
                successors[self.sink_node()].push(self.group_node(group));
            }
        }

        StronglyConnectedComponents::compute(&successors)
    }
}

/// Tarjan's algorithm over an adjacency list.
#[derive(Debug)]
struct StronglyConnectedComponents<'a> {
    successors: &'a [Vec<usize>],
    index: Vec<Option<usize>>,
    low_link: Vec<usize>,
    on_stack: Vec<bool>,
    stack: Vec<usize>,
    component: Vec<usize>,
    next_index: usize,
    num_components: usize,
}

impl<'a> StronglyConnectedComponents<'a> {
    fn compute(successors: &'a [Vec<usize>]) -> Vec<usize> {
        let num_nodes = successors.len();
        let mut tarjan = StronglyConnectedComponents {
            successors,
            index: vec![None; num_nodes],
            low_link: vec![0; num_nodes],
            on_stack: vec![false; num_nodes],
            stack: vec![],
            component: vec![0; num_nodes],
            next_index: 0,
            num_components: 0,
        };

        for node in 0..num_nodes {
            if tarjan.index[node].is_none() {
                tarjan.visit(node);
            }
        }

        tarjan.component
    }

    fn visit(&mut self, node: usize) {
        self.index[node] = Some(self.next_index);
        self.low_link[node] = self.next_index;
        self.next_index += 1;
        self.stack.push(node);
        self.on_stack[node] = true;

        let successors = self.successors;
        for &successor in &successors[node] {
            match self.index[successor] {
                None => {
                    self.visit(successor);
                    self.low_link[node] = self.low_link[node].min(self.low_link[successor]);
                }
                Some(successor_index) if self.on_stack[successor] => {
                    self.low_link[node] = self.low_link[node].min(successor_index);
                }
                Some(_) => {}
            }
        }

        if Some(self.low_link[node]) == self.index[node] {
            while let Some(member) = self.stack.pop() {
                self.on_stack[member] = false;
                self.component[member] = self.num_components;
                if member == node {
                    break;
                }
            }
            self.num_components += 1;
        }
    }
}
