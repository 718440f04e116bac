//! The constraint model of the timetable.
//!
//! Every `(course, subject)` exam is an integer variable whose domain is the set of free slots of
//! the course. The model posts:
//! * pairwise disequality between the exams of every student;
//! * for every student, a global constraint over all their exams which combines distinctness with
//!   the daily cap, so that a makespan which leaves too few slots is refuted without search;
//! * for every student owing more exams than the daily cap, a bound on the number of their exams
//!   on each day-instance, counted with literals reified over the slot range of that day;
//! * equality between the exams of a subject shared by two courses, whenever the courses have a
//!   free slot in common;
//! * a makespan variable equal to the maximum over all exams, which is minimised.
use std::collections::BTreeMap;
use std::collections::BTreeSet;
use std::fmt::Display;

use itertools::Itertools;
use log::debug;
use log::warn;
use retake_engine::branching::branchers::independent_variable_value_brancher::IndependentVariableValueBrancher;
use retake_engine::branching::value_selection::InDomainMin;
use retake_engine::branching::variable_selection::FirstFail;
use retake_engine::branching::variable_selection::InputOrder;
use retake_engine::branching::Brancher;
use retake_engine::constraints;
use retake_engine::constraints::Constraint;
use retake_engine::optimisation::linear_sat_unsat::LinearSatUnsat;
use retake_engine::optimisation::OptimisationDirection;
use retake_engine::results::OptimisationResult;
use retake_engine::results::ProblemSolution;
use retake_engine::results::Solution;
use retake_engine::statistics::should_log_statistics;
use retake_engine::statistics::StatisticLogger;
use retake_engine::termination::TerminationCondition;
use retake_engine::variables::DomainId;
use retake_engine::variables::Literal;
use retake_engine::ConstraintOperationError;
use retake_engine::Solver;
use serde::Serialize;

use crate::calendar::Calendar;
use crate::calendar::Slot;
use crate::config::SchedulerOptions;
use crate::config::VariableSelection;
use crate::demand::DemandModel;
use crate::error::ConfigurationError;
use crate::error::SchedulerError;
use crate::error::SchedulerResult;

/// Identifies the exam of one subject in one course.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct ExamKey {
    pub course: String,
    pub subject: String,
}

impl ExamKey {
    pub fn new(course: impl Into<String>, subject: impl Into<String>) -> ExamKey {
        ExamKey {
            course: course.into(),
            subject: subject.into(),
        }
    }
}

impl Display for ExamKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.course, self.subject)
    }
}

/// Whether the timetable is proven to have the smallest possible makespan.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SolveStatus {
    Optimal,
    /// The search was stopped before optimality was proven.
    Feasible,
}

impl Display for SolveStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SolveStatus::Optimal => write!(f, "OPTIMAL"),
            SolveStatus::Feasible => write!(f, "FEASIBLE"),
        }
    }
}

/// The slot of every exam in a solution of an [`ExamModel`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExamAssignment {
    pub status: SolveStatus,
    /// The slot of every exam, in lexicographic order of course and subject.
    pub slots: BTreeMap<ExamKey, Slot>,
    /// The latest slot of any exam; `None` if there are no exams.
    pub makespan: Option<Slot>,
}

/// The number of constraints of every kind which were posted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ModelStatistics {
    pub num_exams: usize,
    pub num_distinct: usize,
    pub num_exam_sets: usize,
    pub num_daily_caps: usize,
    pub num_day_literals: usize,
    pub num_synchronisations: usize,
}

impl ModelStatistics {
    fn log(&self, statistic_logger: StatisticLogger) {
        statistic_logger
            .attach_to_prefix("num_exams")
            .log_statistic(self.num_exams);
        statistic_logger
            .attach_to_prefix("num_distinct")
            .log_statistic(self.num_distinct);
        statistic_logger
            .attach_to_prefix("num_exam_sets")
            .log_statistic(self.num_exam_sets);
        statistic_logger
            .attach_to_prefix("num_daily_caps")
            .log_statistic(self.num_daily_caps);
        statistic_logger
            .attach_to_prefix("num_day_literals")
            .log_statistic(self.num_day_literals);
        statistic_logger
            .attach_to_prefix("num_synchronisations")
            .log_statistic(self.num_synchronisations);
    }
}

/// The timetable as a constraint model, ready to be solved.
#[derive(Debug)]
pub struct ExamModel {
    solver: Solver,
    exams: BTreeMap<ExamKey, DomainId>,
    makespan: Option<DomainId>,
    /// Set when posting a constraint failed at the root.
    infeasible: bool,
    variable_selection: VariableSelection,
    statistics: ModelStatistics,
}

impl ExamModel {
    /// Builds the model of the exams required by `demand` within `calendar`.
    ///
    /// Fails with [`SchedulerError::EmptyDomain`] when a course owes an exam but has no free
    /// slot; in that case the engine is never invoked.
    pub fn build(
        calendar: &Calendar,
        demand: &DemandModel,
        options: &SchedulerOptions,
    ) -> SchedulerResult<ExamModel> {
        if options.max_daily_exams_per_student == 0 {
            return Err(ConfigurationError::NoDailyExams.into());
        }
        if let Some(course) = demand
            .courses()
            .find(|course| !calendar.contains_course(course))
        {
            return Err(ConfigurationError::UnknownCourse {
                course: course.to_owned(),
            }
            .into());
        }

        let mut model = ExamModel {
            solver: Solver::default(),
            exams: BTreeMap::new(),
            makespan: None,
            infeasible: false,
            variable_selection: options.variable_selection,
            statistics: ModelStatistics::default(),
        };

        model.create_exam_variables(calendar, demand)?;

        if let Err(error) = model.post_constraints(calendar, demand, options) {
            debug!("The model is infeasible at the root: {error}");
            model.infeasible = true;
        }

        debug!(
            "Built a model of {} exams with {} disequalities, {} daily caps and {} synchronisations",
            model.statistics.num_exams,
            model.statistics.num_distinct,
            model.statistics.num_daily_caps,
            model.statistics.num_synchronisations
        );

        Ok(model)
    }

    pub fn num_exams(&self) -> usize {
        self.exams.len()
    }

    pub fn statistics(&self) -> ModelStatistics {
        self.statistics
    }

    /// Whether the constraints already conflict before any search.
    pub fn is_infeasible(&self) -> bool {
        self.infeasible
    }

    /// The slots an exam may still take after root propagation; `None` for an unknown exam.
    pub fn candidate_slots(&self, exam: &ExamKey) -> Option<(Slot, Slot)> {
        let &domain = self.exams.get(exam)?;
        Some((
            Slot::from_value(self.solver.lower_bound(domain)),
            Slot::from_value(self.solver.upper_bound(domain)),
        ))
    }

    /// Searches for the timetable with the smallest makespan until `termination` triggers.
    ///
    /// When the search is stopped after a timetable was found, the best one is returned with
    /// [`SolveStatus::Feasible`]. When it is stopped before any timetable was found, this fails
    /// with [`SchedulerError::NoSolutionFound`].
    pub fn solve(
        &mut self,
        termination: &mut impl TerminationCondition,
    ) -> SchedulerResult<ExamAssignment> {
        if self.infeasible {
            return Err(SchedulerError::ModelInfeasible);
        }

        let Some(makespan) = self.makespan else {
            debug!("No exams to schedule");
            return Ok(ExamAssignment {
                status: SolveStatus::Optimal,
                slots: BTreeMap::new(),
                makespan: None,
            });
        };

        let mut brancher = self.brancher();
        let callback = move |_: &Solver, solution: &Solution| {
            debug!(
                "Found a timetable with makespan {}",
                solution.get_integer_value(makespan)
            );
        };

        let result = self.solver.optimise(
            &mut brancher,
            termination,
            LinearSatUnsat::new(OptimisationDirection::Minimise, makespan, callback),
        );

        if should_log_statistics() {
            self.statistics.log(StatisticLogger::new(["model"]));
            brancher.log_statistics(StatisticLogger::new(["brancher"]));
        }
        self.solver.log_statistics();

        let (status, solution) = match result {
            OptimisationResult::Optimal(solution) => (SolveStatus::Optimal, solution),
            OptimisationResult::Satisfiable(solution) => {
                warn!("The search was stopped before the makespan was proven minimal");
                (SolveStatus::Feasible, solution)
            }
            OptimisationResult::Unsatisfiable => return Err(SchedulerError::ModelInfeasible),
            OptimisationResult::Unknown => return Err(SchedulerError::NoSolutionFound),
        };

        self.solver.log_solution(&solution);

        let slots = self
            .exams
            .iter()
            .map(|(exam, &domain)| {
                (
                    exam.clone(),
                    Slot::from_value(solution.get_integer_value(domain)),
                )
            })
            .collect();

        Ok(ExamAssignment {
            status,
            slots,
            makespan: Some(Slot::from_value(solution.get_integer_value(makespan))),
        })
    }

    fn brancher(&self) -> Box<dyn Brancher> {
        let variables = self.exams.values().copied().collect::<Vec<_>>();

        match self.variable_selection {
            VariableSelection::FirstFail => Box::new(IndependentVariableValueBrancher::new(
                FirstFail::new(&variables),
                InDomainMin,
            )),
            VariableSelection::InputOrder => Box::new(IndependentVariableValueBrancher::new(
                InputOrder::new(&variables),
                InDomainMin,
            )),
        }
    }

    fn create_exam_variables(
        &mut self,
        calendar: &Calendar,
        demand: &DemandModel,
    ) -> SchedulerResult<()> {
        for course in calendar.courses() {
            let free_slots = calendar.free_slots(course);

            for subject in demand.required_subjects(course) {
                if free_slots.is_empty() {
                    return Err(SchedulerError::EmptyDomain {
                        course: course.to_owned(),
                        subject: subject.to_owned(),
                    });
                }

                let exam = ExamKey::new(course, subject);
                let domain = self.solver.new_named_sparse_integer(
                    free_slots.iter().map(|slot| slot.as_value()).collect::<Vec<_>>(),
                    exam.to_string(),
                );
                let _ = self.exams.insert(exam, domain);
            }
        }

        self.statistics.num_exams = self.exams.len();
        Ok(())
    }

    fn exam(&self, course: &str, subject: &str) -> DomainId {
        // Every required subject of a known course received a variable.
        self.exams[&ExamKey::new(course, subject)]
    }

    fn post_constraints(
        &mut self,
        calendar: &Calendar,
        demand: &DemandModel,
        options: &SchedulerOptions,
    ) -> Result<(), ConstraintOperationError> {
        self.post_distinct_exams(demand)?;
        self.post_exam_sets(calendar, demand, options.max_daily_exams_per_student)?;
        self.post_daily_caps(calendar, demand, options.max_daily_exams_per_student)?;
        self.post_synchronisations(calendar, demand)?;
        self.post_makespan(calendar)
    }

    fn post(&mut self, constraint: impl Constraint) -> Result<(), ConstraintOperationError> {
        self.solver.add_constraint(constraint).post()
    }

    fn post_distinct_exams(&mut self, demand: &DemandModel) -> Result<(), ConstraintOperationError> {
        let mut posted = BTreeSet::new();

        for (student, subjects) in demand.students() {
            for (first, second) in subjects.iter().tuple_combinations() {
                let first = self.exam(&student.course, first);
                let second = self.exam(&student.course, second);

                // Students of the same course often share pairs of subjects.
                if posted.insert((first, second)) {
                    self.post(constraints::binary_not_equals(first, second))?;
                }
            }
        }

        self.statistics.num_distinct = posted.len();
        Ok(())
    }

    /// Posts, once per distinct set of exams owed by a student, that the exams take distinct
    /// slots with at most `cap` of them on any day.
    fn post_exam_sets(
        &mut self,
        calendar: &Calendar,
        demand: &DemandModel,
        cap: u32,
    ) -> Result<(), ConstraintOperationError> {
        let days = calendar
            .day_slot_ranges()
            .map(|range| range.start().as_value()..=range.end().as_value())
            .collect::<Vec<_>>();
        let mut posted = BTreeSet::new();

        for (student, subjects) in demand.students() {
            if subjects.len() < 2 {
                continue;
            }

            let exams = subjects
                .iter()
                .map(|subject| self.exam(&student.course, subject))
                .collect::<Vec<_>>();
            if !posted.insert(exams.clone()) {
                continue;
            }

            let capacity = subjects.len().min(cap as usize);
            self.post(constraints::all_different_with_capacity(
                exams,
                days.iter().cloned(),
                capacity,
            ))?;
        }

        self.statistics.num_exam_sets = posted.len();
        Ok(())
    }

    fn post_daily_caps(
        &mut self,
        calendar: &Calendar,
        demand: &DemandModel,
        cap: u32,
    ) -> Result<(), ConstraintOperationError> {
        let day_ranges = calendar.day_slot_ranges().collect::<Vec<_>>();
        let mut in_day: BTreeMap<(DomainId, usize), Literal> = BTreeMap::new();

        for (student, subjects) in demand.students() {
            if subjects.len() <= cap as usize {
                continue;
            }

            for (day_instance, range) in day_ranges.iter().enumerate() {
                let mut literals = Vec::with_capacity(subjects.len());

                for subject in subjects {
                    let exam = self.exam(&student.course, subject);

                    let literal = match in_day.get(&(exam, day_instance)) {
                        Some(&literal) => literal,
                        None => {
                            let literal = self.solver.new_named_literal(format!(
                                "{}/{subject}@{day_instance}",
                                student.course
                            ));
                            self.post(constraints::in_range_reified(
                                exam,
                                range.start().as_value()..=range.end().as_value(),
                                literal,
                            ))?;
                            let _ = in_day.insert((exam, day_instance), literal);
                            literal
                        }
                    };

                    literals.push(literal);
                }

                self.post(constraints::less_than_or_equals(literals, cap as i32))?;
                self.statistics.num_daily_caps += 1;
            }
        }

        self.statistics.num_day_literals = in_day.len();
        Ok(())
    }

    fn post_synchronisations(
        &mut self,
        calendar: &Calendar,
        demand: &DemandModel,
    ) -> Result<(), ConstraintOperationError> {
        for subject in demand.subjects() {
            let pairs = demand
                .sharing_courses(subject)
                .iter()
                .tuple_combinations()
                .filter(|(first, second)| {
                    let common = calendar.have_common_free_slot(first, second);
                    if !common {
                        debug!("Courses {first} and {second} cannot share the exam of {subject}");
                    }
                    common
                })
                .collect::<Vec<_>>();

            let mut linked = vec![];
            for &(first, second) in &pairs {
                link(&mut linked, first, second);
            }
            warn_about_forced_links(calendar, subject, &linked);

            for (first, second) in pairs {
                let first = self.exam(first, subject);
                let second = self.exam(second, subject);
                self.post(constraints::binary_equals(first, second))?;
                self.statistics.num_synchronisations += 1;
            }
        }

        Ok(())
    }

    fn post_makespan(&mut self, calendar: &Calendar) -> Result<(), ConstraintOperationError> {
        if self.exams.is_empty() {
            return Ok(());
        }

        let last_slot = Slot::new(calendar.total_slots() - 1);
        let makespan = self
            .solver
            .new_named_bounded_integer(0, last_slot.as_value(), "makespan");
        self.makespan = Some(makespan);

        let exams = self.exams.values().copied().collect::<Vec<_>>();
        self.post(constraints::maximum(exams, makespan))
    }
}

/// Merges the groups of courses containing `first` and `second`.
fn link<'a>(linked: &mut Vec<BTreeSet<&'a str>>, first: &'a str, second: &'a str) {
    let mut merged = BTreeSet::from([first, second]);
    linked.retain(|group| {
        if group.contains(first) || group.contains(second) {
            merged.extend(group.iter().copied());
            false
        } else {
            true
        }
    });
    linked.push(merged);
}

/// Equalities chain: two courses without a common free slot can still be forced to hold the
/// exam together through a third course, which leaves the model without a timetable.
fn warn_about_forced_links(calendar: &Calendar, subject: &str, linked: &[BTreeSet<&str>]) {
    for group in linked {
        if let Some((first, second)) = group
            .iter()
            .tuple_combinations()
            .find(|(first, second)| !calendar.have_common_free_slot(first, second))
        {
            warn!(
                "Courses {} must hold the exam of {subject} in one slot, but {first} and {second} share no free slot",
                group.iter().join(", ")
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use retake_engine::termination::Indefinite;

    use super::*;
    use crate::input::Availability;

    fn calendar(periods_per_day: usize, days: &[&str], courses: Vec<(&str, Vec<i64>)>) -> Calendar {
        let mut availability = Availability::default();
        for (course, flags) in &courses {
            for (index, day) in days.iter().enumerate() {
                let day_flags = flags[index * periods_per_day..(index + 1) * periods_per_day]
                    .iter()
                    .copied();
                availability = availability.with_day(*course, *day, day_flags);
            }
        }

        Calendar::new(
            periods_per_day,
            days.iter().map(|&day| day.to_owned()).collect(),
            &availability,
        )
        .unwrap()
    }

    #[test]
    fn exams_take_distinct_free_slots() {
        let calendar = calendar(2, &["seg"], vec![("A", vec![0, 0])]);
        let demand = DemandModel::builder()
            .with_student("A", "s", ["X", "Y"])
            .build();

        let mut model = ExamModel::build(&calendar, &demand, &SchedulerOptions::default()).unwrap();
        let assignment = model.solve(&mut Indefinite).unwrap();

        let x = assignment.slots[&ExamKey::new("A", "X")];
        let y = assignment.slots[&ExamKey::new("A", "Y")];
        assert_ne!(x, y);
        assert_eq!(assignment.makespan, Some(Slot::new(1)));
        assert_eq!(assignment.status, SolveStatus::Optimal);
    }

    #[test]
    fn empty_domain_is_reported_before_solving() {
        let calendar = calendar(2, &["seg"], vec![("A", vec![1, 1]), ("B", vec![0, 0])]);
        let demand = DemandModel::builder()
            .with_student("A", "s", ["X"])
            .build();

        let result = ExamModel::build(&calendar, &demand, &SchedulerOptions::default());
        assert!(matches!(
            result,
            Err(SchedulerError::EmptyDomain { course, subject }) if course == "A" && subject == "X"
        ));
    }

    #[test]
    fn unknown_course_is_a_configuration_error() {
        let calendar = calendar(1, &["seg"], vec![("A", vec![0])]);
        let demand = DemandModel::builder()
            .with_student("B", "s", ["X"])
            .build();

        let result = ExamModel::build(&calendar, &demand, &SchedulerOptions::default());
        assert!(matches!(
            result,
            Err(SchedulerError::Configuration(ConfigurationError::UnknownCourse { course })) if course == "B"
        ));
    }

    #[test]
    fn too_few_slots_is_infeasible() {
        let calendar = calendar(2, &["seg"], vec![("A", vec![0, 1])]);
        let demand = DemandModel::builder()
            .with_student("A", "s", ["X", "Y"])
            .build();

        let mut model = ExamModel::build(&calendar, &demand, &SchedulerOptions::default()).unwrap();
        let result = model.solve(&mut Indefinite);

        assert!(matches!(result, Err(SchedulerError::ModelInfeasible)));
    }

    #[test]
    fn daily_cap_spreads_exams_over_days() {
        let calendar = calendar(4, &["seg", "ter"], vec![("A", vec![0; 8])]);
        let demand = DemandModel::builder()
            .with_student("A", "s", ["W", "X", "Y", "Z"])
            .build();
        let options = SchedulerOptions {
            max_daily_exams_per_student: 2,
            ..Default::default()
        };

        let mut model = ExamModel::build(&calendar, &demand, &options).unwrap();
        assert_eq!(model.statistics().num_daily_caps, 2);
        assert_eq!(model.statistics().num_day_literals, 8);

        let assignment = model.solve(&mut Indefinite).unwrap();
        let on_first_day = assignment
            .slots
            .values()
            .filter(|slot| slot.index() < 4)
            .count();
        assert_eq!(on_first_day, 2);
        // Two exams on the first day, then two at the start of the second day.
        assert_eq!(assignment.makespan, Some(Slot::new(5)));
    }

    #[test]
    fn daily_cap_is_skipped_for_students_below_it() {
        let calendar = calendar(4, &["seg"], vec![("A", vec![0; 4])]);
        let demand = DemandModel::builder()
            .with_student("A", "s", ["X", "Y", "Z"])
            .build();

        let model = ExamModel::build(&calendar, &demand, &SchedulerOptions::default()).unwrap();
        assert_eq!(model.statistics().num_daily_caps, 0);
        assert_eq!(model.statistics().num_day_literals, 0);
        assert_eq!(model.statistics().num_distinct, 3);
        assert_eq!(model.statistics().num_exam_sets, 1);
    }

    #[test]
    fn students_owing_the_same_exams_share_one_exam_set() {
        let calendar = calendar(4, &["seg"], vec![("A", vec![0; 4])]);
        let demand = DemandModel::builder()
            .with_student("A", "s", ["X", "Y"])
            .with_student("A", "t", ["Y", "X"])
            .with_student("A", "u", ["Z"])
            .build();

        let model = ExamModel::build(&calendar, &demand, &SchedulerOptions::default()).unwrap();

        assert_eq!(model.statistics().num_exam_sets, 1);
    }

    #[test]
    fn too_few_slots_for_the_daily_cap_is_refuted_at_the_root() {
        // Seven exams fit on the first two days and one more on the third, so the last exam
        // cannot be before slot 17.
        let calendar = calendar(8, &["seg", "ter", "qua"], vec![("A", vec![0; 24])]);
        let demand = DemandModel::builder()
            .with_student("A", "s", ["a", "b", "c", "d", "e", "f", "g", "h"])
            .build();

        let mut model = ExamModel::build(&calendar, &demand, &SchedulerOptions::default()).unwrap();
        let assignment = model.solve(&mut Indefinite).unwrap();
        assert_eq!(assignment.status, SolveStatus::Optimal);
        assert_eq!(assignment.makespan, Some(Slot::new(17)));
    }

    #[test]
    fn chained_synchronisations_without_a_common_slot_are_infeasible() {
        // A and B share slot 0, B and C share slot 1, A and C share nothing.
        let calendar = calendar(3, &["seg"], vec![("A", vec![0, 1, 1]), ("B", vec![0, 0, 1]), ("C", vec![1, 0, 1])]);
        let demand = DemandModel::builder()
            .with_student("A", "a", ["Z"])
            .with_student("B", "b", ["Z"])
            .with_student("C", "c", ["Z"])
            .build();

        let mut model = ExamModel::build(&calendar, &demand, &SchedulerOptions::default()).unwrap();

        assert!(model.is_infeasible());
        assert!(matches!(model.solve(&mut Indefinite), Err(SchedulerError::ModelInfeasible)));
    }

    #[test]
    fn shared_subjects_are_synchronised_when_possible() {
        let calendar = calendar(3, &["seg"], vec![("A", vec![0, 0, 1]), ("B", vec![1, 0, 0]), ("C", vec![1, 1, 0])]);
        let demand = DemandModel::builder()
            .with_student("A", "a", ["Z", "Y"])
            .with_student("B", "b", ["Z"])
            .with_student("C", "c", ["Y"])
            .build();

        let mut model = ExamModel::build(&calendar, &demand, &SchedulerOptions::default()).unwrap();
        // A and C share no free slot, so only Z is synchronised.
        assert_eq!(model.statistics().num_synchronisations, 1);
        assert_eq!(
            model.candidate_slots(&ExamKey::new("A", "Z")),
            Some((Slot::new(1), Slot::new(1)))
        );

        let assignment = model.solve(&mut Indefinite).unwrap();
        assert_eq!(assignment.slots[&ExamKey::new("A", "Z")], Slot::new(1));
        assert_eq!(assignment.slots[&ExamKey::new("B", "Z")], Slot::new(1));
        assert_eq!(assignment.slots[&ExamKey::new("A", "Y")], Slot::new(0));
        assert_eq!(assignment.slots[&ExamKey::new("C", "Y")], Slot::new(2));
        assert_eq!(assignment.makespan, Some(Slot::new(2)));
    }

    #[test]
    fn no_exams_is_trivially_optimal() {
        let calendar = calendar(1, &["seg"], vec![("A", vec![1])]);
        let demand = DemandModel::builder()
            .with_student("A", "s", Vec::<String>::new())
            .build();

        let mut model = ExamModel::build(&calendar, &demand, &SchedulerOptions::default()).unwrap();
        let assignment = model.solve(&mut Indefinite).unwrap();

        assert_eq!(assignment.status, SolveStatus::Optimal);
        assert!(assignment.slots.is_empty());
        assert_eq!(assignment.makespan, None);
    }

    #[test]
    fn input_order_finds_the_same_makespan() {
        let calendar = calendar(2, &["seg", "ter"], vec![("A", vec![0, 1, 0, 0]), ("B", vec![0, 0, 1, 0])]);
        let demand = DemandModel::builder()
            .with_student("A", "a", ["X", "Y"])
            .with_student("B", "b", ["X", "Y"])
            .build();

        let makespans = [VariableSelection::FirstFail, VariableSelection::InputOrder].map(
            |variable_selection| {
                let options = SchedulerOptions {
                    variable_selection,
                    ..Default::default()
                };
                let mut model = ExamModel::build(&calendar, &demand, &options).unwrap();
                model.solve(&mut Indefinite).unwrap().makespan
            },
        );

        assert_eq!(makespans[0], makespans[1]);
        assert_eq!(makespans[0], Some(Slot::new(3)));
    }

    #[test]
    fn zero_daily_cap_is_rejected() {
        let calendar = calendar(1, &["seg"], vec![("A", vec![0])]);
        let options = SchedulerOptions {
            max_daily_exams_per_student: 0,
            ..Default::default()
        };

        let result = ExamModel::build(&calendar, &DemandModel::default(), &options);
        assert!(matches!(
            result,
            Err(SchedulerError::Configuration(ConfigurationError::NoDailyExams))
        ));
    }
}
