//! Options which influence how a timetable is built.
use std::time::Duration;

use clap::ValueEnum;

/// The weekdays of a single week, as they are labelled in the availability data.
pub const WEEKDAYS: [&str; 5] = ["seg", "ter", "qua", "qui", "sex"];

/// The number of physical weeks covered by the default agenda.
const DEFAULT_NUM_WEEKS: usize = 2;

/// The options of the scheduler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchedulerOptions {
    /// The number of periods in every day. When `None`, it is inferred from the availability of
    /// the first course on the first day of the agenda.
    pub periods_per_day: Option<usize>,
    /// The labels of the day-instances of the scheduling horizon, in order. Labels may repeat;
    /// every occurrence of a label reuses the weekly availability stored under it.
    pub agenda: Vec<String>,
    /// The wall-clock budget of the search.
    pub time_budget: Duration,
    /// The maximum number of exams a single student sits on one day-instance.
    pub max_daily_exams_per_student: u32,
    /// The order in which the search assigns exams.
    pub variable_selection: VariableSelection,
}

impl Default for SchedulerOptions {
    fn default() -> Self {
        Self {
            periods_per_day: None,
            agenda: default_agenda(),
            time_budget: Duration::from_secs(10),
            max_daily_exams_per_student: 3,
            variable_selection: VariableSelection::default(),
        }
    }
}

/// The agenda of two weeks of five weekdays.
pub fn default_agenda() -> Vec<String> {
    (0..DEFAULT_NUM_WEEKS)
        .flat_map(|_| WEEKDAYS.iter().map(|&day| day.to_owned()))
        .collect()
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum VariableSelection {
    /// Assign the exam with the fewest remaining candidate slots first.
    #[default]
    FirstFail,
    /// Assign the exams by course and then by subject.
    InputOrder,
}

impl std::fmt::Display for VariableSelection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VariableSelection::FirstFail => write!(f, "first-fail"),
            VariableSelection::InputOrder => write!(f, "input-order"),
        }
    }
}
