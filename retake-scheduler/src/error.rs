use std::path::PathBuf;

use thiserror::Error;

use crate::checker::Violation;

pub type SchedulerResult<T> = Result<T, SchedulerError>;

/// Everything that can go wrong between reading the input and producing a timetable.
#[derive(Error, Debug)]
pub enum SchedulerError {
    #[error("Invalid configuration: {0}")]
    Configuration(#[from] ConfigurationError),
    /// A required exam cannot be placed in any slot of its course. This is detected while
    /// building the model, before the engine is ever invoked.
    #[error("Course '{course}' has no free slot for the exam of subject '{subject}'")]
    EmptyDomain { course: String, subject: String },
    #[error("No timetable satisfies all constraints")]
    ModelInfeasible,
    #[error("No timetable was found before the search was stopped")]
    NoSolutionFound,
    #[error("The computed timetable is invalid: {0}")]
    InvalidSchedule(#[from] Violation),
    #[error("Failed to read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to parse '{}': {source}", path.display())]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Errors in the shape of the input data or the options, reported before any model is built.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    #[error("The agenda does not contain any day")]
    EmptyAgenda,
    #[error("The availability data does not contain any course")]
    NoCourses,
    #[error("The number of periods per day must be positive")]
    NoPeriods,
    #[error("The horizon of {num_days} days with {periods_per_day} periods each has more slots than the solver supports ({max})", max = i32::MAX)]
    TooManySlots {
        num_days: usize,
        periods_per_day: usize,
    },
    #[error("The maximum number of daily exams per student must be positive")]
    NoDailyExams,
    #[error("Course '{course}' has no availability for day '{day}'")]
    MissingDay { course: String, day: String },
    #[error("Course '{course}' has {actual} flags for day '{day}', expected {expected}")]
    FlagCountMismatch {
        course: String,
        day: String,
        expected: usize,
        actual: usize,
    },
    #[error("Course '{course}' has flag {flag} on day '{day}'; flags are 0 (free) or 1 (busy)")]
    InvalidFlag {
        course: String,
        day: String,
        flag: i64,
    },
    #[error("Course '{course}' appears in the roster but not in the availability data")]
    UnknownCourse { course: String },
}
