//! # Retake scheduler
//! Builds a timetable for make-up exams. Every course has a weekly timetable of regular
//! activities, and every student of a course owes a number of subjects. The scheduler places the
//! exam of every owed subject of every course in a free slot of that course, such that:
//! * no student has two exams in the same slot;
//! * no student has more than a fixed number of exams on a single day;
//! * two courses owing the same subject hold a single shared exam whenever they have a free slot
//!   in common;
//! * the last exam is as early as possible.
//!
//! The pipeline consists of a [`Calendar`] (the time grid and the free slots of every course), a
//! [`DemandModel`] (which exams are owed, and by whom), an [`ExamModel`] (the constraint model,
//! solved by [`retake_engine`]) and a [`Timetable`] (a grid per course).
//!
//! ```rust
//! # use retake_scheduler::*;
//! let availability = Availability::default()
//!     .with_day("1A", "seg", [0, 0])
//!     .with_day("1B", "seg", [1, 0]);
//! let roster = Roster::default()
//!     .with_student("1A", "ana", ["math", "art"])
//!     .with_student("1B", "bruno", ["math"]);
//! let options = SchedulerOptions {
//!     agenda: vec!["seg".to_owned()],
//!     ..Default::default()
//! };
//!
//! let timetable = schedule(&availability, &roster, &options).expect("a timetable exists");
//!
//! assert_eq!(timetable.status, SolveStatus::Optimal);
//! assert_eq!(timetable.slot_of("1A", "math"), Some(Slot::new(1)));
//! assert_eq!(timetable.slot_of("1B", "math"), Some(Slot::new(1)));
//! assert_eq!(timetable.slot_of("1A", "art"), Some(Slot::new(0)));
//! ```
pub mod calendar;
pub mod checker;
pub mod config;
pub mod demand;
pub mod error;
pub mod extract;
pub mod input;
pub mod model;

pub use calendar::Calendar;
pub use calendar::Slot;
pub use config::SchedulerOptions;
pub use demand::DemandModel;
pub use error::ConfigurationError;
pub use error::SchedulerError;
pub use error::SchedulerResult;
pub use extract::Timetable;
pub use input::Availability;
pub use input::Roster;
pub use model::ExamModel;
pub use model::SolveStatus;

use log::info;
use retake_engine::termination::TerminationCondition;
use retake_engine::termination::TimeBudget;

/// Computes the timetable within the time budget of the options.
pub fn schedule(
    availability: &Availability,
    roster: &Roster,
    options: &SchedulerOptions,
) -> SchedulerResult<Timetable> {
    let mut time_budget = TimeBudget::starting_now(options.time_budget);
    schedule_with_termination(availability, roster, options, &mut time_budget)
}

/// Computes the timetable, searching until `termination` triggers. The timetable is checked
/// before it is returned.
pub fn schedule_with_termination(
    availability: &Availability,
    roster: &Roster,
    options: &SchedulerOptions,
    termination: &mut impl TerminationCondition,
) -> SchedulerResult<Timetable> {
    let calendar = Calendar::from_options(options, availability)?;
    let demand = DemandModel::from_roster(roster);

    let mut model = ExamModel::build(&calendar, &demand, options)?;
    info!("Scheduling {} exams", model.num_exams());

    let assignment = model.solve(termination)?;
    let timetable = Timetable::extract(&calendar, &assignment);

    checker::check(
        &calendar,
        &demand,
        options.max_daily_exams_per_student,
        &timetable,
    )?;

    Ok(timetable)
}
