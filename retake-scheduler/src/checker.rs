//! Validates a [`Timetable`] against the rules every timetable must follow, independently of
//! the model which produced it.
use std::collections::BTreeMap;

use itertools::Itertools;
use thiserror::Error;

use crate::calendar::Calendar;
use crate::calendar::Slot;
use crate::demand::DemandModel;
use crate::extract::Timetable;

/// A rule which a timetable breaks.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    #[error("the exam of '{subject}' in course '{course}' is not scheduled")]
    MissingExam { course: String, subject: String },
    #[error("the exam of '{subject}' in course '{course}' is scheduled more than once")]
    DuplicateExam { course: String, subject: String },
    #[error("course '{course}' has an exam of '{subject}' which nobody owes")]
    UnexpectedExam { course: String, subject: String },
    #[error("the exam of '{subject}' in course '{course}' is in slot {slot}, which is not free")]
    OutsideFreeSlots {
        course: String,
        subject: String,
        slot: Slot,
    },
    #[error("student '{student}' of course '{course}' has '{first}' and '{second}' both in slot {slot}")]
    DoubleBooked {
        course: String,
        student: String,
        first: String,
        second: String,
        slot: Slot,
    },
    #[error("student '{student}' of course '{course}' has {count} exams on day-instance {day_instance}, at most {cap} are allowed")]
    DailyCapExceeded {
        course: String,
        student: String,
        day_instance: usize,
        count: usize,
        cap: u32,
    },
    #[error("courses '{first_course}' and '{second_course}' share a free slot but hold '{subject}' in slots {first_slot} and {second_slot}")]
    NotSynchronised {
        subject: String,
        first_course: String,
        second_course: String,
        first_slot: Slot,
        second_slot: Slot,
    },
    #[error("the reported makespan is {reported:?}, but the latest exam is in {actual:?}")]
    WrongMakespan {
        reported: Option<Slot>,
        actual: Option<Slot>,
    },
}

/// Checks that every owed exam is scheduled exactly once in a free slot of its course, that no
/// student sits two exams at once or more than `cap` exams on a day-instance, that shared
/// subjects are held together whenever the courses have a common free slot, and that the
/// makespan is the latest slot of any exam.
pub fn check(
    calendar: &Calendar,
    demand: &DemandModel,
    cap: u32,
    timetable: &Timetable,
) -> Result<(), Violation> {
    let slots = collect_slots(calendar, demand, timetable)?;
    let slot_of = |course: &str, subject: &str| slots[&(course.to_owned(), subject.to_owned())];

    for (student, subjects) in demand.students() {
        for (first, second) in subjects.iter().tuple_combinations() {
            let slot = slot_of(&student.course, first);
            if slot == slot_of(&student.course, second) {
                return Err(Violation::DoubleBooked {
                    course: student.course.clone(),
                    student: student.student.clone(),
                    first: first.clone(),
                    second: second.clone(),
                    slot,
                });
            }
        }

        let exams_per_day = subjects
            .iter()
            .map(|subject| calendar.day_and_period(slot_of(&student.course, subject)).0)
            .counts();
        if let Some((&day_instance, &count)) = exams_per_day
            .iter()
            .sorted()
            .find(|&(_, &count)| count > cap as usize)
        {
            return Err(Violation::DailyCapExceeded {
                course: student.course.clone(),
                student: student.student.clone(),
                day_instance,
                count,
                cap,
            });
        }
    }

    for subject in demand.subjects() {
        for (first, second) in demand.sharing_courses(subject).iter().tuple_combinations() {
            let first_slot = slot_of(first, subject);
            let second_slot = slot_of(second, subject);

            if first_slot != second_slot && calendar.have_common_free_slot(first, second) {
                return Err(Violation::NotSynchronised {
                    subject: subject.to_owned(),
                    first_course: first.clone(),
                    second_course: second.clone(),
                    first_slot,
                    second_slot,
                });
            }
        }
    }

    let actual = slots.values().max().copied();
    let reported = timetable.makespan.as_ref().map(|makespan| makespan.slot);
    if actual != reported {
        return Err(Violation::WrongMakespan { reported, actual });
    }

    Ok(())
}

/// Maps every scheduled `(course, subject)` to its slot, checking that exactly the owed exams
/// are scheduled, each once and in a free slot.
fn collect_slots(
    calendar: &Calendar,
    demand: &DemandModel,
    timetable: &Timetable,
) -> Result<BTreeMap<(String, String), Slot>, Violation> {
    let mut slots = BTreeMap::new();

    for (course, grid) in &timetable.courses {
        for (slot, subject) in grid.scheduled() {
            if !demand
                .required_subjects(course)
                .any(|required| required == subject)
            {
                return Err(Violation::UnexpectedExam {
                    course: course.clone(),
                    subject: subject.to_owned(),
                });
            }
            if !calendar.is_free(course, slot) {
                return Err(Violation::OutsideFreeSlots {
                    course: course.clone(),
                    subject: subject.to_owned(),
                    slot,
                });
            }
            if slots
                .insert((course.clone(), subject.to_owned()), slot)
                .is_some()
            {
                return Err(Violation::DuplicateExam {
                    course: course.clone(),
                    subject: subject.to_owned(),
                });
            }
        }
    }

    for course in demand.courses() {
        for subject in demand.required_subjects(course) {
            if !slots.contains_key(&(course.to_owned(), subject.to_owned())) {
                return Err(Violation::MissingExam {
                    course: course.to_owned(),
                    subject: subject.to_owned(),
                });
            }
        }
    }

    Ok(slots)
}
