//! Turns a solved [`ExamAssignment`] into a grid per course.
use std::collections::BTreeMap;

use serde::Serialize;

use crate::calendar::Calendar;
use crate::calendar::Slot;
use crate::model::ExamAssignment;
use crate::model::SolveStatus;

/// The contents of one slot of a [`CourseGrid`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Cell<'a> {
    /// The subjects whose exams take place in the slot.
    Exams(&'a [String]),
    /// The slot has no exam; the flag is `1` when the course has regular activity in it.
    Flag(u8),
}

/// The exams of a single course, per slot, together with the busy flags of the course.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CourseGrid {
    exams: Vec<Vec<String>>,
    busy: Vec<bool>,
}

impl CourseGrid {
    fn empty(busy: &[bool]) -> CourseGrid {
        CourseGrid {
            exams: vec![vec![]; busy.len()],
            busy: busy.to_vec(),
        }
    }

    pub fn num_slots(&self) -> usize {
        self.exams.len()
    }

    /// The subjects scheduled in `slot`, in order of variable creation.
    pub fn exams_at(&self, slot: Slot) -> &[String] {
        self.exams
            .get(slot.index())
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn is_busy(&self, slot: Slot) -> bool {
        self.busy.get(slot.index()).copied().unwrap_or(false)
    }

    /// All `(slot, subject)` pairs of the grid, by slot.
    pub fn scheduled(&self) -> impl Iterator<Item = (Slot, &str)> + '_ {
        self.exams.iter().enumerate().flat_map(|(index, subjects)| {
            subjects
                .iter()
                .map(move |subject| (Slot::new(index), subject.as_str()))
        })
    }

    /// Every slot of the grid, showing the exams or, when there are none, the busy flag.
    pub fn cells(&self) -> impl Iterator<Item = Cell<'_>> + '_ {
        self.exams.iter().zip(&self.busy).map(|(subjects, &busy)| {
            if subjects.is_empty() {
                Cell::Flag(u8::from(busy))
            } else {
                Cell::Exams(subjects)
            }
        })
    }
}

impl Serialize for CourseGrid {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.cells())
    }
}

/// The makespan of a timetable, located in the calendar.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Makespan {
    pub slot: Slot,
    pub day_instance: usize,
    pub day: String,
    pub period: usize,
}

/// The final timetable: a grid for every course of the calendar.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Timetable {
    pub status: SolveStatus,
    pub makespan: Option<Makespan>,
    pub periods_per_day: usize,
    pub agenda: Vec<String>,
    pub courses: BTreeMap<String, CourseGrid>,
}

impl Timetable {
    /// Creates the grids of all courses in `calendar`, including those without exams.
    pub fn extract(calendar: &Calendar, assignment: &ExamAssignment) -> Timetable {
        let mut courses = calendar
            .courses()
            .filter_map(|course| {
                calendar
                    .busy_flags(course)
                    .map(|busy| (course.to_owned(), CourseGrid::empty(busy)))
            })
            .collect::<BTreeMap<_, _>>();

        for (exam, slot) in &assignment.slots {
            if let Some(cell) = courses
                .get_mut(&exam.course)
                .and_then(|grid| grid.exams.get_mut(slot.index()))
            {
                cell.push(exam.subject.clone());
            }
        }

        let makespan = assignment.makespan.map(|slot| {
            let (day_instance, period) = calendar.day_and_period(slot);
            Makespan {
                slot,
                day_instance,
                day: calendar.day_label(day_instance).to_owned(),
                period,
            }
        });

        Timetable {
            status: assignment.status,
            makespan,
            periods_per_day: calendar.periods_per_day(),
            agenda: calendar.agenda().to_vec(),
            courses,
        }
    }

    pub fn grid(&self, course: &str) -> Option<&CourseGrid> {
        self.courses.get(course)
    }

    /// The slot in which `course` holds the exam of `subject`, if it is scheduled.
    pub fn slot_of(&self, course: &str, subject: &str) -> Option<Slot> {
        self.grid(course)?
            .scheduled()
            .find(|&(_, scheduled)| scheduled == subject)
            .map(|(slot, _)| slot)
    }
}
