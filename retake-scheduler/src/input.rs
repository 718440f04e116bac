//! The JSON documents the scheduler reads.
//!
//! The availability document maps every course to its weekly timetable, with one sequence of
//! flags per weekday (`0` is free, `1` is busy):
//! ```json
//! { "1A": { "seg": [1, 0, 0, 1], "ter": [0, 0, 1, 1] } }
//! ```
//! The roster document maps every course to its students and the subjects they retake:
//! ```json
//! { "1A": { "ana": ["math", "physics"], "bruno": ["math"] } }
//! ```
use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde::Serialize;

use crate::error::SchedulerError;
use crate::error::SchedulerResult;

/// The weekly busy/free flags of every course, keyed by course and then by day label.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Availability {
    courses: BTreeMap<String, BTreeMap<String, Vec<i64>>>,
}

impl Availability {
    pub fn read(path: impl AsRef<Path>) -> SchedulerResult<Availability> {
        read_json(path.as_ref())
    }

    /// Sets the flags of `course` on the day labelled `day`.
    pub fn with_day(
        mut self,
        course: impl Into<String>,
        day: impl Into<String>,
        flags: impl IntoIterator<Item = i64>,
    ) -> Self {
        let _ = self
            .courses
            .entry(course.into())
            .or_default()
            .insert(day.into(), flags.into_iter().collect());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    pub fn courses(&self) -> impl Iterator<Item = &str> + '_ {
        self.courses.keys().map(String::as_str)
    }

    /// The flags of `course` on the day labelled `day`, if present.
    pub fn flags(&self, course: &str, day: &str) -> Option<&[i64]> {
        self.courses
            .get(course)
            .and_then(|days| days.get(day))
            .map(Vec::as_slice)
    }
}

/// The subjects every student retakes, keyed by course and then by student.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Roster {
    courses: BTreeMap<String, BTreeMap<String, Vec<String>>>,
}

impl Roster {
    pub fn read(path: impl AsRef<Path>) -> SchedulerResult<Roster> {
        read_json(path.as_ref())
    }

    /// Registers `student` of `course` as retaking `subjects`.
    pub fn with_student<Subject: Into<String>>(
        mut self,
        course: impl Into<String>,
        student: impl Into<String>,
        subjects: impl IntoIterator<Item = Subject>,
    ) -> Self {
        let _ = self
            .courses
            .entry(course.into())
            .or_default()
            .insert(student.into(), subjects.into_iter().map(Into::into).collect());
        self
    }

    /// Iterates over `(course, student, subjects)` in lexicographic order of course and student.
    pub fn students(&self) -> impl Iterator<Item = (&str, &str, &[String])> + '_ {
        self.courses.iter().flat_map(|(course, students)| {
            students
                .iter()
                .map(move |(student, subjects)| (course.as_str(), student.as_str(), subjects.as_slice()))
        })
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> SchedulerResult<T> {
    let file = File::open(path).map_err(|source| SchedulerError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_reader(BufReader::new(file)).map_err(|source| SchedulerError::Json {
        path: path.to_path_buf(),
        source,
    })
}
