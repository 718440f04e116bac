//! The exams which have to be scheduled, derived from the roster.
use std::collections::BTreeMap;
use std::collections::BTreeSet;

use crate::input::Roster;

/// A student, identified by their course and their name within it.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StudentKey {
    pub course: String,
    pub student: String,
}

/// A frozen index over the roster. It is created with a [`DemandModelBuilder`] (or directly from
/// a [`Roster`]) and cannot be changed afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DemandModel {
    required_subjects: BTreeMap<String, BTreeSet<String>>,
    subjects_of: BTreeMap<StudentKey, BTreeSet<String>>,
    sharing_courses: BTreeMap<String, Vec<String>>,
}

impl DemandModel {
    pub fn builder() -> DemandModelBuilder {
        DemandModelBuilder::default()
    }

    pub fn from_roster(roster: &Roster) -> DemandModel {
        roster
            .students()
            .fold(DemandModel::builder(), |builder, (course, student, subjects)| {
                builder.with_student(course, student, subjects.iter().cloned())
            })
            .build()
    }

    /// The courses which appear in the roster, in lexicographic order.
    pub fn courses(&self) -> impl Iterator<Item = &str> + '_ {
        self.required_subjects.keys().map(String::as_str)
    }

    /// The union of the subjects owed by the students of `course`.
    pub fn required_subjects(&self, course: &str) -> impl Iterator<Item = &str> + '_ {
        self.required_subjects
            .get(course)
            .into_iter()
            .flatten()
            .map(String::as_str)
    }

    /// The subjects owed by a single student.
    pub fn subjects_of(&self, student: &StudentKey) -> Option<&BTreeSet<String>> {
        self.subjects_of.get(student)
    }

    /// All students together with the subjects they owe.
    pub fn students(&self) -> impl Iterator<Item = (&StudentKey, &BTreeSet<String>)> + '_ {
        self.subjects_of.iter()
    }

    /// All subjects required by at least one course, in lexicographic order.
    pub fn subjects(&self) -> impl Iterator<Item = &str> + '_ {
        self.sharing_courses.keys().map(String::as_str)
    }

    /// The courses which require `subject`, in lexicographic order.
    pub fn sharing_courses(&self, subject: &str) -> &[String] {
        self.sharing_courses
            .get(subject)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// The number of `(course, subject)` exams.
    pub fn num_exams(&self) -> usize {
        self.required_subjects.values().map(BTreeSet::len).sum()
    }
}

/// Collects the students of the roster; [`DemandModelBuilder::build`] derives the indexes.
#[derive(Debug, Clone, Default)]
pub struct DemandModelBuilder {
    subjects_of: BTreeMap<StudentKey, BTreeSet<String>>,
}

impl DemandModelBuilder {
    /// Adds the subjects to those owed by `student` of `course`.
    pub fn with_student<Subject: Into<String>>(
        mut self,
        course: impl Into<String>,
        student: impl Into<String>,
        subjects: impl IntoIterator<Item = Subject>,
    ) -> Self {
        let key = StudentKey {
            course: course.into(),
            student: student.into(),
        };
        self.subjects_of
            .entry(key)
            .or_default()
            .extend(subjects.into_iter().map(Into::into));
        self
    }

    pub fn build(self) -> DemandModel {
        let mut required_subjects: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
        for (key, subjects) in &self.subjects_of {
            required_subjects
                .entry(key.course.clone())
                .or_default()
                .extend(subjects.iter().cloned());
        }

        let mut sharing_courses: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for (course, subjects) in &required_subjects {
            for subject in subjects {
                sharing_courses
                    .entry(subject.clone())
                    .or_default()
                    .push(course.clone());
            }
        }

        DemandModel {
            required_subjects,
            subjects_of: self.subjects_of,
            sharing_courses,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn demand() -> DemandModel {
        DemandModel::builder()
            .with_student("1A", "ana", ["math", "physics"])
            .with_student("1A", "bruno", ["math", "art"])
            .with_student("1B", "carla", ["math"])
            .with_student("1C", "davi", Vec::<String>::new())
            .build()
    }

    #[test]
    fn required_subjects_are_the_union_over_students() {
        let demand = demand();

        assert_eq!(
            demand.required_subjects("1A").collect::<Vec<_>>(),
            vec!["art", "math", "physics"]
        );
        assert_eq!(demand.required_subjects("1B").collect::<Vec<_>>(), vec!["math"]);
        assert_eq!(demand.required_subjects("1C").count(), 0);
        assert_eq!(demand.required_subjects("2A").count(), 0);
        assert_eq!(demand.num_exams(), 4);
    }

    #[test]
    fn sharing_courses_is_the_inverse_index() {
        let demand = demand();

        assert_eq!(demand.sharing_courses("math"), ["1A", "1B"]);
        assert_eq!(demand.sharing_courses("art"), ["1A"]);
        assert!(demand.sharing_courses("history").is_empty());
        assert_eq!(
            demand.subjects().collect::<Vec<_>>(),
            vec!["art", "math", "physics"]
        );
    }

    #[test]
    fn subjects_of_a_student_are_kept() {
        let demand = demand();
        let key = StudentKey {
            course: "1A".to_owned(),
            student: "ana".to_owned(),
        };

        let subjects = demand.subjects_of(&key).unwrap();
        assert_eq!(subjects.len(), 2);
        assert!(subjects.contains("physics"));
        assert_eq!(demand.students().count(), 4);
    }

    #[test]
    fn duplicate_subjects_are_merged() {
        let demand = DemandModel::builder()
            .with_student("1A", "ana", ["math", "math"])
            .with_student("1A", "ana", ["art"])
            .build();

        assert_eq!(demand.students().count(), 1);
        assert_eq!(demand.num_exams(), 2);
    }

    #[test]
    fn the_roster_is_indexed() {
        let roster = Roster::default()
            .with_student("1A", "ana", ["math"])
            .with_student("1B", "bruno", ["math"]);

        let demand = DemandModel::from_roster(&roster);
        assert_eq!(demand.courses().collect::<Vec<_>>(), vec!["1A", "1B"]);
        assert_eq!(demand.sharing_courses("math"), ["1A", "1B"]);
    }
}
