//! The time grid of the scheduling horizon.
//!
//! The horizon consists of a sequence of day-instances, each with the same number of periods.
//! Every `(day-instance, period)` pair is linearised into a [`Slot`] as
//! `day_instance * periods_per_day + period`.
use std::collections::BTreeMap;
use std::fmt::Display;
use std::ops::RangeInclusive;

use log::debug;
use serde::Serialize;

use crate::config::SchedulerOptions;
use crate::error::ConfigurationError;
use crate::input::Availability;

/// An index into the linearised time grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Slot(usize);

impl Slot {
    pub fn new(index: usize) -> Slot {
        Slot(index)
    }

    pub fn index(self) -> usize {
        self.0
    }

    /// The value which represents this slot in the engine. A [`Calendar`] never has more than
    /// `i32::MAX` slots, so the conversion is exact for its slots.
    pub(crate) fn as_value(self) -> i32 {
        i32::try_from(self.0).unwrap_or(i32::MAX)
    }

    pub(crate) fn from_value(value: i32) -> Slot {
        Slot(value.max(0) as usize)
    }
}

impl Display for Slot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The scheduling horizon together with the busy/free flags of every course.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Calendar {
    periods_per_day: usize,
    agenda: Vec<String>,
    /// For every course, one flag per slot; `true` means busy.
    busy: BTreeMap<String, Vec<bool>>,
}

impl Calendar {
    /// Creates the calendar spanned by `agenda`, looking up the flags of every day-instance in
    /// the weekly `availability` by its label.
    pub fn new(
        periods_per_day: usize,
        agenda: Vec<String>,
        availability: &Availability,
    ) -> Result<Calendar, ConfigurationError> {
        if agenda.is_empty() {
            return Err(ConfigurationError::EmptyAgenda);
        }
        if periods_per_day == 0 {
            return Err(ConfigurationError::NoPeriods);
        }
        if availability.is_empty() {
            return Err(ConfigurationError::NoCourses);
        }
        let fits_the_engine = agenda
            .len()
            .checked_mul(periods_per_day)
            .is_some_and(|total_slots| i32::try_from(total_slots).is_ok());
        if !fits_the_engine {
            return Err(ConfigurationError::TooManySlots {
                num_days: agenda.len(),
                periods_per_day,
            });
        }

        let mut busy = BTreeMap::new();
        for course in availability.courses() {
            let mut course_flags = Vec::with_capacity(agenda.len() * periods_per_day);

            for day in &agenda {
                let flags = availability.flags(course, day).ok_or_else(|| {
                    ConfigurationError::MissingDay {
                        course: course.to_owned(),
                        day: day.clone(),
                    }
                })?;

                if flags.len() != periods_per_day {
                    return Err(ConfigurationError::FlagCountMismatch {
                        course: course.to_owned(),
                        day: day.clone(),
                        expected: periods_per_day,
                        actual: flags.len(),
                    });
                }

                for &flag in flags {
                    match flag {
                        0 => course_flags.push(false),
                        1 => course_flags.push(true),
                        _ => {
                            return Err(ConfigurationError::InvalidFlag {
                                course: course.to_owned(),
                                day: day.clone(),
                                flag,
                            })
                        }
                    }
                }
            }

            let _ = busy.insert(course.to_owned(), course_flags);
        }

        let calendar = Calendar {
            periods_per_day,
            agenda,
            busy,
        };
        debug!(
            "Calendar of {} courses over {} day-instances of {} periods",
            calendar.busy.len(),
            calendar.num_day_instances(),
            calendar.periods_per_day
        );
        Ok(calendar)
    }

    /// Creates the calendar described by the options. When the options do not fix the number of
    /// periods per day, it is taken from the first course on the first day of the agenda.
    pub fn from_options(
        options: &SchedulerOptions,
        availability: &Availability,
    ) -> Result<Calendar, ConfigurationError> {
        let periods_per_day = match options.periods_per_day {
            Some(periods_per_day) => periods_per_day,
            None => infer_periods_per_day(&options.agenda, availability)?,
        };

        Calendar::new(periods_per_day, options.agenda.clone(), availability)
    }

    pub fn periods_per_day(&self) -> usize {
        self.periods_per_day
    }

    pub fn num_day_instances(&self) -> usize {
        self.agenda.len()
    }

    pub fn total_slots(&self) -> usize {
        self.agenda.len() * self.periods_per_day
    }

    /// The labels of the day-instances, in order.
    pub fn agenda(&self) -> &[String] {
        &self.agenda
    }

    pub fn slot(&self, day_instance: usize, period: usize) -> Slot {
        Slot(day_instance * self.periods_per_day + period)
    }

    /// The day-instance and the period of `slot`.
    pub fn day_and_period(&self, slot: Slot) -> (usize, usize) {
        (slot.0 / self.periods_per_day, slot.0 % self.periods_per_day)
    }

    pub fn day_label(&self, day_instance: usize) -> &str {
        &self.agenda[day_instance]
    }

    /// The contiguous range of slots belonging to `day_instance`.
    pub fn day_slot_range(&self, day_instance: usize) -> RangeInclusive<Slot> {
        let first = self.slot(day_instance, 0);
        let last = self.slot(day_instance, self.periods_per_day - 1);
        first..=last
    }

    /// The slot ranges of all day-instances, in order.
    pub fn day_slot_ranges(&self) -> impl Iterator<Item = RangeInclusive<Slot>> + '_ {
        (0..self.num_day_instances()).map(|day_instance| self.day_slot_range(day_instance))
    }

    /// The courses of the calendar in lexicographic order.
    pub fn courses(&self) -> impl Iterator<Item = &str> + '_ {
        self.busy.keys().map(String::as_str)
    }

    pub fn contains_course(&self, course: &str) -> bool {
        self.busy.contains_key(course)
    }

    /// The busy flag of every slot of `course`; `None` if the course is unknown.
    pub fn busy_flags(&self, course: &str) -> Option<&[bool]> {
        self.busy.get(course).map(Vec::as_slice)
    }

    /// The slots in which `course` has no regular activity, in increasing order.
    pub fn free_slots(&self, course: &str) -> Vec<Slot> {
        self.busy
            .get(course)
            .map(|flags| {
                flags
                    .iter()
                    .enumerate()
                    .filter(|(_, &busy)| !busy)
                    .map(|(index, _)| Slot(index))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Whether the two courses have at least one slot in which both are free.
    pub fn have_common_free_slot(&self, first: &str, second: &str) -> bool {
        match (self.busy.get(first), self.busy.get(second)) {
            (Some(first), Some(second)) => first
                .iter()
                .zip(second)
                .any(|(&first_busy, &second_busy)| !first_busy && !second_busy),
            _ => false,
        }
    }

    pub fn is_free(&self, course: &str, slot: Slot) -> bool {
        self.busy
            .get(course)
            .and_then(|flags| flags.get(slot.0))
            .is_some_and(|&busy| !busy)
    }
}

fn infer_periods_per_day(
    agenda: &[String],
    availability: &Availability,
) -> Result<usize, ConfigurationError> {
    let first_day = agenda.first().ok_or(ConfigurationError::EmptyAgenda)?;
    let first_course = availability
        .courses()
        .next()
        .ok_or(ConfigurationError::NoCourses)?;

    availability
        .flags(first_course, first_day)
        .map(<[i64]>::len)
        .ok_or_else(|| ConfigurationError::MissingDay {
            course: first_course.to_owned(),
            day: first_day.clone(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn agenda(days: &[&str]) -> Vec<String> {
        days.iter().map(|&day| day.to_owned()).collect()
    }

    #[test]
    fn slots_are_linearised_by_day_and_period() {
        let availability = Availability::default()
            .with_day("1A", "seg", [0, 0, 0])
            .with_day("1A", "ter", [0, 0, 0]);
        let calendar = Calendar::new(3, agenda(&["seg", "ter"]), &availability).unwrap();

        assert_eq!(calendar.total_slots(), 6);
        assert_eq!(calendar.slot(1, 2), Slot::new(5));
        assert_eq!(calendar.day_and_period(Slot::new(4)), (1, 1));
        assert_eq!(calendar.day_slot_range(1), Slot::new(3)..=Slot::new(5));
        assert_eq!(calendar.day_slot_ranges().count(), 2);
    }

    #[test]
    fn repeated_labels_reuse_the_weekly_flags() {
        let availability = Availability::default()
            .with_day("1A", "seg", [1, 0])
            .with_day("1A", "ter", [0, 1]);
        let calendar = Calendar::new(2, agenda(&["seg", "ter", "seg"]), &availability).unwrap();

        assert_eq!(
            calendar.free_slots("1A"),
            vec![Slot::new(1), Slot::new(2), Slot::new(5)]
        );
        assert_eq!(calendar.day_label(2), "seg");
        assert!(calendar.is_free("1A", Slot::new(5)));
        assert!(!calendar.is_free("1A", Slot::new(4)));
        assert!(!calendar.is_free("1A", Slot::new(6)));
    }

    #[test]
    fn periods_per_day_is_inferred_from_the_first_course() {
        let availability = Availability::default()
            .with_day("1A", "seg", [0, 0, 1, 1])
            .with_day("1B", "seg", [0, 0, 0, 0]);
        let options = SchedulerOptions {
            agenda: agenda(&["seg"]),
            ..Default::default()
        };

        let calendar = Calendar::from_options(&options, &availability).unwrap();
        assert_eq!(calendar.periods_per_day(), 4);
        assert_eq!(calendar.free_slots("1A"), vec![Slot::new(0), Slot::new(1)]);
    }

    #[test]
    fn common_free_slots_are_detected() {
        let availability = Availability::default()
            .with_day("1A", "seg", [0, 1, 1])
            .with_day("1B", "seg", [1, 0, 1])
            .with_day("1C", "seg", [0, 0, 1]);
        let calendar = Calendar::new(3, agenda(&["seg"]), &availability).unwrap();

        assert!(!calendar.have_common_free_slot("1A", "1B"));
        assert!(calendar.have_common_free_slot("1A", "1C"));
        assert!(calendar.have_common_free_slot("1C", "1B"));
        assert!(!calendar.have_common_free_slot("1A", "2A"));
    }

    #[test]
    fn flag_count_must_match_periods_per_day() {
        let availability = Availability::default()
            .with_day("1A", "seg", [0, 0])
            .with_day("1A", "ter", [0, 0, 0]);

        let result = Calendar::new(2, agenda(&["seg", "ter"]), &availability);
        assert_eq!(
            result,
            Err(ConfigurationError::FlagCountMismatch {
                course: "1A".to_owned(),
                day: "ter".to_owned(),
                expected: 2,
                actual: 3,
            })
        );
    }

    #[test]
    fn missing_day_is_reported() {
        let availability = Availability::default().with_day("1A", "seg", [0]);

        let result = Calendar::new(1, agenda(&["seg", "ter"]), &availability);
        assert!(matches!(result, Err(ConfigurationError::MissingDay { day, .. }) if day == "ter"));
    }

    #[test]
    fn flags_other_than_zero_and_one_are_rejected() {
        let availability = Availability::default().with_day("1A", "seg", [0, 2]);

        let result = Calendar::new(2, agenda(&["seg"]), &availability);
        assert!(matches!(result, Err(ConfigurationError::InvalidFlag { flag: 2, .. })));
    }

    #[test]
    fn degenerate_shapes_are_rejected() {
        let availability = Availability::default().with_day("1A", "seg", [0]);

        assert_eq!(
            Calendar::new(1, vec![], &availability),
            Err(ConfigurationError::EmptyAgenda)
        );
        assert_eq!(
            Calendar::new(0, agenda(&["seg"]), &availability),
            Err(ConfigurationError::NoPeriods)
        );
        assert_eq!(
            Calendar::new(1, agenda(&["seg"]), &Availability::default()),
            Err(ConfigurationError::NoCourses)
        );
    }

    #[test]
    fn horizons_beyond_the_engine_range_are_rejected() {
        let availability = Availability::default().with_day("1A", "seg", [0]);
        let periods_per_day = 1 << 30;

        assert_eq!(
            Calendar::new(periods_per_day, agenda(&["seg", "seg"]), &availability),
            Err(ConfigurationError::TooManySlots {
                num_days: 2,
                periods_per_day,
            })
        );
    }
}
