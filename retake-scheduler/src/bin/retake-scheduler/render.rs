//! Writes a timetable to the console.
use std::io::Write;

use itertools::Itertools;
use retake_scheduler::Slot;
use retake_scheduler::Timetable;

/// Writes the status line followed by one block per course, with a line per day-instance.
pub(crate) fn write_timetable(writer: &mut impl Write, timetable: &Timetable) -> std::io::Result<()> {
    match &timetable.makespan {
        Some(makespan) => writeln!(
            writer,
            "Status: {}, last exam in slot {} ({} period {})",
            timetable.status, makespan.slot, makespan.day, makespan.period
        )?,
        None => writeln!(writer, "Status: {}, no exams to schedule", timetable.status)?,
    }

    for (course, grid) in &timetable.courses {
        writeln!(writer)?;
        writeln!(writer, "{course}:")?;

        for (day_instance, day) in timetable.agenda.iter().enumerate() {
            let first_slot = day_instance * timetable.periods_per_day;
            let line = (first_slot..first_slot + timetable.periods_per_day)
                .map(|index| {
                    let subjects = grid.exams_at(Slot::new(index));
                    if subjects.is_empty() {
                        "'-'".to_owned()
                    } else {
                        format!("'{}'", subjects.join(", "))
                    }
                })
                .join(", ");

            writeln!(writer, "  {day:>3}: [{line}]")?;
        }
    }

    Ok(())
}
