use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use super::rate::completion_rate;
use crate::task::Task;

pub const DAY_NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodTotals {
    pub total: u32,
    pub completed: u32,
    pub completion_rate: u32,
}

impl PeriodTotals {
    pub fn from_tasks<'a, I>(tasks: I) -> Self
    where
        I: IntoIterator<Item = &'a Task>,
    {
        let (total, completed) = tasks.into_iter().fold((0, 0), |(t, c), task| {
            (t + 1, c + u32::from(task.is_completed()))
        });
        Self::new(total, completed)
    }

    pub fn new(total: u32, completed: u32) -> Self {
        Self {
            total,
            completed,
            completion_rate: completion_rate(completed, total),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DayOfWeekStats {
    /// Sunday = 0 .. Saturday = 6
    pub weekday: u32,
    pub day: String,
    pub total: u32,
    pub completed: u32,
    pub completion_rate: u32,
}

/// Seven buckets, Sunday first. Backlog tasks are ignored.
pub fn by_day_of_week<'a, I>(tasks: I) -> Vec<DayOfWeekStats>
where
    I: IntoIterator<Item = &'a Task>,
{
    let mut counts = [(0u32, 0u32); 7];
    for task in tasks {
        if let Some(date) = task.date() {
            let slot = &mut counts[date.weekday().num_days_from_sunday() as usize];
            slot.0 += 1;
            if task.is_completed() {
                slot.1 += 1;
            }
        }
    }

    counts
        .iter()
        .enumerate()
        .map(|(i, &(total, completed))| DayOfWeekStats {
            weekday: i as u32,
            day: DAY_NAMES[i].to_string(),
            total,
            completed,
            completion_rate: completion_rate(completed, total),
        })
        .collect()
}

/// Bucket with the most completed tasks. Earlier buckets win ties,
/// so an empty month reports Sunday.
pub fn most_productive_day(buckets: &[DayOfWeekStats]) -> Option<&DayOfWeekStats> {
    let mut iter = buckets.iter();
    let first = iter.next()?;
    Some(iter.fold(first, |best, current| {
        if current.completed > best.completed {
            current
        } else {
            best
        }
    }))
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WeekBucket {
    /// "M/D - M/D"
    pub week: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub total: u32,
    pub completed: u32,
    pub completion_rate: u32,
}

/// `weeks` trailing 7-day buckets. Bucket `i` ends at `today - 7i` and spans
/// seven days inclusive. Emitted oldest first.
pub fn by_week(tasks: &[Task], today: NaiveDate, weeks: u32) -> Vec<WeekBucket> {
    let mut buckets: Vec<WeekBucket> = (0..i64::from(weeks))
        .map(|i| {
            let end = today - Duration::days(7 * i);
            let start = end - Duration::days(6);
            let totals = PeriodTotals::from_tasks(
                tasks
                    .iter()
                    .filter(|t| t.date().is_some_and(|d| d >= start && d <= end)),
            );
            WeekBucket {
                week: format!(
                    "{}/{} - {}/{}",
                    start.month(),
                    start.day(),
                    end.month(),
                    end.day()
                ),
                start,
                end,
                total: totals.total,
                completed: totals.completed,
                completion_rate: totals.completion_rate,
            }
        })
        .collect();
    buckets.reverse();
    buckets
}
