use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::rate::completion_rate;
use crate::task::Task;

/// Task counts for one user (or team) on one calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyCompletion {
    pub date: NaiveDate,
    pub total: u32,
    pub completed: u32,
}

impl DailyCompletion {
    pub fn empty(date: NaiveDate) -> Self {
        Self {
            date,
            total: 0,
            completed: 0,
        }
    }

    pub fn record(&mut self, completed: bool) {
        self.total += 1;
        if completed {
            self.completed += 1;
        }
    }

    pub fn completion_rate(&self) -> u32 {
        completion_rate(self.completed, self.total)
    }

    pub fn is_fully_completed(&self) -> bool {
        self.total > 0 && self.completed == self.total
    }
}

/// Group dated tasks by day. Backlog tasks are ignored.
pub fn group_by_date<'a, I>(tasks: I) -> BTreeMap<NaiveDate, DailyCompletion>
where
    I: IntoIterator<Item = &'a Task>,
{
    let mut days: BTreeMap<NaiveDate, DailyCompletion> = BTreeMap::new();
    for task in tasks {
        if let Some(date) = task.date() {
            days.entry(date)
                .or_insert_with(|| DailyCompletion::empty(date))
                .record(task.is_completed());
        }
    }
    days
}

/// One entry per day in `start ..= start + days - 1`, oldest first, zero-filled.
/// Tasks outside the range do not contribute. The series stops early at the
/// last date chrono can represent.
pub fn daily_series<'a, I>(tasks: I, start: NaiveDate, days: u32) -> Vec<DailyCompletion>
where
    I: IntoIterator<Item = &'a Task>,
{
    let grouped = group_by_date(tasks);
    (0..i64::from(days))
        .map_while(|offset| start.checked_add_signed(Duration::days(offset)))
        .map(|date| {
            grouped
                .get(&date)
                .copied()
                .unwrap_or_else(|| DailyCompletion::empty(date))
        })
        .collect()
}
