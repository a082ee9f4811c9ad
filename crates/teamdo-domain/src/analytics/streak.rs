use chrono::{Duration, NaiveDate};
use std::collections::BTreeMap;

use super::daily::{group_by_date, DailyCompletion};
use crate::task::Task;

pub const DEFAULT_STREAK_WINDOW_DAYS: u32 = 30;

/// Counts consecutive fully-completed days walking back from yesterday.
///
/// Days without tasks are neutral: skipped without counting or breaking.
/// The first day with unfinished work ends the walk. Today is never counted.
#[derive(Debug, Clone, Copy)]
pub struct StreakCalculator {
    window_days: u32,
}

impl Default for StreakCalculator {
    fn default() -> Self {
        Self::new(DEFAULT_STREAK_WINDOW_DAYS)
    }
}

impl StreakCalculator {
    pub fn new(window_days: u32) -> Self {
        Self { window_days }
    }

    /// Oldest day the walk may visit.
    pub fn horizon(&self, today: NaiveDate) -> NaiveDate {
        today - Duration::days(i64::from(self.window_days))
    }

    pub fn compute(&self, days: &BTreeMap<NaiveDate, DailyCompletion>, today: NaiveDate) -> u32 {
        let horizon = self.horizon(today);
        let mut streak = 0;
        let mut day = today - Duration::days(1);

        while day >= horizon {
            match days.get(&day) {
                Some(record) if record.total > 0 => {
                    if !record.is_fully_completed() {
                        break;
                    }
                    streak += 1;
                }
                _ => {}
            }
            day -= Duration::days(1);
        }

        streak
    }
}

/// Streak straight from a user's task rows.
pub fn current_streak<'a, I>(tasks: I, today: NaiveDate, window_days: u32) -> u32
where
    I: IntoIterator<Item = &'a Task>,
{
    StreakCalculator::new(window_days).compute(&group_by_date(tasks), today)
}
