//! Pure aggregation over a date-indexed task log.
//!
//! Nothing here touches storage. Callers load tasks for a window and hand
//! them in, which keeps every rule unit-testable without a database.

mod daily;
mod member;
mod period;
mod rate;
mod streak;


pub use daily::{daily_series, group_by_date, DailyCompletion};
pub use member::{by_member, select_mvp, sort_by_rate, MemberStats, UNNAMED_MEMBER};
pub use period::{
    by_day_of_week, by_week, most_productive_day, DayOfWeekStats, PeriodTotals, WeekBucket,
    DAY_NAMES,
};
pub use rate::completion_rate;
pub use streak::{current_streak, StreakCalculator, DEFAULT_STREAK_WINDOW_DAYS};
