use chrono::{Duration, NaiveDate};
use futures::try_join;
use log::info;

use crate::application::dtos::{
    DayOfWeekStatDto, MemberStatDto, MonthlyStatsDto, OverallDto, PeriodDto, WeekStatDto,
};
use crate::application::utils::{format_date, load_caller_team};
use teamdo_domain::analytics::{
    by_day_of_week, by_member, by_week, most_productive_day, sort_by_rate, PeriodTotals,
};
use teamdo_domain::shared::DomainError;
use teamdo_domain::task::TaskRepository;
use teamdo_domain::user::UserRepository;

const MONTH_DAYS: i64 = 30;
const WEEK_BUCKETS: u32 = 4;

pub(super) async fn monthly_stats(
    user_repo: &dyn UserRepository,
    task_repo: &dyn TaskRepository,
    caller_id: &str,
    today: NaiveDate,
) -> Result<MonthlyStatsDto, DomainError> {
    let (_, team_id) = load_caller_team(user_repo, caller_id).await?;
    let start = today - Duration::days(MONTH_DAYS - 1);

    let (tasks, members) = try_join!(
        task_repo.find_by_team_in_range(&team_id, start, today),
        user_repo.find_by_team(&team_id),
    )?;

    let overall = PeriodTotals::from_tasks(&tasks);
    let weekdays = by_day_of_week(&tasks);
    let best_day = most_productive_day(&weekdays).map(|d| d.day.clone());

    let mut member_stats = by_member(&tasks, &members);
    sort_by_rate(&mut member_stats);

    info!(
        "[stats] monthly team={} tasks={} rate={} best_day={:?}",
        team_id, overall.total, overall.completion_rate, best_day
    );

    Ok(MonthlyStatsDto {
        period: PeriodDto {
            start: format_date(start),
            end: format_date(today),
        },
        overall: OverallDto {
            total: overall.total,
            completed: overall.completed,
            completion_rate: overall.completion_rate,
            most_productive_day: best_day,
        },
        by_week: by_week(&tasks, today, WEEK_BUCKETS)
            .iter()
            .map(WeekStatDto::from)
            .collect(),
        by_day_of_week: weekdays.iter().map(DayOfWeekStatDto::from).collect(),
        by_member: member_stats.iter().map(MemberStatDto::from).collect(),
    })
}
