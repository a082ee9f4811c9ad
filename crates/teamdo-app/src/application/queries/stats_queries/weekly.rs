use chrono::{Duration, NaiveDate};
use futures::try_join;
use log::info;

use crate::application::dtos::{
    DailyStatDto, MemberStatDto, OverallDto, PeriodDto, WeeklyStatsDto,
};
use crate::application::utils::{format_date, load_caller_team};
use teamdo_domain::analytics::{by_member, daily_series, select_mvp, sort_by_rate, PeriodTotals};
use teamdo_domain::shared::DomainError;
use teamdo_domain::task::TaskRepository;
use teamdo_domain::user::UserRepository;

const WEEK_DAYS: u32 = 7;

pub(super) async fn weekly_stats(
    user_repo: &dyn UserRepository,
    task_repo: &dyn TaskRepository,
    caller_id: &str,
    today: NaiveDate,
) -> Result<WeeklyStatsDto, DomainError> {
    let (_, team_id) = load_caller_team(user_repo, caller_id).await?;
    let start = today - Duration::days(i64::from(WEEK_DAYS - 1));

    let (tasks, members) = try_join!(
        task_repo.find_by_team_in_range(&team_id, start, today),
        user_repo.find_by_team(&team_id),
    )?;

    let overall = PeriodTotals::from_tasks(&tasks);
    let mut member_stats = by_member(&tasks, &members);
    // Ties go to the first member encountered, so pick before sorting
    let mvp = select_mvp(&member_stats).map(MemberStatDto::from);
    sort_by_rate(&mut member_stats);

    info!(
        "[stats] weekly team={} tasks={} rate={} mvp={:?}",
        team_id,
        overall.total,
        overall.completion_rate,
        mvp.as_ref().map(|m| m.user_id.as_str())
    );

    Ok(WeeklyStatsDto {
        period: PeriodDto {
            start: format_date(start),
            end: format_date(today),
        },
        overall: OverallDto {
            total: overall.total,
            completed: overall.completed,
            completion_rate: overall.completion_rate,
            most_productive_day: None,
        },
        daily: daily_series(&tasks, start, WEEK_DAYS)
            .iter()
            .map(DailyStatDto::from)
            .collect(),
        by_member: member_stats.iter().map(MemberStatDto::from).collect(),
        mvp,
    })
}
