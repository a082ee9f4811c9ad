use crate::application::dtos::{MonthlyStatsDto, WeeklyStatsDto};
use crate::presentation::commands::local_today;
use crate::presentation::error::CommandError;
use crate::presentation::state::AppState;

pub async fn get_weekly_stats(
    state: &AppState,
    caller_id: &str,
) -> Result<WeeklyStatsDto, CommandError> {
    Ok(state.queries.stats.weekly(caller_id, local_today()).await?)
}

pub async fn get_monthly_stats(
    state: &AppState,
    caller_id: &str,
) -> Result<MonthlyStatsDto, CommandError> {
    Ok(state.queries.stats.monthly(caller_id, local_today()).await?)
}
