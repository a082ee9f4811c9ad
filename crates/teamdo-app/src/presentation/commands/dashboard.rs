use crate::application::dtos::{DashboardDto, HistoryDto};
use crate::presentation::commands::local_today;
use crate::presentation::error::CommandError;
use crate::presentation::state::AppState;

/// Today's team board with the caller's insights
pub async fn get_dashboard(state: &AppState, caller_id: &str) -> Result<DashboardDto, CommandError> {
    Ok(state
        .queries
        .dashboard
        .get_dashboard(caller_id, local_today())
        .await?)
}

/// The team board for a past date (required)
pub async fn get_history(
    state: &AppState,
    caller_id: &str,
    date: Option<&str>,
) -> Result<HistoryDto, CommandError> {
    Ok(state.queries.dashboard.get_history(caller_id, date).await?)
}
