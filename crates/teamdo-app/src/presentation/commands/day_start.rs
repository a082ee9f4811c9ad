use crate::application::commands::command_handler::CommandHandler;
use crate::application::commands::day_start_commands::StartDayCommand;
use crate::application::dtos::{DayStartStatusDto, StartDayResultDto};
use crate::presentation::commands::local_today;
use crate::presentation::error::CommandError;
use crate::presentation::state::AppState;

pub async fn get_day_start_status(
    state: &AppState,
    caller_id: &str,
) -> Result<DayStartStatusDto, CommandError> {
    Ok(state
        .queries
        .team
        .day_start_status(caller_id, local_today())
        .await?)
}

/// Mark today as started and notify the team
pub async fn start_day(state: &AppState, caller_id: &str) -> Result<StartDayResultDto, CommandError> {
    let command = StartDayCommand {
        caller_id: caller_id.to_string(),
    };

    Ok(state.command_handlers.start_day.handle(command).await?)
}
