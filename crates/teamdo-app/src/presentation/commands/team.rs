use crate::application::commands::command_handler::CommandHandler;
use crate::application::commands::team_commands::*;
use crate::application::dtos::{LeaveTeamResultDto, TeamDto};
use crate::presentation::error::CommandError;
use crate::presentation::state::AppState;

/// The caller's team, if any
pub async fn get_team(state: &AppState, caller_id: &str) -> Result<Option<TeamDto>, CommandError> {
    Ok(state.queries.team.get_team(caller_id).await?)
}

/// Create a team and join it
pub async fn create_team(
    state: &AppState,
    caller_id: &str,
    name: String,
) -> Result<TeamDto, CommandError> {
    let command = CreateTeamCommand {
        caller_id: caller_id.to_string(),
        name,
    };

    Ok(state.command_handlers.create_team.handle(command).await?)
}

/// Join a team by invite code
pub async fn join_team(
    state: &AppState,
    caller_id: &str,
    invite_code: String,
) -> Result<TeamDto, CommandError> {
    let command = JoinTeamCommand {
        caller_id: caller_id.to_string(),
        invite_code,
    };

    Ok(state.command_handlers.join_team.handle(command).await?)
}

/// Leave the current team. All of the caller's tasks are deleted.
pub async fn leave_team(
    state: &AppState,
    caller_id: &str,
) -> Result<LeaveTeamResultDto, CommandError> {
    let command = LeaveTeamCommand {
        caller_id: caller_id.to_string(),
    };

    Ok(state.command_handlers.leave_team.handle(command).await?)
}

/// Rename the team or change its webhook
pub async fn update_team_settings(
    state: &AppState,
    caller_id: &str,
    name: Option<String>,
    webhook_url: Option<String>,
) -> Result<TeamDto, CommandError> {
    let command = UpdateTeamSettingsCommand {
        caller_id: caller_id.to_string(),
        name,
        webhook_url,
    };

    Ok(state
        .command_handlers
        .update_team_settings
        .handle(command)
        .await?)
}
