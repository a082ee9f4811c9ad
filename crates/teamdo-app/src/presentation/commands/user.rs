use crate::application::commands::command_handler::CommandHandler;
use crate::application::commands::user_commands::RegisterUserCommand;
use crate::application::dtos::UserDto;
use crate::presentation::error::CommandError;
use crate::presentation::state::AppState;

/// Record a profile for an email verified by the identity provider
pub async fn register_user(
    state: &AppState,
    email: String,
    name: Option<String>,
) -> Result<UserDto, CommandError> {
    let command = RegisterUserCommand { email, name };

    Ok(state.command_handlers.register_user.handle(command).await?)
}
