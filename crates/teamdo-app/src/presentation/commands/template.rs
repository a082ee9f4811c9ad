use crate::application::commands::command_handler::CommandHandler;
use crate::application::commands::template_commands::*;
use crate::application::dtos::TemplateDto;
use crate::presentation::error::CommandError;
use crate::presentation::state::AppState;

pub async fn list_templates(
    state: &AppState,
    caller_id: &str,
) -> Result<Vec<TemplateDto>, CommandError> {
    Ok(state.queries.tasks.list_templates(caller_id).await?)
}

pub async fn create_template(
    state: &AppState,
    caller_id: &str,
    content: String,
) -> Result<TemplateDto, CommandError> {
    let command = CreateTemplateCommand {
        caller_id: caller_id.to_string(),
        content,
    };

    Ok(state.command_handlers.create_template.handle(command).await?)
}

pub async fn delete_template(
    state: &AppState,
    caller_id: &str,
    template_id: String,
) -> Result<(), CommandError> {
    let command = DeleteTemplateCommand {
        caller_id: caller_id.to_string(),
        template_id,
    };

    Ok(state.command_handlers.delete_template.handle(command).await?)
}
