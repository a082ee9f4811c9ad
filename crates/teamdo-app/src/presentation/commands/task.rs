use crate::application::commands::command_handler::CommandHandler;
use crate::application::commands::task_commands::*;
use crate::application::dtos::{SearchResultDto, TaskDto, WeeklySummaryDto};
use crate::presentation::commands::local_today;
use crate::presentation::error::CommandError;
use crate::presentation::state::AppState;

/// List the caller's tasks for a day, or their backlog
pub async fn list_tasks(
    state: &AppState,
    caller_id: &str,
    date: Option<&str>,
    backlog: bool,
) -> Result<Vec<TaskDto>, CommandError> {
    Ok(state
        .queries
        .tasks
        .list_tasks(caller_id, date, backlog, local_today())
        .await?)
}

/// Create a task
pub async fn create_task(
    state: &AppState,
    caller_id: &str,
    content: String,
    date: Option<String>,
    backlog: bool,
) -> Result<TaskDto, CommandError> {
    let command = CreateTaskCommand {
        caller_id: caller_id.to_string(),
        content,
        date,
        backlog,
    };

    Ok(state.command_handlers.create_task.handle(command).await?)
}

/// Update a task's content, completion, priority or date
pub async fn update_task(
    state: &AppState,
    caller_id: &str,
    task_id: String,
    patch: TaskPatch,
) -> Result<TaskDto, CommandError> {
    let command = UpdateTaskCommand {
        caller_id: caller_id.to_string(),
        task_id,
        patch,
    };

    Ok(state.command_handlers.update_task.handle(command).await?)
}

/// Delete a task
pub async fn delete_task(
    state: &AppState,
    caller_id: &str,
    task_id: String,
) -> Result<(), CommandError> {
    let command = DeleteTaskCommand {
        caller_id: caller_id.to_string(),
        task_id,
    };

    Ok(state.command_handlers.delete_task.handle(command).await?)
}

/// Per-day progress for seven days
pub async fn get_weekly_summary(
    state: &AppState,
    caller_id: &str,
    start_date: Option<&str>,
) -> Result<WeeklySummaryDto, CommandError> {
    Ok(state
        .queries
        .tasks
        .weekly_summary(caller_id, start_date, local_today())
        .await?)
}

/// Search the caller's recent tasks
pub async fn search_tasks(
    state: &AppState,
    caller_id: &str,
    query: &str,
) -> Result<SearchResultDto, CommandError> {
    Ok(state
        .queries
        .search
        .search(caller_id, query, local_today())
        .await?)
}
