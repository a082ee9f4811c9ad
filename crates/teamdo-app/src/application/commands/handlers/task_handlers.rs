use async_trait::async_trait;
use chrono::{Local, Utc};
use log::info;
use std::sync::Arc;

use crate::application::commands::command_handler::CommandHandler;
use crate::application::commands::task_commands::*;
use crate::application::dtos::TaskDto;
use crate::application::utils::{load_caller, load_caller_team, parse_date};
use teamdo_domain::shared::{DomainError, TaskId, UserId};
use teamdo_domain::task::{Task, TaskRepository};
use teamdo_domain::user::UserRepository;

/// Load a task the caller is allowed to modify.
async fn load_owned_task(
    task_repo: &dyn TaskRepository,
    task_id: &str,
    owner: &UserId,
) -> Result<Task, DomainError> {
    let task = task_repo
        .find_by_id(&TaskId::from_string(task_id))
        .await?
        .ok_or_else(|| DomainError::TaskNotFound(task_id.to_string()))?;

    if !task.is_owned_by(owner) {
        return Err(DomainError::Forbidden(format!(
            "Task {} belongs to another user",
            task_id
        )));
    }
    Ok(task)
}

/// Create task command handler
pub struct CreateTaskCommandHandler {
    user_repo: Arc<dyn UserRepository>,
    task_repo: Arc<dyn TaskRepository>,
}

impl CreateTaskCommandHandler {
    pub fn new(user_repo: Arc<dyn UserRepository>, task_repo: Arc<dyn TaskRepository>) -> Self {
        Self {
            user_repo,
            task_repo,
        }
    }
}

#[async_trait]
impl CommandHandler<CreateTaskCommand> for CreateTaskCommandHandler {
    type Result = CreateTaskResult;

    async fn handle(&self, cmd: CreateTaskCommand) -> Result<Self::Result, DomainError> {
        let (user, team_id) = load_caller_team(self.user_repo.as_ref(), &cmd.caller_id).await?;

        let date = if cmd.backlog {
            None
        } else {
            match cmd.date.as_deref() {
                Some(raw) => Some(parse_date(raw)?),
                None => Some(Local::now().date_naive()),
            }
        };

        let task = Task::new(
            user.id().clone(),
            team_id,
            cmd.content.trim().to_string(),
            date,
        )?;
        self.task_repo.save(&task).await?;

        info!(
            "Task created: {} (user={}, date={:?})",
            task.id(),
            user.id(),
            task.date()
        );

        Ok(TaskDto::from(&task))
    }
}

/// Update task command handler
pub struct UpdateTaskCommandHandler {
    user_repo: Arc<dyn UserRepository>,
    task_repo: Arc<dyn TaskRepository>,
}

impl UpdateTaskCommandHandler {
    pub fn new(user_repo: Arc<dyn UserRepository>, task_repo: Arc<dyn TaskRepository>) -> Self {
        Self {
            user_repo,
            task_repo,
        }
    }
}

#[async_trait]
impl CommandHandler<UpdateTaskCommand> for UpdateTaskCommandHandler {
    type Result = UpdateTaskResult;

    async fn handle(&self, cmd: UpdateTaskCommand) -> Result<Self::Result, DomainError> {
        let user = load_caller(self.user_repo.as_ref(), &cmd.caller_id).await?;
        let mut task = load_owned_task(self.task_repo.as_ref(), &cmd.task_id, user.id()).await?;

        let patch = cmd.patch;
        if let Some(content) = patch.content {
            task.update_content(content.trim().to_string())?;
        }
        if let Some(completed) = patch.completed {
            task.set_completed(completed, Utc::now());
        }
        if let Some(priority) = patch.priority {
            task.set_priority(priority);
        }
        match patch.date {
            Some(TaskDateChange::Day(raw)) => task.move_to(Some(parse_date(&raw)?)),
            Some(TaskDateChange::Backlog) => task.move_to(None),
            None => {}
        }

        self.task_repo.save(&task).await?;

        info!("Task updated: {}", task.id());

        Ok(TaskDto::from(&task))
    }
}

/// Delete task command handler
pub struct DeleteTaskCommandHandler {
    user_repo: Arc<dyn UserRepository>,
    task_repo: Arc<dyn TaskRepository>,
}

impl DeleteTaskCommandHandler {
    pub fn new(user_repo: Arc<dyn UserRepository>, task_repo: Arc<dyn TaskRepository>) -> Self {
        Self {
            user_repo,
            task_repo,
        }
    }
}

#[async_trait]
impl CommandHandler<DeleteTaskCommand> for DeleteTaskCommandHandler {
    type Result = DeleteTaskResult;

    async fn handle(&self, cmd: DeleteTaskCommand) -> Result<Self::Result, DomainError> {
        let user = load_caller(self.user_repo.as_ref(), &cmd.caller_id).await?;
        let task = load_owned_task(self.task_repo.as_ref(), &cmd.task_id, user.id()).await?;

        self.task_repo.delete(task.id()).await?;

        info!("Task deleted: {}", task.id());

        Ok(())
    }
}
