use async_trait::async_trait;
use chrono::{Local, Utc};
use log::info;
use std::sync::Arc;

use crate::application::commands::command_handler::CommandHandler;
use crate::application::commands::day_start_commands::*;
use crate::application::dtos::StartDayResultDto;
use crate::application::services::NotificationService;
use crate::application::utils::load_caller_team;
use teamdo_domain::day_start::{DayStart, DayStartRepository};
use teamdo_domain::shared::DomainError;
use teamdo_domain::task::TaskRepository;
use teamdo_domain::team::TeamRepository;
use teamdo_domain::user::UserRepository;

/// Start day command handler
///
/// Records today's start marker and announces it on the team webhook. A
/// failed announcement is reported through `notified` and never undoes the
/// start.
pub struct StartDayCommandHandler {
    user_repo: Arc<dyn UserRepository>,
    team_repo: Arc<dyn TeamRepository>,
    task_repo: Arc<dyn TaskRepository>,
    day_start_repo: Arc<dyn DayStartRepository>,
    notification_service: Arc<NotificationService>,
}

impl StartDayCommandHandler {
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        team_repo: Arc<dyn TeamRepository>,
        task_repo: Arc<dyn TaskRepository>,
        day_start_repo: Arc<dyn DayStartRepository>,
        notification_service: Arc<NotificationService>,
    ) -> Self {
        Self {
            user_repo,
            team_repo,
            task_repo,
            day_start_repo,
            notification_service,
        }
    }
}

#[async_trait]
impl CommandHandler<StartDayCommand> for StartDayCommandHandler {
    type Result = StartDayResult;

    async fn handle(&self, cmd: StartDayCommand) -> Result<Self::Result, DomainError> {
        let (user, team_id) = load_caller_team(self.user_repo.as_ref(), &cmd.caller_id).await?;
        let today = Local::now().date_naive();

        if self.day_start_repo.find(user.id(), today).await?.is_some() {
            return Err(DomainError::Conflict(
                "Today's work has already been started".to_string(),
            ));
        }

        // The store rejects a concurrent second start with Conflict
        let day_start = DayStart::new(user.id().clone(), today, Utc::now());
        self.day_start_repo.create(&day_start).await?;

        info!("User {} started the day {}", user.id(), today);

        let tasks = self.task_repo.find_by_owner_on_date(user.id(), today).await?;

        let notified = match self.team_repo.find_by_id(&team_id).await? {
            Some(team) => {
                self.notification_service
                    .notify_day_started(&team, &user, &tasks)
                    .await
            }
            None => false,
        };

        Ok(StartDayResultDto {
            started_at: day_start.started_at().to_rfc3339(),
            todo_count: tasks.len() as u32,
            notified,
        })
    }
}
