use chrono::{Duration, NaiveDate};
use log::warn;
use std::sync::Arc;

use crate::application::dtos::{DaySummaryDto, TaskDto, TemplateDto, WeeklySummaryDto};
use crate::application::utils::{format_date, load_caller, load_caller_team, parse_date, week_start};
use teamdo_domain::analytics::daily_series;
use teamdo_domain::shared::DomainError;
use teamdo_domain::task::TaskRepository;
use teamdo_domain::template::TemplateRepository;
use teamdo_domain::user::UserRepository;

/// Read side for a caller's own tasks and templates.
pub struct TaskQueryService {
    user_repo: Arc<dyn UserRepository>,
    task_repo: Arc<dyn TaskRepository>,
    template_repo: Arc<dyn TemplateRepository>,
}

impl TaskQueryService {
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        task_repo: Arc<dyn TaskRepository>,
        template_repo: Arc<dyn TemplateRepository>,
    ) -> Self {
        Self {
            user_repo,
            task_repo,
            template_repo,
        }
    }

    /// Tasks on `date` (default `today`), or the backlog when `backlog` is set.
    /// Priority descending, then oldest first.
    pub async fn list_tasks(
        &self,
        caller_id: &str,
        date: Option<&str>,
        backlog: bool,
        today: NaiveDate,
    ) -> Result<Vec<TaskDto>, DomainError> {
        let (user, _) = load_caller_team(self.user_repo.as_ref(), caller_id).await?;

        let tasks = if backlog {
            self.task_repo.find_backlog(user.id()).await?
        } else {
            let day = match date {
                Some(raw) => parse_date(raw)?,
                None => today,
            };
            self.task_repo.find_by_owner_on_date(user.id(), day).await?
        };

        Ok(tasks.iter().map(TaskDto::from).collect())
    }

    /// Seven consecutive days from `start_date`, or from this week's Monday.
    pub async fn weekly_summary(
        &self,
        caller_id: &str,
        start_date: Option<&str>,
        today: NaiveDate,
    ) -> Result<WeeklySummaryDto, DomainError> {
        let (user, _) = load_caller_team(self.user_repo.as_ref(), caller_id).await?;

        let start = match start_date {
            Some(raw) => parse_date(raw)?,
            None => week_start(today),
        };
        let end = start
            .checked_add_signed(Duration::days(6))
            .ok_or_else(|| {
                DomainError::InvalidInput(format!(
                    "Week starting {} runs past the last supported date",
                    format_date(start)
                ))
            })?;

        let tasks = self
            .task_repo
            .find_by_owner_in_range(user.id(), start, end)
            .await?;

        let days = daily_series(&tasks, start, 7)
            .iter()
            .map(|day| DaySummaryDto {
                date: format_date(day.date),
                total: day.total,
                completed: day.completed,
                progress: day.completion_rate(),
            })
            .collect();

        Ok(WeeklySummaryDto {
            start_date: format_date(start),
            end_date: format_date(end),
            days,
        })
    }

    /// The caller's templates, newest first.
    ///
    /// Templates are a convenience: a store failure yields an empty list.
    pub async fn list_templates(&self, caller_id: &str) -> Result<Vec<TemplateDto>, DomainError> {
        let user = load_caller(self.user_repo.as_ref(), caller_id).await?;

        match self.template_repo.find_by_owner(user.id()).await {
            Ok(templates) => Ok(templates.iter().map(TemplateDto::from).collect()),
            Err(e) => {
                warn!("Failed to load templates for user {}: {}", user.id(), e);
                Ok(Vec::new())
            }
        }
    }
}
