use chrono::{Duration, NaiveDate};
use log::info;
use std::sync::Arc;

use crate::application::dtos::{SearchDateGroupDto, SearchResultDto, TaskDto};
use crate::application::utils::{format_date, load_caller_team};
use teamdo_domain::shared::DomainError;
use teamdo_domain::task::TaskRepository;
use teamdo_domain::user::UserRepository;

/// Substring search over the caller's recent tasks.
pub struct SearchQueryService {
    user_repo: Arc<dyn UserRepository>,
    task_repo: Arc<dyn TaskRepository>,
    window_days: u32,
    limit: u32,
}

impl SearchQueryService {
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        task_repo: Arc<dyn TaskRepository>,
        window_days: u32,
        limit: u32,
    ) -> Self {
        Self {
            user_repo,
            task_repo,
            window_days,
            limit,
        }
    }

    /// Case-insensitive match within the last `window_days`, newest day first,
    /// grouped by date and capped at `limit` tasks.
    pub async fn search(
        &self,
        caller_id: &str,
        query: &str,
        today: NaiveDate,
    ) -> Result<SearchResultDto, DomainError> {
        let (user, _) = load_caller_team(self.user_repo.as_ref(), caller_id).await?;

        let query = query.trim();
        if query.is_empty() {
            return Err(DomainError::Validation(
                "Search query cannot be empty".to_string(),
            ));
        }

        let since = today - Duration::days(i64::from(self.window_days));
        let tasks = self
            .task_repo
            .search_by_owner(user.id(), query, since, self.limit)
            .await?;

        // Rows arrive date-descending, so equal dates are adjacent
        let mut results: Vec<SearchDateGroupDto> = Vec::new();
        for task in &tasks {
            let Some(date) = task.date() else { continue };
            let date = format_date(date);
            match results.last_mut() {
                Some(group) if group.date == date => group.tasks.push(TaskDto::from(task)),
                _ => results.push(SearchDateGroupDto {
                    date,
                    tasks: vec![TaskDto::from(task)],
                }),
            }
        }

        info!(
            "[search] user={} matches={} groups={}",
            user.id(),
            tasks.len(),
            results.len()
        );

        Ok(SearchResultDto {
            query: query.to_string(),
            results,
            total_count: tasks.len() as u32,
        })
    }
}
