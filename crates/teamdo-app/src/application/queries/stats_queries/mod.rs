use chrono::NaiveDate;
use std::sync::Arc;

use crate::application::dtos::{MonthlyStatsDto, WeeklyStatsDto};
use teamdo_domain::shared::DomainError;
use teamdo_domain::task::TaskRepository;
use teamdo_domain::user::UserRepository;

mod monthly;
mod weekly;

/// Trailing-window team statistics. Any store failure fails the whole request.
pub struct StatsQueries {
    user_repo: Arc<dyn UserRepository>,
    task_repo: Arc<dyn TaskRepository>,
}

impl StatsQueries {
    pub fn new(user_repo: Arc<dyn UserRepository>, task_repo: Arc<dyn TaskRepository>) -> Self {
        Self {
            user_repo,
            task_repo,
        }
    }

    /// Last 7 days including today, with daily rows and an MVP
    pub async fn weekly(
        &self,
        caller_id: &str,
        today: NaiveDate,
    ) -> Result<WeeklyStatsDto, DomainError> {
        weekly::weekly_stats(
            self.user_repo.as_ref(),
            self.task_repo.as_ref(),
            caller_id,
            today,
        )
        .await
    }

    /// Last 30 days including today, with week and weekday breakdowns
    pub async fn monthly(
        &self,
        caller_id: &str,
        today: NaiveDate,
    ) -> Result<MonthlyStatsDto, DomainError> {
        monthly::monthly_stats(
            self.user_repo.as_ref(),
            self.task_repo.as_ref(),
            caller_id,
            today,
        )
        .await
    }
}
