use chrono::{Duration, NaiveDate};
use futures::try_join;
use log::info;
use std::sync::Arc;

use crate::application::dtos::{DashboardDto, HistoryDto};
use crate::application::utils::{format_date, load_caller_team, parse_date, week_start};
use teamdo_domain::analytics::StreakCalculator;
use teamdo_domain::day_start::DayStartRepository;
use teamdo_domain::shared::{DomainError, UserId};
use teamdo_domain::task::TaskRepository;
use teamdo_domain::user::{User, UserRepository};

mod board;
mod insights;

/// Composes the team board: per-member day views plus the viewer's insights.
pub struct DashboardQueries {
    user_repo: Arc<dyn UserRepository>,
    task_repo: Arc<dyn TaskRepository>,
    day_start_repo: Arc<dyn DayStartRepository>,
    streak: StreakCalculator,
}

impl DashboardQueries {
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        task_repo: Arc<dyn TaskRepository>,
        day_start_repo: Arc<dyn DayStartRepository>,
        streak: StreakCalculator,
    ) -> Self {
        Self {
            user_repo,
            task_repo,
            day_start_repo,
            streak,
        }
    }

    pub async fn get_dashboard(
        &self,
        caller_id: &str,
        today: NaiveDate,
    ) -> Result<DashboardDto, DomainError> {
        let (viewer, team_id) = load_caller_team(self.user_repo.as_ref(), caller_id).await?;

        let monday = week_start(today);
        let yesterday = today - Duration::days(1);
        let horizon = self.streak.horizon(today);

        let (members, today_tasks, week_tasks, past_tasks) = try_join!(
            self.user_repo.find_by_team(&team_id),
            self.task_repo.find_by_team_in_range(&team_id, today, today),
            self.task_repo.find_by_team_in_range(&team_id, monday, today),
            self.task_repo.find_by_team_in_range(&team_id, horizon, yesterday),
        )?;
        let day_starts = self
            .day_start_repo
            .find_for_users_on(&member_ids(&members), today)
            .await?;

        let streaks = board::streaks_by_member(&self.streak, &past_tasks, today);
        let members_view = board::member_boards(&members, &today_tasks, &day_starts, Some(&streaks));

        let viewer_streak = streaks.get(viewer.id()).copied().unwrap_or(0);
        let my_insights =
            insights::viewer_insights(viewer.id(), &week_tasks, &today_tasks, viewer_streak);

        info!(
            "[dashboard] team={} members={} today_tasks={}",
            team_id,
            members_view.len(),
            today_tasks.len()
        );

        Ok(DashboardDto {
            date: format_date(today),
            members: members_view,
            my_insights,
        })
    }

    /// A past day's board, without streaks or insights.
    pub async fn get_history(
        &self,
        caller_id: &str,
        date: Option<&str>,
    ) -> Result<HistoryDto, DomainError> {
        let raw = date
            .filter(|d| !d.trim().is_empty())
            .ok_or_else(|| DomainError::Validation("A date is required".to_string()))?;
        let day = parse_date(raw)?;

        let (_, team_id) = load_caller_team(self.user_repo.as_ref(), caller_id).await?;

        let (members, tasks) = try_join!(
            self.user_repo.find_by_team(&team_id),
            self.task_repo.find_by_team_in_range(&team_id, day, day),
        )?;
        let day_starts = self
            .day_start_repo
            .find_for_users_on(&member_ids(&members), day)
            .await?;

        Ok(HistoryDto {
            date: format_date(day),
            members: board::member_boards(&members, &tasks, &day_starts, None),
        })
    }
}

fn member_ids(members: &[User]) -> Vec<UserId> {
    members.iter().map(|m| m.id().clone()).collect()
}
