use chrono::NaiveDate;
use std::sync::Arc;

use crate::application::dtos::{DayStartStatusDto, TeamDto};
use crate::application::utils::{format_date, load_caller};
use teamdo_domain::day_start::DayStartRepository;
use teamdo_domain::shared::DomainError;
use teamdo_domain::team::TeamRepository;
use teamdo_domain::user::UserRepository;

pub struct TeamQueryService {
    user_repo: Arc<dyn UserRepository>,
    team_repo: Arc<dyn TeamRepository>,
    day_start_repo: Arc<dyn DayStartRepository>,
}

impl TeamQueryService {
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        team_repo: Arc<dyn TeamRepository>,
        day_start_repo: Arc<dyn DayStartRepository>,
    ) -> Self {
        Self {
            user_repo,
            team_repo,
            day_start_repo,
        }
    }

    /// The caller's team with its members, or `None` outside a team.
    pub async fn get_team(&self, caller_id: &str) -> Result<Option<TeamDto>, DomainError> {
        let user = load_caller(self.user_repo.as_ref(), caller_id).await?;
        let Some(team_id) = user.team_id() else {
            return Ok(None);
        };

        let Some(team) = self.team_repo.find_by_id(team_id).await? else {
            return Ok(None);
        };
        let members = self.user_repo.find_by_team(team.id()).await?;

        Ok(Some(TeamDto::new(&team, &members)))
    }

    pub async fn day_start_status(
        &self,
        caller_id: &str,
        today: NaiveDate,
    ) -> Result<DayStartStatusDto, DomainError> {
        let user = load_caller(self.user_repo.as_ref(), caller_id).await?;
        let day_start = self.day_start_repo.find(user.id(), today).await?;

        Ok(DayStartStatusDto {
            date: format_date(today),
            started: day_start.is_some(),
            started_at: day_start.map(|d| d.started_at().to_rfc3339()),
        })
    }
}
