use async_trait::async_trait;
use log::{info, warn};
use std::sync::Arc;

use crate::application::commands::command_handler::CommandHandler;
use crate::application::commands::team_commands::*;
use crate::application::dtos::{LeaveTeamResultDto, TeamDto};
use crate::application::utils::{load_caller, load_caller_team};
use teamdo_domain::shared::DomainError;
use teamdo_domain::task::TaskRepository;
use teamdo_domain::team::{InviteCode, Team, TeamRepository};
use teamdo_domain::user::UserRepository;

/// Attempts at finding an unused invite code before giving up.
const MAX_INVITE_CODE_ATTEMPTS: usize = 5;

/// Create team command handler
pub struct CreateTeamCommandHandler {
    user_repo: Arc<dyn UserRepository>,
    team_repo: Arc<dyn TeamRepository>,
}

impl CreateTeamCommandHandler {
    pub fn new(user_repo: Arc<dyn UserRepository>, team_repo: Arc<dyn TeamRepository>) -> Self {
        Self {
            user_repo,
            team_repo,
        }
    }

    async fn save_with_unique_code(&self, team: &mut Team) -> Result<(), DomainError> {
        for attempt in 1..=MAX_INVITE_CODE_ATTEMPTS {
            match self.team_repo.save(team).await {
                Ok(()) => return Ok(()),
                Err(DomainError::Conflict(_)) if attempt < MAX_INVITE_CODE_ATTEMPTS => {
                    warn!(
                        "Invite code collision for team {} (attempt {}), regenerating",
                        team.id(),
                        attempt
                    );
                    team.regenerate_invite_code();
                }
                Err(e) => return Err(e),
            }
        }
        Err(DomainError::Conflict(
            "Could not allocate a unique invite code".to_string(),
        ))
    }
}

#[async_trait]
impl CommandHandler<CreateTeamCommand> for CreateTeamCommandHandler {
    type Result = CreateTeamResult;

    async fn handle(&self, cmd: CreateTeamCommand) -> Result<Self::Result, DomainError> {
        let mut user = load_caller(self.user_repo.as_ref(), &cmd.caller_id).await?;
        if user.team_id().is_some() {
            return Err(DomainError::Conflict(
                "Already a member of a team".to_string(),
            ));
        }

        let mut team = Team::new(cmd.name)?;
        self.save_with_unique_code(&mut team).await?;

        user.join_team(team.id().clone())?;
        self.user_repo.save(&user).await?;

        info!(
            "Team created: {} ({}) by user {}",
            team.name(),
            team.id(),
            user.id()
        );

        Ok(TeamDto::new(&team, std::slice::from_ref(&user)))
    }
}

/// Join team command handler
pub struct JoinTeamCommandHandler {
    user_repo: Arc<dyn UserRepository>,
    team_repo: Arc<dyn TeamRepository>,
}

impl JoinTeamCommandHandler {
    pub fn new(user_repo: Arc<dyn UserRepository>, team_repo: Arc<dyn TeamRepository>) -> Self {
        Self {
            user_repo,
            team_repo,
        }
    }
}

#[async_trait]
impl CommandHandler<JoinTeamCommand> for JoinTeamCommandHandler {
    type Result = JoinTeamResult;

    async fn handle(&self, cmd: JoinTeamCommand) -> Result<Self::Result, DomainError> {
        let code = InviteCode::parse(&cmd.invite_code)?;

        let mut user = load_caller(self.user_repo.as_ref(), &cmd.caller_id).await?;
        if user.team_id().is_some() {
            return Err(DomainError::Conflict(
                "Already a member of a team".to_string(),
            ));
        }

        let team = self
            .team_repo
            .find_by_invite_code(&code)
            .await?
            .ok_or_else(|| {
                DomainError::NotFound(format!("No team with invite code {}", code.as_str()))
            })?;

        user.join_team(team.id().clone())?;
        self.user_repo.save(&user).await?;

        info!("User {} joined team {}", user.id(), team.id());

        let members = self.user_repo.find_by_team(team.id()).await?;
        Ok(TeamDto::new(&team, &members))
    }
}

/// Leave team command handler
///
/// Leaving removes every task the caller owns. Membership is cleared first, so
/// a failed save leaves both the membership and the tasks in place.
pub struct LeaveTeamCommandHandler {
    user_repo: Arc<dyn UserRepository>,
    task_repo: Arc<dyn TaskRepository>,
}

impl LeaveTeamCommandHandler {
    pub fn new(user_repo: Arc<dyn UserRepository>, task_repo: Arc<dyn TaskRepository>) -> Self {
        Self {
            user_repo,
            task_repo,
        }
    }
}

#[async_trait]
impl CommandHandler<LeaveTeamCommand> for LeaveTeamCommandHandler {
    type Result = LeaveTeamResult;

    async fn handle(&self, cmd: LeaveTeamCommand) -> Result<Self::Result, DomainError> {
        let mut user = load_caller(self.user_repo.as_ref(), &cmd.caller_id).await?;
        let team_id = user.leave_team()?;

        self.user_repo.save(&user).await?;
        let deleted_tasks = self.task_repo.delete_by_owner(user.id()).await?;

        info!(
            "User {} left team {} ({} task(s) removed)",
            user.id(),
            team_id,
            deleted_tasks
        );

        Ok(LeaveTeamResultDto {
            team_id: team_id.as_str().to_string(),
            deleted_tasks,
        })
    }
}

/// Update team settings command handler
pub struct UpdateTeamSettingsCommandHandler {
    user_repo: Arc<dyn UserRepository>,
    team_repo: Arc<dyn TeamRepository>,
}

impl UpdateTeamSettingsCommandHandler {
    pub fn new(user_repo: Arc<dyn UserRepository>, team_repo: Arc<dyn TeamRepository>) -> Self {
        Self {
            user_repo,
            team_repo,
        }
    }
}

#[async_trait]
impl CommandHandler<UpdateTeamSettingsCommand> for UpdateTeamSettingsCommandHandler {
    type Result = UpdateTeamSettingsResult;

    async fn handle(&self, cmd: UpdateTeamSettingsCommand) -> Result<Self::Result, DomainError> {
        let (_, team_id) = load_caller_team(self.user_repo.as_ref(), &cmd.caller_id).await?;

        let mut team = self
            .team_repo
            .find_by_id(&team_id)
            .await?
            .ok_or_else(|| DomainError::TeamNotFound(team_id.to_string()))?;

        if let Some(name) = cmd.name {
            team.rename(name)?;
        }
        if let Some(webhook_url) = cmd.webhook_url.as_deref() {
            team.set_webhook(webhook_url)?;
        }

        self.team_repo.save(&team).await?;

        info!(
            "Team settings updated: {} (webhook configured: {})",
            team.id(),
            team.webhook_url().is_some()
        );

        let members = self.user_repo.find_by_team(team.id()).await?;
        Ok(TeamDto::new(&team, &members))
    }
}
