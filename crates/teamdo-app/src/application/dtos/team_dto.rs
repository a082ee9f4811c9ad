use serde::{Deserialize, Serialize};

use teamdo_domain::team::Team;
use teamdo_domain::user::User;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserDto {
    pub id: String,
    pub email: String,
    pub name: Option<String>,
    pub team_id: Option<String>,
    pub created_at: String,
}

impl From<&User> for UserDto {
    fn from(user: &User) -> Self {
        Self {
            id: user.id().as_str().to_string(),
            email: user.email().to_string(),
            name: user.name().map(str::to_string),
            team_id: user.team_id().map(|t| t.as_str().to_string()),
            created_at: user.created_at().to_rfc3339(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamMemberDto {
    pub id: String,
    pub email: String,
    pub name: Option<String>,
}

impl From<&User> for TeamMemberDto {
    fn from(user: &User) -> Self {
        Self {
            id: user.id().as_str().to_string(),
            email: user.email().to_string(),
            name: user.name().map(str::to_string),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamDto {
    pub id: String,
    pub name: String,
    pub invite_code: String,
    pub webhook_url: Option<String>,
    pub created_at: String,
    pub members: Vec<TeamMemberDto>,
}

impl TeamDto {
    pub fn new(team: &Team, members: &[User]) -> Self {
        Self {
            id: team.id().as_str().to_string(),
            name: team.name().to_string(),
            invite_code: team.invite_code().as_str().to_string(),
            webhook_url: team.webhook_url().map(|w| w.as_str().to_string()),
            created_at: team.created_at().to_rfc3339(),
            members: members.iter().map(TeamMemberDto::from).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaveTeamResultDto {
    pub team_id: String,
    pub deleted_tasks: u64,
}

// ============================================================
// Day Start DTOs
// ============================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayStartStatusDto {
    pub date: String,
    pub started: bool,
    pub started_at: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StartDayResultDto {
    pub started_at: String,
    pub todo_count: u32,
    /// Whether a webhook message was delivered
    pub notified: bool,
}
