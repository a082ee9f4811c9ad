use serde::{Deserialize, Serialize};

use crate::application::commands::command_handler::Command;
use crate::application::dtos::{LeaveTeamResultDto, TeamDto};

// ============================================================
// Create Team Command
// ============================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTeamCommand {
    pub caller_id: String,
    pub name: String,
}

impl Command for CreateTeamCommand {}

pub type CreateTeamResult = TeamDto;

// ============================================================
// Join Team Command
// ============================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JoinTeamCommand {
    pub caller_id: String,
    pub invite_code: String,
}

impl Command for JoinTeamCommand {}

pub type JoinTeamResult = TeamDto;

// ============================================================
// Leave Team Command
// ============================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaveTeamCommand {
    pub caller_id: String,
}

impl Command for LeaveTeamCommand {}

pub type LeaveTeamResult = LeaveTeamResultDto;

// ============================================================
// Update Team Settings Command
// ============================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateTeamSettingsCommand {
    pub caller_id: String,
    pub name: Option<String>,
    /// Empty string clears the webhook
    pub webhook_url: Option<String>,
}

impl Command for UpdateTeamSettingsCommand {}

pub type UpdateTeamSettingsResult = TeamDto;
