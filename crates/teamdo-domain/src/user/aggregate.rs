use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::{DomainError, TeamId, UserId};

/// A person using the tracker. Belongs to at most one team at a time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    id: UserId,
    email: String,
    name: Option<String>,
    team_id: Option<TeamId>,
    created_at: DateTime<Utc>,
}

impl User {
    pub fn new(email: String, name: Option<String>) -> Result<Self, DomainError> {
        let email = email.trim().to_string();
        if email.is_empty() || !email.contains('@') {
            return Err(DomainError::Validation(format!(
                "Invalid email address: {email}"
            )));
        }

        Ok(Self {
            id: UserId::new(),
            email,
            name: name
                .map(|n| n.trim().to_string())
                .filter(|n| !n.is_empty()),
            team_id: None,
            created_at: Utc::now(),
        })
    }

    pub fn restore(
        id: UserId,
        email: String,
        name: Option<String>,
        team_id: Option<TeamId>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            email,
            name,
            team_id,
            created_at,
        }
    }

    pub fn id(&self) -> &UserId {
        &self.id
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Name when set, email otherwise.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.email)
    }

    pub fn team_id(&self) -> Option<&TeamId> {
        self.team_id.as_ref()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// The caller's team, or `NotInTeam`.
    pub fn require_team(&self) -> Result<&TeamId, DomainError> {
        self.team_id
            .as_ref()
            .ok_or_else(|| DomainError::NotInTeam(format!("User {} has no team", self.id)))
    }

    pub fn join_team(&mut self, team_id: TeamId) -> Result<(), DomainError> {
        if self.team_id.is_some() {
            return Err(DomainError::Conflict(
                "Already a member of a team".to_string(),
            ));
        }
        self.team_id = Some(team_id);
        Ok(())
    }

    pub fn leave_team(&mut self) -> Result<TeamId, DomainError> {
        self.team_id
            .take()
            .ok_or_else(|| DomainError::NotInTeam(format!("User {} has no team", self.id)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name_falls_back_to_email() {
        let named = User::new("kim@example.com".to_string(), Some("Kim".to_string())).unwrap();
        let anonymous = User::new("lee@example.com".to_string(), Some("  ".to_string())).unwrap();

        assert_eq!(named.display_name(), "Kim");
        assert_eq!(anonymous.display_name(), "lee@example.com");
        assert!(anonymous.name().is_none());
    }

    #[test]
    fn test_invalid_email_rejected() {
        assert!(User::new("not-an-email".to_string(), None).is_err());
    }

    #[test]
    fn test_team_membership_lifecycle() {
        let mut user = User::new("kim@example.com".to_string(), None).unwrap();
        assert!(matches!(user.require_team(), Err(DomainError::NotInTeam(_))));

        let team = TeamId::new();
        user.join_team(team.clone()).unwrap();
        assert_eq!(user.require_team().unwrap(), &team);

        assert!(matches!(
            user.join_team(TeamId::new()),
            Err(DomainError::Conflict(_))
        ));

        assert_eq!(user.leave_team().unwrap(), team);
        assert!(user.leave_team().is_err());
    }
}
