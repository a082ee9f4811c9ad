use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::value_objects::{InviteCode, WebhookUrl};
use crate::shared::{DomainError, TeamId};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Team {
    id: TeamId,
    name: String,
    invite_code: InviteCode,
    webhook_url: Option<WebhookUrl>,
    created_at: DateTime<Utc>,
}

impl Team {
    pub fn new(name: String) -> Result<Self, DomainError> {
        let name = Self::validate_name(name)?;

        Ok(Self {
            id: TeamId::new(),
            name,
            invite_code: InviteCode::generate(),
            webhook_url: None,
            created_at: Utc::now(),
        })
    }

    pub fn restore(
        id: TeamId,
        name: String,
        invite_code: InviteCode,
        webhook_url: Option<WebhookUrl>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            invite_code,
            webhook_url,
            created_at,
        }
    }

    fn validate_name(name: String) -> Result<String, DomainError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(DomainError::Validation(
                "Team name cannot be empty".to_string(),
            ));
        }
        Ok(name.to_string())
    }

    pub fn id(&self) -> &TeamId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn invite_code(&self) -> &InviteCode {
        &self.invite_code
    }

    pub fn webhook_url(&self) -> Option<&WebhookUrl> {
        self.webhook_url.as_ref()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn rename(&mut self, name: String) -> Result<(), DomainError> {
        self.name = Self::validate_name(name)?;
        Ok(())
    }

    /// An empty string clears the webhook.
    pub fn set_webhook(&mut self, raw: &str) -> Result<(), DomainError> {
        self.webhook_url = if raw.trim().is_empty() {
            None
        } else {
            Some(WebhookUrl::parse(raw)?)
        };
        Ok(())
    }

    /// Draw a fresh invite code, e.g. after a collision on insert.
    pub fn regenerate_invite_code(&mut self) {
        self.invite_code = InviteCode::generate();
    }
}
