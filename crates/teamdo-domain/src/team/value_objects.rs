use rand::distributions::Alphanumeric;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use url::Url;

use crate::shared::DomainError;

/// Token a user types in to join a team.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InviteCode(String);

impl InviteCode {
    pub const GENERATED_LEN: usize = 8;
    const MIN_LEN: usize = 4;
    const MAX_LEN: usize = 32;

    pub fn generate() -> Self {
        let code: String = rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(Self::GENERATED_LEN)
            .map(|b| char::from(b).to_ascii_uppercase())
            .collect();
        Self(code)
    }

    /// Validate user input. Surrounding whitespace is ignored.
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let code = raw.trim();
        if code.is_empty() {
            return Err(DomainError::Validation(
                "Invite code is required".to_string(),
            ));
        }
        if !(Self::MIN_LEN..=Self::MAX_LEN).contains(&code.len())
            || !code.chars().all(|c| c.is_ascii_alphanumeric())
        {
            return Err(DomainError::Validation(format!(
                "Malformed invite code: {code}"
            )));
        }
        Ok(Self(code.to_string()))
    }

    pub fn restore(code: String) -> Self {
        Self(code)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for InviteCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Incoming-webhook endpoint that receives start-day messages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebhookUrl(String);

impl WebhookUrl {
    pub const SLACK_PREFIX: &'static str = "https://hooks.slack.com/";

    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let raw = raw.trim();
        if !raw.starts_with(Self::SLACK_PREFIX) {
            return Err(DomainError::Validation(format!(
                "Webhook URL must start with {}",
                Self::SLACK_PREFIX
            )));
        }
        let parsed = Url::parse(raw)
            .map_err(|e| DomainError::Validation(format!("Invalid webhook URL: {e}")))?;
        if parsed.path().len() <= 1 {
            return Err(DomainError::Validation(
                "Webhook URL is missing its path".to_string(),
            ));
        }
        Ok(Self(raw.to_string()))
    }

    pub fn restore(url: String) -> Self {
        Self(url)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WebhookUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
