use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::{DomainError, TemplateId, UserId};

/// Reusable task text a user can drop into any day.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TodoTemplate {
    id: TemplateId,
    user_id: UserId,
    content: String,
    created_at: DateTime<Utc>,
}

impl TodoTemplate {
    pub fn new(user_id: UserId, content: &str) -> Result<Self, DomainError> {
        let content = content.trim();
        if content.is_empty() {
            return Err(DomainError::Validation(
                "Template content cannot be empty".to_string(),
            ));
        }

        Ok(Self {
            id: TemplateId::new(),
            user_id,
            content: content.to_string(),
            created_at: Utc::now(),
        })
    }

    pub fn restore(
        id: TemplateId,
        user_id: UserId,
        content: String,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            user_id,
            content,
            created_at,
        }
    }

    pub fn id(&self) -> &TemplateId {
        &self.id
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

#[async_trait]
pub trait TemplateRepository: Send + Sync {
    async fn save(&self, template: &TodoTemplate) -> Result<(), DomainError>;

    async fn find_by_id(&self, id: &TemplateId) -> Result<Option<TodoTemplate>, DomainError>;

    /// Newest first.
    async fn find_by_owner(&self, user_id: &UserId) -> Result<Vec<TodoTemplate>, DomainError>;

    async fn delete(&self, id: &TemplateId) -> Result<(), DomainError>;
}
