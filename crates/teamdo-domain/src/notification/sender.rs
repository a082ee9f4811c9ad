use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::shared::DomainError;
use crate::team::WebhookUrl;

/// Channel-neutral message. Senders decide how to lay it out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationMessage {
    /// Header line
    pub title: String,
    /// Bullet items
    pub items: Vec<String>,
    /// Shown instead of the list when `items` is empty
    pub empty_placeholder: Option<String>,
    /// Small trailing context line
    pub footer: Option<String>,
}

impl NotificationMessage {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            items: Vec::new(),
            empty_placeholder: None,
            footer: None,
        }
    }

    pub fn with_items(mut self, items: Vec<String>) -> Self {
        self.items = items;
        self
    }

    pub fn with_empty_placeholder(mut self, text: impl Into<String>) -> Self {
        self.empty_placeholder = Some(text.into());
        self
    }

    pub fn with_footer(mut self, footer: impl Into<String>) -> Self {
        self.footer = Some(footer.into());
        self
    }

    /// Message posted when a user signals the start of their day.
    pub fn day_started(display_name: &str, task_contents: Vec<String>) -> Self {
        let count = task_contents.len();
        Self::new(format!("🚀 {display_name} started today's work"))
            .with_items(task_contents)
            .with_empty_placeholder("No tasks registered for today")
            .with_footer(format!("{count} task(s) in total"))
    }
}

/// Notification sender trait (Strategy pattern)
#[async_trait]
pub trait NotificationSender: Send + Sync {
    async fn send(&self, message: &NotificationMessage) -> Result<(), DomainError>;
}

/// Builds a sender for a team's configured webhook.
pub trait NotificationSenderFactory: Send + Sync {
    fn create(&self, webhook: &WebhookUrl) -> Result<Box<dyn NotificationSender>, DomainError>;
}
