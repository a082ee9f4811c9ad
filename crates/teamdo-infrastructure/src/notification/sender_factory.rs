use std::time::Duration;

use teamdo_domain::notification::{NotificationSender, NotificationSenderFactory};
use teamdo_domain::shared::DomainError;
use teamdo_domain::team::WebhookUrl;

use super::slack::SlackWebhookSender;

/// Create a notification sender for a team webhook
pub fn create_sender(
    webhook: &WebhookUrl,
    timeout: Duration,
) -> Result<Box<dyn NotificationSender>, DomainError> {
    Ok(Box::new(SlackWebhookSender::new(webhook.clone(), timeout)?))
}

/// Factory handed to the application layer.
pub struct WebhookSenderFactory {
    timeout: Duration,
}

impl WebhookSenderFactory {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }
}

impl NotificationSenderFactory for WebhookSenderFactory {
    fn create(&self, webhook: &WebhookUrl) -> Result<Box<dyn NotificationSender>, DomainError> {
        create_sender(webhook, self.timeout)
    }
}
