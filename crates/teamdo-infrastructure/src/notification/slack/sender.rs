use async_trait::async_trait;

use teamdo_domain::notification::{NotificationMessage, NotificationSender};
use teamdo_domain::shared::DomainError;

#[async_trait]
impl NotificationSender for super::SlackWebhookSender {
    async fn send(&self, message: &NotificationMessage) -> Result<(), DomainError> {
        let payload = self.build_payload(message);

        let response = self
            .client
            .post(self.webhook.as_str())
            .header("Content-Type", "application/json")
            .json(&payload)
            .send()
            .await
            .map_err(|e| {
                DomainError::Infrastructure(format!("Failed to send Slack notification: {}", e))
            })?;

        // Slack answers a plain "ok" body on success
        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(DomainError::Infrastructure(format!(
                "Slack webhook failed with status {}: {}",
                status, body
            )));
        }

        Ok(())
    }
}
