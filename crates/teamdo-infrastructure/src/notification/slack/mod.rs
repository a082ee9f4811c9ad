mod message_builder;
mod sender;

use reqwest::Client;
use std::time::Duration;

use teamdo_domain::shared::DomainError;
use teamdo_domain::team::WebhookUrl;

/// Slack incoming-webhook notification sender
pub struct SlackWebhookSender {
    webhook: WebhookUrl,
    client: Client,
}

impl SlackWebhookSender {
    pub fn new(webhook: WebhookUrl, timeout: Duration) -> Result<Self, DomainError> {
        let client = Client::builder().timeout(timeout).build().map_err(|e| {
            DomainError::Infrastructure(format!("Failed to build HTTP client: {}", e))
        })?;

        Ok(Self { webhook, client })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use teamdo_domain::notification::NotificationMessage;

    fn sender() -> SlackWebhookSender {
        SlackWebhookSender::new(
            WebhookUrl::parse("https://hooks.slack.com/services/T0/B0/xyz").unwrap(),
            Duration::from_secs(5),
        )
        .unwrap()
    }

    #[test]
    fn test_build_blocks_with_tasks() {
        let message = NotificationMessage::day_started(
            "Alice",
            vec!["Write report".to_string(), "Review PR".to_string()],
        );

        let payload = sender().build_payload(&message);

        assert_eq!(payload["text"], "🚀 Alice started today's work");
        assert_eq!(payload["blocks"][0]["type"], "header");
        assert_eq!(
            payload["blocks"][0]["text"]["text"],
            "🚀 Alice started today's work"
        );
        assert_eq!(
            payload["blocks"][1]["text"]["text"],
            "• Write report\n• Review PR"
        );
        assert_eq!(payload["blocks"][2]["type"], "context");
        assert_eq!(
            payload["blocks"][2]["elements"][0]["text"],
            "2 task(s) in total"
        );
    }

    #[test]
    fn test_build_blocks_without_tasks() {
        let message = NotificationMessage::day_started("Bob", Vec::new());

        let payload = sender().build_payload(&message);

        assert_eq!(
            payload["blocks"][1]["text"]["text"],
            "_No tasks registered for today_"
        );
    }
}
