use serde_json::json;
use teamdo_domain::notification::NotificationMessage;

impl super::SlackWebhookSender {
    /// Build a Block Kit payload: header, bullet section, context footer.
    /// `text` carries the title for clients that cannot render blocks.
    pub(super) fn build_payload(&self, message: &NotificationMessage) -> serde_json::Value {
        let body = if message.items.is_empty() {
            message
                .empty_placeholder
                .as_ref()
                .map(|p| format!("_{}_", p))
                .unwrap_or_default()
        } else {
            message
                .items
                .iter()
                .map(|item| format!("• {}", item))
                .collect::<Vec<_>>()
                .join("\n")
        };

        let mut blocks = vec![json!({
            "type": "header",
            "text": {
                "type": "plain_text",
                "text": message.title,
                "emoji": true
            }
        })];

        if !body.is_empty() {
            blocks.push(json!({
                "type": "section",
                "text": {
                    "type": "mrkdwn",
                    "text": body
                }
            }));
        }

        if let Some(footer) = &message.footer {
            blocks.push(json!({
                "type": "context",
                "elements": [{
                    "type": "mrkdwn",
                    "text": footer
                }]
            }));
        }

        json!({
            "text": message.title,
            "blocks": blocks
        })
    }
}
