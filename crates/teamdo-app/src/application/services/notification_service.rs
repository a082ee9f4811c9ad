use log::{debug, error, info};
use std::sync::Arc;

use teamdo_domain::notification::{NotificationMessage, NotificationSenderFactory};
use teamdo_domain::task::Task;
use teamdo_domain::team::Team;
use teamdo_domain::user::User;

/// Notification application service
/// Posts start-of-day announcements to a team's webhook
pub struct NotificationService {
    sender_factory: Arc<dyn NotificationSenderFactory>,
}

impl NotificationService {
    pub fn new(sender_factory: Arc<dyn NotificationSenderFactory>) -> Self {
        Self { sender_factory }
    }

    /// Announce that `user` started the day with `tasks`.
    ///
    /// Returns whether the message was delivered. Failures are logged only.
    pub async fn notify_day_started(&self, team: &Team, user: &User, tasks: &[Task]) -> bool {
        let Some(webhook) = team.webhook_url() else {
            debug!("Team {} has no webhook, skipping notification", team.id());
            return false;
        };

        let message = NotificationMessage::day_started(
            user.display_name(),
            tasks.iter().map(|t| t.content().to_string()).collect(),
        );

        let sender = match self.sender_factory.create(webhook) {
            Ok(s) => s,
            Err(e) => {
                error!("Failed to create sender for team {}: {}", team.id(), e);
                return false;
            }
        };

        match sender.send(&message).await {
            Ok(()) => {
                info!(
                    "Day-start notification sent for user {} to team {}",
                    user.id(),
                    team.id()
                );
                true
            }
            Err(e) => {
                error!(
                    "Failed to send day-start notification for user {}: {}",
                    user.id(),
                    e
                );
                false
            }
        }
    }
}
