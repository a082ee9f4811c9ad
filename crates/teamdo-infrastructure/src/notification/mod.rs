mod sender_factory;
mod slack;

pub use sender_factory::{create_sender, WebhookSenderFactory};
pub use slack::SlackWebhookSender;
