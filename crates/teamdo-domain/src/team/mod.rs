mod aggregate;
mod repository;
mod value_objects;

pub use aggregate::Team;
pub use repository::TeamRepository;
pub use value_objects::{InviteCode, WebhookUrl};
