mod config_service;
mod notification_service;
mod scheduler;

pub use config_service::{AppConfig, ConfigError, ConfigService, LogLevel};
pub use notification_service::NotificationService;
pub use scheduler::CarryOverScheduler;
