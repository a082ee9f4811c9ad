use std::time::Duration;

/// Configuration for various timeout durations across the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeoutConfig {
    /// Outgoing webhook request timeout
    pub webhook_request: Duration,

    /// How long to wait for a pooled database connection
    pub db_acquire: Duration,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self {
            webhook_request: Duration::from_secs(10),
            db_acquire: Duration::from_secs(10),
        }
    }
}

impl TimeoutConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_webhook_secs(mut self, secs: u64) -> Self {
        self.webhook_request = Duration::from_secs(secs);
        self
    }
}
