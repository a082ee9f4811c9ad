use serde::{Deserialize, Serialize};

use crate::application::services::ConfigError;
use teamdo_domain::shared::{DomainError, ErrorCode, ErrorSeverity};

/// Structured error returned to the endpoint layer
///
/// Carries a numeric code for programmatic handling, a message, a severity
/// for presentation and whether the caller may retry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommandError {
    /// Numeric error code (1xxx-6xxx range)
    pub code: u16,

    /// Human-readable error message
    pub message: String,

    /// Error severity level
    pub severity: ErrorSeverity,

    /// Whether the operation can be retried
    pub recoverable: bool,

    /// Suggested HTTP status for the fronting server
    pub status: u16,
}

impl CommandError {
    /// Create an error from an error code and message
    pub fn from_code(error_code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code: error_code.code(),
            message: message.into(),
            severity: error_code.severity(),
            recoverable: error_code.is_recoverable(),
            status: error_code.http_status(),
        }
    }

    /// Create a generic infrastructure error
    pub fn infrastructure(message: impl Into<String>) -> Self {
        Self::from_code(ErrorCode::InfrastructureError, message)
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::from_code(ErrorCode::ValidationError, message)
    }
}

impl From<DomainError> for CommandError {
    fn from(err: DomainError) -> Self {
        Self::from_code(err.code(), err.message())
    }
}

impl From<ConfigError> for CommandError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::Invalid(message) => Self::validation(message),
            other => Self::infrastructure(other.to_string()),
        }
    }
}

impl From<String> for CommandError {
    fn from(message: String) -> Self {
        Self::infrastructure(message)
    }
}

impl From<&str> for CommandError {
    fn from(message: &str) -> Self {
        Self::infrastructure(message.to_string())
    }
}

impl From<anyhow::Error> for CommandError {
    fn from(err: anyhow::Error) -> Self {
        Self::infrastructure(err.to_string())
    }
}

impl std::fmt::Display for CommandError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl std::error::Error for CommandError {}
