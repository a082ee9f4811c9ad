use serde::{Deserialize, Serialize};
use uuid::Uuid;

macro_rules! define_id {
    ($name:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $name(String);

        impl $name {
            pub fn new() -> Self {
                Self(Uuid::new_v4().to_string())
            }

            pub fn from_string(s: &str) -> Self {
                Self(s.to_string())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }
    };
}

define_id!(TaskId);
define_id!(UserId);
define_id!(TeamId);
define_id!(TemplateId);

/// Error codes for structured error handling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    // Authentication & Authorization (1xxx)
    Unauthorized = 1001,
    Forbidden = 1002,
    NotInTeam = 1003,

    // Resource Not Found (2xxx)
    TaskNotFound = 2001,
    TeamNotFound = 2002,
    ResourceNotFound = 2003,

    // Business Logic (3xxx)
    Conflict = 3001,

    // Data & Persistence (4xxx)
    RepositoryError = 4001,
    DataIntegrityError = 4003,
    SerializationError = 4004,

    // Infrastructure (5xxx)
    InfrastructureError = 5001,

    // Validation (6xxx)
    ValidationError = 6001,
    InvalidInput = 6002,
}

impl ErrorCode {
    /// Get error code as integer
    pub fn code(&self) -> u16 {
        *self as u16
    }

    /// Get error severity
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            ErrorCode::Unauthorized | ErrorCode::Forbidden | ErrorCode::NotInTeam => {
                ErrorSeverity::Warning
            }

            ErrorCode::TaskNotFound
            | ErrorCode::TeamNotFound
            | ErrorCode::ResourceNotFound
            | ErrorCode::Conflict
            | ErrorCode::ValidationError
            | ErrorCode::InvalidInput => ErrorSeverity::Info,

            ErrorCode::DataIntegrityError | ErrorCode::InfrastructureError => ErrorSeverity::Error,

            _ => ErrorSeverity::Warning,
        }
    }

    /// Store and transport failures are transient and may be retried
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            ErrorCode::RepositoryError | ErrorCode::InfrastructureError
        )
    }

    /// Status hint for the HTTP layer that fronts the application
    pub fn http_status(&self) -> u16 {
        match self {
            ErrorCode::Unauthorized => 401,
            ErrorCode::Forbidden => 403,
            ErrorCode::NotInTeam => 400,
            ErrorCode::TaskNotFound | ErrorCode::TeamNotFound | ErrorCode::ResourceNotFound => 404,
            ErrorCode::Conflict => 409,
            ErrorCode::ValidationError | ErrorCode::InvalidInput => 400,
            ErrorCode::InfrastructureError => 502,
            ErrorCode::RepositoryError
            | ErrorCode::DataIntegrityError
            | ErrorCode::SerializationError => 500,
        }
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorSeverity {
    Info,
    Warning,
    Error,
    Critical,
}

#[derive(Debug, thiserror::Error)]
pub enum DomainError {
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Not in a team: {0}")]
    NotInTeam(String),

    #[error("Task not found: {0}")]
    TaskNotFound(String),

    #[error("Team not found: {0}")]
    TeamNotFound(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Repository error: {0}")]
    Repository(String),

    #[error("Infrastructure error: {0}")]
    Infrastructure(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Data integrity error: {0}")]
    DataIntegrity(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl DomainError {
    /// Get error code
    pub fn code(&self) -> ErrorCode {
        match self {
            DomainError::Unauthorized(_) => ErrorCode::Unauthorized,
            DomainError::Forbidden(_) => ErrorCode::Forbidden,
            DomainError::NotInTeam(_) => ErrorCode::NotInTeam,
            DomainError::TaskNotFound(_) => ErrorCode::TaskNotFound,
            DomainError::TeamNotFound(_) => ErrorCode::TeamNotFound,
            DomainError::NotFound(_) => ErrorCode::ResourceNotFound,
            DomainError::Conflict(_) => ErrorCode::Conflict,
            DomainError::Repository(_) => ErrorCode::RepositoryError,
            DomainError::Infrastructure(_) => ErrorCode::InfrastructureError,
            DomainError::Validation(_) => ErrorCode::ValidationError,
            DomainError::DataIntegrity(_) => ErrorCode::DataIntegrityError,
            DomainError::InvalidInput(_) => ErrorCode::InvalidInput,
            DomainError::Serialization(_) => ErrorCode::SerializationError,
        }
    }

    /// Get error message
    pub fn message(&self) -> &str {
        match self {
            DomainError::Unauthorized(msg)
            | DomainError::Forbidden(msg)
            | DomainError::NotInTeam(msg)
            | DomainError::TaskNotFound(msg)
            | DomainError::TeamNotFound(msg)
            | DomainError::NotFound(msg)
            | DomainError::Conflict(msg)
            | DomainError::Repository(msg)
            | DomainError::Infrastructure(msg)
            | DomainError::Validation(msg)
            | DomainError::DataIntegrity(msg)
            | DomainError::InvalidInput(msg)
            | DomainError::Serialization(msg) => msg,
        }
    }

    /// Get error severity
    pub fn severity(&self) -> ErrorSeverity {
        self.code().severity()
    }

    /// Check if error is recoverable
    pub fn is_recoverable(&self) -> bool {
        self.code().is_recoverable()
    }

    /// Format error with code
    pub fn format_with_code(&self) -> String {
        format!("[{}] {}", self.code().code(), self)
    }
}
