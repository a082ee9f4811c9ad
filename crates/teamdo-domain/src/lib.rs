// Domain layer - Pure business logic
// No dependencies on infrastructure or presentation layers

pub mod analytics;
pub mod carry_over;
pub mod day_start;
pub mod notification;
pub mod shared;
pub mod task;
pub mod team;
pub mod template;
pub mod user;

// Re-exports for convenience
pub use shared::{DomainError, TaskId, TeamId, UserId};
