pub mod day_start_repo;
pub mod task_repo;
pub mod team_repo;
pub mod template_repo;
pub mod user_repo;

pub use day_start_repo::SqliteDayStartRepository;
pub use task_repo::SqliteTaskRepository;
pub use team_repo::SqliteTeamRepository;
pub use template_repo::SqliteTemplateRepository;
pub use user_repo::SqliteUserRepository;
