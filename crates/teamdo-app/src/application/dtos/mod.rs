mod dashboard_dto;
mod stats_dto;
mod task_dto;
mod team_dto;

pub use dashboard_dto::*;
pub use stats_dto::*;
pub use task_dto::*;
pub use team_dto::*;
