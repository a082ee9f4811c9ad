mod dashboard_queries;
mod search_queries;
mod stats_queries;
mod task_queries;
mod team_queries;

pub use dashboard_queries::DashboardQueries;
pub use search_queries::SearchQueryService;
pub use stats_queries::StatsQueries;
pub use task_queries::TaskQueryService;
pub use team_queries::TeamQueryService;
