use sqlx::SqlitePool;
use std::sync::Arc;

use crate::application::commands::handlers::*;
use crate::application::queries::{
    DashboardQueries, SearchQueryService, StatsQueries, TaskQueryService, TeamQueryService,
};
use crate::application::services::{
    CarryOverScheduler, ConfigError, ConfigService, NotificationService,
};
use teamdo_domain::day_start::DayStartRepository;
use teamdo_domain::task::TaskRepository;
use teamdo_domain::team::TeamRepository;
use teamdo_domain::template::TemplateRepository;
use teamdo_domain::user::UserRepository;
use teamdo_infrastructure::persistence::Database;

/// Command handlers container
pub struct CommandHandlers {
    pub register_user: Arc<RegisterUserCommandHandler>,
    pub create_task: Arc<CreateTaskCommandHandler>,
    pub update_task: Arc<UpdateTaskCommandHandler>,
    pub delete_task: Arc<DeleteTaskCommandHandler>,
    pub create_team: Arc<CreateTeamCommandHandler>,
    pub join_team: Arc<JoinTeamCommandHandler>,
    pub leave_team: Arc<LeaveTeamCommandHandler>,
    pub update_team_settings: Arc<UpdateTeamSettingsCommandHandler>,
    pub start_day: Arc<StartDayCommandHandler>,
    pub create_template: Arc<CreateTemplateCommandHandler>,
    pub delete_template: Arc<DeleteTemplateCommandHandler>,
}

pub struct Runtime {
    pub pool: Arc<SqlitePool>,
    pub db: Arc<Database>,
}

pub struct Repositories {
    pub user: Arc<dyn UserRepository>,
    pub team: Arc<dyn TeamRepository>,
    pub task: Arc<dyn TaskRepository>,
    pub day_start: Arc<dyn DayStartRepository>,
    pub template: Arc<dyn TemplateRepository>,
}

pub struct Services {
    pub notification: Arc<NotificationService>,
    pub scheduler: Arc<CarryOverScheduler>,
    pub config: Arc<ConfigService>,
}

pub struct Queries {
    pub tasks: Arc<TaskQueryService>,
    pub search: Arc<SearchQueryService>,
    pub team: Arc<TeamQueryService>,
    pub dashboard: Arc<DashboardQueries>,
    pub stats: Arc<StatsQueries>,
}

pub struct AppState {
    pub runtime: Runtime,
    pub repositories: Repositories,
    pub services: Services,
    pub queries: Queries,
    pub command_handlers: CommandHandlers,
}

impl AppState {
    pub async fn new(config: ConfigService) -> Result<Self, Box<dyn std::error::Error>> {
        crate::presentation::bootstrap::build_app_state(config).await
    }

    /// Wire the state over an already migrated database.
    pub fn from_database(
        database: Database,
        config: ConfigService,
    ) -> Result<Self, ConfigError> {
        crate::presentation::bootstrap::assemble(database, config)
    }
}
