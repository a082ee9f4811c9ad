use std::sync::Arc;
use std::time::Instant;
use tracing::info;

use crate::application::commands::handlers::*;
use crate::application::queries::{
    DashboardQueries, SearchQueryService, StatsQueries, TaskQueryService, TeamQueryService,
};
use crate::application::services::{
    CarryOverScheduler, ConfigError, ConfigService, NotificationService,
};
use crate::presentation::state::{
    AppState, CommandHandlers, Queries, Repositories, Runtime, Services,
};
use teamdo_domain::analytics::StreakCalculator;
use teamdo_domain::day_start::DayStartRepository;
use teamdo_domain::notification::NotificationSenderFactory;
use teamdo_domain::task::TaskRepository;
use teamdo_domain::team::TeamRepository;
use teamdo_domain::template::TemplateRepository;
use teamdo_domain::user::UserRepository;
use teamdo_infrastructure::config::TimeoutConfig;
use teamdo_infrastructure::notification::WebhookSenderFactory;
use teamdo_infrastructure::persistence::{
    repositories::{
        SqliteDayStartRepository, SqliteTaskRepository, SqliteTeamRepository,
        SqliteTemplateRepository, SqliteUserRepository,
    },
    Database,
};

pub async fn build_app_state(
    config_service: ConfigService,
) -> Result<AppState, Box<dyn std::error::Error>> {
    let config = config_service.config().clone();
    let timeouts = TimeoutConfig::new().with_webhook_secs(config.webhook_timeout_secs);

    if let Some(parent) = config.database_path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| format!("Failed to create data directory: {}", e))?;
    }
    let db_path = config
        .database_path
        .to_str()
        .ok_or("Invalid database path")?;

    info!("Database path: {}", db_path);

    info!("🔌 Connecting to database...");
    let started_at = Instant::now();
    let database = Database::new(db_path, timeouts.db_acquire).await?;
    info!(
        "✓ Database connection established ({}ms)",
        started_at.elapsed().as_millis()
    );

    info!("🔄 Running migrations...");
    let started_at = Instant::now();
    database.run_migrations().await?;
    info!(
        "✓ Migrations completed ({}ms)",
        started_at.elapsed().as_millis()
    );

    Ok(assemble(database, config_service)?)
}

/// Build repositories, services, queries and handlers over `database`.
pub fn assemble(database: Database, config_service: ConfigService) -> Result<AppState, ConfigError> {
    let config = config_service.config().clone();
    config.validate()?;
    let timeouts = TimeoutConfig::new().with_webhook_secs(config.webhook_timeout_secs);

    let pool = Arc::new(database.pool().clone());

    let user_repo = Arc::new(SqliteUserRepository::new(pool.clone())) as Arc<dyn UserRepository>;
    let team_repo = Arc::new(SqliteTeamRepository::new(pool.clone())) as Arc<dyn TeamRepository>;
    let task_repo = Arc::new(SqliteTaskRepository::new(pool.clone())) as Arc<dyn TaskRepository>;
    let day_start_repo =
        Arc::new(SqliteDayStartRepository::new(pool.clone())) as Arc<dyn DayStartRepository>;
    let template_repo =
        Arc::new(SqliteTemplateRepository::new(pool.clone())) as Arc<dyn TemplateRepository>;

    let sender_factory = Arc::new(WebhookSenderFactory::new(timeouts.webhook_request))
        as Arc<dyn NotificationSenderFactory>;
    let notification_service = Arc::new(NotificationService::new(sender_factory));
    let scheduler = Arc::new(CarryOverScheduler::new(
        task_repo.clone(),
        config.carry_over_hour,
        config.carry_over_minute,
    ));

    let queries = Queries {
        tasks: Arc::new(TaskQueryService::new(
            user_repo.clone(),
            task_repo.clone(),
            template_repo.clone(),
        )),
        search: Arc::new(SearchQueryService::new(
            user_repo.clone(),
            task_repo.clone(),
            config.search_window_days,
            config.search_limit,
        )),
        team: Arc::new(TeamQueryService::new(
            user_repo.clone(),
            team_repo.clone(),
            day_start_repo.clone(),
        )),
        dashboard: Arc::new(DashboardQueries::new(
            user_repo.clone(),
            task_repo.clone(),
            day_start_repo.clone(),
            StreakCalculator::new(config.streak_window_days),
        )),
        stats: Arc::new(StatsQueries::new(user_repo.clone(), task_repo.clone())),
    };

    let command_handlers = CommandHandlers {
        register_user: Arc::new(RegisterUserCommandHandler::new(user_repo.clone())),
        create_task: Arc::new(CreateTaskCommandHandler::new(
            user_repo.clone(),
            task_repo.clone(),
        )),
        update_task: Arc::new(UpdateTaskCommandHandler::new(
            user_repo.clone(),
            task_repo.clone(),
        )),
        delete_task: Arc::new(DeleteTaskCommandHandler::new(
            user_repo.clone(),
            task_repo.clone(),
        )),
        create_team: Arc::new(CreateTeamCommandHandler::new(
            user_repo.clone(),
            team_repo.clone(),
        )),
        join_team: Arc::new(JoinTeamCommandHandler::new(
            user_repo.clone(),
            team_repo.clone(),
        )),
        leave_team: Arc::new(LeaveTeamCommandHandler::new(
            user_repo.clone(),
            task_repo.clone(),
        )),
        update_team_settings: Arc::new(UpdateTeamSettingsCommandHandler::new(
            user_repo.clone(),
            team_repo.clone(),
        )),
        start_day: Arc::new(StartDayCommandHandler::new(
            user_repo.clone(),
            team_repo.clone(),
            task_repo.clone(),
            day_start_repo.clone(),
            notification_service.clone(),
        )),
        create_template: Arc::new(CreateTemplateCommandHandler::new(
            user_repo.clone(),
            template_repo.clone(),
        )),
        delete_template: Arc::new(DeleteTemplateCommandHandler::new(
            user_repo.clone(),
            template_repo.clone(),
        )),
    };

    info!("✓ Application state assembled");

    Ok(AppState {
        runtime: Runtime {
            pool,
            db: Arc::new(database),
        },
        repositories: Repositories {
            user: user_repo,
            team: team_repo,
            task: task_repo,
            day_start: day_start_repo,
            template: template_repo,
        },
        services: Services {
            notification: notification_service,
            scheduler,
            config: Arc::new(config_service),
        },
        queries,
        command_handlers,
    })
}
