use anyhow::Context;
use teamdo_lib::application::services::ConfigService;
use teamdo_lib::presentation::commands::run_carry_over;
use teamdo_lib::presentation::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let run_once = std::env::args().skip(1).any(|arg| arg == "--run-once");

    let config_service = ConfigService::load_default().context("Failed to load configuration")?;
    let config = config_service.config().clone();

    match teamdo_infrastructure::logging::init_logger(
        config.log_dir.clone(),
        config.log_level.as_str(),
    ) {
        Ok(_) => {
            tracing::info!("🚀 TeamDo starting...");
            tracing::info!("📝 File logging initialized at: {}", config.log_dir.display());
            tracing::info!("📁 Config file: {}", config_service.config_path().display());
        }
        Err(e) => {
            eprintln!("⚠️  Failed to initialize file logging: {}", e);
            eprintln!("   Falling back to console logging only");

            let _ = tracing_subscriber::fmt()
                .with_env_filter(
                    tracing_subscriber::EnvFilter::try_from_default_env()
                        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(config.log_level.as_str())),
                )
                .with_target(true)
                .with_thread_ids(true)
                .with_line_number(true)
                .try_init();
        }
    }

    let state = match AppState::new(config_service).await {
        Ok(state) => {
            tracing::info!("✅ App state initialized successfully");
            state
        }
        Err(e) => {
            tracing::error!("❌ Failed to initialize app state: {}", e);
            anyhow::bail!("Failed to initialize app state: {}", e);
        }
    };

    if run_once {
        let result = run_carry_over(&state).await?;
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    state.services.scheduler.start().await;
    tracing::info!("⏳ Carry-over scheduler running, press Ctrl+C to stop");

    tokio::signal::ctrl_c()
        .await
        .context("Failed to listen for shutdown signal")?;

    tracing::info!("👋 Shutting down");
    state.services.scheduler.stop().await;

    Ok(())
}
