use crate::application::services::LogLevel;
use crate::presentation::error::CommandError;
use crate::presentation::state::AppState;

pub fn get_log_level(state: &AppState) -> LogLevel {
    state.services.config.get_log_level()
}

/// Persisted; applies from the next start
pub fn set_log_level(state: &AppState, level: LogLevel) -> Result<(), CommandError> {
    Ok(state.services.config.set_log_level(level)?)
}
