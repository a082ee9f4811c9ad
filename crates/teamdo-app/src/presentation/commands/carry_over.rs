use crate::application::dtos::CarryOverResultDto;
use crate::presentation::error::CommandError;
use crate::presentation::state::AppState;

/// Run the daily carry-over immediately
pub async fn run_carry_over(state: &AppState) -> Result<CarryOverResultDto, CommandError> {
    let report = state.services.scheduler.run_once().await?;
    Ok(CarryOverResultDto::from(&report))
}
