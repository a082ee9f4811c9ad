use serde::{Deserialize, Serialize};

use crate::application::commands::command_handler::Command;
use crate::application::dtos::StartDayResultDto;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StartDayCommand {
    pub caller_id: String,
}

impl Command for StartDayCommand {}

pub type StartDayResult = StartDayResultDto;
