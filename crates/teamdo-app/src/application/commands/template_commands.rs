use serde::{Deserialize, Serialize};

use crate::application::commands::command_handler::Command;
use crate::application::dtos::TemplateDto;

// ============================================================
// Create Template Command
// ============================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTemplateCommand {
    pub caller_id: String,
    pub content: String,
}

impl Command for CreateTemplateCommand {}

pub type CreateTemplateResult = TemplateDto;

// ============================================================
// Delete Template Command
// ============================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteTemplateCommand {
    pub caller_id: String,
    pub template_id: String,
}

impl Command for DeleteTemplateCommand {}

pub type DeleteTemplateResult = ();
