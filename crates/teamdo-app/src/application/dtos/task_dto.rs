use serde::{Deserialize, Serialize};

use crate::application::utils::format_date;
use teamdo_domain::task::Task;
use teamdo_domain::template::TodoTemplate;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskDto {
    pub id: String,
    pub user_id: String,
    pub team_id: String,
    pub content: String,
    pub date: Option<String>, // YYYY-MM-DD, None for backlog
    pub completed: bool,
    pub completed_at: Option<String>,
    pub carry_over_count: u32,
    pub priority: i32,
    pub created_at: String,
}

impl From<&Task> for TaskDto {
    fn from(task: &Task) -> Self {
        Self {
            id: task.id().as_str().to_string(),
            user_id: task.user_id().as_str().to_string(),
            team_id: task.team_id().as_str().to_string(),
            content: task.content().to_string(),
            date: task.date().map(format_date),
            completed: task.is_completed(),
            completed_at: task.completed_at().map(|t| t.to_rfc3339()),
            carry_over_count: task.carry_over_count(),
            priority: task.priority(),
            created_at: task.created_at().to_rfc3339(),
        }
    }
}

// ============================================================
// Weekly Summary DTOs
// ============================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DaySummaryDto {
    pub date: String,
    pub total: u32,
    pub completed: u32,
    pub progress: u32, // 0..=100
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeeklySummaryDto {
    pub start_date: String,
    pub end_date: String,
    pub days: Vec<DaySummaryDto>,
}

// ============================================================
// Search DTOs
// ============================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchDateGroupDto {
    pub date: String,
    pub tasks: Vec<TaskDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResultDto {
    pub query: String,
    pub results: Vec<SearchDateGroupDto>,
    pub total_count: u32,
}

// ============================================================
// Template DTOs
// ============================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplateDto {
    pub id: String,
    pub content: String,
    pub created_at: String,
}

impl From<&TodoTemplate> for TemplateDto {
    fn from(template: &TodoTemplate) -> Self {
        Self {
            id: template.id().as_str().to_string(),
            content: template.content().to_string(),
            created_at: template.created_at().to_rfc3339(),
        }
    }
}
