use serde::{Deserialize, Serialize};

use super::TaskDto;

/// One member's board for a single day.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemberDayDto {
    pub id: String,
    pub name: Option<String>,
    pub email: String,
    /// Incomplete first, then priority descending
    pub todos: Vec<TaskDto>,
    pub total_count: u32,
    pub completed_count: u32,
    pub progress: u32,
    pub started: bool,
    pub started_at: Option<String>,
    /// Absent on history views
    pub streak: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CarriedTaskDto {
    pub id: String,
    pub content: String,
    pub carry_over_count: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InsightsDto {
    pub weekly_total: u32,
    pub weekly_completed: u32,
    pub weekly_rate: u32,
    pub team_weekly_rate: u32,
    pub streak: u32,
    pub most_carried_todo: Option<CarriedTaskDto>,
    /// Today's unfinished tasks carried at least twice, most carried first
    pub carried_todos_today: Vec<CarriedTaskDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardDto {
    pub date: String,
    pub members: Vec<MemberDayDto>,
    pub my_insights: InsightsDto,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryDto {
    pub date: String,
    pub members: Vec<MemberDayDto>,
}
