use serde::{Deserialize, Serialize};

use crate::application::commands::command_handler::Command;
use crate::application::dtos::TaskDto;

// ============================================================
// Create Task Command
// ============================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTaskCommand {
    pub caller_id: String,
    pub content: String,
    /// YYYY-MM-DD; today when absent
    pub date: Option<String>,
    /// Put the task in the backlog instead of on a day
    #[serde(default)]
    pub backlog: bool,
}

impl Command for CreateTaskCommand {}

pub type CreateTaskResult = TaskDto;

// ============================================================
// Update Task Command
// ============================================================

/// Target of a move: a specific day or the backlog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskDateChange {
    Day(String),
    Backlog,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TaskPatch {
    pub content: Option<String>,
    pub completed: Option<bool>,
    pub priority: Option<i32>,
    pub date: Option<TaskDateChange>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateTaskCommand {
    pub caller_id: String,
    pub task_id: String,
    pub patch: TaskPatch,
}

impl Command for UpdateTaskCommand {}

pub type UpdateTaskResult = TaskDto;

// ============================================================
// Delete Task Command
// ============================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteTaskCommand {
    pub caller_id: String,
    pub task_id: String,
}

impl Command for DeleteTaskCommand {}

pub type DeleteTaskResult = ();
