use chrono::{DateTime, NaiveDate, Utc};
use sqlx::FromRow;

use teamdo_domain::shared::{DomainError, TaskId, TeamId, UserId};
use teamdo_domain::task::Task;

#[derive(FromRow)]
pub(super) struct TaskRow {
    pub id: String,
    pub user_id: String,
    pub team_id: String,
    pub content: String,
    pub date: Option<NaiveDate>,
    pub completed: bool,
    pub completed_at: Option<DateTime<Utc>>,
    pub carry_over_count: i64,
    pub priority: i64,
    pub created_at: DateTime<Utc>,
}

impl TaskRow {
    pub fn into_task(self) -> Result<Task, DomainError> {
        let carry_over_count = u32::try_from(self.carry_over_count).map_err(|_| {
            DomainError::DataIntegrity(format!(
                "Task {} has invalid carry_over_count {}",
                self.id, self.carry_over_count
            ))
        })?;
        let priority = i32::try_from(self.priority).map_err(|_| {
            DomainError::DataIntegrity(format!(
                "Task {} has out-of-range priority {}",
                self.id, self.priority
            ))
        })?;

        Ok(Task::restore(
            TaskId::from_string(&self.id),
            UserId::from_string(&self.user_id),
            TeamId::from_string(&self.team_id),
            self.content,
            self.date,
            self.completed,
            self.completed_at,
            carry_over_count,
            priority,
            self.created_at,
        ))
    }
}

pub(super) fn into_tasks(rows: Vec<TaskRow>) -> Result<Vec<Task>, DomainError> {
    rows.into_iter().map(TaskRow::into_task).collect()
}
