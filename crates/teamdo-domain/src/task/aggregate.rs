use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::{DomainError, TaskId, TeamId, UserId};

/// A single todo item. A `None` date means the task sits in the backlog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    user_id: UserId,
    team_id: TeamId,
    content: String,
    date: Option<NaiveDate>,
    completed: bool,
    completed_at: Option<DateTime<Utc>>,
    carry_over_count: u32,
    priority: i32,
    created_at: DateTime<Utc>,
}

impl Task {
    pub fn new(
        user_id: UserId,
        team_id: TeamId,
        content: String,
        date: Option<NaiveDate>,
    ) -> Result<Self, DomainError> {
        Self::validate_content(&content)?;

        Ok(Self {
            id: TaskId::new(),
            user_id,
            team_id,
            content,
            date,
            completed: false,
            completed_at: None,
            carry_over_count: 0,
            priority: 0,
            created_at: Utc::now(),
        })
    }

    #[allow(clippy::too_many_arguments)]
    pub fn restore(
        id: TaskId,
        user_id: UserId,
        team_id: TeamId,
        content: String,
        date: Option<NaiveDate>,
        completed: bool,
        completed_at: Option<DateTime<Utc>>,
        carry_over_count: u32,
        priority: i32,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            user_id,
            team_id,
            content,
            date,
            completed,
            completed_at,
            carry_over_count,
            priority,
            created_at,
        }
    }

    fn validate_content(content: &str) -> Result<(), DomainError> {
        if content.trim().is_empty() {
            return Err(DomainError::Validation(
                "Task content cannot be empty".to_string(),
            ));
        }
        Ok(())
    }

    pub fn id(&self) -> &TaskId {
        &self.id
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn team_id(&self) -> &TeamId {
        &self.team_id
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn date(&self) -> Option<NaiveDate> {
        self.date
    }

    pub fn is_backlog(&self) -> bool {
        self.date.is_none()
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    pub fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    pub fn carry_over_count(&self) -> u32 {
        self.carry_over_count
    }

    pub fn priority(&self) -> i32 {
        self.priority
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn is_owned_by(&self, user_id: &UserId) -> bool {
        &self.user_id == user_id
    }

    pub fn update_content(&mut self, content: String) -> Result<(), DomainError> {
        Self::validate_content(&content)?;
        self.content = content;
        Ok(())
    }

    /// completed_at is stamped on false -> true and cleared on true -> false.
    pub fn set_completed(&mut self, completed: bool, now: DateTime<Utc>) {
        match (self.completed, completed) {
            (false, true) => self.completed_at = Some(now),
            (true, false) => self.completed_at = None,
            _ => {}
        }
        self.completed = completed;
    }

    pub fn set_priority(&mut self, priority: i32) {
        self.priority = priority;
    }

    /// Move to another day, or to the backlog with `None`.
    pub fn move_to(&mut self, date: Option<NaiveDate>) {
        self.date = date;
    }

    /// Whether this task is a candidate for carry-over out of `day`.
    pub fn is_carry_over_candidate(&self, day: NaiveDate) -> bool {
        !self.completed && self.date == Some(day)
    }

    /// Fresh copy of this task dated `today` with the carry counter bumped.
    pub fn carried_forward(&self, today: NaiveDate) -> Result<Task, DomainError> {
        let Some(date) = self.date else {
            return Err(DomainError::Validation(format!(
                "Backlog task {} cannot be carried over",
                self.id
            )));
        };
        if date >= today {
            return Err(DomainError::Validation(format!(
                "Task {} dated {} cannot be carried into {}",
                self.id, date, today
            )));
        }

        Ok(Task {
            id: TaskId::new(),
            user_id: self.user_id.clone(),
            team_id: self.team_id.clone(),
            content: self.content.clone(),
            date: Some(today),
            completed: false,
            completed_at: None,
            carry_over_count: self.carry_over_count + 1,
            priority: self.priority,
            created_at: Utc::now(),
        })
    }

    /// Close out the source row of a carry-over. The row is kept as history.
    pub fn close_as_carried(&mut self, now: DateTime<Utc>) {
        self.set_completed(true, now);
    }
}
