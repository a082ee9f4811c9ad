use async_trait::async_trait;
use chrono::NaiveDate;

use super::aggregate::Task;
use super::CarryOverCommit;
use crate::shared::{DomainError, TaskId, TeamId, UserId};

#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Insert or update a task.
    async fn save(&self, task: &Task) -> Result<(), DomainError>;

    async fn find_by_id(&self, id: &TaskId) -> Result<Option<Task>, DomainError>;

    async fn delete(&self, id: &TaskId) -> Result<(), DomainError>;

    /// Remove every task owned by a user. Returns the number of rows removed.
    async fn delete_by_owner(&self, user_id: &UserId) -> Result<u64, DomainError>;

    /// A user's tasks on one day, priority descending then oldest first.
    async fn find_by_owner_on_date(
        &self,
        user_id: &UserId,
        date: NaiveDate,
    ) -> Result<Vec<Task>, DomainError>;

    /// A user's undated tasks, priority descending then oldest first.
    async fn find_backlog(&self, user_id: &UserId) -> Result<Vec<Task>, DomainError>;

    /// A user's dated tasks with `start <= date <= end`, ordered by date then creation.
    async fn find_by_owner_in_range(
        &self,
        user_id: &UserId,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Task>, DomainError>;

    /// A team's dated tasks with `start <= date <= end`, ordered by date then creation.
    async fn find_by_team_in_range(
        &self,
        team_id: &TeamId,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Task>, DomainError>;

    /// Incomplete tasks of every user dated exactly `date`.
    async fn find_incomplete_on(&self, date: NaiveDate) -> Result<Vec<Task>, DomainError>;

    /// Exact, case-sensitive content match for one user on one day.
    async fn exists_with_content(
        &self,
        user_id: &UserId,
        content: &str,
        date: NaiveDate,
    ) -> Result<bool, DomainError>;

    /// Case-insensitive substring search over a user's tasks dated on or after
    /// `since`, newest date first, at most `limit` rows.
    async fn search_by_owner(
        &self,
        user_id: &UserId,
        query: &str,
        since: NaiveDate,
        limit: u32,
    ) -> Result<Vec<Task>, DomainError>;

    /// Atomically close `source` and, when given, insert `replacement`.
    ///
    /// Nothing is written when `source` was already closed by a concurrent
    /// run. The replacement insert is skipped when a task with the same owner,
    /// content and date appeared in the meantime.
    async fn commit_carry_over(
        &self,
        source: &Task,
        replacement: Option<&Task>,
    ) -> Result<CarryOverCommit, DomainError>;
}
