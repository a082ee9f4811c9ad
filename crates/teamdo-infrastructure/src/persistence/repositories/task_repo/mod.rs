mod mutations;
mod queries;
mod types;

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::SqlitePool;
use std::sync::Arc;

use crate::persistence::SqliteRepositoryBase;
use teamdo_domain::shared::{DomainError, TaskId, TeamId, UserId};
use teamdo_domain::task::{CarryOverCommit, Task, TaskRepository};

pub struct SqliteTaskRepository {
    base: SqliteRepositoryBase,
}

impl SqliteTaskRepository {
    const SELECT_QUERY: &'static str = r#"
            SELECT id, user_id, team_id, content, date, completed, completed_at,
                   carry_over_count, priority, created_at
            FROM todos
        "#;

    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self {
            base: SqliteRepositoryBase::new(pool),
        }
    }
}

#[async_trait]
impl TaskRepository for SqliteTaskRepository {
    async fn save(&self, task: &Task) -> Result<(), DomainError> {
        self.save_impl(task).await
    }

    async fn find_by_id(&self, id: &TaskId) -> Result<Option<Task>, DomainError> {
        self.find_by_id_impl(id).await
    }

    async fn delete(&self, id: &TaskId) -> Result<(), DomainError> {
        self.delete_impl(id).await
    }

    async fn delete_by_owner(&self, user_id: &UserId) -> Result<u64, DomainError> {
        self.delete_by_owner_impl(user_id).await
    }

    async fn find_by_owner_on_date(
        &self,
        user_id: &UserId,
        date: NaiveDate,
    ) -> Result<Vec<Task>, DomainError> {
        self.find_by_owner_on_date_impl(user_id, date).await
    }

    async fn find_backlog(&self, user_id: &UserId) -> Result<Vec<Task>, DomainError> {
        self.find_backlog_impl(user_id).await
    }

    async fn find_by_owner_in_range(
        &self,
        user_id: &UserId,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Task>, DomainError> {
        self.find_by_owner_in_range_impl(user_id, start, end).await
    }

    async fn find_by_team_in_range(
        &self,
        team_id: &TeamId,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Task>, DomainError> {
        self.find_by_team_in_range_impl(team_id, start, end).await
    }

    async fn find_incomplete_on(&self, date: NaiveDate) -> Result<Vec<Task>, DomainError> {
        self.find_incomplete_on_impl(date).await
    }

    async fn exists_with_content(
        &self,
        user_id: &UserId,
        content: &str,
        date: NaiveDate,
    ) -> Result<bool, DomainError> {
        self.exists_with_content_impl(user_id, content, date).await
    }

    async fn search_by_owner(
        &self,
        user_id: &UserId,
        query: &str,
        since: NaiveDate,
        limit: u32,
    ) -> Result<Vec<Task>, DomainError> {
        self.search_by_owner_impl(user_id, query, since, limit).await
    }

    async fn commit_carry_over(
        &self,
        source: &Task,
        replacement: Option<&Task>,
    ) -> Result<CarryOverCommit, DomainError> {
        self.commit_carry_over_impl(source, replacement).await
    }
}
