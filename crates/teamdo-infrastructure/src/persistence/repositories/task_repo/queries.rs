use chrono::NaiveDate;

use super::types::{into_tasks, TaskRow};
use teamdo_domain::shared::{DomainError, TaskId, TeamId, UserId};
use teamdo_domain::task::Task;

impl super::SqliteTaskRepository {
    pub(super) async fn find_by_id_impl(&self, id: &TaskId) -> Result<Option<Task>, DomainError> {
        let query = format!("{} WHERE id = ?1", Self::SELECT_QUERY);

        let row: Option<TaskRow> = self
            .base
            .fetch_optional(sqlx::query_as(&query).bind(id.as_str()), "Find task by ID")
            .await?;

        row.map(TaskRow::into_task).transpose()
    }

    pub(super) async fn find_by_owner_on_date_impl(
        &self,
        user_id: &UserId,
        date: NaiveDate,
    ) -> Result<Vec<Task>, DomainError> {
        let query = format!(
            "{} WHERE user_id = ?1 AND date = ?2 ORDER BY priority DESC, created_at ASC",
            Self::SELECT_QUERY
        );

        let rows: Vec<TaskRow> = self
            .base
            .fetch_all(
                sqlx::query_as(&query).bind(user_id.as_str()).bind(date),
                "Find tasks by owner and date",
            )
            .await?;

        into_tasks(rows)
    }

    pub(super) async fn find_backlog_impl(&self, user_id: &UserId) -> Result<Vec<Task>, DomainError> {
        let query = format!(
            "{} WHERE user_id = ?1 AND date IS NULL ORDER BY priority DESC, created_at ASC",
            Self::SELECT_QUERY
        );

        let rows: Vec<TaskRow> = self
            .base
            .fetch_all(sqlx::query_as(&query).bind(user_id.as_str()), "Find backlog")
            .await?;

        into_tasks(rows)
    }

    pub(super) async fn find_by_owner_in_range_impl(
        &self,
        user_id: &UserId,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Task>, DomainError> {
        let query = format!(
            "{} WHERE user_id = ?1 AND date >= ?2 AND date <= ?3 ORDER BY date ASC, created_at ASC",
            Self::SELECT_QUERY
        );

        let rows: Vec<TaskRow> = self
            .base
            .fetch_all(
                sqlx::query_as(&query)
                    .bind(user_id.as_str())
                    .bind(start)
                    .bind(end),
                "Find tasks by owner in range",
            )
            .await?;

        into_tasks(rows)
    }

    pub(super) async fn find_by_team_in_range_impl(
        &self,
        team_id: &TeamId,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Task>, DomainError> {
        let query = format!(
            "{} WHERE team_id = ?1 AND date >= ?2 AND date <= ?3 ORDER BY date ASC, created_at ASC",
            Self::SELECT_QUERY
        );

        let rows: Vec<TaskRow> = self
            .base
            .fetch_all(
                sqlx::query_as(&query)
                    .bind(team_id.as_str())
                    .bind(start)
                    .bind(end),
                "Find tasks by team in range",
            )
            .await?;

        into_tasks(rows)
    }

    pub(super) async fn find_incomplete_on_impl(
        &self,
        date: NaiveDate,
    ) -> Result<Vec<Task>, DomainError> {
        let query = format!(
            "{} WHERE date = ?1 AND completed = 0 ORDER BY created_at ASC",
            Self::SELECT_QUERY
        );

        let rows: Vec<TaskRow> = self
            .base
            .fetch_all(sqlx::query_as(&query).bind(date), "Find incomplete tasks")
            .await?;

        into_tasks(rows)
    }

    pub(super) async fn exists_with_content_impl(
        &self,
        user_id: &UserId,
        content: &str,
        date: NaiveDate,
    ) -> Result<bool, DomainError> {
        // `=` on TEXT is binary collation: exact and case-sensitive
        let query = "SELECT EXISTS(SELECT 1 FROM todos WHERE user_id = ?1 AND content = ?2 AND date = ?3)";

        self.base
            .exists(
                sqlx::query_as(query)
                    .bind(user_id.as_str())
                    .bind(content)
                    .bind(date),
                "Check duplicate task",
            )
            .await
    }

    pub(super) async fn search_by_owner_impl(
        &self,
        user_id: &UserId,
        query_text: &str,
        since: NaiveDate,
        limit: u32,
    ) -> Result<Vec<Task>, DomainError> {
        let query = format!(
            r#"{}
            WHERE user_id = ?1
              AND date IS NOT NULL
              AND date >= ?2
              AND instr(lower(content), lower(?3)) > 0
            ORDER BY date DESC, created_at ASC
            LIMIT ?4"#,
            Self::SELECT_QUERY
        );

        let rows: Vec<TaskRow> = self
            .base
            .fetch_all(
                sqlx::query_as(&query)
                    .bind(user_id.as_str())
                    .bind(since)
                    .bind(query_text)
                    .bind(i64::from(limit)),
                "Search tasks",
            )
            .await?;

        into_tasks(rows)
    }
}
