use std::time::Instant;
use tracing::debug;

use crate::persistence::ResultExt;
use teamdo_domain::shared::{DomainError, TaskId, UserId};
use teamdo_domain::task::{CarryOverCommit, Task};

impl super::SqliteTaskRepository {
    pub(super) async fn save_impl(&self, task: &Task) -> Result<(), DomainError> {
        let query = r#"
            INSERT INTO todos (id, user_id, team_id, content, date, completed, completed_at,
                               carry_over_count, priority, created_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)
            ON CONFLICT(id) DO UPDATE SET
                content = ?4,
                date = ?5,
                completed = ?6,
                completed_at = ?7,
                carry_over_count = ?8,
                priority = ?9
        "#;

        self.base
            .execute(
                sqlx::query(query)
                    .bind(task.id().as_str())
                    .bind(task.user_id().as_str())
                    .bind(task.team_id().as_str())
                    .bind(task.content())
                    .bind(task.date())
                    .bind(task.is_completed())
                    .bind(task.completed_at())
                    .bind(i64::from(task.carry_over_count()))
                    .bind(task.priority())
                    .bind(task.created_at()),
                "Save task",
            )
            .await?;

        Ok(())
    }

    pub(super) async fn delete_impl(&self, id: &TaskId) -> Result<(), DomainError> {
        self.base
            .execute(
                sqlx::query("DELETE FROM todos WHERE id = ?1").bind(id.as_str()),
                "Delete task",
            )
            .await?;

        Ok(())
    }

    pub(super) async fn delete_by_owner_impl(&self, user_id: &UserId) -> Result<u64, DomainError> {
        let result = self
            .base
            .execute(
                sqlx::query("DELETE FROM todos WHERE user_id = ?1").bind(user_id.as_str()),
                "Delete tasks by owner",
            )
            .await?;

        Ok(result.rows_affected())
    }

    /// Close the source and insert the replacement in one transaction.
    ///
    /// The close is conditional on the row still being open, and the insert is
    /// conditional on no (owner, content, date) twin existing, so concurrent
    /// runs can neither double-close nor double-insert.
    pub(super) async fn commit_carry_over_impl(
        &self,
        source: &Task,
        replacement: Option<&Task>,
    ) -> Result<CarryOverCommit, DomainError> {
        let start = Instant::now();

        let mut tx = self
            .base
            .pool()
            .begin()
            .await
            .map_repo_error("Begin carry-over transaction")?;

        let closed = sqlx::query(
            "UPDATE todos SET completed = 1, completed_at = ?1 WHERE id = ?2 AND completed = 0",
        )
        .bind(source.completed_at())
        .bind(source.id().as_str())
        .execute(&mut *tx)
        .await
        .map_repo_error("Close carried task")?;

        if closed.rows_affected() == 0 {
            tx.rollback().await.map_repo_error("Rollback carry-over")?;
            return Ok(CarryOverCommit::AlreadyClosed);
        }

        let outcome = match replacement {
            Some(next) => {
                let inserted = sqlx::query(
                    r#"
                    INSERT INTO todos (id, user_id, team_id, content, date, completed, completed_at,
                                       carry_over_count, priority, created_at)
                    SELECT ?1, ?2, ?3, ?4, ?5, 0, NULL, ?6, ?7, ?8
                    WHERE NOT EXISTS (
                        SELECT 1 FROM todos WHERE user_id = ?2 AND content = ?4 AND date = ?5
                    )
                    "#,
                )
                .bind(next.id().as_str())
                .bind(next.user_id().as_str())
                .bind(next.team_id().as_str())
                .bind(next.content())
                .bind(next.date())
                .bind(i64::from(next.carry_over_count()))
                .bind(next.priority())
                .bind(next.created_at())
                .execute(&mut *tx)
                .await
                .map_repo_error("Insert carried task")?;

                if inserted.rows_affected() == 1 {
                    CarryOverCommit::Carried
                } else {
                    CarryOverCommit::ClosedAsDuplicate
                }
            }
            None => CarryOverCommit::ClosedAsDuplicate,
        };

        tx.commit().await.map_repo_error("Commit carry-over")?;

        debug!(
            "carry-over commit for {}: {:?} in {:.2}ms",
            source.id(),
            outcome,
            start.elapsed().as_secs_f64() * 1000.0
        );

        Ok(outcome)
    }
}
