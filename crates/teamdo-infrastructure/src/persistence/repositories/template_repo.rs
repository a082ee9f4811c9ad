use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, SqlitePool};
use std::sync::Arc;

use crate::persistence::SqliteRepositoryBase;
use teamdo_domain::shared::{DomainError, TemplateId, UserId};
use teamdo_domain::template::{TemplateRepository, TodoTemplate};

#[derive(FromRow)]
struct TemplateRow {
    id: String,
    user_id: String,
    content: String,
    created_at: DateTime<Utc>,
}

impl TemplateRow {
    fn into_template(self) -> TodoTemplate {
        TodoTemplate::restore(
            TemplateId::from_string(&self.id),
            UserId::from_string(&self.user_id),
            self.content,
            self.created_at,
        )
    }
}

pub struct SqliteTemplateRepository {
    base: SqliteRepositoryBase,
}

impl SqliteTemplateRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self {
            base: SqliteRepositoryBase::new(pool),
        }
    }
}

#[async_trait]
impl TemplateRepository for SqliteTemplateRepository {
    async fn save(&self, template: &TodoTemplate) -> Result<(), DomainError> {
        let query = r#"
            INSERT INTO todo_templates (id, user_id, content, created_at)
            VALUES (?1, ?2, ?3, ?4)
            ON CONFLICT(id) DO UPDATE SET content = ?3
        "#;

        self.base
            .execute(
                sqlx::query(query)
                    .bind(template.id().as_str())
                    .bind(template.user_id().as_str())
                    .bind(template.content())
                    .bind(template.created_at()),
                "Save template",
            )
            .await?;

        Ok(())
    }

    async fn find_by_id(&self, id: &TemplateId) -> Result<Option<TodoTemplate>, DomainError> {
        let query = "SELECT id, user_id, content, created_at FROM todo_templates WHERE id = ?1";

        let row: Option<TemplateRow> = self
            .base
            .fetch_optional(sqlx::query_as(query).bind(id.as_str()), "Find template")
            .await?;

        Ok(row.map(|r| r.into_template()))
    }

    async fn find_by_owner(&self, user_id: &UserId) -> Result<Vec<TodoTemplate>, DomainError> {
        let query = "SELECT id, user_id, content, created_at FROM todo_templates WHERE user_id = ?1 ORDER BY created_at DESC";

        let rows: Vec<TemplateRow> = self
            .base
            .fetch_all(sqlx::query_as(query).bind(user_id.as_str()), "List templates")
            .await?;

        Ok(rows.into_iter().map(|r| r.into_template()).collect())
    }

    async fn delete(&self, id: &TemplateId) -> Result<(), DomainError> {
        self.base
            .execute(
                sqlx::query("DELETE FROM todo_templates WHERE id = ?1").bind(id.as_str()),
                "Delete template",
            )
            .await?;

        Ok(())
    }
}
