use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, SqlitePool};
use std::sync::Arc;

use crate::persistence::SqliteRepositoryBase;
use teamdo_domain::shared::{DomainError, TeamId, UserId};
use teamdo_domain::user::{User, UserRepository};

#[derive(FromRow)]
struct UserRow {
    id: String,
    email: String,
    name: Option<String>,
    team_id: Option<String>,
    created_at: DateTime<Utc>,
}

impl UserRow {
    fn into_user(self) -> User {
        User::restore(
            UserId::from_string(&self.id),
            self.email,
            self.name,
            self.team_id.as_deref().map(TeamId::from_string),
            self.created_at,
        )
    }
}

pub struct SqliteUserRepository {
    base: SqliteRepositoryBase,
}

impl SqliteUserRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self {
            base: SqliteRepositoryBase::new(pool),
        }
    }
}

#[async_trait]
impl UserRepository for SqliteUserRepository {
    async fn save(&self, user: &User) -> Result<(), DomainError> {
        let query = r#"
            INSERT INTO users (id, email, name, team_id, created_at)
            VALUES (?1, ?2, ?3, ?4, ?5)
            ON CONFLICT(id) DO UPDATE SET
                email = ?2,
                name = ?3,
                team_id = ?4
        "#;

        self.base
            .execute(
                sqlx::query(query)
                    .bind(user.id().as_str())
                    .bind(user.email())
                    .bind(user.name())
                    .bind(user.team_id().map(|t| t.as_str()))
                    .bind(user.created_at()),
                "Save user",
            )
            .await?;

        Ok(())
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, DomainError> {
        let query = "SELECT id, email, name, team_id, created_at FROM users WHERE id = ?1";

        let row: Option<UserRow> = self
            .base
            .fetch_optional(sqlx::query_as(query).bind(id.as_str()), "Find user by ID")
            .await?;

        Ok(row.map(|r| r.into_user()))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let query = "SELECT id, email, name, team_id, created_at FROM users WHERE email = ?1";

        let row: Option<UserRow> = self
            .base
            .fetch_optional(sqlx::query_as(query).bind(email), "Find user by email")
            .await?;

        Ok(row.map(|r| r.into_user()))
    }

    async fn find_by_team(&self, team_id: &TeamId) -> Result<Vec<User>, DomainError> {
        let query = "SELECT id, email, name, team_id, created_at FROM users WHERE team_id = ?1 ORDER BY created_at ASC";

        let rows: Vec<UserRow> = self
            .base
            .fetch_all(sqlx::query_as(query).bind(team_id.as_str()), "Find team members")
            .await?;

        Ok(rows.into_iter().map(|r| r.into_user()).collect())
    }
}
