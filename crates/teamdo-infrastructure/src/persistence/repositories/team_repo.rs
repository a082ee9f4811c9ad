use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, SqlitePool};
use std::sync::Arc;

use crate::persistence::SqliteRepositoryBase;
use teamdo_domain::shared::{DomainError, TeamId};
use teamdo_domain::team::{InviteCode, Team, TeamRepository, WebhookUrl};

#[derive(FromRow)]
struct TeamRow {
    id: String,
    name: String,
    invite_code: String,
    webhook_url: Option<String>,
    created_at: DateTime<Utc>,
}

impl TeamRow {
    fn into_team(self) -> Team {
        Team::restore(
            TeamId::from_string(&self.id),
            self.name,
            InviteCode::restore(self.invite_code),
            self.webhook_url.map(WebhookUrl::restore),
            self.created_at,
        )
    }
}

pub struct SqliteTeamRepository {
    base: SqliteRepositoryBase,
}

impl SqliteTeamRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self {
            base: SqliteRepositoryBase::new(pool),
        }
    }
}

#[async_trait]
impl TeamRepository for SqliteTeamRepository {
    async fn save(&self, team: &Team) -> Result<(), DomainError> {
        let query = r#"
            INSERT INTO teams (id, name, invite_code, webhook_url, created_at)
            VALUES (?1, ?2, ?3, ?4, ?5)
            ON CONFLICT(id) DO UPDATE SET
                name = ?2,
                invite_code = ?3,
                webhook_url = ?4
        "#;

        self.base
            .execute(
                sqlx::query(query)
                    .bind(team.id().as_str())
                    .bind(team.name())
                    .bind(team.invite_code().as_str())
                    .bind(team.webhook_url().map(|w| w.as_str()))
                    .bind(team.created_at()),
                "Save team",
            )
            .await?;

        Ok(())
    }

    async fn find_by_id(&self, id: &TeamId) -> Result<Option<Team>, DomainError> {
        let query = "SELECT id, name, invite_code, webhook_url, created_at FROM teams WHERE id = ?1";

        let row: Option<TeamRow> = self
            .base
            .fetch_optional(sqlx::query_as(query).bind(id.as_str()), "Find team by ID")
            .await?;

        Ok(row.map(|r| r.into_team()))
    }

    async fn find_by_invite_code(&self, code: &InviteCode) -> Result<Option<Team>, DomainError> {
        let query =
            "SELECT id, name, invite_code, webhook_url, created_at FROM teams WHERE invite_code = ?1";

        let row: Option<TeamRow> = self
            .base
            .fetch_optional(
                sqlx::query_as(query).bind(code.as_str()),
                "Find team by invite code",
            )
            .await?;

        Ok(row.map(|r| r.into_team()))
    }
}
