use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::{FromRow, QueryBuilder, Sqlite, SqlitePool};
use std::sync::Arc;

use crate::persistence::{ResultExt, SqliteRepositoryBase};
use teamdo_domain::day_start::{DayStart, DayStartRepository};
use teamdo_domain::shared::{DomainError, UserId};

#[derive(FromRow)]
struct DayStartRow {
    user_id: String,
    date: NaiveDate,
    started_at: DateTime<Utc>,
}

impl DayStartRow {
    fn into_day_start(self) -> DayStart {
        DayStart::new(UserId::from_string(&self.user_id), self.date, self.started_at)
    }
}

pub struct SqliteDayStartRepository {
    base: SqliteRepositoryBase,
}

impl SqliteDayStartRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self {
            base: SqliteRepositoryBase::new(pool),
        }
    }
}

#[async_trait]
impl DayStartRepository for SqliteDayStartRepository {
    async fn find(
        &self,
        user_id: &UserId,
        date: NaiveDate,
    ) -> Result<Option<DayStart>, DomainError> {
        let query = "SELECT user_id, date, started_at FROM day_starts WHERE user_id = ?1 AND date = ?2";

        let row: Option<DayStartRow> = self
            .base
            .fetch_optional(
                sqlx::query_as(query).bind(user_id.as_str()).bind(date),
                "Find day start",
            )
            .await?;

        Ok(row.map(|r| r.into_day_start()))
    }

    async fn find_for_users_on(
        &self,
        user_ids: &[UserId],
        date: NaiveDate,
    ) -> Result<Vec<DayStart>, DomainError> {
        if user_ids.is_empty() {
            return Ok(Vec::new());
        }

        let mut builder: QueryBuilder<Sqlite> =
            QueryBuilder::new("SELECT user_id, date, started_at FROM day_starts WHERE date = ");
        builder.push_bind(date);
        builder.push(" AND user_id IN (");
        let mut ids = builder.separated(", ");
        for id in user_ids {
            ids.push_bind(id.as_str());
        }
        ids.push_unseparated(")");

        let rows: Vec<DayStartRow> = builder
            .build_query_as()
            .fetch_all(self.base.pool())
            .await
            .map_repo_error("Find day starts for team")?;

        Ok(rows.into_iter().map(|r| r.into_day_start()).collect())
    }

    async fn create(&self, day_start: &DayStart) -> Result<(), DomainError> {
        // primary key (user_id, date) rejects a second start as Conflict
        let query = "INSERT INTO day_starts (user_id, date, started_at) VALUES (?1, ?2, ?3)";

        self.base
            .execute(
                sqlx::query(query)
                    .bind(day_start.user_id().as_str())
                    .bind(day_start.date())
                    .bind(day_start.started_at()),
                "Create day start",
            )
            .await?;

        Ok(())
    }
}
