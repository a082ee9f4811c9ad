use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::{DomainError, UserId};

/// Marker that a user began working on a given day. Immutable once recorded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayStart {
    user_id: UserId,
    date: NaiveDate,
    started_at: DateTime<Utc>,
}

impl DayStart {
    pub fn new(user_id: UserId, date: NaiveDate, started_at: DateTime<Utc>) -> Self {
        Self {
            user_id,
            date,
            started_at,
        }
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }
}

#[async_trait]
pub trait DayStartRepository: Send + Sync {
    async fn find(&self, user_id: &UserId, date: NaiveDate)
        -> Result<Option<DayStart>, DomainError>;

    /// Start records for several users on one day, used by the dashboard.
    async fn find_for_users_on(
        &self,
        user_ids: &[UserId],
        date: NaiveDate,
    ) -> Result<Vec<DayStart>, DomainError>;

    /// Insert a record. A second record for the same (user, date) is a `Conflict`.
    async fn create(&self, day_start: &DayStart) -> Result<(), DomainError>;
}
