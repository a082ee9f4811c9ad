use async_trait::async_trait;

use super::aggregate::Team;
use super::value_objects::InviteCode;
use crate::shared::{DomainError, TeamId};

#[async_trait]
pub trait TeamRepository: Send + Sync {
    /// Insert or update. A duplicate invite code surfaces as `Conflict`.
    async fn save(&self, team: &Team) -> Result<(), DomainError>;

    async fn find_by_id(&self, id: &TeamId) -> Result<Option<Team>, DomainError>;

    async fn find_by_invite_code(&self, code: &InviteCode) -> Result<Option<Team>, DomainError>;
}
