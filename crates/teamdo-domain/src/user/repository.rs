use async_trait::async_trait;

use super::aggregate::User;
use crate::shared::{DomainError, TeamId, UserId};

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn save(&self, user: &User) -> Result<(), DomainError>;

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, DomainError>;

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError>;

    /// Members of a team in the order they signed up.
    async fn find_by_team(&self, team_id: &TeamId) -> Result<Vec<User>, DomainError>;
}
