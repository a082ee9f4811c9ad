use teamdo_domain::shared::{DomainError, TeamId, UserId};
use teamdo_domain::user::{User, UserRepository};

/// Resolve the authenticated caller. An unknown id means the session is stale.
pub async fn load_caller(
    user_repo: &dyn UserRepository,
    caller_id: &str,
) -> Result<User, DomainError> {
    if caller_id.trim().is_empty() {
        return Err(DomainError::Unauthorized(
            "Authentication required".to_string(),
        ));
    }

    user_repo
        .find_by_id(&UserId::from_string(caller_id))
        .await?
        .ok_or_else(|| DomainError::Unauthorized(format!("Unknown user: {}", caller_id)))
}

/// The caller together with the team they belong to.
pub async fn load_caller_team(
    user_repo: &dyn UserRepository,
    caller_id: &str,
) -> Result<(User, TeamId), DomainError> {
    let user = load_caller(user_repo, caller_id).await?;
    let team_id = user.require_team()?.clone();
    Ok((user, team_id))
}
