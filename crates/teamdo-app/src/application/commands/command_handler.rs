use async_trait::async_trait;
use teamdo_domain::shared::DomainError;

/// Marker trait for commands
pub trait Command: Send + Sync {}

/// Command handler trait
#[async_trait]
pub trait CommandHandler<C: Command>: Send + Sync {
    type Result: Send;

    async fn handle(&self, cmd: C) -> Result<Self::Result, DomainError>;
}
