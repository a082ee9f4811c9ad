use async_trait::async_trait;
use log::info;
use std::sync::Arc;

use crate::application::commands::command_handler::CommandHandler;
use crate::application::commands::user_commands::*;
use crate::application::dtos::UserDto;
use teamdo_domain::shared::DomainError;
use teamdo_domain::user::{User, UserRepository};

/// Register user command handler
pub struct RegisterUserCommandHandler {
    user_repo: Arc<dyn UserRepository>,
}

impl RegisterUserCommandHandler {
    pub fn new(user_repo: Arc<dyn UserRepository>) -> Self {
        Self { user_repo }
    }
}

#[async_trait]
impl CommandHandler<RegisterUserCommand> for RegisterUserCommandHandler {
    type Result = RegisterUserResult;

    async fn handle(&self, cmd: RegisterUserCommand) -> Result<Self::Result, DomainError> {
        let user = User::new(cmd.email, cmd.name)?;

        if self.user_repo.find_by_email(user.email()).await?.is_some() {
            return Err(DomainError::Conflict(format!(
                "User {} is already registered",
                user.email()
            )));
        }

        self.user_repo.save(&user).await?;

        info!("User registered: {}", user.id());

        Ok(UserDto::from(&user))
    }
}
