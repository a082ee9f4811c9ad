use async_trait::async_trait;
use log::info;
use std::sync::Arc;

use crate::application::commands::command_handler::CommandHandler;
use crate::application::commands::template_commands::*;
use crate::application::dtos::TemplateDto;
use crate::application::utils::load_caller;
use teamdo_domain::shared::{DomainError, TemplateId};
use teamdo_domain::template::{TemplateRepository, TodoTemplate};
use teamdo_domain::user::UserRepository;

/// Create template command handler
pub struct CreateTemplateCommandHandler {
    user_repo: Arc<dyn UserRepository>,
    template_repo: Arc<dyn TemplateRepository>,
}

impl CreateTemplateCommandHandler {
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        template_repo: Arc<dyn TemplateRepository>,
    ) -> Self {
        Self {
            user_repo,
            template_repo,
        }
    }
}

#[async_trait]
impl CommandHandler<CreateTemplateCommand> for CreateTemplateCommandHandler {
    type Result = CreateTemplateResult;

    async fn handle(&self, cmd: CreateTemplateCommand) -> Result<Self::Result, DomainError> {
        let user = load_caller(self.user_repo.as_ref(), &cmd.caller_id).await?;

        let template = TodoTemplate::new(user.id().clone(), &cmd.content)?;
        self.template_repo.save(&template).await?;

        info!("Template created: {} (user={})", template.id(), user.id());

        Ok(TemplateDto::from(&template))
    }
}

/// Delete template command handler
pub struct DeleteTemplateCommandHandler {
    user_repo: Arc<dyn UserRepository>,
    template_repo: Arc<dyn TemplateRepository>,
}

impl DeleteTemplateCommandHandler {
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        template_repo: Arc<dyn TemplateRepository>,
    ) -> Self {
        Self {
            user_repo,
            template_repo,
        }
    }
}

#[async_trait]
impl CommandHandler<DeleteTemplateCommand> for DeleteTemplateCommandHandler {
    type Result = DeleteTemplateResult;

    async fn handle(&self, cmd: DeleteTemplateCommand) -> Result<Self::Result, DomainError> {
        let user = load_caller(self.user_repo.as_ref(), &cmd.caller_id).await?;

        // Someone else's template is reported the same as a missing one
        let template_id = TemplateId::from_string(&cmd.template_id);
        let template = self
            .template_repo
            .find_by_id(&template_id)
            .await?
            .filter(|t| t.user_id() == user.id())
            .ok_or_else(|| DomainError::NotFound(format!("Template {}", cmd.template_id)))?;

        self.template_repo.delete(template.id()).await?;

        info!("Template deleted: {}", template.id());

        Ok(())
    }
}
