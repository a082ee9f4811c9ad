mod register_user_handler;
mod start_day_handler;
mod task_handlers;
mod team_handlers;
mod template_handlers;

#[cfg(test)]
mod tests;

pub use register_user_handler::RegisterUserCommandHandler;
pub use start_day_handler::StartDayCommandHandler;
pub use task_handlers::{
    CreateTaskCommandHandler, DeleteTaskCommandHandler, UpdateTaskCommandHandler,
};
pub use team_handlers::{
    CreateTeamCommandHandler, JoinTeamCommandHandler, LeaveTeamCommandHandler,
    UpdateTeamSettingsCommandHandler,
};
pub use template_handlers::{CreateTemplateCommandHandler, DeleteTemplateCommandHandler};
