pub mod command_handler;
pub mod day_start_commands;
pub mod handlers;
pub mod task_commands;
pub mod team_commands;
pub mod template_commands;
pub mod user_commands;
