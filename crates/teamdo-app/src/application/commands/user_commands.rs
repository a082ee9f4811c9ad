use serde::{Deserialize, Serialize};

use crate::application::commands::command_handler::Command;
use crate::application::dtos::UserDto;

/// Sign-up is handled by the external identity provider; this records the
/// profile the first time a verified email is seen.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterUserCommand {
    pub email: String,
    pub name: Option<String>,
}

impl Command for RegisterUserCommand {}

pub type RegisterUserResult = UserDto;
