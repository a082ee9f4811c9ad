use teamdo_domain::shared::DomainError;

use super::RepositoryErrorMapper;

pub trait ResultExt<T> {
    /// Map a sqlx failure to a `DomainError`, tagging it with the operation.
    fn map_repo_error(self, context: &str) -> Result<T, DomainError>;
}

impl<T> ResultExt<T> for Result<T, sqlx::Error> {
    fn map_repo_error(self, context: &str) -> Result<T, DomainError> {
        self.map_err(|e| {
            let mapped = RepositoryErrorMapper::map_sqlx_error(e, context);
            match mapped {
                DomainError::Conflict(_) | DomainError::NotFound(_) => {
                    log::debug!("[repository] {}", mapped)
                }
                _ => log::error!("[repository] {}", mapped.format_with_code()),
            }
            mapped
        })
    }
}
