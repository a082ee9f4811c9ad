use teamdo_domain::shared::DomainError;

/// Translates sqlx failures into the domain taxonomy.
pub struct RepositoryErrorMapper;

impl RepositoryErrorMapper {
    pub fn map_sqlx_error(error: sqlx::Error, context: &str) -> DomainError {
        match &error {
            sqlx::Error::RowNotFound => DomainError::NotFound(format!("{}: row not found", context)),
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                DomainError::Conflict(format!("{}: already exists", context))
            }
            sqlx::Error::Database(db) if db.is_foreign_key_violation() => DomainError::DataIntegrity(
                format!("{}: references a missing record", context),
            ),
            sqlx::Error::Database(db) if db.is_check_violation() => {
                DomainError::DataIntegrity(format!("{}: {}", context, db.message()))
            }
            sqlx::Error::ColumnDecode { .. } | sqlx::Error::Decode(_) => {
                DomainError::Serialization(format!("{}: {}", context, error))
            }
            sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_) => {
                DomainError::Infrastructure(format!("{}: {}", context, error))
            }
            _ => DomainError::Repository(format!("{}: {}", context, error)),
        }
    }
}
