use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("unique constraint violated: {0}")]
    UniqueViolation(String),

    #[error("referenced record does not exist: {0}")]
    MissingReference(String),

    #[error("invalid {entity} row from database: {reason}")]
    InvalidRow {
        entity: &'static str,
        reason: String,
    },

    #[error(transparent)]
    Database(DbErr),
}

impl StoreError {
    pub(crate) fn invalid_row(entity: &'static str, reason: impl ToString) -> Self {
        Self::InvalidRow {
            entity,
            reason: reason.to_string(),
        }
    }
}

impl From<DbErr> for StoreError {
    fn from(err: DbErr) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(detail)) => Self::UniqueViolation(detail),
            Some(SqlErr::ForeignKeyConstraintViolation(detail)) => Self::MissingReference(detail),
            _ => Self::Database(err),
        }
    }
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;
