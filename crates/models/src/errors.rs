use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    NotFound(String),
    #[error("database error: {0}")]
    Db(String),
}

impl ModelError {
    pub fn not_found(entity: &str) -> Self { Self::NotFound(format!("{} not found", entity)) }
}

/// Constraint violations surfaced by the database are input problems, not outages.
impl From<DbErr> for ModelError {
    fn from(e: DbErr) -> Self {
        match e.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(msg)) => {
                Self::Validation(format!("Value must be unique ({msg})."))
            }
            Some(SqlErr::ForeignKeyConstraintViolation(msg)) => {
                Self::Validation(format!("Record is still referenced or references a missing row ({msg})."))
            }
            _ => Self::Db(e.to_string()),
        }
    }
}
