//! Service layer for business logic and orchestration.
//!
//! Services sit between the controllers and the repositories. They run the field rules,
//! pre-check uniqueness so a duplicate gets a precise message, resolve teacher references and
//! turn every failure into an `AppError` category. The unique indexes and foreign keys in the
//! schema remain the final authority: a constraint violation raised by a write is mapped to
//! `AppError::Conflict` as well.

pub mod degree;
pub mod department;
pub mod statistics;
pub mod teacher;

#[cfg(test)]
mod test;

use sea_orm::{DbErr, SqlErr};

use crate::server::error::AppError;

/// Maps a failed write to `Conflict` when storage rejected it for a unique or foreign key
/// constraint, and passes any other database error through.
fn constraint_conflict(err: DbErr, message: impl FnOnce() -> String) -> AppError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_))
        | Some(SqlErr::ForeignKeyConstraintViolation(_)) => AppError::Conflict(message()),
        _ => AppError::DbErr(err),
    }
}
