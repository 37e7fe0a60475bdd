//! HTTP request handlers.
//!
//! Handlers convert DTOs into parameter models, call a service and turn the domain result
//! back into a DTO. Every handler returns `Result<_, AppError>`, so failures are rendered by
//! `AppError`'s `IntoResponse` impl.

pub mod degree;
pub mod department;
pub mod health;
pub mod statistics;
pub mod teacher;

#[cfg(test)]
mod test;

use crate::server::error::AppError;

/// Parses a generated integer id from a path segment. A segment that is not an id cannot
/// name any record, so it is reported as not found.
fn parse_id(raw: &str, entity: &str) -> Result<i32, AppError> {
    raw.trim()
        .parse::<i32>()
        .map_err(|_| AppError::NotFound(format!("{} not found", entity)))
}
