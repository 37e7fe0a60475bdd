//! Database repository layer for all domain entities.
//!
//! Repositories use SeaORM entity models internally and return domain models, so the service
//! and controller layers never see entities. Uniqueness and foreign key constraints live in
//! the schema; repositories surface their violations as `DbErr` and leave categorisation to
//! the services.

pub mod degree;
pub mod department;
pub mod teacher;

#[cfg(test)]
mod test;
