//! `SeaORM` Entity definitions for the faculty registry.

pub mod prelude;

pub mod degree;
pub mod department;
pub mod teacher;
