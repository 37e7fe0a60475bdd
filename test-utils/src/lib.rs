//! Faculty Test Utils
//!
//! Provides shared testing utilities for building integration and unit tests for the faculty
//! registry. This crate offers a builder pattern for creating test contexts with in-memory
//! SQLite databases and customizable table schemas, plus factories for inserting departments,
//! degrees and teachers with unique defaults.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn test_teacher_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new().with_faculty_tables().build().await?;
//!     let db = test.db.as_ref().unwrap();
//!
//!     let (department, degree, teacher) = factory::create_teacher_with_dependencies(db).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
