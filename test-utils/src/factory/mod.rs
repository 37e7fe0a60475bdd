//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with a `Factory` struct for customization and a
//! `create_*` convenience function for quick default creation. Defaults are unique per call,
//! so several records can be inserted without tripping the unique indexes.
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let department = factory::create_department(&db).await?;
//! let degree = factory::degree::DegreeFactory::new(&db)
//!     .name("Thạc sĩ")
//!     .coefficient(1.2)
//!     .build()
//!     .await?;
//! let teacher = factory::teacher::TeacherFactory::new(&db, department.id, degree.id)
//!     .email("a@x.com")
//!     .build()
//!     .await?;
//! ```

pub mod degree;
pub mod department;
pub mod helpers;
pub mod teacher;

pub use degree::create_degree;
pub use department::create_department;
pub use helpers::create_teacher_with_dependencies;
pub use teacher::create_teacher;
