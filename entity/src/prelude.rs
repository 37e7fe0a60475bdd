pub use super::degree::Entity as Degree;
pub use super::department::Entity as Department;
pub use super::teacher::Entity as Teacher;
