//! Domain models and operation-specific parameter types.
//!
//! Domain models (`Degree`, `Department`, `Teacher`) are what repositories return; they are
//! built from SeaORM entity models at the data layer boundary so entities never leak into
//! services or controllers. Parameter models carry normalised (trimmed) input from the
//! controllers into the services.

pub mod degree;
pub mod department;
pub mod teacher;
