//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a teacher together with the department and degree it references.
///
/// All entities are created with default values. Use the individual factories to
/// customize specific fields.
///
/// # Returns
/// - `Ok((department, degree, teacher))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_teacher_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::department::Model,
        entity::degree::Model,
        entity::teacher::Model,
    ),
    DbErr,
> {
    let department = crate::factory::department::create_department(db).await?;
    let degree = crate::factory::degree::create_degree(db).await?;
    let teacher = crate::factory::teacher::create_teacher(db, department.id, degree.id).await?;

    Ok((department, degree, teacher))
}
