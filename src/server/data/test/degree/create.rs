use super::*;

/// Tests creating a new degree.
///
/// Verifies that the repository stores every field and stamps both timestamps with the
/// same instant.
///
/// Expected: Ok with degree created
#[tokio::test]
async fn creates_degree() -> Result<(), DbErr> {
    let mut test = TestBuilder::new().with_faculty_tables().build().await.unwrap();
    let db = test.database().await.unwrap();

    let repo = DegreeRepository::new(db);
    let degree = repo.create(param("Thạc sĩ")).await?;

    assert!(degree.id > 0);
    assert_eq!(degree.name, "Thạc sĩ");
    assert_eq!(degree.coefficient, 1.2);
    assert_eq!(degree.specialization, "Computer Science");
    assert_eq!(degree.created_at, degree.updated_at);

    let stored = entity::prelude::Degree::find_by_id(degree.id).one(db).await?;
    assert!(stored.is_some());

    Ok(())
}

/// Tests that the unique index on degree name rejects a second insert.
///
/// Expected: Err with a unique constraint violation
#[tokio::test]
async fn rejects_duplicate_name() -> Result<(), DbErr> {
    let mut test = TestBuilder::new().with_faculty_tables().build().await.unwrap();
    let db = test.database().await.unwrap();

    let repo = DegreeRepository::new(db);
    repo.create(param("Tiến sĩ")).await?;
    let result = repo.create(param("Tiến sĩ")).await;

    let err = result.unwrap_err();
    assert!(matches!(
        err.sql_err(),
        Some(sea_orm::SqlErr::UniqueConstraintViolation(_))
    ));

    Ok(())
}
