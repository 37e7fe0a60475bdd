use super::*;

/// Tests creating a new department.
///
/// Expected: Ok with department created
#[tokio::test]
async fn creates_department() -> Result<(), DbErr> {
    let mut test = TestBuilder::new().with_faculty_tables().build().await.unwrap();
    let db = test.database().await.unwrap();

    let department = DepartmentRepository::new(db)
        .create(param("Công nghệ thông tin", "CNTT"))
        .await?;

    assert!(department.id > 0);
    assert_eq!(department.full_name, "Công nghệ thông tin");
    assert_eq!(department.abbreviation, "CNTT");

    Ok(())
}

/// Tests that the unique index on abbreviation rejects a second insert.
///
/// Expected: Err with a unique constraint violation and only one row stored
#[tokio::test]
async fn rejects_duplicate_abbreviation() -> Result<(), DbErr> {
    let mut test = TestBuilder::new().with_faculty_tables().build().await.unwrap();
    let db = test.database().await.unwrap();

    let repo = DepartmentRepository::new(db);
    repo.create(param("Công nghệ thông tin", "CNTT")).await?;
    let result = repo.create(param("Other", "CNTT")).await;

    assert!(matches!(
        result.unwrap_err().sql_err(),
        Some(sea_orm::SqlErr::UniqueConstraintViolation(_))
    ));
    assert_eq!(repo.get_all().await?.len(), 1);

    Ok(())
}
