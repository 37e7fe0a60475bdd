use super::*;

/// Tests deleting an unreferenced degree.
///
/// Expected: Ok(true) and the row is gone
#[tokio::test]
async fn deletes_degree() -> Result<(), DbErr> {
    let mut test = TestBuilder::new().with_faculty_tables().build().await.unwrap();
    let db = test.database().await.unwrap();

    let degree = factory::create_degree(db).await?;

    let deleted = DegreeRepository::new(db).delete(degree.id).await?;

    assert!(deleted);
    assert!(entity::prelude::Degree::find_by_id(degree.id)
        .one(db)
        .await?
        .is_none());

    Ok(())
}

/// Tests deleting a degree that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_degree() -> Result<(), DbErr> {
    let mut test = TestBuilder::new().with_faculty_tables().build().await.unwrap();
    let db = test.database().await.unwrap();

    let deleted = DegreeRepository::new(db).delete(999).await?;

    assert!(!deleted);

    Ok(())
}

/// Tests that the foreign key blocks deleting a degree still held by a teacher.
///
/// Expected: Err and the degree remains
#[tokio::test]
async fn refuses_degree_referenced_by_teacher() -> Result<(), DbErr> {
    let mut test = TestBuilder::new().with_faculty_tables().build().await.unwrap();
    let db = test.database().await.unwrap();

    let (_, degree, _) = factory::create_teacher_with_dependencies(db).await?;

    let result = DegreeRepository::new(db).delete(degree.id).await;

    assert!(result.is_err());
    assert!(entity::prelude::Degree::find_by_id(degree.id)
        .one(db)
        .await?
        .is_some());

    Ok(())
}
