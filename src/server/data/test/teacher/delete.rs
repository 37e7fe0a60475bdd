use super::*;

/// Tests deleting a teacher.
///
/// Expected: Ok(true) first, Ok(false) for the second attempt
#[tokio::test]
async fn deletes_teacher_once() -> Result<(), DbErr> {
    let mut test = TestBuilder::new().with_faculty_tables().build().await.unwrap();
    let db = test.database().await.unwrap();

    let (_, _, teacher) = factory::create_teacher_with_dependencies(db).await?;
    let repo = TeacherRepository::new(db);

    assert!(repo.delete(teacher.id).await?);
    assert!(!repo.delete(teacher.id).await?);
    assert!(repo.get_by_id(teacher.id).await?.is_none());

    Ok(())
}
