use super::*;

/// Tests deleting an unreferenced department.
///
/// Expected: Ok(true) and the row is gone
#[tokio::test]
async fn deletes_department() -> Result<(), DbErr> {
    let mut test = TestBuilder::new().with_faculty_tables().build().await.unwrap();
    let db = test.database().await.unwrap();

    let department = factory::create_department(db).await?;

    assert!(DepartmentRepository::new(db).delete(department.id).await?);
    assert!(entity::prelude::Department::find_by_id(department.id)
        .one(db)
        .await?
        .is_none());

    Ok(())
}

/// Tests that a department with teachers is kept and its teacher count reported.
///
/// Expected: Err from the foreign key and a teacher count of one
#[tokio::test]
async fn refuses_department_with_teachers() -> Result<(), DbErr> {
    let mut test = TestBuilder::new().with_faculty_tables().build().await.unwrap();
    let db = test.database().await.unwrap();

    let (department, _, _) = factory::create_teacher_with_dependencies(db).await?;
    let repo = DepartmentRepository::new(db);

    assert_eq!(repo.get_teacher_count(department.id).await?, 1);
    assert!(repo.delete(department.id).await.is_err());
    assert!(repo.get_by_id(department.id).await?.is_some());

    Ok(())
}
