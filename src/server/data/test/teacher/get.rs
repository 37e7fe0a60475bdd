use super::*;

/// Tests reading teachers by generated id, by staff code and as a list.
///
/// Expected: Ok with the same teacher from each lookup
#[tokio::test]
async fn gets_teacher_by_id_code_and_list() -> Result<(), DbErr> {
    let mut test = TestBuilder::new().with_faculty_tables().build().await.unwrap();
    let db = test.database().await.unwrap();

    let (department, degree, teacher) = factory::create_teacher_with_dependencies(db).await?;
    let repo = TeacherRepository::new(db);

    let by_id = repo.get_by_id(teacher.id).await?.unwrap();
    let by_code = repo.get_by_code(&teacher.teacher_id).await?.unwrap();
    let all = repo.get_all().await?;

    assert_eq!(by_id, by_code);
    assert_eq!(by_id.department, department.abbreviation);
    assert_eq!(by_id.degree, degree.name);
    assert_eq!(all, vec![by_id]);
    assert!(repo.get_by_code("missing").await?.is_none());

    Ok(())
}

/// Tests that renaming a department shows up on its teachers without rewriting them.
///
/// Expected: Ok with the new abbreviation on the teacher
#[tokio::test]
async fn reflects_department_rename() -> Result<(), DbErr> {
    use crate::server::{
        data::department::DepartmentRepository, model::department::UpdateDepartmentParam,
    };

    let mut test = TestBuilder::new().with_faculty_tables().build().await.unwrap();
    let db = test.database().await.unwrap();

    let (department, _, teacher) = factory::create_teacher_with_dependencies(db).await?;

    DepartmentRepository::new(db)
        .update(UpdateDepartmentParam {
            id: department.id,
            full_name: department.full_name.clone(),
            abbreviation: "RENAMED".to_string(),
        })
        .await?;

    let reloaded = TeacherRepository::new(db).get_by_id(teacher.id).await?.unwrap();
    assert_eq!(reloaded.department, "RENAMED");

    Ok(())
}
