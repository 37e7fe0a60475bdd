use super::*;

/// Tests staff code and email existence checks.
///
/// Expected: email check ignores the excluded teacher
#[tokio::test]
async fn checks_code_and_email_existence() -> Result<(), DbErr> {
    let mut test = TestBuilder::new().with_faculty_tables().build().await.unwrap();
    let db = test.database().await.unwrap();

    let (_, _, teacher) = factory::create_teacher_with_dependencies(db).await?;
    let repo = TeacherRepository::new(db);

    assert!(repo.exists_with_code(&teacher.teacher_id).await?);
    assert!(!repo.exists_with_code("nobody").await?);
    assert!(repo.exists_with_email(&teacher.email, None).await?);
    assert!(!repo.exists_with_email(&teacher.email, Some(teacher.id)).await?);

    Ok(())
}
