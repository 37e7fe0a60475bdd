use super::*;

/// Tests replacing a teacher's editable fields.
///
/// Verifies the staff code is unchanged and the new degree name is returned.
///
/// Expected: Ok with teacher updated
#[tokio::test]
async fn updates_teacher_and_keeps_code() -> Result<(), DbErr> {
    let mut test = TestBuilder::new().with_faculty_tables().build().await.unwrap();
    let db = test.database().await.unwrap();

    let (department, _, teacher) = factory::create_teacher_with_dependencies(db).await?;
    let other_degree = factory::degree::DegreeFactory::new(db)
        .name("Tiến sĩ")
        .build()
        .await?;

    let updated = TeacherRepository::new(db)
        .update(
            teacher.id,
            record(department.id, other_degree.id, "new@x.com"),
        )
        .await?;

    assert_eq!(updated.teacher_id, teacher.teacher_id);
    assert_eq!(updated.degree, "Tiến sĩ");
    assert_eq!(updated.email, "new@x.com");
    assert!(updated.updated_at >= teacher.updated_at);

    Ok(())
}

/// Tests updating a teacher that does not exist.
///
/// Expected: Err(DbErr::RecordNotFound)
#[tokio::test]
async fn fails_for_missing_teacher() -> Result<(), DbErr> {
    let mut test = TestBuilder::new().with_faculty_tables().build().await.unwrap();
    let db = test.database().await.unwrap();

    let department = factory::create_department(db).await?;
    let degree = factory::create_degree(db).await?;

    let result = TeacherRepository::new(db)
        .update(999, record(department.id, degree.id, "a@x.com"))
        .await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}
