use super::*;

/// Tests creating a teacher that references an existing department and degree.
///
/// Verifies the returned teacher carries the department abbreviation and degree name.
///
/// Expected: Ok with teacher created
#[tokio::test]
async fn creates_teacher_with_reference_values() -> Result<(), DbErr> {
    let mut test = TestBuilder::new().with_faculty_tables().build().await.unwrap();
    let db = test.database().await.unwrap();

    let department = factory::department::DepartmentFactory::new(db)
        .abbreviation("CNTT")
        .build()
        .await?;
    let degree = factory::degree::DegreeFactory::new(db)
        .name("Thạc sĩ")
        .build()
        .await?;

    let teacher = TeacherRepository::new(db)
        .create("GV001".to_string(), record(department.id, degree.id, "a@x.com"))
        .await?;

    assert_eq!(teacher.teacher_id, "GV001");
    assert_eq!(teacher.department, "CNTT");
    assert_eq!(teacher.degree, "Thạc sĩ");
    assert_eq!(teacher.email, "a@x.com");

    Ok(())
}

/// Tests that staff code and email are both unique.
///
/// Expected: Err with a unique constraint violation for each duplicate
#[tokio::test]
async fn rejects_duplicate_code_and_email() -> Result<(), DbErr> {
    let mut test = TestBuilder::new().with_faculty_tables().build().await.unwrap();
    let db = test.database().await.unwrap();

    let department = factory::create_department(db).await?;
    let degree = factory::create_degree(db).await?;
    let repo = TeacherRepository::new(db);

    repo.create("GV001".to_string(), record(department.id, degree.id, "a@x.com"))
        .await?;

    let same_code = repo
        .create("GV001".to_string(), record(department.id, degree.id, "b@x.com"))
        .await;
    let same_email = repo
        .create("GV002".to_string(), record(department.id, degree.id, "a@x.com"))
        .await;

    for result in [same_code, same_email] {
        assert!(matches!(
            result.unwrap_err().sql_err(),
            Some(sea_orm::SqlErr::UniqueConstraintViolation(_))
        ));
    }

    Ok(())
}

/// Tests that a teacher cannot point at a department that does not exist.
///
/// Expected: Err from the foreign key
#[tokio::test]
async fn rejects_unknown_department() -> Result<(), DbErr> {
    let mut test = TestBuilder::new().with_faculty_tables().build().await.unwrap();
    let db = test.database().await.unwrap();

    let degree = factory::create_degree(db).await?;

    let result = TeacherRepository::new(db)
        .create("GV001".to_string(), record(999, degree.id, "a@x.com"))
        .await;

    assert!(result.is_err());

    Ok(())
}
