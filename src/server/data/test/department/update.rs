use super::*;

/// Tests renaming a department.
///
/// Expected: Ok with new values and a refreshed `updated_at`
#[tokio::test]
async fn updates_department() -> Result<(), DbErr> {
    let mut test = TestBuilder::new().with_faculty_tables().build().await.unwrap();
    let db = test.database().await.unwrap();

    let repo = DepartmentRepository::new(db);
    let created = repo.create(param("Kinh tế", "KT")).await?;

    let updated = repo
        .update(UpdateDepartmentParam {
            id: created.id,
            full_name: "Kinh tế quốc tế".to_string(),
            abbreviation: "KTQT".to_string(),
        })
        .await?;

    assert_eq!(updated.full_name, "Kinh tế quốc tế");
    assert_eq!(updated.abbreviation, "KTQT");
    assert!(updated.updated_at >= created.updated_at);

    Ok(())
}

/// Tests updating a department that does not exist.
///
/// Expected: Err(DbErr::RecordNotFound)
#[tokio::test]
async fn fails_for_missing_department() -> Result<(), DbErr> {
    let mut test = TestBuilder::new().with_faculty_tables().build().await.unwrap();
    let db = test.database().await.unwrap();

    let result = DepartmentRepository::new(db)
        .update(UpdateDepartmentParam {
            id: 42,
            full_name: "Kinh tế".to_string(),
            abbreviation: "KT".to_string(),
        })
        .await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}
