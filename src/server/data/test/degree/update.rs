use super::*;

/// Tests replacing every field of a degree.
///
/// Verifies that fields change and `updated_at` moves forward while `created_at` stays.
///
/// Expected: Ok with degree updated
#[tokio::test]
async fn updates_degree() -> Result<(), DbErr> {
    let mut test = TestBuilder::new().with_faculty_tables().build().await.unwrap();
    let db = test.database().await.unwrap();

    let repo = DegreeRepository::new(db);
    let created = repo.create(param("Cử nhân")).await?;

    let updated = repo
        .update(UpdateDegreeParam {
            id: created.id,
            name: "Kỹ sư".to_string(),
            coefficient: 1.5,
            specialization: "Networks".to_string(),
            issue_date: NaiveDate::from_ymd_opt(2021, 6, 1).unwrap(),
        })
        .await?;

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.name, "Kỹ sư");
    assert_eq!(updated.coefficient, 1.5);
    assert_eq!(updated.created_at, created.created_at);
    assert!(updated.updated_at >= created.updated_at);

    Ok(())
}

/// Tests updating a degree that does not exist.
///
/// Expected: Err(DbErr::RecordNotFound)
#[tokio::test]
async fn fails_for_missing_degree() -> Result<(), DbErr> {
    let mut test = TestBuilder::new().with_faculty_tables().build().await.unwrap();
    let db = test.database().await.unwrap();

    let result = DegreeRepository::new(db)
        .update(UpdateDegreeParam {
            id: 999,
            name: "Kỹ sư".to_string(),
            coefficient: 1.5,
            specialization: "Networks".to_string(),
            issue_date: NaiveDate::from_ymd_opt(2021, 6, 1).unwrap(),
        })
        .await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}
