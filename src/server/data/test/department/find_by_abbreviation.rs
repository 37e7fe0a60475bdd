use super::*;

/// Tests finding a department by exact abbreviation.
///
/// Expected: Ok(Some) for the stored abbreviation only
#[tokio::test]
async fn finds_department_by_abbreviation() -> Result<(), DbErr> {
    let mut test = TestBuilder::new().with_faculty_tables().build().await.unwrap();
    let db = test.database().await.unwrap();

    factory::department::DepartmentFactory::new(db)
        .abbreviation("KT")
        .build()
        .await?;

    let repo = DepartmentRepository::new(db);

    assert!(repo.find_by_abbreviation("KT").await?.is_some());
    assert!(repo.find_by_abbreviation("CNTT").await?.is_none());

    Ok(())
}
