use super::*;

/// Tests finding a degree by its exact name.
///
/// Expected: Ok(Some) for the stored name, Ok(None) for a different casing
#[tokio::test]
async fn finds_degree_by_exact_name() -> Result<(), DbErr> {
    let mut test = TestBuilder::new().with_faculty_tables().build().await.unwrap();
    let db = test.database().await.unwrap();

    factory::degree::DegreeFactory::new(db)
        .name("Master")
        .build()
        .await?;

    let repo = DegreeRepository::new(db);

    assert!(repo.find_by_name("Master").await?.is_some());
    assert!(repo.find_by_name("Doctor").await?.is_none());

    Ok(())
}
