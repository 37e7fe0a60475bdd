use super::*;

/// Tests getting a department by id.
///
/// Expected: Ok(Some) for an existing id, Ok(None) otherwise
#[tokio::test]
async fn gets_department_by_id() -> Result<(), DbErr> {
    let mut test = TestBuilder::new().with_faculty_tables().build().await.unwrap();
    let db = test.database().await.unwrap();

    let created = factory::create_department(db).await?;
    let repo = DepartmentRepository::new(db);

    let found = repo.get_by_id(created.id).await?;
    assert_eq!(found.map(|d| d.abbreviation), Some(created.abbreviation));
    assert!(repo.get_by_id(created.id + 100).await?.is_none());

    Ok(())
}
