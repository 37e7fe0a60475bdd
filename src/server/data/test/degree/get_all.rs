use super::*;

/// Tests listing degrees in insertion order.
///
/// Expected: Ok with all degrees ordered by id
#[tokio::test]
async fn returns_degrees_in_insertion_order() -> Result<(), DbErr> {
    let mut test = TestBuilder::new().with_faculty_tables().build().await.unwrap();
    let db = test.database().await.unwrap();

    let first = factory::create_degree(db).await?;
    let second = factory::create_degree(db).await?;

    let degrees = DegreeRepository::new(db).get_all().await?;

    assert_eq!(degrees.len(), 2);
    assert_eq!(degrees[0].id, first.id);
    assert_eq!(degrees[1].id, second.id);

    Ok(())
}

/// Tests listing degrees on an empty table.
///
/// Expected: Ok with empty list
#[tokio::test]
async fn returns_empty_list() -> Result<(), DbErr> {
    let mut test = TestBuilder::new().with_faculty_tables().build().await.unwrap();
    let db = test.database().await.unwrap();

    let degrees = DegreeRepository::new(db).get_all().await?;

    assert!(degrees.is_empty());

    Ok(())
}
