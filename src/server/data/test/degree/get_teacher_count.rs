use super::*;

/// Tests counting teachers that hold a degree.
///
/// Expected: Ok with one teacher for the used degree and zero for an unused one
#[tokio::test]
async fn counts_teachers_per_degree() -> Result<(), DbErr> {
    let mut test = TestBuilder::new().with_faculty_tables().build().await.unwrap();
    let db = test.database().await.unwrap();

    let (_, used, _) = factory::create_teacher_with_dependencies(db).await?;
    let unused = factory::create_degree(db).await?;

    let repo = DegreeRepository::new(db);

    assert_eq!(repo.get_teacher_count(used.id).await?, 1);
    assert_eq!(repo.get_teacher_count(unused.id).await?, 0);

    Ok(())
}
