use super::*;

/// Tests the list reports member counts and completion per family.
///
/// Expected: Ok with newest family first and correct progress values
#[tokio::test]
async fn reports_progress_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_census_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let older = factory::family::FamilyFactory::new(db)
        .created_at(chrono::Utc::now() - chrono::Duration::hours(1))
        .build()
        .await?;
    factory::create_member(db, older.id, 1).await?;
    factory::create_member(db, older.id, 2).await?;
    factory::create_completion(db, older.id).await?;

    let newer = factory::create_family(db).await?;

    let list = FamilyRepository::new(db).get_all_with_progress().await?;

    assert_eq!(list.len(), 2);
    assert_eq!(list[0].family.keluarga_id, newer.keluarga_id);
    assert_eq!(list[0].total_members, 0);
    assert!(!list[0].completed);
    assert_eq!(list[1].family.keluarga_id, older.keluarga_id);
    assert_eq!(list[1].total_members, 2);
    assert!(list[1].completed);

    Ok(())
}

/// Tests an empty database yields an empty list.
///
/// Expected: Ok(empty vec)
#[tokio::test]
async fn returns_empty_list() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_census_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let list = FamilyRepository::new(db).get_all_with_progress().await?;
    assert!(list.is_empty());

    Ok(())
}
