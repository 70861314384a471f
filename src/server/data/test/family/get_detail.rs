use super::*;

/// Tests the detail view returns members in sequence and the completion record.
///
/// Expected: Ok(Some) with ordered members and completion
#[tokio::test]
async fn returns_members_and_completion() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_census_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let family = factory::family::FamilyFactory::new(db)
        .jumlah_anggota(3)
        .jumlah_anggota_15plus(2)
        .build()
        .await?;
    factory::create_member(db, family.id, 2).await?;
    factory::create_member(db, family.id, 1).await?;
    factory::create_completion(db, family.id).await?;

    let detail = FamilyRepository::new(db)
        .get_detail(&family.keluarga_id)
        .await?
        .expect("family should exist");

    assert_eq!(detail.family.id, family.id);
    let sequence: Vec<i32> = detail.members.iter().map(|m| m.anggota_ke).collect();
    assert_eq!(sequence, vec![1, 2]);
    assert!(detail.completion.is_some());

    Ok(())
}

/// Tests a family without members or completion.
///
/// Expected: Ok(Some) with empty members and no completion
#[tokio::test]
async fn returns_family_without_progress() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_census_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let family = factory::create_family(db).await?;

    let detail = FamilyRepository::new(db)
        .get_detail(&family.keluarga_id)
        .await?
        .expect("family should exist");

    assert!(detail.members.is_empty());
    assert!(detail.completion.is_none());

    Ok(())
}

/// Tests an unknown id.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_family() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_census_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let detail = FamilyRepository::new(db).get_detail("KEL-MISSING").await?;
    assert!(detail.is_none());

    Ok(())
}
