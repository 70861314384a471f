use super::*;

/// Tests members are counted per family.
///
/// Expected: Ok with counts for families that have members only
#[tokio::test]
async fn counts_members_per_family() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_census_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (with_three, _, _) = factory::helpers::create_completed_family(db, 3).await?;
    let (with_one, _, _) = factory::helpers::create_completed_family(db, 1).await?;
    let empty = factory::create_family(db).await?;

    let counts = MemberRepository::new(db).count_by_family().await?;

    assert_eq!(counts.get(&with_three.id), Some(&3));
    assert_eq!(counts.get(&with_one.id), Some(&1));
    assert_eq!(counts.get(&empty.id), None);

    Ok(())
}
