use super::*;

/// Tests the overview totals.
///
/// Expected: Ok((families, members, completed))
#[tokio::test]
async fn counts_families_members_and_completions() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_census_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::helpers::create_completed_family(db, 2).await?;
    factory::helpers::create_completed_family(db, 3).await?;
    let pending = factory::create_family(db).await?;
    factory::create_member(db, pending.id, 1).await?;

    let totals = DashboardRepository::new(db).totals().await?;

    assert_eq!(totals, (3, 6, 2));

    Ok(())
}

/// Tests an empty database.
///
/// Expected: Ok((0, 0, 0))
#[tokio::test]
async fn returns_zero_totals() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_census_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    assert_eq!(DashboardRepository::new(db).totals().await?, (0, 0, 0));

    Ok(())
}
