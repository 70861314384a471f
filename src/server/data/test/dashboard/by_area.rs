use super::*;

/// Tests per-area totals sum declared residents once per family.
///
/// Expected: Ok with areas ordered by rt, rw, dusun and exact totals
#[tokio::test]
async fn aggregates_per_area() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_census_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    // RT 002: one family, five residents, three recorded adults
    let a = factory::family::FamilyFactory::new(db)
        .area("002", "001", "Krajan")
        .jumlah_anggota(5)
        .jumlah_anggota_15plus(3)
        .build()
        .await?;
    for sequence in 1..=3 {
        factory::create_member(db, a.id, sequence).await?;
    }

    // RT 001: two families, 4 + 2 residents, 2 + 0 recorded adults
    let b = factory::family::FamilyFactory::new(db)
        .area("001", "001", "Krajan")
        .jumlah_anggota(4)
        .jumlah_anggota_15plus(2)
        .build()
        .await?;
    factory::create_member(db, b.id, 1).await?;
    factory::create_member(db, b.id, 2).await?;
    factory::family::FamilyFactory::new(db)
        .area("001", "001", "Krajan")
        .jumlah_anggota(2)
        .jumlah_anggota_15plus(1)
        .build()
        .await?;

    let areas = DashboardRepository::new(db).by_area().await?;

    assert_eq!(areas.len(), 2);
    assert_eq!(areas[0].rt, "001");
    assert_eq!(areas[0].total_families, 2);
    assert_eq!(areas[0].total_residents, 6);
    assert_eq!(areas[0].total_adults, 2);
    assert_eq!(areas[1].rt, "002");
    assert_eq!(areas[1].total_families, 1);
    assert_eq!(areas[1].total_residents, 5);
    assert_eq!(areas[1].total_adults, 3);

    Ok(())
}
