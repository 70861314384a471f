use super::*;

/// Tests ages are grouped into brackets in bracket order, omitting empty ones.
///
/// Expected: Ok with 15-24 (2), 45-54 (1), 65+ (1)
#[tokio::test]
async fn groups_ages_into_brackets() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_census_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let family = factory::family::FamilyFactory::new(db)
        .jumlah_anggota(4)
        .jumlah_anggota_15plus(4)
        .build()
        .await?;
    for (sequence, umur) in [(1, 70), (2, 45), (3, 24), (4, 15)] {
        factory::family_member::MemberFactory::new(db, family.id, sequence)
            .umur(umur)
            .build()
            .await?;
    }

    let rows = DashboardRepository::new(db).age_distribution().await?;

    let summary: Vec<(&str, i64)> = rows.iter().map(|r| (r.value.as_str(), r.count)).collect();
    assert_eq!(summary, vec![("15-24", 2), ("45-54", 1), ("65+", 1)]);

    Ok(())
}
