use super::*;

/// Tests education counts are ordered by count descending.
///
/// Expected: Ok with the most common level first
#[tokio::test]
async fn counts_education_levels() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_census_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let family = factory::family::FamilyFactory::new(db)
        .jumlah_anggota(3)
        .jumlah_anggota_15plus(3)
        .build()
        .await?;
    factory::family_member::MemberFactory::new(db, family.id, 1)
        .pendidikan("PERGURUAN TINGGI")
        .build()
        .await?;
    factory::family_member::MemberFactory::new(db, family.id, 2)
        .pendidikan("SD/MI/SDLB/PAKET A")
        .build()
        .await?;
    factory::family_member::MemberFactory::new(db, family.id, 3)
        .pendidikan("SD/MI/SDLB/PAKET A")
        .build()
        .await?;

    let rows = DashboardRepository::new(db)
        .count_by(MemberCategory::Pendidikan)
        .await?;

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].value, "SD/MI/SDLB/PAKET A");
    assert_eq!(rows[0].count, 2);
    assert_eq!(rows[1].value, "PERGURUAN TINGGI");
    assert_eq!(rows[1].count, 1);

    Ok(())
}

/// Tests employment counts split employed and unemployed members.
///
/// Expected: Ok with "Ya" and "Tidak" counts
#[tokio::test]
async fn counts_employment() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_census_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let family = factory::family::FamilyFactory::new(db)
        .jumlah_anggota(3)
        .jumlah_anggota_15plus(3)
        .build()
        .await?;
    factory::create_member(db, family.id, 1).await?;
    factory::family_member::MemberFactory::new(db, family.id, 2)
        .unemployed("Buruh/Karyawan/Pegawai/Pekerja Bebas", None)
        .build()
        .await?;
    factory::family_member::MemberFactory::new(db, family.id, 3)
        .unemployed("Berusaha Sendiri", Some("Pelatihan Pastry".to_string()))
        .build()
        .await?;

    let rows = DashboardRepository::new(db)
        .count_by(MemberCategory::MemilikiPekerjaan)
        .await?;

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].value, "Tidak");
    assert_eq!(rows[0].count, 2);
    assert_eq!(rows[1].value, "Ya");
    assert_eq!(rows[1].count, 1);

    Ok(())
}
