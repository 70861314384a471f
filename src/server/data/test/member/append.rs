use super::*;

/// Tests members are numbered in sequence with the remaining count decreasing.
///
/// Expected: Ok(Appended) with anggota_ke 1 then 2, remaining 1 then 0
#[tokio::test]
async fn appends_members_in_sequence() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_census_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let family = factory::family::FamilyFactory::new(db)
        .jumlah_anggota(4)
        .jumlah_anggota_15plus(2)
        .build()
        .await?;

    let repo = MemberRepository::new(db);

    let AppendMemberOutcome::Appended(first) = repo.append(params(&family.keluarga_id)).await?
    else {
        panic!("Expected first member to be appended");
    };
    assert_eq!(first.member.anggota_ke, 1);
    assert_eq!(first.member.family_id, family.id);
    assert_eq!(first.member.hubungan, "Suami/Istri");
    assert_eq!(first.member.pendidikan, "SMA/MA/SMK/MAK/SMALB/PAKET C");
    assert_eq!(first.remaining, 1);

    let AppendMemberOutcome::Appended(second) = repo.append(params(&family.keluarga_id)).await?
    else {
        panic!("Expected second member to be appended");
    };
    assert_eq!(second.member.anggota_ke, 2);
    assert_eq!(second.remaining, 0);

    Ok(())
}

/// Tests appending beyond the declared adult count is rejected.
///
/// Expected: Ok(LimitReached) and no extra row
#[tokio::test]
async fn rejects_member_beyond_limit() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_census_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let family = factory::family::FamilyFactory::new(db)
        .jumlah_anggota(3)
        .jumlah_anggota_15plus(1)
        .build()
        .await?;
    factory::create_member(db, family.id, 1).await?;

    let outcome = MemberRepository::new(db)
        .append(params(&family.keluarga_id))
        .await?;

    assert_eq!(outcome, AppendMemberOutcome::LimitReached);

    let count = entity::prelude::FamilyMember::find()
        .filter(entity::family_member::Column::FamilyId.eq(family.id))
        .count(db)
        .await?;
    assert_eq!(count, 1);

    Ok(())
}

/// Tests a family declaring no adults accepts no members.
///
/// Expected: Ok(LimitReached)
#[tokio::test]
async fn rejects_member_when_no_adults_declared() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_census_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let family = factory::family::FamilyFactory::new(db)
        .jumlah_anggota(1)
        .jumlah_anggota_15plus(0)
        .build()
        .await?;

    let outcome = MemberRepository::new(db)
        .append(params(&family.keluarga_id))
        .await?;

    assert_eq!(outcome, AppendMemberOutcome::LimitReached);

    Ok(())
}

/// Tests the conditional employment fields are stored as labels.
///
/// Expected: Ok(Appended) with desired job and business field set
#[tokio::test]
async fn stores_conditional_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_census_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let family = factory::create_family(db).await?;

    let mut unemployed = params(&family.keluarga_id);
    unemployed.member.memiliki_pekerjaan = MemilikiPekerjaan::Tidak;
    unemployed.member.status_pekerjaan_diinginkan =
        Some(StatusPekerjaanDiinginkan::BerusahaSendiri);
    unemployed.member.bidang_usaha = Some(BidangUsaha::Barista);

    let AppendMemberOutcome::Appended(appended) = MemberRepository::new(db).append(unemployed).await?
    else {
        panic!("Expected member to be appended");
    };

    assert_eq!(appended.member.memiliki_pekerjaan, "Tidak");
    assert_eq!(
        appended.member.status_pekerjaan_diinginkan.as_deref(),
        Some("Berusaha Sendiri")
    );
    assert_eq!(
        appended.member.bidang_usaha.as_deref(),
        Some("Pelatihan Barista")
    );

    Ok(())
}

/// Tests appending to an unknown family.
///
/// Expected: Ok(FamilyNotFound)
#[tokio::test]
async fn returns_family_not_found() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_census_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let outcome = MemberRepository::new(db)
        .append(params("KEL-MISSING"))
        .await?;

    assert_eq!(outcome, AppendMemberOutcome::FamilyNotFound);

    Ok(())
}
