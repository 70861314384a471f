use super::*;

/// Tests updating replaces the form fields and bumps `updated_at`.
///
/// Expected: Ok(Updated) with new values
#[tokio::test]
async fn updates_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_census_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let family = factory::family::FamilyFactory::new(db)
        .created_at(chrono::Utc::now() - chrono::Duration::hours(1))
        .build()
        .await?;

    let mut new_fields = fields();
    new_fields.nama_kepala = "Slamet".to_string();
    new_fields.jumlah_anggota = 6;
    new_fields.jumlah_anggota_15plus = 3;

    let outcome = FamilyRepository::new(db)
        .update(UpdateFamilyParams {
            keluarga_id: family.keluarga_id.clone(),
            fields: new_fields,
        })
        .await?;

    let UpdateFamilyOutcome::Updated(updated) = outcome else {
        panic!("Expected Updated outcome, got: {:?}", outcome);
    };
    assert_eq!(updated.keluarga_id, family.keluarga_id);
    assert_eq!(updated.nama_kepala, "Slamet");
    assert_eq!(updated.jumlah_anggota, 6);
    assert_eq!(updated.jumlah_anggota_15plus, 3);
    assert_eq!(updated.created_at, family.created_at);
    assert!(updated.updated_at > family.updated_at);

    Ok(())
}

/// Tests the adult count cannot drop below the recorded members.
///
/// Expected: Ok(BelowRecordedMembers) and the stored family unchanged
#[tokio::test]
async fn rejects_adults_below_recorded_members() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_census_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let family = factory::family::FamilyFactory::new(db)
        .jumlah_anggota(4)
        .jumlah_anggota_15plus(3)
        .build()
        .await?;
    factory::create_member(db, family.id, 1).await?;
    factory::create_member(db, family.id, 2).await?;

    let mut new_fields = fields();
    new_fields.jumlah_anggota_15plus = 1;

    let repo = FamilyRepository::new(db);
    let outcome = repo
        .update(UpdateFamilyParams {
            keluarga_id: family.keluarga_id.clone(),
            fields: new_fields,
        })
        .await?;

    assert_eq!(
        outcome,
        UpdateFamilyOutcome::BelowRecordedMembers { recorded: 2 }
    );

    let stored = repo.get_by_keluarga_id(&family.keluarga_id).await?.unwrap();
    assert_eq!(stored.jumlah_anggota_15plus, 3);

    Ok(())
}

/// Tests updating an unknown family.
///
/// Expected: Ok(NotFound)
#[tokio::test]
async fn returns_not_found_for_unknown_family() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_census_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let outcome = FamilyRepository::new(db)
        .update(UpdateFamilyParams {
            keluarga_id: "KEL-MISSING".to_string(),
            fields: fields(),
        })
        .await?;

    assert_eq!(outcome, UpdateFamilyOutcome::NotFound);

    Ok(())
}
